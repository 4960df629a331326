//! Viewport breakpoints and the per-breakpoint parameter table.
//!
//! Every responsive choice in the scene (camera placement, model size, entry
//! timing, scroll motion, frame budget) is a row in [`PROFILES`], indexed by
//! [`Breakpoint`]. Adding a breakpoint means adding a variant and a row.

use crate::constants::{MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop];

    #[inline]
    pub fn profile(self) -> &'static BreakpointProfile {
        &PROFILES[self as usize]
    }

    #[inline]
    pub fn is_mobile(self) -> bool {
        self == Breakpoint::Mobile
    }

    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        }
    }
}

/// Perspective camera placement. `fov_deg` is the vertical field of view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    pub fov_deg: f32,
    pub position: Vec3,
    pub near: f32,
    pub far: f32,
}

/// Entry animation timing and the horizontal range used by scroll motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationParams {
    pub initial_x: f32,
    pub duration: f32,
    pub delay: f32,
    pub movement_range: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightingParams {
    pub ambient_intensity: f32,
    pub directional_intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPath {
    /// One full sine period over the page.
    Sine,
    /// Six linear segments bouncing between the range bounds.
    Zigzag,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollParams {
    pub path: ScrollPath,
    pub vertical_multiplier: f32,
    pub depth_multiplier: f32,
    pub rotation_multiplier: f32,
    pub tween_duration: f32,
    /// Delay of the extra sample taken after each scroll event, if any.
    pub follow_up_ms: Option<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParams {
    pub target_fps: f64,
    pub mixer_delta: f32,
    pub clip_time_scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreakpointProfile {
    pub camera: CameraSettings,
    pub animation: AnimationParams,
    pub model_scale: f32,
    pub lighting: LightingParams,
    pub scroll: ScrollParams,
    pub render: RenderParams,
}

const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

pub const PROFILES: [BreakpointProfile; 3] = [
    // Mobile
    BreakpointProfile {
        camera: CameraSettings {
            fov_deg: 13.0,
            position: Vec3::new(0.0, 0.0, 20.0),
            near: NEAR,
            far: FAR,
        },
        animation: AnimationParams {
            initial_x: -15.0,
            duration: 2.8,
            delay: 0.1,
            movement_range: 1.5,
        },
        model_scale: 4.2,
        lighting: LightingParams {
            ambient_intensity: 0.8,
            directional_intensity: 0.6,
        },
        scroll: ScrollParams {
            path: ScrollPath::Sine,
            vertical_multiplier: 0.3,
            depth_multiplier: 1.0,
            rotation_multiplier: 0.08,
            tween_duration: 0.3,
            follow_up_ms: Some(16),
        },
        render: RenderParams {
            target_fps: 30.0,
            mixer_delta: 0.016,
            clip_time_scale: 0.7,
        },
    },
    // Tablet
    BreakpointProfile {
        camera: CameraSettings {
            fov_deg: 12.0,
            position: Vec3::new(0.0, 0.0, 16.0),
            near: NEAR,
            far: FAR,
        },
        animation: AnimationParams {
            initial_x: -14.0,
            duration: 3.0,
            delay: 0.15,
            movement_range: 2.0,
        },
        model_scale: 5.2,
        lighting: LightingParams {
            ambient_intensity: 1.1,
            directional_intensity: 1.0,
        },
        scroll: ScrollParams {
            path: ScrollPath::Zigzag,
            vertical_multiplier: 0.5,
            depth_multiplier: 2.0,
            rotation_multiplier: 0.15,
            tween_duration: 0.5,
            follow_up_ms: None,
        },
        render: RenderParams {
            target_fps: 60.0,
            mixer_delta: 0.02,
            clip_time_scale: 1.0,
        },
    },
    // Desktop
    BreakpointProfile {
        camera: CameraSettings {
            fov_deg: 12.0,
            position: Vec3::new(0.0, 0.0, 14.0),
            near: NEAR,
            far: FAR,
        },
        animation: AnimationParams {
            initial_x: -12.0,
            duration: 3.2,
            delay: 0.2,
            movement_range: 2.5,
        },
        model_scale: 6.6,
        lighting: LightingParams {
            ambient_intensity: 1.1,
            directional_intensity: 1.0,
        },
        scroll: ScrollParams {
            path: ScrollPath::Zigzag,
            vertical_multiplier: 0.5,
            depth_multiplier: 2.0,
            rotation_multiplier: 0.15,
            tween_duration: 0.5,
            follow_up_ms: None,
        },
        render: RenderParams {
            target_fps: 60.0,
            mixer_delta: 0.02,
            clip_time_scale: 1.0,
        },
    },
];

#[inline]
pub fn resolve_breakpoint(width: f64) -> Breakpoint {
    if width <= MOBILE_MAX_WIDTH {
        Breakpoint::Mobile
    } else if width <= TABLET_MAX_WIDTH {
        Breakpoint::Tablet
    } else {
        Breakpoint::Desktop
    }
}

#[inline]
pub fn camera_settings_for(bp: Breakpoint) -> CameraSettings {
    bp.profile().camera
}

#[inline]
pub fn animation_params_for(bp: Breakpoint) -> AnimationParams {
    bp.profile().animation
}

#[inline]
pub fn model_scale_for(bp: Breakpoint) -> f32 {
    bp.profile().model_scale
}
