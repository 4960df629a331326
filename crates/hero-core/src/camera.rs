//! Camera state shared with the web renderer.
//!
//! Platform-free: the renderer only consumes the matrices built here.

use crate::breakpoint::CameraSettings;
use glam::{Mat4, Vec3};

/// Right-handed perspective camera.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_settings(settings: &CameraSettings, aspect: f32) -> Self {
        Self {
            eye: settings.position,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: settings.fov_deg.to_radians(),
            znear: settings.near,
            zfar: settings.far,
        }
    }

    pub fn look_at_origin(&mut self) {
        self.target = Vec3::ZERO;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[inline]
pub fn aspect_ratio(width: f64, height: f64) -> f32 {
    (width / height.max(1.0)) as f32
}
