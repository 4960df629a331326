//! The hero scene controller.
//!
//! Owns every piece of mutable scene state (breakpoint, camera, model group,
//! tweens, scroll gate, viewport tracker, frame limiter, clip player). The
//! web layer holds one instance and forwards DOM events and frame callbacks
//! to it; the renderer only reads from it.

use crate::asset::ModelAsset;
use crate::breakpoint::{
    animation_params_for, camera_settings_for, model_scale_for, resolve_breakpoint, Breakpoint,
    LightingParams,
};
use crate::camera::{aspect_ratio, Camera};
use crate::clip::ClipPlayer;
use crate::constants::{
    ENTRY_ROTATION, RESIZE_TWEEN_SEC, REST_ROTATION, TWEEN_LAG_STEP_SEC, TWEEN_LAG_THRESHOLD_SEC,
};
use crate::easing::Ease;
use crate::frame::FrameLimiter;
use crate::model::{fit_scale, Bounds, ModelGroup};
use crate::scroll::{ScrollMapper, ScrollMetrics, ScrollTargets};
use crate::tween::{Animatable, Axes, Property, TweenSpec, Tweener};
use crate::viewport::{ViewportSize, ViewportTracker};
use glam::Vec3;

/// Everything tweens can touch.
#[derive(Clone, Debug)]
pub struct Stage {
    pub camera: Camera,
    pub model: Option<ModelGroup>,
}

impl Animatable for Stage {
    fn read(&self, property: Property) -> Option<Vec3> {
        match property {
            Property::CameraPosition => Some(self.camera.eye),
            Property::ModelPosition => self.model.map(|m| m.position),
            Property::ModelRotation => self.model.map(|m| m.rotation),
            Property::ModelScale => self.model.map(|m| m.scale),
        }
    }

    fn write(&mut self, property: Property, value: Vec3) {
        match property {
            Property::CameraPosition => self.camera.eye = value,
            Property::ModelPosition => {
                if let Some(m) = &mut self.model {
                    m.position = value;
                }
            }
            Property::ModelRotation => {
                if let Some(m) = &mut self.model {
                    m.rotation = value;
                }
            }
            Property::ModelScale => {
                if let Some(m) = &mut self.model {
                    m.scale = value;
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResizeOutcome {
    /// The document is hidden; sizes reported now are unreliable.
    Hidden,
    /// Below both debounce thresholds; nothing changed.
    Minor,
    /// Surface and projection must follow `size`.
    Applied {
        size: ViewportSize,
        breakpoint_change: Option<Breakpoint>,
    },
}

pub struct HeroController {
    breakpoint: Breakpoint,
    stage: Stage,
    tweener: Tweener,
    scroll: ScrollMapper,
    viewport: ViewportTracker,
    limiter: FrameLimiter,
    player: Option<ClipPlayer>,
    model_bounds: Option<Bounds>,
    last_tick_ms: Option<f64>,
}

impl HeroController {
    pub fn new(size: ViewportSize) -> Self {
        let breakpoint = resolve_breakpoint(size.width);
        let camera = Camera::from_settings(
            &camera_settings_for(breakpoint),
            aspect_ratio(size.width, size.height),
        );
        log::info!(
            "[scene] breakpoint={} viewport={}x{}",
            breakpoint.name(),
            size.width,
            size.height
        );
        Self {
            breakpoint,
            stage: Stage {
                camera,
                model: None,
            },
            tweener: Tweener::new(),
            scroll: ScrollMapper::new(),
            viewport: ViewportTracker::new(size),
            limiter: FrameLimiter::new(),
            player: None,
            model_bounds: None,
            last_tick_ms: None,
        }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn camera(&self) -> &Camera {
        &self.stage.camera
    }

    pub fn model(&self) -> Option<&ModelGroup> {
        self.stage.model.as_ref()
    }

    pub fn lighting(&self) -> LightingParams {
        self.breakpoint.profile().lighting
    }

    pub fn clip_player(&self) -> Option<&ClipPlayer> {
        self.player.as_ref()
    }

    pub fn is_scroll_animating(&self) -> bool {
        self.scroll.is_animating()
    }

    pub fn active_tweens(&self) -> usize {
        self.tweener.len()
    }

    pub fn stable_size(&self) -> ViewportSize {
        self.viewport.stable()
    }

    pub fn attach_asset(&mut self, asset: &ModelAsset) {
        let clip = asset.clips.first().map(|c| (0, c.duration));
        self.attach_model(asset.bounds, clip);
    }

    /// Install the pivot group for a freshly loaded asset, place it off-screen
    /// and start the entry glide. `clip` is `(index, duration)` of the clip to
    /// loop, if the asset has one.
    pub fn attach_model(&mut self, bounds: Bounds, clip: Option<(usize, f32)>) {
        let bp = self.breakpoint;
        let anim = animation_params_for(bp);
        let mut group = ModelGroup::centered_on(&bounds);
        group.scale = Vec3::splat(fit_scale(model_scale_for(bp), &bounds));
        group.position = Vec3::new(anim.initial_x, 0.0, 0.0);
        group.rotation = Vec3::from(ENTRY_ROTATION);
        self.stage.model = Some(group);
        self.model_bounds = Some(bounds);

        if let Some((index, duration)) = clip {
            self.player = Some(ClipPlayer::new(
                index,
                duration,
                bp.profile().render.clip_time_scale,
            ));
        }

        self.tweener.start(
            TweenSpec::new(Property::ModelPosition, Axes::x(0.0), anim.duration)
                .delay(anim.delay)
                .ease(Ease::Power2Out),
        );
        self.tweener.start(
            TweenSpec::new(
                Property::ModelRotation,
                Axes::all(Vec3::from(REST_ROTATION)),
                anim.duration,
            )
            .delay(anim.delay)
            .ease(Ease::Power2Out),
        );
        log::info!(
            "[scene] model attached scale={:.3} clip={:?}",
            group.scale.x,
            clip.map(|(i, _)| i)
        );
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<ScrollTargets> {
        if self.stage.model.is_none() {
            return None;
        }
        self.scroll
            .on_scroll(self.breakpoint, metrics, &mut self.tweener)
    }

    pub fn on_resize(&mut self, width: f64, height: f64, hidden: bool) -> ResizeOutcome {
        if hidden {
            return ResizeOutcome::Hidden;
        }
        let size = ViewportSize::new(width, height);
        if !self.viewport.is_significant(size) {
            return ResizeOutcome::Minor;
        }

        self.stage.camera.aspect = aspect_ratio(size.width, size.height);

        let next = resolve_breakpoint(size.width);
        let breakpoint_change = (next != self.breakpoint).then_some(next);
        if let Some(bp) = breakpoint_change {
            log::info!(
                "[scene] breakpoint {} -> {}",
                self.breakpoint.name(),
                bp.name()
            );
            self.breakpoint = bp;
            let settings = camera_settings_for(bp);
            self.tweener.start(TweenSpec::new(
                Property::CameraPosition,
                Axes::all(settings.position),
                RESIZE_TWEEN_SEC,
            ));
            if let (Some(_), Some(bounds)) = (self.stage.model, self.model_bounds) {
                let scale = fit_scale(model_scale_for(bp), &bounds);
                self.tweener.start(TweenSpec::new(
                    Property::ModelScale,
                    Axes::uniform(scale),
                    RESIZE_TWEEN_SEC,
                ));
            }
        }

        self.stage.camera.look_at_origin();
        self.viewport.commit(size);
        ResizeOutcome::Applied {
            size,
            breakpoint_change,
        }
    }

    /// Called once per host frame with its timestamp. Tweens always advance;
    /// the returned mixer delta is `Some` only when the frame budget allows a
    /// render, in which case the clip player has already been stepped.
    pub fn tick(&mut self, now_ms: f64) -> Option<f32> {
        let mut dt = match self.last_tick_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        if dt > TWEEN_LAG_THRESHOLD_SEC {
            dt = TWEEN_LAG_STEP_SEC;
        }
        self.last_tick_ms = Some(now_ms);

        for id in self.tweener.advance(dt, &mut self.stage) {
            self.scroll.on_tween_finished(id);
        }

        let render = self.breakpoint.profile().render;
        if !self.limiter.ready(now_ms, render.target_fps) {
            return None;
        }
        if let Some(player) = &mut self.player {
            player.advance(render.mixer_delta);
        }
        Some(render.mixer_delta)
    }
}
