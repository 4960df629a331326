//! Time-based property tweens.
//!
//! Tweens are plain values owned by a [`Tweener`] and advanced explicitly
//! with a time delta, so nothing depends on a global clock. Completion is
//! reported by returning the finished [`TweenId`]s from [`Tweener::advance`].
//!
//! A tween reads its start value lazily, when its delay has elapsed, and only
//! writes the axes it was given a target for. Several tweens may drive the
//! same property; they are applied in creation order and the last write wins.

use crate::easing::Ease;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    ModelPosition,
    ModelRotation,
    ModelScale,
    CameraPosition,
}

/// Per-axis targets; `None` leaves that axis untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Axes {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
}

impl Axes {
    pub fn all(v: Vec3) -> Self {
        Self {
            x: Some(v.x),
            y: Some(v.y),
            z: Some(v.z),
        }
    }

    pub fn x(x: f32) -> Self {
        Self {
            x: Some(x),
            ..Default::default()
        }
    }

    pub fn uniform(s: f32) -> Self {
        Self::all(Vec3::splat(s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSpec {
    pub property: Property,
    pub to: Axes,
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
}

impl TweenSpec {
    pub fn new(property: Property, to: Axes, duration: f32) -> Self {
        Self {
            property,
            to,
            duration,
            delay: 0.0,
            ease: Ease::default(),
        }
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Anything that exposes the tweened properties.
pub trait Animatable {
    fn read(&self, property: Property) -> Option<Vec3>;
    fn write(&mut self, property: Property, value: Vec3);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(u64);

#[derive(Debug)]
struct ActiveTween {
    id: TweenId,
    spec: TweenSpec,
    elapsed: f32,
    from: Option<Vec3>,
}

pub type Completed = SmallVec<[TweenId; 4]>;

#[derive(Debug, Default)]
pub struct Tweener {
    next_id: u64,
    active: Vec<ActiveTween>,
}

impl Tweener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, spec: TweenSpec) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.active.push(ActiveTween {
            id,
            spec,
            elapsed: 0.0,
            from: None,
        });
        id
    }

    pub fn is_active(&self, id: TweenId) -> bool {
        self.active.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Advance every tween by `dt` seconds, writing into `target`.
    /// Returns the ids that finished during this step, in creation order.
    pub fn advance(&mut self, dt: f32, target: &mut impl Animatable) -> Completed {
        let mut done = Completed::new();
        let dt = dt.max(0.0);
        for tween in &mut self.active {
            tween.elapsed += dt;
            if tween.elapsed < tween.spec.delay {
                continue;
            }
            let Some(current) = target.read(tween.spec.property) else {
                // Target is gone; the tween has nothing to drive.
                done.push(tween.id);
                continue;
            };
            let from = *tween.from.get_or_insert(current);
            let t = if tween.spec.duration <= 0.0 {
                1.0
            } else {
                ((tween.elapsed - tween.spec.delay) / tween.spec.duration).min(1.0)
            };
            let k = tween.spec.ease.apply(t);
            let lerp = |a: f32, b: f32| if t >= 1.0 { b } else { a + (b - a) * k };
            let to = tween.spec.to;
            let mut value = current;
            if let Some(x) = to.x {
                value.x = lerp(from.x, x);
            }
            if let Some(y) = to.y {
                value.y = lerp(from.y, y);
            }
            if let Some(z) = to.z {
                value.z = lerp(from.z, z);
            }
            target.write(tween.spec.property, value);
            if t >= 1.0 {
                done.push(tween.id);
            }
        }
        if !done.is_empty() {
            self.active.retain(|t| !done.contains(&t.id));
        }
        done
    }
}
