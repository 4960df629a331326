//! Keyframe animation clips and a looping clip player.
//!
//! Clips animate node translation, rotation and scale. Sampling produces a
//! sparse set of per-node overrides on top of the asset's rest pose.

use fnv::FnvHashMap;
use glam::{Quat, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interpolation {
    Linear,
    Step,
    /// Values are stored as (in-tangent, value, out-tangent) triplets.
    CubicSpline,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChannelValues {
    Translation(Vec<Vec3>),
    Rotation(Vec<Quat>),
    Scale(Vec<Vec3>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    pub node: usize,
    pub interpolation: Interpolation,
    pub times: Vec<f32>,
    pub values: ChannelValues,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeOverride {
    pub translation: Option<Vec3>,
    pub rotation: Option<Quat>,
    pub scale: Option<Vec3>,
}

pub type PoseOverrides = FnvHashMap<usize, NodeOverride>;

#[derive(Clone, Debug, PartialEq)]
pub struct Clip {
    pub name: Option<String>,
    pub channels: Vec<Channel>,
    pub duration: f32,
}

impl Clip {
    pub fn new(name: Option<String>, channels: Vec<Channel>) -> Self {
        let duration = channels
            .iter()
            .filter_map(|c| c.times.last().copied())
            .fold(0.0_f32, f32::max);
        Self {
            name,
            channels,
            duration,
        }
    }

    pub fn sample(&self, time: f32) -> PoseOverrides {
        let mut pose = PoseOverrides::default();
        for ch in &self.channels {
            let slot = pose.entry(ch.node).or_default();
            match &ch.values {
                ChannelValues::Translation(v) => {
                    slot.translation =
                        sample_vec4(&ch.times, v, ch.interpolation, time, |p| p.extend(0.0))
                            .map(Vec4::truncate);
                }
                ChannelValues::Scale(v) => {
                    slot.scale =
                        sample_vec4(&ch.times, v, ch.interpolation, time, |p| p.extend(0.0))
                            .map(Vec4::truncate);
                }
                ChannelValues::Rotation(v) => {
                    slot.rotation = match ch.interpolation {
                        Interpolation::Linear => sample_quat_linear(&ch.times, v, time),
                        _ => {
                            sample_vec4(&ch.times, v, ch.interpolation, time, |q| Vec4::from(*q))
                                .map(|s| Quat::from_vec4(s).normalize())
                        }
                    };
                }
            }
        }
        pose
    }
}

/// Locate the keyframe segment containing `t`: returns `(i, local)` with
/// `local` in [0, 1] between keyframes `i` and `i + 1`. Times outside the
/// keyframe range clamp to the first/last key.
fn segment(times: &[f32], t: f32) -> Option<(usize, f32)> {
    let n = times.len();
    if n == 0 {
        return None;
    }
    if n == 1 || t <= times[0] {
        return Some((0, 0.0));
    }
    if t >= times[n - 1] {
        return Some((n - 1, 0.0));
    }
    let next = times.partition_point(|&k| k <= t);
    let i = next - 1;
    let span = times[next] - times[i];
    let local = if span > 0.0 { (t - times[i]) / span } else { 0.0 };
    Some((i, local))
}

fn sample_vec4<T>(
    times: &[f32],
    values: &[T],
    interpolation: Interpolation,
    t: f32,
    to_vec4: impl Fn(&T) -> Vec4,
) -> Option<Vec4> {
    let (i, local) = segment(times, t)?;
    let last = times.len() - 1;
    match interpolation {
        Interpolation::Step => values.get(i).map(&to_vec4),
        Interpolation::Linear => {
            let a = to_vec4(values.get(i)?);
            if i >= last {
                return Some(a);
            }
            let b = to_vec4(values.get(i + 1)?);
            Some(a.lerp(b, local))
        }
        Interpolation::CubicSpline => {
            let v0 = to_vec4(values.get(3 * i + 1)?);
            if i >= last {
                return Some(v0);
            }
            let dt = times[i + 1] - times[i];
            let out0 = to_vec4(values.get(3 * i + 2)?);
            let in1 = to_vec4(values.get(3 * (i + 1))?);
            let v1 = to_vec4(values.get(3 * (i + 1) + 1)?);
            let s = local;
            let s2 = s * s;
            let s3 = s2 * s;
            Some(
                v0 * (2.0 * s3 - 3.0 * s2 + 1.0)
                    + out0 * dt * (s3 - 2.0 * s2 + s)
                    + v1 * (-2.0 * s3 + 3.0 * s2)
                    + in1 * dt * (s3 - s2),
            )
        }
    }
}

fn sample_quat_linear(times: &[f32], values: &[Quat], t: f32) -> Option<Quat> {
    let (i, local) = segment(times, t)?;
    let a = *values.get(i)?;
    match values.get(i + 1) {
        Some(b) if i + 1 < times.len() => Some(a.slerp(*b, local)),
        _ => Some(a),
    }
}

/// Plays one clip on a loop. Time advances by `dt * time_scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipPlayer {
    pub clip: usize,
    time: f32,
    duration: f32,
    pub time_scale: f32,
}

impl ClipPlayer {
    pub fn new(clip: usize, duration: f32, time_scale: f32) -> Self {
        Self {
            clip,
            time: 0.0,
            duration,
            time_scale,
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn advance(&mut self, dt: f32) {
        self.time += dt * self.time_scale;
        if self.duration > 0.0 {
            self.time = self.time.rem_euclid(self.duration);
        } else {
            self.time = 0.0;
        }
    }
}
