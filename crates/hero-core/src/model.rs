use glam::{EulerRot, Mat4, Quat, Vec3};

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub const EMPTY: Bounds = Bounds {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut b = Self::EMPTY;
        for p in points {
            b.include(p);
        }
        b
    }

    #[inline]
    pub fn include(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn center(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            (self.min + self.max) * 0.5
        }
    }

    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Largest extent, or 1 when the box is degenerate.
    pub fn max_dimension(&self) -> f32 {
        let m = self.size().max_element();
        if m.is_finite() && m > 0.0 {
            m
        } else {
            1.0
        }
    }
}

/// Uniform scale that makes the largest extent of `bounds` equal `base_scale`.
#[inline]
pub fn fit_scale(base_scale: f32, bounds: &Bounds) -> f32 {
    base_scale / bounds.max_dimension()
}

/// Pivot container for the loaded asset.
///
/// The asset is offset by `pivot` (its negated bounds centre) so that the
/// group's origin sits at the asset's visual centre. Rotation is Euler XYZ.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelGroup {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub pivot: Vec3,
}

impl ModelGroup {
    pub fn centered_on(bounds: &Bounds) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            pivot: -bounds.center(),
        }
    }

    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Group transform including the pivot offset applied to the asset.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation_quat(), self.position)
            * Mat4::from_translation(self.pivot)
    }
}
