//! Rotation intervals
//!
//! The rotational counterpart of a scalar interval: a start and an end
//! orientation, where the "diameter" is the rotation taking start to end.
//! All quaternions are expected to be unit length.

use glam::Quat;

/// Scale a rotation by `factor` along the shortest arc from identity.
///
/// Factors above 1 extrapolate and lose accuracy as they grow.
pub fn scale_rotation(rotation: Quat, factor: f32) -> Quat {
    Quat::IDENTITY.slerp(rotation, factor)
}

/// The rotation taking `start` to `end`: `start.inverse() * end`.
pub fn rotation_between(start: Quat, end: Quat) -> Quat {
    start.inverse() * end
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuatInterval {
    start: Quat,
    end: Quat,
}

impl QuatInterval {
    pub fn from_start_end(start: Quat, end: Quat) -> Self {
        Self { start, end }
    }

    /// `radius` applied backward and forward from `center`.
    pub fn from_center_radius(center: Quat, radius: Quat) -> Self {
        Self {
            start: center * radius.inverse(),
            end: center * radius,
        }
    }

    pub fn from_center_diameter(center: Quat, diameter: Quat) -> Self {
        Self::from_center_radius(center, scale_rotation(diameter, 0.5))
    }

    /// Centered on the identity rotation.
    pub fn from_radius(radius: Quat) -> Self {
        Self::from_center_radius(Quat::IDENTITY, radius)
    }

    pub fn from_diameter(diameter: Quat) -> Self {
        Self::from_radius(scale_rotation(diameter, 0.5))
    }

    #[inline]
    pub fn start(&self) -> Quat {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Quat {
        self.end
    }

    pub fn diameter(&self) -> Quat {
        rotation_between(self.start, self.end)
    }

    pub fn radius(&self) -> Quat {
        scale_rotation(self.diameter(), 0.5)
    }

    /// Spherical interpolation from `start` (t = 0) to `end` (t = 1).
    pub fn slerp(&self, t: f32) -> Quat {
        self.start.slerp(self.end, t.clamp(0.0, 1.0))
    }

    pub fn center(&self) -> Quat {
        self.slerp(0.5)
    }

    /// Re-center on `center`, keeping the radius.
    pub fn set_center(&mut self, center: Quat) {
        *self = Self::from_center_radius(center, self.radius());
    }
}
