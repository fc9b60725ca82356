//! Angles
//!
//! An [`Angle`] stores its measure in degrees without clamping, so rotations larger
//! than a full turn survive. Signed and unsigned coterminal views are computed on
//! demand through the predefined [`PeriodicInterval`]s.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::approach;
use super::interval::PeriodicInterval;
use crate::error::{Error, Result};

/// An angle measure.
///
/// Ordering compares raw measures, so 370 degrees is greater than 10 degrees even
/// though they are coterminal. Use [`Angle::is_coterminal`] for direction equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Angle {
    degrees: f32,
}

impl Angle {
    pub const ZERO: Self = Self { degrees: 0.0 };

    #[inline]
    pub fn from_degrees(degrees: f32) -> Self {
        Self { degrees }
    }

    #[inline]
    pub fn from_radians(radians: f32) -> Self {
        Self::from_degrees(radians.to_degrees())
    }

    /// Uniformly random angle in `[start, end)` degrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the range is empty or not finite.
    pub fn from_degrees_random<R: Rng + ?Sized>(rng: &mut R, start: f32, end: f32) -> Result<Self> {
        if !(start.is_finite() && end.is_finite() && start < end) {
            return Err(Error::invalid(format!(
                "random angle range must be non-empty, got [{start}, {end})"
            )));
        }
        // rand rejects ranges whose width overflows
        if !(end - start).is_finite() {
            return Err(Error::invalid(format!(
                "random angle range is too wide, got [{start}, {end})"
            )));
        }
        Ok(Self::from_degrees(rng.random_range(start..end)))
    }

    /// Uniformly random angle in `[start, end)` radians.
    pub fn from_radians_random<R: Rng + ?Sized>(rng: &mut R, start: f32, end: f32) -> Result<Self> {
        Self::from_degrees_random(rng, start.to_degrees(), end.to_degrees())
    }

    /// Any direction, `[0, 360)` degrees.
    pub fn from_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_degrees(rng.random_range(0.0..360.0))
    }

    /// Signed angle from the positive x axis to `heading`, in `(-180, 180]`.
    pub fn from_heading_vector(heading: Vec2) -> Self {
        Self::from_radians(heading.y.atan2(heading.x))
    }

    /// Signed angle facing `end_point` from `start_point`.
    pub fn from_point(start_point: Vec2, end_point: Vec2) -> Self {
        Self::from_heading_vector(end_point - start_point)
    }

    /// Angular velocity of a wheel of `radius` moving at `linear_velocity`.
    pub fn from_angular_velocity(linear_velocity: f32, radius: f32) -> Self {
        Self::from_radians(linear_velocity / radius)
    }

    /// Raw measure, not reduced to a coterminal.
    #[inline]
    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    #[inline]
    pub fn radians(&self) -> f32 {
        self.degrees.to_radians()
    }

    pub fn degrees_unsigned(&self) -> f32 {
        PeriodicInterval::UNSIGNED_DEGREES.remainder(self.degrees)
    }

    pub fn radians_unsigned(&self) -> f32 {
        PeriodicInterval::UNSIGNED_RADIANS.remainder(self.radians())
    }

    pub fn degrees_signed(&self) -> f32 {
        PeriodicInterval::SIGNED_DEGREES.remainder(self.degrees)
    }

    pub fn radians_signed(&self) -> f32 {
        PeriodicInterval::SIGNED_RADIANS.remainder(self.radians())
    }

    /// Coterminal angle in `[-180, 180)`
    pub fn coterminal_signed(&self) -> Self {
        Self::from_degrees(self.degrees_signed())
    }

    /// Coterminal angle in `[0, 360)`
    pub fn coterminal_unsigned(&self) -> Self {
        Self::from_degrees(self.degrees_unsigned())
    }

    /// Coterminal angle within the full turn centered on `center`.
    pub fn coterminal_around(&self, center: Angle) -> Result<Self> {
        let interval = PeriodicInterval::from_center_radius(center.degrees, 180.0)?;
        Ok(Self::from_degrees(interval.remainder(self.degrees)))
    }

    /// Unit vector pointing along the angle.
    pub fn heading_vector(&self) -> Vec2 {
        Vec2::from_angle(self.radians())
    }

    /// Linear velocity of a wheel of `radius` spinning at this angular velocity.
    pub fn linear_velocity(&self, radius: f32) -> f32 {
        self.radians() * radius
    }

    pub fn add_degrees(self, degrees: f32) -> Self {
        Self::from_degrees(self.degrees + degrees)
    }

    pub fn add_radians(self, radians: f32) -> Self {
        self.add_degrees(radians.to_degrees())
    }

    /// Rotated by half a turn, as an unsigned coterminal.
    pub fn reversed(&self) -> Self {
        Self::from_degrees(PeriodicInterval::UNSIGNED_DEGREES.reverse(self.degrees))
    }

    /// Mirrored across the y axis, as an unsigned coterminal.
    pub fn mirrored_horizontal(&self) -> Self {
        Self::from_degrees(PeriodicInterval::UNSIGNED_DEGREES.mirror_horizontal(self.degrees))
    }

    /// Mirrored across the x axis, as an unsigned coterminal.
    pub fn mirrored_vertical(&self) -> Self {
        Self::from_degrees(PeriodicInterval::UNSIGNED_DEGREES.mirror_vertical(self.degrees))
    }

    pub fn smaller_distance(&self, other: Angle) -> Self {
        Self::from_degrees(
            PeriodicInterval::UNSIGNED_DEGREES.smaller_distance(self.degrees, other.degrees),
        )
    }

    pub fn larger_distance(&self, other: Angle) -> Self {
        Self::from_degrees(
            PeriodicInterval::UNSIGNED_DEGREES.larger_distance(self.degrees, other.degrees),
        )
    }

    /// True if the shortest rotation toward `end` is counterclockwise.
    pub fn is_shortest_rotation_positive(&self, end: Angle) -> bool {
        PeriodicInterval::UNSIGNED_DEGREES.is_shortest_rotation_positive(self.degrees, end.degrees)
    }

    pub fn sign_shortest_rotation(&self, end: Angle) -> i32 {
        PeriodicInterval::UNSIGNED_DEGREES.sign_shortest_rotation(self.degrees, end.degrees)
    }

    /// Both angles share a terminal side (30, 390 and -330 degrees all do).
    pub fn is_coterminal(&self, other: Angle) -> bool {
        self.degrees_unsigned() == other.degrees_unsigned()
    }

    /// Rotate toward `target` around the circle by at most `step`.
    ///
    /// Works on unsigned coterminals, so the result is always in `[0, 360)`.
    pub fn approach_coterminal(self, target: Angle, step: Angle, use_shorter_path: bool) -> Self {
        Self::from_degrees(PeriodicInterval::UNSIGNED_DEGREES.approach(
            self.degrees,
            target.degrees,
            step.degrees,
            use_shorter_path,
        ))
    }

    /// Move the raw measure toward `target`'s raw measure, ignoring coterminality.
    pub fn approach_raw(self, target: Angle, step: Angle) -> Self {
        Self::from_degrees(approach(self.degrees, target.degrees, step.degrees))
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_degrees(self.degrees + rhs.degrees)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_degrees(self.degrees - rhs.degrees)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_degrees(-self.degrees)
    }
}

impl Mul<f32> for Angle {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::from_degrees(self.degrees * rhs)
    }
}

impl Div<f32> for Angle {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::from_degrees(self.degrees / rhs)
    }
}
