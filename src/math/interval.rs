//! Periodic intervals
//!
//! A closed-open interval `[start, end)` whose values wrap around at the ends:
//! leaving through `end` re-enters at `start` and vice versa. Angle measures are
//! the usual example (370 degrees is 10 degrees on `[0, 360)`).

use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

use crate::error::{Error, Result};

/// A closed-open interval `[start, end)` that supports wrap-around arithmetic.
///
/// # Invariants
/// `start` and `end` are finite and `end > start`, so the diameter is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval", into = "RawInterval")]
pub struct PeriodicInterval {
    start: f32,
    end: f32,
}

/// Unvalidated wire form; deserialization goes through `from_start_end`.
#[derive(Serialize, Deserialize)]
struct RawInterval {
    start: f32,
    end: f32,
}

impl TryFrom<RawInterval> for PeriodicInterval {
    type Error = Error;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Self::from_start_end(raw.start, raw.end)
    }
}

impl From<PeriodicInterval> for RawInterval {
    fn from(interval: PeriodicInterval) -> Self {
        Self {
            start: interval.start,
            end: interval.end,
        }
    }
}

impl PeriodicInterval {
    /// Unsigned degrees: `[0, 360)`
    pub const UNSIGNED_DEGREES: Self = Self {
        start: 0.0,
        end: 360.0,
    };
    /// Signed degrees: `[-180, 180)`
    pub const SIGNED_DEGREES: Self = Self {
        start: -180.0,
        end: 180.0,
    };
    /// Unsigned radians: `[0, 2π)`
    pub const UNSIGNED_RADIANS: Self = Self {
        start: 0.0,
        end: TAU,
    };
    /// Signed radians: `[-π, π)`
    pub const SIGNED_RADIANS: Self = Self { start: -PI, end: PI };

    /// Create an interval from its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either bound is not finite or if
    /// `end <= start`.
    pub fn from_start_end(start: f32, end: f32) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(Error::invalid(format!(
                "interval bounds must be finite, got [{start}, {end})"
            )));
        }
        if end <= start {
            return Err(Error::invalid(format!(
                "interval end must be greater than start, got [{start}, {end})"
            )));
        }
        if !(end - start).is_finite() {
            return Err(Error::invalid(format!(
                "interval diameter overflows, got [{start}, {end})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Create an interval spanning `radius` on each side of `center`.
    pub fn from_center_radius(center: f32, radius: f32) -> Result<Self> {
        Self::from_start_end(center - radius, center + radius)
    }

    /// Create an interval of total width `diameter` around `center`.
    ///
    /// Also handy for a spread of angles centered on a heading.
    pub fn from_center_diameter(center: f32, diameter: f32) -> Result<Self> {
        Self::from_center_radius(center, diameter * 0.5)
    }

    /// `[-radius, radius)`
    pub fn from_radius(radius: f32) -> Result<Self> {
        Self::from_center_radius(0.0, radius)
    }

    /// `[-diameter/2, diameter/2)`
    pub fn from_diameter(diameter: f32) -> Result<Self> {
        Self::from_radius(diameter * 0.5)
    }

    #[inline]
    pub fn start(&self) -> f32 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f32 {
        self.end
    }

    #[inline]
    pub fn diameter(&self) -> f32 {
        self.end - self.start
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.diameter() * 0.5
    }

    #[inline]
    pub fn center(&self) -> f32 {
        (self.start + self.end) * 0.5
    }

    /// Move the interval so it is centered on `center`, keeping its diameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the moved bounds are not finite or
    /// collapse at this magnitude.
    pub fn set_center(&mut self, center: f32) -> Result<()> {
        *self = Self::from_center_radius(center, self.radius())?;
        Ok(())
    }

    /// True if `start <= value < end`
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.start && value < self.end
    }

    /// Linear interpolation from `start` (t = 0) to `end` (t = 1).
    ///
    /// `t` is clamped to `[0, 1]`. Both endpoints are reproduced exactly.
    pub fn lerp(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        self.start * (1.0 - t) + self.end * t
    }

    /// `count` evenly spaced values covering `[start, end]`, both ends included.
    ///
    /// A single sample sits at the center.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `count` is zero.
    pub fn populate_linear(&self, count: usize) -> Result<Vec<f32>> {
        match count {
            0 => Err(Error::invalid("populate_linear needs at least one sample")),
            1 => Ok(vec![self.center()]),
            _ => {
                let last = (count - 1) as f32;
                Ok((0..count).map(|i| self.lerp(i as f32 / last)).collect())
            }
        }
    }

    /// The principal value congruent to `value` modulo the diameter.
    ///
    /// Closed-form, so arbitrarily distant inputs cost the same as nearby ones.
    /// Values already inside the interval are returned unchanged. NaN propagates.
    pub fn remainder(&self, value: f32) -> f32 {
        if self.contains(value) {
            return value;
        }
        let wrapped = self.start + (value - self.start).rem_euclid(self.diameter());
        // rem_euclid can round up to the full diameter for tiny negative offsets
        if wrapped >= self.end {
            self.start
        } else {
            wrapped
        }
    }

    /// The point diametrically opposite `value` (half a period away).
    pub fn reverse(&self, value: f32) -> f32 {
        self.remainder(value + self.radius())
    }

    /// Reflect `value` across the axis through the center.
    pub fn mirror_horizontal(&self, value: f32) -> f32 {
        self.remainder(self.center() - value)
    }

    /// Reflect `value` across zero.
    pub fn mirror_vertical(&self, value: f32) -> f32 {
        self.remainder(-value)
    }

    /// Distance walked from `from` to `to` in the increasing direction, in `[0, diameter)`.
    fn forward_distance(&self, from: f32, to: f32) -> f32 {
        let diameter = self.diameter();
        let d = (self.remainder(to) - self.remainder(from)).rem_euclid(diameter);
        if d >= diameter { 0.0 } else { d }
    }

    /// The shorter of the two ways around the interval between `a` and `b`.
    pub fn smaller_distance(&self, a: f32, b: f32) -> f32 {
        let d = self.forward_distance(a, b);
        d.min(self.diameter() - d)
    }

    /// The longer of the two ways around the interval between `a` and `b`.
    ///
    /// Equal to [`Self::smaller_distance`] when the points are exactly half a period apart.
    pub fn larger_distance(&self, a: f32, b: f32) -> f32 {
        let d = self.forward_distance(a, b);
        d.max(self.diameter() - d)
    }

    /// True if the shortest way from `start_point` to `end_point` is an increase.
    ///
    /// Coincident and exactly opposite points count as positive.
    pub fn is_shortest_rotation_positive(&self, start_point: f32, end_point: f32) -> bool {
        let d = self.forward_distance(start_point, end_point);
        d <= self.diameter() - d
    }

    /// `+1` or `-1` for the direction of the shortest rotation. Never `0`.
    pub fn sign_shortest_rotation(&self, start_point: f32, end_point: f32) -> i32 {
        if self.is_shortest_rotation_positive(start_point, end_point) {
            1
        } else {
            -1
        }
    }

    /// Step `current` toward `target` by at most `step_size`, wrapping as needed.
    ///
    /// Travels the shorter way unless `use_shorter_path` is false. Lands exactly on
    /// the normalized target once it is within reach. `step_size` is expected to be
    /// non-negative; a negative step moves away from the target along the chosen path.
    pub fn approach(
        &self,
        current: f32,
        target: f32,
        step_size: f32,
        use_shorter_path: bool,
    ) -> f32 {
        let current = self.remainder(current);
        let target = self.remainder(target);
        if current == target {
            return target;
        }

        let distance = if use_shorter_path {
            self.smaller_distance(current, target)
        } else {
            self.larger_distance(current, target)
        };
        if distance <= step_size {
            return target;
        }

        let mut direction = self.sign_shortest_rotation(current, target) as f32;
        if !use_shorter_path {
            direction = -direction;
        }
        self.remainder(current + step_size * direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn degrees() -> PeriodicInterval {
        PeriodicInterval::UNSIGNED_DEGREES
    }

    #[test]
    fn test_rejects_empty_and_inverted() {
        assert!(PeriodicInterval::from_start_end(5.0, 5.0).is_err());
        assert!(PeriodicInterval::from_start_end(5.0, 1.0).is_err());
        assert!(PeriodicInterval::from_start_end(0.0, f32::INFINITY).is_err());
        assert!(PeriodicInterval::from_radius(0.0).is_err());
        assert!(PeriodicInterval::from_start_end(f32::MIN, f32::MAX).is_err());
    }

    #[test]
    fn test_factories() {
        let iv = PeriodicInterval::from_center_radius(10.0, 5.0).unwrap();
        assert_eq!((iv.start(), iv.end()), (5.0, 15.0));

        let iv = PeriodicInterval::from_center_diameter(10.0, 4.0).unwrap();
        assert_eq!((iv.start(), iv.end()), (8.0, 12.0));

        let iv = PeriodicInterval::from_diameter(60.0).unwrap();
        assert_eq!((iv.start(), iv.end()), (-30.0, 30.0));
        assert_eq!(iv.center(), 0.0);
        assert_eq!(iv.radius(), 30.0);
    }

    #[test]
    fn test_set_center_keeps_diameter() {
        let mut iv = PeriodicInterval::from_start_end(0.0, 360.0).unwrap();
        iv.set_center(0.0).unwrap();
        assert_eq!((iv.start(), iv.end()), (-180.0, 180.0));
        assert_eq!(iv.diameter(), 360.0);
    }

    #[test]
    fn test_remainder_concrete() {
        let iv = degrees();
        assert_eq!(iv.remainder(-30.0), 330.0);
        assert_eq!(iv.remainder(360.0), 0.0);
        assert_eq!(iv.remainder(725.0), 5.0);
        assert_eq!(iv.remainder(359.5), 359.5);

        let signed = PeriodicInterval::SIGNED_DEGREES;
        assert_eq!(signed.remainder(180.0), -180.0);
        assert_eq!(signed.remainder(270.0), -90.0);
    }

    #[test]
    fn test_remainder_far_away_terminates() {
        let iv = degrees();
        let r = iv.remainder(1.0e30);
        assert!(iv.contains(r));
        let r = iv.remainder(-1.0e30);
        assert!(iv.contains(r));
    }

    #[test]
    fn test_remainder_tiny_negative_stays_in_range() {
        let iv = degrees();
        let r = iv.remainder(-1.0e-10);
        assert!(iv.contains(r), "got {r}");
    }

    #[test]
    fn test_reverse_and_mirrors() {
        let iv = degrees();
        assert_eq!(iv.reverse(30.0), 210.0);
        assert_eq!(iv.reverse(270.0), 90.0);
        assert_eq!(iv.mirror_horizontal(30.0), 150.0);
        assert_eq!(iv.mirror_vertical(30.0), 330.0);
    }

    #[test]
    fn test_distances() {
        let iv = degrees();
        assert_eq!(iv.smaller_distance(20.0, 310.0), 70.0);
        assert_eq!(iv.larger_distance(20.0, 310.0), 290.0);
        assert_eq!(iv.smaller_distance(310.0, 20.0), 70.0);
        assert_eq!(iv.smaller_distance(10.0, 10.0), 0.0);
        assert_eq!(iv.larger_distance(10.0, 10.0), 360.0);

        // Half a period apart: both ways are the same length
        assert_eq!(iv.smaller_distance(0.0, 180.0), 180.0);
        assert_eq!(iv.larger_distance(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_distances_on_signed_interval() {
        let iv = PeriodicInterval::SIGNED_DEGREES;
        assert!((iv.smaller_distance(-170.0, 170.0) - 20.0).abs() < EPS);
        assert!((iv.larger_distance(-170.0, 170.0) - 340.0).abs() < EPS);
    }

    #[test]
    fn test_shortest_rotation() {
        let iv = degrees();
        assert!(iv.is_shortest_rotation_positive(10.0, 50.0));
        assert!(!iv.is_shortest_rotation_positive(50.0, 10.0));
        assert!(iv.is_shortest_rotation_positive(350.0, 10.0));
        assert!(!iv.is_shortest_rotation_positive(10.0, 350.0));
        assert_eq!(iv.sign_shortest_rotation(350.0, 10.0), 1);
        assert_eq!(iv.sign_shortest_rotation(10.0, 350.0), -1);

        // Degenerate cases are positive
        assert_eq!(iv.sign_shortest_rotation(42.0, 42.0), 1);
        assert_eq!(iv.sign_shortest_rotation(0.0, 180.0), 1);
        assert_eq!(iv.sign_shortest_rotation(180.0, 0.0), 1);
    }

    #[test]
    fn test_approach_shorter_path_wraps() {
        let iv = degrees();
        assert_eq!(iv.approach(350.0, 20.0, 5.0, true), 355.0);
        assert_eq!(iv.approach(358.0, 20.0, 5.0, true), 3.0);
        assert_eq!(iv.approach(15.0, 20.0, 5.0, true), 20.0);
        assert_eq!(iv.approach(16.0, 380.0, 5.0, true), 20.0);
    }

    #[test]
    fn test_approach_longer_path() {
        let iv = degrees();
        assert_eq!(iv.approach(10.0, 20.0, 5.0, false), 5.0);
        assert_eq!(iv.approach(2.0, 20.0, 5.0, false), 357.0);
        // Longer path is 350 degrees long, so a 100 degree step does not arrive
        assert_eq!(iv.approach(10.0, 20.0, 100.0, false), 270.0);
        assert_eq!(iv.approach(10.0, 20.0, 350.0, false), 20.0);
    }

    #[test]
    fn test_approach_negative_step_backs_away() {
        let iv = degrees();
        assert_eq!(iv.approach(10.0, 50.0, -5.0, true), 5.0);
        assert_eq!(iv.approach(2.0, 50.0, -5.0, true), 357.0);
        // Backing away along the longer path heads toward the target the short way
        assert_eq!(iv.approach(10.0, 20.0, -5.0, false), 15.0);
        // Never snaps, even when the target is close
        assert_eq!(iv.approach(49.0, 50.0, -5.0, true), 44.0);
    }

    #[test]
    fn test_approach_already_there() {
        let iv = degrees();
        assert_eq!(iv.approach(400.0, 40.0, 5.0, false), 40.0);
    }

    #[test]
    fn test_populate_linear() {
        let iv = PeriodicInterval::from_start_end(30.0, 60.0).unwrap();
        let samples = iv.populate_linear(4).unwrap();
        assert_eq!(samples.len(), 4);
        for (sample, expected) in samples.iter().zip([30.0, 40.0, 50.0, 60.0]) {
            assert!((sample - expected).abs() < EPS);
        }
        assert_eq!(samples[0], 30.0);
        assert_eq!(samples[3], 60.0);
        assert_eq!(iv.populate_linear(1).unwrap(), vec![45.0]);
        assert_eq!(iv.populate_linear(2).unwrap(), vec![30.0, 60.0]);
        assert!(matches!(
            iv.populate_linear(0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: PeriodicInterval = serde_json::from_str(r#"{"start":-1.0,"end":1.0}"#).unwrap();
        assert_eq!(ok.diameter(), 2.0);

        let bad = serde_json::from_str::<PeriodicInterval>(r#"{"start":1.0,"end":-1.0}"#);
        assert!(bad.is_err());
    }
}
