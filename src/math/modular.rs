//! A float that lives on a periodic interval

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use super::interval::PeriodicInterval;

/// A float constrained to a [`PeriodicInterval`].
///
/// Every write goes through [`PeriodicInterval::remainder`], so passing one end
/// of the interval wraps around to the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModularFloat {
    value: f32,
    interval: PeriodicInterval,
}

impl ModularFloat {
    pub fn new(interval: PeriodicInterval, initial_value: f32) -> Self {
        Self {
            value: interval.remainder(initial_value),
            interval,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn interval(&self) -> PeriodicInterval {
        self.interval
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = self.interval.remainder(value);
    }

    /// Move onto a different interval, re-wrapping the current value.
    pub fn set_interval(&mut self, interval: PeriodicInterval) {
        self.interval = interval;
        self.value = interval.remainder(self.value);
    }

    pub fn reversed(&self) -> f32 {
        self.interval.reverse(self.value)
    }

    pub fn reverse(&mut self) {
        self.value = self.reversed();
    }

    pub fn mirrored_horizontal(&self) -> f32 {
        self.interval.mirror_horizontal(self.value)
    }

    pub fn mirror_horizontal(&mut self) {
        self.value = self.mirrored_horizontal();
    }

    pub fn mirrored_vertical(&self) -> f32 {
        self.interval.mirror_vertical(self.value)
    }

    pub fn mirror_vertical(&mut self) {
        self.value = self.mirrored_vertical();
    }
}

impl From<ModularFloat> for f32 {
    fn from(mf: ModularFloat) -> Self {
        mf.value
    }
}

impl Add<f32> for ModularFloat {
    type Output = Self;

    fn add(mut self, rhs: f32) -> Self {
        self.set_value(self.value + rhs);
        self
    }
}

impl Sub<f32> for ModularFloat {
    type Output = Self;

    fn sub(mut self, rhs: f32) -> Self {
        self.set_value(self.value - rhs);
        self
    }
}

impl Mul<f32> for ModularFloat {
    type Output = Self;

    fn mul(mut self, rhs: f32) -> Self {
        self.set_value(self.value * rhs);
        self
    }
}

impl Div<f32> for ModularFloat {
    type Output = Self;

    fn div(mut self, rhs: f32) -> Self {
        self.set_value(self.value / rhs);
        self
    }
}

impl AddAssign<f32> for ModularFloat {
    fn add_assign(&mut self, rhs: f32) {
        *self = *self + rhs;
    }
}

impl SubAssign<f32> for ModularFloat {
    fn sub_assign(&mut self, rhs: f32) {
        *self = *self - rhs;
    }
}
