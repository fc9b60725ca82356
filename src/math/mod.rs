//! Numeric helpers
//!
//! - `interval`: periodic (wrap-around) intervals
//! - `modular`: a float bound to a periodic interval
//! - `angle`: degree-backed angles with coterminal views
//! - `quat_interval`: start/end rotation intervals
//! - `swizzle`: GLSL-style component shuffling for glam vectors

pub mod angle;
pub mod interval;
pub mod modular;
pub mod quat_interval;
pub mod swizzle;

pub use angle::Angle;
pub use interval::PeriodicInterval;
pub use modular::ModularFloat;
pub use quat_interval::QuatInterval;

/// Move `current` toward `target` by at most `step`, without overshooting.
#[inline]
pub fn approach(current: f32, target: f32, step: f32) -> f32 {
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}
