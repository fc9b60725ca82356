//! pautilib - small numeric helpers for game code
//!
//! Core modules:
//! - `math`: periodic intervals, wrapped floats, angles, swizzling
//! - `grid`: row-major matrix accessors and 2D lists
//! - `capped_queue`: a queue with a lifetime enqueue limit
//! - `claimable`: elements tracked as claimed or unclaimed
//! - `settings`: JSON configuration for grids and angles

pub mod capped_queue;
pub mod claimable;
pub mod error;
pub mod grid;
pub mod math;
pub mod settings;

pub use capped_queue::CappedQueue;
pub use claimable::ClaimableElements;
pub use error::{Error, Result};
pub use grid::{CoordinateOrder2D, Corner2D, Direction2D, List2, MatrixAccessor};
pub use math::{Angle, ModularFloat, PeriodicInterval, QuatInterval};
pub use settings::{AngleUnit, Settings};
