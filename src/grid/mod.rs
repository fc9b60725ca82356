//! Row-major grids
//!
//! - `direction`: directions, coordinate orders and corners
//! - `accessor`: coordinate pair to linear index translation
//! - `list2`: a 2D list built on the accessor

pub mod accessor;
pub mod direction;
pub mod list2;

pub use accessor::{CellIndices, MatrixAccessor};
pub use direction::{CoordinateOrder2D, Corner2D, Direction2D};
pub use list2::List2;
