//! Directions, coordinate orders and corners on a 2D plane

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A cardinal direction on a 2D plane. Up is toward the top row of a row-major store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction2D {
    Up,
    Down,
    Left,
    Right,
}

impl Direction2D {
    pub const NORTH: Self = Self::Up;
    pub const SOUTH: Self = Self::Down;
    pub const EAST: Self = Self::Right;
    pub const WEST: Self = Self::Left;

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction2D::Left | Direction2D::Right)
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction2D::Up | Direction2D::Down)
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction2D::Up => Direction2D::Down,
            Direction2D::Down => Direction2D::Up,
            Direction2D::Left => Direction2D::Right,
            Direction2D::Right => Direction2D::Left,
        }
    }
}

/// Which way each coordinate of a pair points.
///
/// `RightThenDown` means the first coordinate counts columns to the right and the
/// second counts rows downward, i.e. plain reading order. Every variant pairs one
/// horizontal with one vertical direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoordinateOrder2D {
    #[default]
    RightThenDown,
    RightThenUp,
    LeftThenDown,
    LeftThenUp,
    UpThenRight,
    UpThenLeft,
    DownThenRight,
    DownThenLeft,
}

impl CoordinateOrder2D {
    pub const ALL: [Self; 8] = [
        Self::RightThenDown,
        Self::RightThenUp,
        Self::LeftThenDown,
        Self::LeftThenUp,
        Self::UpThenRight,
        Self::UpThenLeft,
        Self::DownThenRight,
        Self::DownThenLeft,
    ];

    /// Build an order from the directions of the first and second coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if both directions lie on the same axis.
    pub fn from_directions(first: Direction2D, second: Direction2D) -> Result<Self> {
        use Direction2D::*;
        match (first, second) {
            (Right, Down) => Ok(Self::RightThenDown),
            (Right, Up) => Ok(Self::RightThenUp),
            (Left, Down) => Ok(Self::LeftThenDown),
            (Left, Up) => Ok(Self::LeftThenUp),
            (Up, Right) => Ok(Self::UpThenRight),
            (Up, Left) => Ok(Self::UpThenLeft),
            (Down, Right) => Ok(Self::DownThenRight),
            (Down, Left) => Ok(Self::DownThenLeft),
            _ => Err(Error::invalid(format!(
                "coordinate directions must be perpendicular, got {first:?} then {second:?}"
            ))),
        }
    }

    /// `(first, second)` directions
    pub fn directions(&self) -> (Direction2D, Direction2D) {
        use Direction2D::*;
        match self {
            Self::RightThenDown => (Right, Down),
            Self::RightThenUp => (Right, Up),
            Self::LeftThenDown => (Left, Down),
            Self::LeftThenUp => (Left, Up),
            Self::UpThenRight => (Up, Right),
            Self::UpThenLeft => (Up, Left),
            Self::DownThenRight => (Down, Right),
            Self::DownThenLeft => (Down, Left),
        }
    }

    pub fn first(&self) -> Direction2D {
        self.directions().0
    }

    pub fn second(&self) -> Direction2D {
        self.directions().1
    }

    /// The direction of whichever coordinate runs horizontally.
    pub fn horizontal(&self) -> Direction2D {
        let (first, second) = self.directions();
        if first.is_horizontal() { first } else { second }
    }

    /// The direction of whichever coordinate runs vertically.
    pub fn vertical(&self) -> Direction2D {
        let (first, second) = self.directions();
        if first.is_vertical() { first } else { second }
    }

    /// True if the first coordinate counts columns.
    pub fn is_first_horizontal(&self) -> bool {
        self.first().is_horizontal()
    }

    /// Both directions reversed.
    pub fn rotate_180(&self) -> Self {
        match self {
            Self::RightThenDown => Self::LeftThenUp,
            Self::RightThenUp => Self::LeftThenDown,
            Self::LeftThenDown => Self::RightThenUp,
            Self::LeftThenUp => Self::RightThenDown,
            Self::UpThenRight => Self::DownThenLeft,
            Self::UpThenLeft => Self::DownThenRight,
            Self::DownThenRight => Self::UpThenLeft,
            Self::DownThenLeft => Self::UpThenRight,
        }
    }

    /// The horizontal direction reversed.
    pub fn flip_horizontal(&self) -> Self {
        match self {
            Self::RightThenDown => Self::LeftThenDown,
            Self::RightThenUp => Self::LeftThenUp,
            Self::LeftThenDown => Self::RightThenDown,
            Self::LeftThenUp => Self::RightThenUp,
            Self::UpThenRight => Self::UpThenLeft,
            Self::UpThenLeft => Self::UpThenRight,
            Self::DownThenRight => Self::DownThenLeft,
            Self::DownThenLeft => Self::DownThenRight,
        }
    }

    /// The vertical direction reversed.
    pub fn flip_vertical(&self) -> Self {
        match self {
            Self::RightThenDown => Self::RightThenUp,
            Self::RightThenUp => Self::RightThenDown,
            Self::LeftThenDown => Self::LeftThenUp,
            Self::LeftThenUp => Self::LeftThenDown,
            Self::UpThenRight => Self::DownThenRight,
            Self::UpThenLeft => Self::DownThenLeft,
            Self::DownThenRight => Self::UpThenRight,
            Self::DownThenLeft => Self::UpThenLeft,
        }
    }

    /// The same two directions with the coordinates exchanged.
    pub fn swap_axes(&self) -> Self {
        match self {
            Self::RightThenDown => Self::DownThenRight,
            Self::RightThenUp => Self::UpThenRight,
            Self::LeftThenDown => Self::DownThenLeft,
            Self::LeftThenUp => Self::UpThenLeft,
            Self::UpThenRight => Self::RightThenUp,
            Self::UpThenLeft => Self::LeftThenUp,
            Self::DownThenRight => Self::RightThenDown,
            Self::DownThenLeft => Self::LeftThenDown,
        }
    }

    /// The corner of the grid addressed by coordinates (0, 0).
    pub fn origin_corner(&self) -> Corner2D {
        match (self.horizontal(), self.vertical()) {
            (Direction2D::Right, Direction2D::Down) => Corner2D::TopLeft,
            (Direction2D::Left, Direction2D::Down) => Corner2D::TopRight,
            (Direction2D::Right, _) => Corner2D::BottomLeft,
            _ => Corner2D::BottomRight,
        }
    }
}

/// A corner of a 2D plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner2D {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner2D {
    pub const NORTHWEST: Self = Self::TopLeft;
    pub const NORTHEAST: Self = Self::TopRight;
    pub const SOUTHWEST: Self = Self::BottomLeft;
    pub const SOUTHEAST: Self = Self::BottomRight;
}
