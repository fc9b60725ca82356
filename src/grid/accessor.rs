//! Matrix coordinate accessor
//!
//! Maps a logical coordinate pair onto a linear offset into a row-major store
//! (left to right, top to bottom). How the pair is read depends on a
//! [`CoordinateOrder2D`]: with `RightThenUp`, (0, 0) is the bottom-left cell and
//! the second coordinate counts rows upward.
//!
//! The accessor never owns the store. It only does the index arithmetic, so one
//! accessor can address any `width * height` sequence.

use std::iter::FusedIterator;

use super::direction::{CoordinateOrder2D, Direction2D};
use crate::error::{Error, Result};

/// Coordinate-to-index translation for a `width` x `height` row-major store.
///
/// # Invariants
/// `width` and `height` are positive and `width * height` fits in an `isize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixAccessor {
    width: usize,
    height: usize,
    order: CoordinateOrder2D,
    zero_indexed: bool,
}

impl MatrixAccessor {
    /// Create an accessor.
    ///
    /// With `zero_indexed == false` callers use 1-based coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either dimension is zero or the cell
    /// count overflows.
    pub fn new(
        width: usize,
        height: usize,
        order: CoordinateOrder2D,
        zero_indexed: bool,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid(format!(
                "matrix dimensions must be positive, got {width}x{height}"
            )));
        }
        match width.checked_mul(height) {
            Some(len) if len <= isize::MAX as usize => {}
            _ => {
                return Err(Error::invalid(format!(
                    "matrix of {width}x{height} cells is too large"
                )));
            }
        }
        Ok(Self {
            width,
            height,
            order,
            zero_indexed,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn order(&self) -> CoordinateOrder2D {
        self.order
    }

    #[inline]
    pub fn is_zero_indexed(&self) -> bool {
        self.zero_indexed
    }

    /// Number of cells, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false; an accessor has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn set_order(&mut self, order: CoordinateOrder2D) {
        self.order = order;
    }

    /// Exchange width and height without touching the store.
    ///
    /// The cell count is unchanged, so the same store stays valid, but every
    /// coordinate pair now lands on a different cell.
    pub fn swap_width_and_height(&mut self) {
        std::mem::swap(&mut self.width, &mut self.height);
        log::debug!(
            "Matrix accessor swapped to {}x{}",
            self.width,
            self.height
        );
    }

    /// The smallest valid coordinate: 0, or 1 when not zero-indexed.
    #[inline]
    pub fn origin(&self) -> isize {
        if self.zero_indexed { 0 } else { 1 }
    }

    #[inline]
    fn fix_zero_indexing(&self, coord1: isize, coord2: isize) -> (isize, isize) {
        let origin = self.origin();
        (coord1.wrapping_sub(origin), coord2.wrapping_sub(origin))
    }

    fn extent(&self, direction: Direction2D) -> usize {
        if direction.is_horizontal() {
            self.width
        } else {
            self.height
        }
    }

    /// How many values the first coordinate takes (`width` if it counts columns).
    pub fn extent_first(&self) -> usize {
        self.extent(self.order.first())
    }

    /// How many values the second coordinate takes.
    pub fn extent_second(&self) -> usize {
        self.extent(self.order.second())
    }

    /// Linear distance covered by one step in `direction`.
    fn stride(&self, direction: Direction2D) -> isize {
        let width = self.width as isize;
        match direction {
            Direction2D::Right => 1,
            Direction2D::Left => -1,
            Direction2D::Down => width,
            Direction2D::Up => -width,
        }
    }

    /// Index of logical (0, 0): the far column for `Left`, the last row for `Up`.
    fn start_offset(&self) -> isize {
        let width = self.width as isize;
        let height = self.height as isize;
        let mut offset = 0;
        if self.order.horizontal() == Direction2D::Left {
            offset += width - 1;
        }
        if self.order.vertical() == Direction2D::Up {
            offset += (height - 1) * width;
        }
        offset
    }

    /// Linear index of the cell at `(coord1, coord2)`.
    ///
    /// No bounds check: coordinates outside the matrix still produce an index,
    /// which may fall outside the store or alias another cell. Check with
    /// [`Self::is_within_matrix`] or use [`Self::checked_index_at`].
    pub fn index_at(&self, coord1: isize, coord2: isize) -> isize {
        let (coord1, coord2) = self.fix_zero_indexing(coord1, coord2);
        let (first, second) = self.order.directions();
        self.start_offset()
            .wrapping_add(self.stride(first).wrapping_mul(coord1))
            .wrapping_add(self.stride(second).wrapping_mul(coord2))
    }

    /// Linear index of the cell, or `None` if the coordinates are outside the matrix.
    pub fn checked_index_at(&self, coord1: isize, coord2: isize) -> Option<usize> {
        if self.is_within_matrix(coord1, coord2) {
            usize::try_from(self.index_at(coord1, coord2)).ok()
        } else {
            None
        }
    }

    /// True if the coordinates address a cell of the matrix.
    ///
    /// Each coordinate is checked against the extent of its own axis, so the
    /// order is consulted: with a vertical-first order the first coordinate
    /// ranges over `height`, not `width`. For horizontal-first orders this is
    /// the plain `[0, width) x [0, height)` check (shifted by one when not
    /// zero-indexed).
    pub fn is_within_matrix(&self, coord1: isize, coord2: isize) -> bool {
        let (coord1, coord2) = self.fix_zero_indexing(coord1, coord2);
        let in_axis = |coord: isize, extent: usize| coord >= 0 && (coord as usize) < extent;
        in_axis(coord1, self.extent_first()) && in_axis(coord2, self.extent_second())
    }

    /// Coordinates of the cell stored at `index`, or `None` past the end.
    pub fn coordinates_of(&self, index: usize) -> Option<(isize, isize)> {
        if index >= self.len() {
            return None;
        }
        let row = index / self.width;
        let column = index % self.width;

        let horizontal = match self.order.horizontal() {
            Direction2D::Left => self.width - 1 - column,
            _ => column,
        };
        let vertical = match self.order.vertical() {
            Direction2D::Up => self.height - 1 - row,
            _ => row,
        };
        let (coord1, coord2) = if self.order.is_first_horizontal() {
            (horizontal, vertical)
        } else {
            (vertical, horizontal)
        };
        let origin = self.origin();
        Some((coord1 as isize + origin, coord2 as isize + origin))
    }

    fn check_corner(&self, coord1: isize, coord2: isize) -> Result<()> {
        if self.is_within_matrix(coord1, coord2) {
            Ok(())
        } else {
            Err(Error::CoordinatesOutOfRange { coord1, coord2 })
        }
    }

    fn full_first(&self) -> AxisWalk {
        let origin = self.origin();
        AxisWalk::between(origin, origin + self.extent_first() as isize - 1)
    }

    fn full_second(&self) -> AxisWalk {
        let origin = self.origin();
        AxisWalk::between(origin, origin + self.extent_second() as isize - 1)
    }

    /// Every cell of the rectangle with corners `(start1, start2)` and `(end1, end2)`.
    ///
    /// Cells come in reading order for the accessor's coordinates: the first
    /// coordinate walks from `start1` to `end1`, then the second coordinate
    /// advances one step toward `end2`. Corners may be given in either order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinatesOutOfRange`] if either corner is outside the matrix.
    pub fn select_range(
        &self,
        start1: isize,
        start2: isize,
        end1: isize,
        end2: isize,
    ) -> Result<CellIndices> {
        self.check_corner(start1, start2)?;
        self.check_corner(end1, end2)?;
        Ok(CellIndices::new(
            *self,
            AxisWalk::between(start1, end1),
            AxisWalk::between(start2, end2),
            true,
        ))
    }

    /// All cells whose first coordinate is `coord1`.
    pub fn select_band_using_coord1(&self, coord1: isize) -> Result<CellIndices> {
        self.select_bands_using_coord1(coord1, coord1)
    }

    /// Bands `start..=end` of the first coordinate, one whole band at a time.
    pub fn select_bands_using_coord1(&self, start: isize, end: isize) -> Result<CellIndices> {
        let origin = self.origin();
        self.check_corner(start, origin)?;
        self.check_corner(end, origin)?;
        Ok(CellIndices::new(
            *self,
            AxisWalk::between(start, end),
            self.full_second(),
            false,
        ))
    }

    /// All cells whose second coordinate is `coord2`.
    pub fn select_band_using_coord2(&self, coord2: isize) -> Result<CellIndices> {
        self.select_bands_using_coord2(coord2, coord2)
    }

    /// Bands `start..=end` of the second coordinate, one whole band at a time.
    pub fn select_bands_using_coord2(&self, start: isize, end: isize) -> Result<CellIndices> {
        let origin = self.origin();
        self.check_corner(origin, start)?;
        self.check_corner(origin, end)?;
        Ok(CellIndices::new(
            *self,
            self.full_first(),
            AxisWalk::between(start, end),
            true,
        ))
    }

    /// Every cell, in reading order for the accessor's coordinates.
    pub fn select_all(&self) -> CellIndices {
        CellIndices::new(*self, self.full_first(), self.full_second(), true)
    }
}

/// An inclusive walk along one coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AxisWalk {
    start: isize,
    step: isize,
    count: usize,
}

impl AxisWalk {
    fn between(start: isize, end: isize) -> Self {
        Self {
            start,
            step: if end >= start { 1 } else { -1 },
            count: end.abs_diff(start) + 1,
        }
    }

    #[inline]
    fn at(&self, offset: usize) -> isize {
        self.start + self.step * offset as isize
    }
}

/// Lazy iterator over the linear indices of a rectangular block of cells.
///
/// A clone continues independently from the same position. Call the `select_*`
/// method again to start over.
#[derive(Debug, Clone)]
pub struct CellIndices {
    accessor: MatrixAccessor,
    first: AxisWalk,
    second: AxisWalk,
    first_fastest: bool,
    pos_first: usize,
    pos_second: usize,
    remaining: usize,
}

impl CellIndices {
    fn new(
        accessor: MatrixAccessor,
        first: AxisWalk,
        second: AxisWalk,
        first_fastest: bool,
    ) -> Self {
        Self {
            accessor,
            first,
            second,
            first_fastest,
            pos_first: 0,
            pos_second: 0,
            remaining: first.count * second.count,
        }
    }

    fn advance(&mut self) {
        if self.first_fastest {
            self.pos_first += 1;
            if self.pos_first == self.first.count {
                self.pos_first = 0;
                self.pos_second += 1;
            }
        } else {
            self.pos_second += 1;
            if self.pos_second == self.second.count {
                self.pos_second = 0;
                self.pos_first += 1;
            }
        }
    }
}

impl Iterator for CellIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let coord1 = self.first.at(self.pos_first);
        let coord2 = self.second.at(self.pos_second);
        self.advance();
        self.remaining -= 1;
        // Corners were validated, so every cell in between is inside the matrix
        Some(self.accessor.index_at(coord1, coord2) as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CellIndices {}

impl FusedIterator for CellIndices {}
