//! 2D list
//!
//! A row-major `Vec<T>` addressed through a [`MatrixAccessor`]. Changing the
//! accessor (flipping, transposing) changes how coordinates are read without
//! moving any elements.

use super::accessor::{CellIndices, MatrixAccessor};
use super::direction::CoordinateOrder2D;
use crate::error::{Error, Result};

fn log_created(accessor: &MatrixAccessor) {
    log::debug!(
        "List2 created: {}x{} {:?}",
        accessor.width(),
        accessor.height(),
        accessor.order()
    );
}

#[derive(Debug, Clone, PartialEq)]
pub struct List2<T> {
    accessor: MatrixAccessor,
    /// Elements in row-major order
    collection: Vec<T>,
}

impl<T> List2<T> {
    /// Wrap an existing row-major collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the collection does not hold exactly
    /// `width * height` elements.
    pub fn new(row_major: Vec<T>, accessor: MatrixAccessor) -> Result<Self> {
        if row_major.len() != accessor.len() {
            return Err(Error::invalid(format!(
                "{}x{} matrix needs {} elements, got {}",
                accessor.width(),
                accessor.height(),
                accessor.len(),
                row_major.len()
            )));
        }
        log_created(&accessor);
        Ok(Self {
            accessor,
            collection: row_major,
        })
    }

    /// Build each element from its linear index in row-major order.
    pub fn from_fn(accessor: MatrixAccessor, f: impl FnMut(usize) -> T) -> Self {
        let collection = (0..accessor.len()).map(f).collect();
        log_created(&accessor);
        Self {
            accessor,
            collection,
        }
    }

    #[inline]
    pub fn accessor(&self) -> &MatrixAccessor {
        &self.accessor
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    fn index_for(&self, coord1: isize, coord2: isize) -> Result<usize> {
        self.accessor
            .checked_index_at(coord1, coord2)
            .ok_or(Error::CoordinatesOutOfRange { coord1, coord2 })
    }

    /// Element at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinatesOutOfRange`] for coordinates outside the matrix.
    pub fn at(&self, coord1: isize, coord2: isize) -> Result<&T> {
        let index = self.index_for(coord1, coord2)?;
        self.at_index(index)
    }

    pub fn at_mut(&mut self, coord1: isize, coord2: isize) -> Result<&mut T> {
        let index = self.index_for(coord1, coord2)?;
        let len = self.collection.len();
        self.collection
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Replace the element at the given coordinates, returning the old one.
    pub fn set(&mut self, coord1: isize, coord2: isize, value: T) -> Result<T> {
        Ok(std::mem::replace(self.at_mut(coord1, coord2)?, value))
    }

    /// Element at a raw row-major index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] past the end of the collection.
    pub fn at_index(&self, index: usize) -> Result<&T> {
        self.collection.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.collection.len(),
        })
    }

    pub fn is_within_matrix(&self, coord1: isize, coord2: isize) -> bool {
        self.accessor.is_within_matrix(coord1, coord2)
    }

    fn select(&self, indices: CellIndices) -> impl ExactSizeIterator<Item = &T> + Clone + '_ {
        // Selections only yield indices of validated cells
        indices.map(move |index| &self.collection[index])
    }

    /// Every element, in reading order for the accessor's coordinates.
    pub fn select_all(&self) -> impl ExactSizeIterator<Item = &T> + Clone + '_ {
        self.select(self.accessor.select_all())
    }

    /// Elements of the rectangle with corners `(start1, start2)` and `(end1, end2)`.
    pub fn select_range(
        &self,
        start1: isize,
        start2: isize,
        end1: isize,
        end2: isize,
    ) -> Result<impl ExactSizeIterator<Item = &T> + Clone + '_> {
        let indices = self.accessor.select_range(start1, start2, end1, end2)?;
        Ok(self.select(indices))
    }

    pub fn select_band_using_coord1(
        &self,
        coord1: isize,
    ) -> Result<impl ExactSizeIterator<Item = &T> + Clone + '_> {
        let indices = self.accessor.select_band_using_coord1(coord1)?;
        Ok(self.select(indices))
    }

    pub fn select_bands_using_coord1(
        &self,
        start: isize,
        end: isize,
    ) -> Result<impl ExactSizeIterator<Item = &T> + Clone + '_> {
        let indices = self.accessor.select_bands_using_coord1(start, end)?;
        Ok(self.select(indices))
    }

    pub fn select_band_using_coord2(
        &self,
        coord2: isize,
    ) -> Result<impl ExactSizeIterator<Item = &T> + Clone + '_> {
        let indices = self.accessor.select_band_using_coord2(coord2)?;
        Ok(self.select(indices))
    }

    pub fn select_bands_using_coord2(
        &self,
        start: isize,
        end: isize,
    ) -> Result<impl ExactSizeIterator<Item = &T> + Clone + '_> {
        let indices = self.accessor.select_bands_using_coord2(start, end)?;
        Ok(self.select(indices))
    }

    /// Exchange width and height. Elements stay where they are in memory.
    pub fn transpose(&mut self) {
        self.accessor.swap_width_and_height();
    }

    /// Read the columns in the opposite direction.
    pub fn flip_horizontal(&mut self) {
        let order = self.accessor.order().flip_horizontal();
        self.accessor.set_order(order);
    }

    /// Read the rows in the opposite direction.
    pub fn flip_vertical(&mut self) {
        let order = self.accessor.order().flip_vertical();
        self.accessor.set_order(order);
    }

    pub fn set_order(&mut self, order: CoordinateOrder2D) {
        self.accessor.set_order(order);
    }

    /// The row-major elements.
    pub fn into_inner(self) -> Vec<T> {
        self.collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::direction::CoordinateOrder2D::*;

    fn letters(order: CoordinateOrder2D) -> List2<char> {
        // a b c
        // d e f
        let accessor = MatrixAccessor::new(3, 2, order, true).unwrap();
        List2::new("abcdef".chars().collect(), accessor).unwrap()
    }

    #[test]
    fn test_length_must_match() {
        let accessor = MatrixAccessor::new(3, 2, RightThenDown, true).unwrap();
        assert!(matches!(
            List2::new(vec![1, 2, 3], accessor),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_at_follows_order() {
        let list = letters(RightThenDown);
        assert_eq!(*list.at(0, 0).unwrap(), 'a');
        assert_eq!(*list.at(2, 1).unwrap(), 'f');

        let list = letters(RightThenUp);
        assert_eq!(*list.at(0, 0).unwrap(), 'd');
        assert_eq!(*list.at(2, 1).unwrap(), 'c');
    }

    #[test]
    fn test_out_of_range_access() {
        let list = letters(RightThenDown);
        // (3, 0) would alias 'd' without the bounds check
        assert!(matches!(
            list.at(3, 0),
            Err(Error::CoordinatesOutOfRange { coord1: 3, coord2: 0 })
        ));
        assert!(matches!(
            list.at_index(6),
            Err(Error::IndexOutOfRange { index: 6, len: 6 })
        ));
        assert_eq!(*list.at_index(4).unwrap(), 'e');
    }

    #[test]
    fn test_set_and_at_mut() {
        let mut list = letters(RightThenUp);
        assert_eq!(list.set(1, 1, 'X').unwrap(), 'b');
        *list.at_mut(0, 0).unwrap() = 'Y';
        assert_eq!(list.into_inner(), vec!['a', 'X', 'c', 'Y', 'e', 'f']);
    }

    #[test]
    fn test_selections() {
        let list = letters(RightThenDown);
        assert_eq!(list.select_all().copied().collect::<String>(), "abcdef");
        assert_eq!(
            list.select_band_using_coord1(2).unwrap().copied().collect::<String>(),
            "cf"
        );
        assert_eq!(
            list.select_band_using_coord2(1).unwrap().copied().collect::<String>(),
            "def"
        );
        assert_eq!(
            list.select_bands_using_coord1(1, 2).unwrap().copied().collect::<String>(),
            "becf"
        );
        assert_eq!(
            list.select_bands_using_coord2(0, 1).unwrap().copied().collect::<String>(),
            "abcdef"
        );
        assert_eq!(
            list.select_range(2, 1, 1, 0).unwrap().copied().collect::<String>(),
            "fecb"
        );
    }

    #[test]
    fn test_flips() {
        let mut list = letters(RightThenDown);
        list.flip_horizontal();
        assert_eq!(list.select_all().copied().collect::<String>(), "cbafed");
        list.flip_vertical();
        assert_eq!(list.select_all().copied().collect::<String>(), "fedcba");
    }

    #[test]
    fn test_transpose_reinterprets() {
        let mut list = letters(RightThenDown);
        list.transpose();
        assert_eq!(list.accessor().width(), 2);
        assert_eq!(list.accessor().height(), 3);
        // Same memory, now read as two columns
        assert_eq!(*list.at(1, 2).unwrap(), 'f');
        assert_eq!(*list.at(0, 1).unwrap(), 'c');
        assert!(list.at(2, 0).is_err());
    }

    #[test]
    fn test_from_fn() {
        let accessor = MatrixAccessor::new(2, 2, LeftThenUp, false).unwrap();
        let list = List2::from_fn(accessor, |i| i * 10);
        assert_eq!(*list.at(1, 1).unwrap(), 30);
        assert_eq!(*list.at(2, 2).unwrap(), 0);
        assert_eq!(list.len(), 4);
    }

    struct CaptureLogger(std::sync::Mutex<Vec<String>>);

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: CaptureLogger = CaptureLogger(std::sync::Mutex::new(Vec::new()));

    #[test]
    fn test_both_constructors_log_creation() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Debug);

        let accessor = MatrixAccessor::new(5, 3, DownThenLeft, true).unwrap();
        let _ = List2::from_fn(accessor, |i| i);
        let accessor = MatrixAccessor::new(4, 7, UpThenLeft, true).unwrap();
        let _ = List2::new(vec![0u8; 28], accessor).unwrap();

        let lines = CAPTURE.0.lock().unwrap();
        assert!(lines.iter().any(|l| l == "List2 created: 5x3 DownThenLeft"));
        assert!(lines.iter().any(|l| l == "List2 created: 4x7 UpThenLeft"));
    }
}
