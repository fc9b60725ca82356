//! Claimable elements
//!
//! Two lists tracking which elements have been claimed. Claiming moves an
//! element from the unclaimed list to the claimed list; unclaiming moves it back.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct ClaimableElements<T> {
    unclaimed: Vec<T>,
    claimed: Vec<T>,
}

impl<T> Default for ClaimableElements<T> {
    fn default() -> Self {
        Self {
            unclaimed: Vec::new(),
            claimed: Vec::new(),
        }
    }
}

impl<T> ClaimableElements<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with every element unclaimed.
    pub fn from_unclaimed(elements: impl IntoIterator<Item = T>) -> Self {
        Self {
            unclaimed: elements.into_iter().collect(),
            claimed: Vec::new(),
        }
    }

    pub fn add_unclaimed(&mut self, value: T) {
        self.unclaimed.push(value);
    }

    pub fn add_claimed(&mut self, value: T) {
        self.claimed.push(value);
    }

    #[inline]
    pub fn unclaimed_len(&self) -> usize {
        self.unclaimed.len()
    }

    #[inline]
    pub fn claimed_len(&self) -> usize {
        self.claimed.len()
    }

    pub fn unclaimed(&self) -> &[T] {
        &self.unclaimed
    }

    pub fn claimed(&self) -> &[T] {
        &self.claimed
    }

    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] past the end of the unclaimed list.
    pub fn unclaimed_at(&self, index: usize) -> Result<&T> {
        at(&self.unclaimed, index)
    }

    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] past the end of the claimed list.
    pub fn claimed_at(&self, index: usize) -> Result<&T> {
        at(&self.claimed, index)
    }

    /// A random unclaimed element, left in place. `None` if there are none.
    pub fn random_unclaimed<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        self.unclaimed.choose(rng)
    }

    /// A random claimed element, left in place. `None` if there are none.
    pub fn random_claimed<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        self.claimed.choose(rng)
    }

    /// `count` unclaimed elements at distinct positions, left in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if fewer than `count` elements are unclaimed.
    pub fn random_unique_unclaimed<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<&T>> {
        pick_unique(&self.unclaimed, rng, count)
    }

    /// `count` claimed elements at distinct positions, left in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if fewer than `count` elements are claimed.
    pub fn random_unique_claimed<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<&T>> {
        pick_unique(&self.claimed, rng, count)
    }
}

impl<T: PartialEq> ClaimableElements<T> {
    /// Remove the first unclaimed element equal to `value`.
    pub fn remove_unclaimed(&mut self, value: &T) -> Option<T> {
        remove_first(&mut self.unclaimed, value)
    }

    /// Remove the first claimed element equal to `value`.
    pub fn remove_claimed(&mut self, value: &T) -> Option<T> {
        remove_first(&mut self.claimed, value)
    }

    /// Move `value` from unclaimed to claimed. False if it was not unclaimed.
    pub fn claim(&mut self, value: &T) -> bool {
        match self.remove_unclaimed(value) {
            Some(element) => {
                self.claimed.push(element);
                true
            }
            None => false,
        }
    }

    /// Move `value` from claimed back to unclaimed. False if it was not claimed.
    pub fn unclaim(&mut self, value: &T) -> bool {
        match self.remove_claimed(value) {
            Some(element) => {
                self.unclaimed.push(element);
                true
            }
            None => false,
        }
    }
}

fn at<T>(elements: &[T], index: usize) -> Result<&T> {
    elements.get(index).ok_or(Error::IndexOutOfRange {
        index,
        len: elements.len(),
    })
}

fn remove_first<T: PartialEq>(elements: &mut Vec<T>, value: &T) -> Option<T> {
    let position = elements.iter().position(|e| e == value)?;
    Some(elements.remove(position))
}

fn pick_unique<'a, T, R: Rng + ?Sized>(
    elements: &'a [T],
    rng: &mut R,
    count: usize,
) -> Result<Vec<&'a T>> {
    if count > elements.len() {
        return Err(Error::invalid(format!(
            "cannot pick {count} unique elements from {}",
            elements.len()
        )));
    }
    Ok(elements.choose_multiple(rng, count).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn letters() -> ClaimableElements<char> {
        ClaimableElements::from_unclaimed("abcde".chars())
    }

    #[test]
    fn test_claim_and_unclaim_move_elements() {
        let mut elements = letters();
        assert!(elements.claim(&'c'));
        assert!(elements.claim(&'a'));
        assert_eq!(elements.unclaimed(), &['b', 'd', 'e']);
        assert_eq!(elements.claimed(), &['c', 'a']);

        assert!(elements.unclaim(&'c'));
        assert_eq!(elements.unclaimed(), &['b', 'd', 'e', 'c']);
        assert_eq!(elements.claimed_len(), 1);
    }

    #[test]
    fn test_claim_missing_is_noop() {
        let mut elements = letters();
        assert!(!elements.claim(&'z'));
        assert!(!elements.unclaim(&'a'));
        assert_eq!(elements.unclaimed_len(), 5);
        assert_eq!(elements.claimed_len(), 0);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut elements = ClaimableElements::new();
        elements.add_unclaimed(1);
        elements.add_unclaimed(2);
        elements.add_unclaimed(1);
        elements.add_claimed(3);
        assert_eq!(elements.remove_unclaimed(&1), Some(1));
        assert_eq!(elements.unclaimed(), &[2, 1]);
        assert_eq!(elements.remove_claimed(&4), None);
        assert_eq!(elements.remove_claimed(&3), Some(3));
    }

    #[test]
    fn test_indexed_access() {
        let mut elements = letters();
        elements.claim(&'d');
        assert_eq!(*elements.unclaimed_at(3).unwrap(), 'e');
        assert_eq!(*elements.claimed_at(0).unwrap(), 'd');
        assert!(matches!(
            elements.claimed_at(1),
            Err(Error::IndexOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_random_picks() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut elements = letters();
        assert_eq!(elements.random_claimed(&mut rng), None);

        for _ in 0..16 {
            let pick = *elements.random_unclaimed(&mut rng).unwrap();
            assert!(elements.unclaimed().contains(&pick));
        }
        // Picking leaves the lists untouched
        assert_eq!(elements.unclaimed_len(), 5);

        elements.claim(&'b');
        assert_eq!(elements.random_claimed(&mut rng), Some(&'b'));
    }

    #[test]
    fn test_random_unique_picks() {
        let mut rng = Pcg32::seed_from_u64(11);
        let elements = letters();

        let mut picks = elements.random_unique_unclaimed(&mut rng, 5).unwrap();
        picks.sort();
        assert_eq!(picks, vec![&'a', &'b', &'c', &'d', &'e']);

        let picks = elements.random_unique_unclaimed(&mut rng, 3).unwrap();
        assert_eq!(picks.len(), 3);
        for (i, a) in picks.iter().enumerate() {
            assert!(picks[i + 1..].iter().all(|b| b != a));
        }

        assert!(elements.random_unique_unclaimed(&mut rng, 6).is_err());
        assert!(elements.random_unique_claimed(&mut rng, 0).unwrap().is_empty());
        assert!(matches!(
            elements.random_unique_claimed(&mut rng, 1),
            Err(Error::InvalidArgument(_))
        ));
    }
}
