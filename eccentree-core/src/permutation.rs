//! Vertex permutations used as isomorphism witnesses and for relabeling.

use std::ops::Deref;

/// A bijection on `0..n`, stored as the image of each index.
///
/// # Examples
/// ```
/// use eccentree_core::Permutation;
///
/// let swap = Permutation::new([1, 0, 2]).expect("a bijection");
/// assert_eq!(swap.apply(0), Some(1));
/// assert_eq!(swap.inverse(), swap);
/// assert!(Permutation::new([0, 0]).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// Builds a permutation from the images of `0..n`, returning `None` unless
    /// every index in `0..n` appears exactly once.
    pub fn new(values: impl IntoIterator<Item = usize>) -> Option<Self> {
        let images: Vec<usize> = values.into_iter().collect();
        let mut seen = vec![false; images.len()];
        for &image in &images {
            let slot = seen.get_mut(image)?;
            if *slot {
                return None;
            }
            *slot = true;
        }
        Some(Self(images))
    }

    /// The identity on `0..n`.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Returns the image of `index`, or `None` when it is out of range.
    #[must_use]
    pub fn apply(&self, index: usize) -> Option<usize> {
        self.0.get(index).copied()
    }

    /// Returns the permutation undoing `self`.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut inverse = vec![0; self.0.len()];
        for (index, &image) in self.0.iter().enumerate() {
            inverse[image] = index;
        }
        Self(inverse)
    }

    /// Returns `other ∘ self`: apply `self` first, then `other`.
    ///
    /// Returns `None` when the orders differ.
    #[must_use]
    pub fn then(&self, other: &Self) -> Option<Self> {
        if self.0.len() != other.0.len() {
            return None;
        }
        Some(Self(self.0.iter().map(|&image| other.0[image]).collect()))
    }
}

impl Deref for Permutation {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::empty(vec![])]
    #[case::identity(vec![0, 1, 2, 3])]
    #[case::cycle(vec![1, 2, 3, 0])]
    fn accepts_bijections(#[case] images: Vec<usize>) {
        let permutation = Permutation::new(images.clone()).expect("bijection must be accepted");
        assert_eq!(&*permutation, images.as_slice());
    }

    #[rstest]
    #[case::repeated(vec![0, 0, 1])]
    #[case::out_of_range(vec![0, 3, 1])]
    fn rejects_non_bijections(#[case] images: Vec<usize>) {
        assert!(Permutation::new(images).is_none());
    }

    #[test]
    fn inverse_composes_to_identity() {
        let cycle = Permutation::new([2, 0, 3, 1]).expect("valid permutation");
        let round_trip = cycle.then(&cycle.inverse()).expect("same order");
        assert_eq!(round_trip, Permutation::identity(4));
    }

    #[test]
    fn then_rejects_mismatched_orders() {
        assert!(Permutation::identity(2).then(&Permutation::identity(3)).is_none());
    }
}
