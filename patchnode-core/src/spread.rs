//! The slice collection carried by every pin.

use std::{
    ops::{Index, IndexMut},
    slice, vec,
};

/// An ordered, resizable sequence of slices.
///
/// A `Spread` is what flows through a pin on each tick. Hosts resize output
/// spreads with [`Spread::set_slice_count()`] and then fill each slot, and
/// spreads of spreads (`Spread<Spread<T>>`) model pins that carry a list per
/// slice. Every slot owns its value, so no two slots alias.
///
/// # Example
///
/// ```
/// use patchnode_core::Spread;
///
/// let mut rows: Spread<Spread<String>> = Spread::new();
/// rows.set_slice_count(2);
/// rows[0].push("a".to_string());
///
/// assert_eq!(rows.slice_count(), 2);
/// assert_eq!(rows[0].slice_count(), 1);
/// assert!(rows[1].is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Spread<T> {
    slices: Vec<T>,
}

impl<T> Spread<T> {
    /// Creates an empty spread.
    #[must_use]
    pub fn new() -> Self {
        Self { slices: Vec::new() }
    }

    /// Creates an empty spread with room for `capacity` slices.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slices: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of slices.
    #[must_use]
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Removes every slice.
    pub fn clear(&mut self) {
        self.slices.clear();
    }

    /// Appends a slice.
    pub fn push(&mut self, value: T) {
        self.slices.push(value);
    }

    /// Returns the slice at `index`, or `None` if it is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slices.get(index)
    }

    /// Returns the slice at `index` taken cyclically.
    ///
    /// The index is reduced modulo the slice count, so `-1` addresses the
    /// last slice and `slice_count()` addresses the first. Returns `None`
    /// only when the spread is empty.
    #[must_use]
    pub fn get_wrapped(&self, index: isize) -> Option<&T> {
        let count = isize::try_from(self.slices.len()).ok().filter(|&n| n > 0)?;
        let wrapped = usize::try_from(index.rem_euclid(count)).ok()?;
        self.slices.get(wrapped)
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.slices.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.slices.iter_mut()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slices
    }

    /// Consumes the spread and returns its slices.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.slices
    }
}

impl<T: Default> Spread<T> {
    /// Resizes the spread to exactly `count` slices.
    ///
    /// Extra slices are dropped. New slices are `T::default()`, each created
    /// separately.
    pub fn set_slice_count(&mut self, count: usize) {
        self.slices.resize_with(count, T::default);
    }
}

impl<T> Default for Spread<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Spread<T> {
    fn from(slices: Vec<T>) -> Self {
        Self { slices }
    }
}

impl<T, const N: usize> From<[T; N]> for Spread<T> {
    fn from(slices: [T; N]) -> Self {
        Self {
            slices: Vec::from(slices),
        }
    }
}

impl<T> From<Spread<T>> for Vec<T> {
    fn from(spread: Spread<T>) -> Self {
        spread.slices
    }
}

impl<T> FromIterator<T> for Spread<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            slices: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Spread<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.slices.extend(iter);
    }
}

impl<T> IntoIterator for Spread<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Spread<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}

impl<T> Index<usize> for Spread<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slices[index]
    }
}

impl<T> IndexMut<usize> for Spread<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.slices[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_slice_count_grows_with_defaults() {
        let mut spread = Spread::from(vec![1.5, 2.5]);
        spread.set_slice_count(4);

        assert_eq!(spread.as_slice(), &[1.5, 2.5, 0.0, 0.0]);
    }

    #[test]
    fn set_slice_count_truncates() {
        let mut spread = Spread::from(["a", "b", "c"].map(String::from));
        spread.set_slice_count(1);

        assert_eq!(spread, Spread::from(vec!["a".to_string()]));
    }

    #[test]
    fn new_slots_do_not_alias() {
        let mut rows: Spread<Spread<i32>> = Spread::new();
        rows.set_slice_count(3);
        rows[1].push(9);

        assert!(rows[0].is_empty());
        assert_eq!(rows[1].as_slice(), &[9]);
        assert!(rows[2].is_empty());
    }

    #[test]
    fn get_is_bounds_checked() {
        let spread = Spread::from([10, 20]);

        assert_eq!(spread.get(1), Some(&20));
        assert_eq!(spread.get(2), None);
    }

    mod wrapped {
        use super::*;

        #[test]
        fn indexes_cyclically() {
            let spread = Spread::from([10, 20, 30]);

            assert_eq!(spread.get_wrapped(0), Some(&10));
            assert_eq!(spread.get_wrapped(3), Some(&10));
            assert_eq!(spread.get_wrapped(7), Some(&20));
        }

        #[test]
        fn negative_indices_count_from_the_end() {
            let spread = Spread::from([10, 20, 30]);

            assert_eq!(spread.get_wrapped(-1), Some(&30));
            assert_eq!(spread.get_wrapped(-4), Some(&30));
        }

        #[test]
        fn empty_spread_has_no_slices() {
            let spread: Spread<i32> = Spread::new();

            assert_eq!(spread.get_wrapped(0), None);
            assert_eq!(spread.get_wrapped(-1), None);
        }
    }

    #[test]
    fn collects_and_iterates_in_order() {
        let spread: Spread<i32> = (1..=4).collect();
        let doubled: Vec<i32> = spread.iter().map(|x| x * 2).collect();

        assert_eq!(doubled, vec![2, 4, 6, 8]);
        assert_eq!(Vec::from(spread), vec![1, 2, 3, 4]);
    }
}
