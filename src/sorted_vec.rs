//! A branded container for values at rest: a [`SortedVec`] is known to
//! be sorted, so it can answer every bound-style query without callers
//! having to keep track of that precondition by hand.
use smallvec::SmallVec;
use std::ops::Range;

use crate::Backing;
use crate::Sequence;

/// A [`SortedVec<T>`] is a [`SmallVec`] of `T` sorted in non-descending
/// order (duplicates allowed), where the inline capacity is
/// [`crate::INLINE_SIZE`].
///
/// All the flat searches in this crate are available as methods;
/// they take \\(\mathcal{O}(\log n)\\) time.  Insertion and removal
/// shift the suffix, like [`Vec::insert`] and [`Vec::remove`].
///
/// [`SmallVec`]: https://docs.rs/smallvec/latest/smallvec/struct.SmallVec.html
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Hash)]
#[repr(transparent)]
pub struct SortedVec<T: Ord> {
    inner: Backing<T>,
}

impl<T: Ord> SortedVec<T> {
    /// Returns an empty [`SortedVec`].
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            inner: Backing::new(),
        }
    }

    /// Blindly tags a container as sorted.
    ///
    /// This operation takes constant time in release mode, and linear
    /// time when debug assertions or internal checks are enabled.
    ///
    /// If `inner` isn't actually sorted, searches on the result return
    /// arbitrary (but in-bounds) answers.
    #[inline(always)]
    pub fn new_unchecked(inner: Backing<T>) -> Self {
        #[cfg(any(feature = "internal_checks", debug_assertions))]
        assert!(crate::preconditions::is_sorted_ascending(&inner[..]));
        Self { inner }
    }

    /// Sorts `inner` in place and wraps it in a [`SortedVec`].
    ///
    /// This operation takes \\(\mathcal{O}(n \log n)\\) time, and
    /// linear time if `inner` is already sorted.
    #[inline(always)]
    pub fn from_vec(inner: Vec<T>) -> Self {
        Self::from_backing(inner.into())
    }

    /// Sorts `inner` in place and wraps it in a [`SortedVec`].
    ///
    /// This operation takes \\(\mathcal{O}(n \log n)\\) time.
    #[inline(always)]
    pub fn from_smallvec<const N: usize>(inner: SmallVec<[T; N]>) -> Self {
        // `INLINE_SIZE == 0` unless inline storage is enabled.
        #[cfg_attr(
            not(feature = "inline_storage"),
            allow(clippy::absurd_extreme_comparisons)
        )]
        let inner: Backing<T> = if inner.len() <= crate::INLINE_SIZE {
            inner.into_iter().collect()
        } else {
            inner.into_vec().into()
        };

        Self::from_backing(inner)
    }

    #[inline(never)]
    fn from_backing(mut inner: Backing<T>) -> Self {
        // The standard sort is linear on sorted input.
        inner.sort();
        Self { inner }
    }

    /// Wraps `inner` in a [`SortedVec`] if it is already sorted, and
    /// returns it unchanged otherwise.
    ///
    /// This operation takes linear time.
    pub fn try_from_sorted(inner: Vec<T>) -> Result<Self, Vec<T>> {
        if crate::preconditions::is_sorted_ascending(&inner) {
            Ok(Self {
                inner: inner.into(),
            })
        } else {
            Err(inner)
        }
    }

    /// Returns a reference to the underlying sorted values.
    #[inline(always)]
    pub fn inner(&self) -> &[T] {
        &self.inner
    }

    /// Extracts the underlying [`SmallVec`] of values.
    ///
    /// [`SmallVec`]: `smallvec::SmallVec`
    #[inline(always)]
    pub fn into_inner(self) -> Backing<T> {
        self.inner
    }

    /// Extracts the underlying vector of values.
    #[inline(always)]
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_vec()
    }

    /// Inserts `value` before any equal value, and returns its index.
    ///
    /// Finding the index takes \\(\mathcal{O}(\log n)\\) time, and
    /// shifting the suffix linear time.
    pub fn insert(&mut self, value: T) -> usize {
        let idx = crate::insert_position(self.inner(), &value);
        self.inner.insert(idx, value);
        idx
    }

    /// Removes the first value equal to `value`, if any, and returns it.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let idx = crate::first_occurrence(self.inner(), value)?;
        Some(self.inner.remove(idx))
    }

    /// Determines whether some value is equal to `value`.
    #[inline(always)]
    pub fn contains(&self, value: &T) -> bool {
        crate::exact_search(self.inner(), value).is_some()
    }

    /// See [`crate::lower_bound`].
    #[inline(always)]
    pub fn lower_bound(&self, value: &T) -> usize {
        crate::lower_bound(self.inner(), value)
    }

    /// See [`crate::upper_bound`].
    #[inline(always)]
    pub fn upper_bound(&self, value: &T) -> usize {
        crate::upper_bound(self.inner(), value)
    }

    /// See [`crate::equal_range`].
    #[inline(always)]
    pub fn equal_range(&self, value: &T) -> Range<usize> {
        crate::equal_range(self.inner(), value)
    }

    /// Returns the number of values equal to `value`.
    #[inline(always)]
    pub fn count(&self, value: &T) -> usize {
        crate::count_occurrences(self.inner(), value)
    }

    /// Returns the number of values in the closed interval `[lo, hi]`.
    #[inline(always)]
    pub fn count_in_range(&self, lo: &T, hi: &T) -> usize {
        crate::count_in_range(self.inner(), lo, hi)
    }

    /// Returns the values in the closed interval `[lo, hi]`.
    pub fn range(&self, lo: &T, hi: &T) -> &[T] {
        if lo > hi {
            return &[];
        }

        let start = self.lower_bound(lo);
        let end = self.upper_bound(hi);
        &self.inner[start..end]
    }

    /// See [`crate::floor`].
    #[inline(always)]
    pub fn floor(&self, value: &T) -> Option<&T> {
        crate::floor(self.inner(), value)
    }

    /// See [`crate::ceiling`].
    #[inline(always)]
    pub fn ceiling(&self, value: &T) -> Option<&T> {
        crate::ceiling(self.inner(), value)
    }

    /// Returns an iterator for the values in ascending order.
    #[inline(always)]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T: Ord> Default for SortedVec<T> {
    #[inline(always)]
    fn default() -> Self {
        SortedVec::new()
    }
}

impl<T: Ord> Sequence for SortedVec<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline(always)]
    fn at(&self, index: usize) -> &T {
        &self.inner[index]
    }
}

impl<T: Ord> From<Vec<T>> for SortedVec<T> {
    #[inline(always)]
    fn from(item: Vec<T>) -> SortedVec<T> {
        SortedVec::from_vec(item)
    }
}

impl<T: Ord> FromIterator<T> for SortedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_backing(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for SortedVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
        self.inner.sort();
    }
}

impl<T: Ord> IntoIterator for SortedVec<T> {
    type Item = T;
    type IntoIter = <Backing<T> as IntoIterator>::IntoIter;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a SortedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: Ord> core::ops::Deref for SortedVec<T> {
    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &[T] {
        <SortedVec<T>>::inner(self)
    }
}
