//! Every search in this crate only needs restricted random access to
//! an ordered sequence: its length, and a shared reference to the
//! element at a given index.  This module defines that interface and
//! implements it for the usual containers.
use std::collections::VecDeque;

use smallvec::SmallVec;

/// A [`Sequence`] is a finite, zero-indexed, random-access view of
/// totally ordered elements.
///
/// Searches never mutate a [`Sequence`], and never look at indices
/// outside `0..self.len()`.  Whether the contents are sorted, rotated,
/// or paired is a precondition of each search function, not a property
/// of the trait.
pub trait Sequence {
    /// The type of the elements in the sequence.
    type Item: Ord;

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns a reference to the element at `index`.
    ///
    /// Callers guarantee `index < self.len()`; implementations may
    /// panic otherwise.
    fn at(&self, index: usize) -> &Self::Item;

    /// Returns whether the sequence has no element.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or [`None`] if `index` is out of
    /// bounds.
    #[inline(always)]
    fn get_at(&self, index: usize) -> Option<&Self::Item> {
        if index < self.len() {
            Some(self.at(index))
        } else {
            None
        }
    }
}

impl<T: Ord> Sequence for [T] {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T: Ord, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T: Ord> Sequence for Vec<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

/// A ring buffer is the natural home of rotated sequences: a
/// [`VecDeque`] that was filled by pushing at both ends is often a
/// rotation of its sorted contents, and searching it does not require
/// [`VecDeque::make_contiguous`].
impl<T: Ord> Sequence for VecDeque<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline(always)]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<A> Sequence for SmallVec<A>
where
    A: smallvec::Array,
    A::Item: Ord,
{
    type Item = A::Item;

    #[inline(always)]
    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    #[inline(always)]
    fn at(&self, index: usize) -> &A::Item {
        &self[index]
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    #[inline(always)]
    fn len(&self) -> usize {
        S::len(self)
    }

    #[inline(always)]
    fn at(&self, index: usize) -> &S::Item {
        S::at(self, index)
    }
}
