//! The `boundary_search` crate implements binary search as a single
//! primitive, [`locate`]: given a predicate over `0..n` that is
//! `false` on a prefix and `true` on the remaining suffix, find the
//! first index where it is `true`.  Every other search in the crate
//! is that primitive with a one-line predicate, or a documented
//! variation on its loop.
//!
//! The searches work on any [`Sequence`], a read-only random-access
//! view of ordered elements: slices, arrays, [`Vec`]s,
//! [`VecDeque`](std::collections::VecDeque)s, [`SmallVec`]s, and this
//! crate's [`SortedVec`].
//!
//! On sequences sorted in non-descending order:
//!
//!  - [`lower_bound`], [`upper_bound`], [`insert_position`],
//!    [`equal_range`], and [`lower_bound_from`] for batched lookups;
//!  - [`exact_search`], [`first_occurrence`], [`last_occurrence`],
//!    [`first_and_last`];
//!  - [`count_occurrences`], [`count_in_range`];
//!  - [`floor`], [`ceiling`], and their `_index` variants.
//!
//! On rotations of sorted sequences (e.g., `[4, 5, 6, 7, 0, 1, 2]`):
//!
//!  - [`rotated_min_index`], [`rotation_count`], [`rotated_min`], and
//!    [`rotated_min_index_with_duplicates`];
//!  - [`rotated_search`] (distinct elements, returns an index) and
//!    [`rotated_search_with_duplicates`] (returns presence only: with
//!    duplicates, there is no unique index to return).
//!
//! On other structured sequences:
//!
//!  - [`find_peak`], a local maximum when adjacent elements differ;
//!  - [`find_single`], the unpaired element in a sorted sequence where
//!    every other value occurs exactly twice.
//!
//! Absence is never an error: bound-style searches return `n` (insert
//! at the end), exact searches return [`None`] (see [`SentinelIndex`]
//! for the `-1` convention), and presence checks return `false`.
//!
//! No search validates its preconditions (sortedness, rotation,
//! pairing), which would take linear time.  The [`preconditions`]
//! module offers linear-time checks for untrusted input, and the
//! `internal_checks` feature makes every search assert its own
//! preconditions.  Violating a precondition yields an arbitrary
//! result, but never out-of-bounds accesses.
//!
//! All searches take \\(\mathcal{O}(\log n)\\) time and constant space,
//! except the duplicate-tolerant rotated searches, which degrade to
//! \\(\mathcal{O}(n)\\) time when many elements are equal.  None
//! allocates or keeps state between calls, so they may be called
//! concurrently on shared sequences.

#![deny(missing_docs)]
// https://github.com/taiki-e/cargo-llvm-cov?tab=readme-ov-file#exclude-code-from-coverage
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use smallvec::SmallVec;

mod bounds;
mod exact;
mod floor_ceiling;
mod locate;
mod peak;
pub mod preconditions;
mod rotated;
mod rotated_search;
mod sequence;
mod single;
mod sorted_vec;

pub use sequence::Sequence;
pub use sorted_vec::SortedVec;

pub use locate::locate;
pub use locate::locate_from;
pub use locate::locate_in;
pub use locate::locate_last;

pub use exact::exact_search;
pub use exact::SentinelIndex;

pub use bounds::count_in_range;
pub use bounds::count_occurrences;
pub use bounds::equal_range;
pub use bounds::first_and_last;
pub use bounds::first_occurrence;
pub use bounds::insert_position;
pub use bounds::last_occurrence;
pub use bounds::lower_bound;
pub use bounds::lower_bound_from;
pub use bounds::upper_bound;

pub use floor_ceiling::ceiling;
pub use floor_ceiling::ceiling_index;
pub use floor_ceiling::floor;
pub use floor_ceiling::floor_index;

pub use rotated::rotated_min;
pub use rotated::rotated_min_index;
pub use rotated::rotated_min_index_with_duplicates;
pub use rotated::rotation_count;

pub use rotated_search::rotated_search;
pub use rotated_search::rotated_search_with_duplicates;

pub use peak::find_peak;
pub use peak::is_peak;

pub use single::find_single;
pub use single::find_single_index;

/// Inline storage (in elements) reserved in a [`SortedVec`].
pub const INLINE_SIZE: usize = if cfg!(feature = "inline_storage") {
    4
} else {
    0
};

/// Our internal storage type for [`SortedVec`].
type Backing<T> = SmallVec<[T; INLINE_SIZE]>;
