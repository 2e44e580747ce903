//! This crate provides [`SegmentSet`], a Data Structure for storing
//! disjoint closed segments over a discrete domain based off
//! [`BTreeSet`], with operations for shifting every later segment when
//! points are inserted into or erased from the middle of the domain.
//!
//! Typical uses are tracking occupied ranges in an allocator, sparse
//! bitmaps, or tracking line offsets in an editable buffer.
//!
//! ## You must implement `Copy`
//!
//! Like the segments themselves the point type must be `Copy`, see the
//! [`Discrete`] trait which is already implemented for all the primitive
//! integer types.
//!
//! ## Example
//!
//! ```rust
//! use segset::{Coverage, Segment, SegmentSet};
//!
//! let mut set = SegmentSet::new();
//!
//! for point in 1..=5 {
//! 	set.insert(point);
//! }
//! assert!(set.iter().eq([&Segment::new(1, 5)]));
//!
//! set.erase(2);
//! assert!(set.iter().eq([&Segment::new(1, 1), &Segment::new(3, 5)]));
//!
//! // Erase the point 3 and pull everything after it back by one
//! set.shift_erase(Segment::point(3)).unwrap();
//! assert!(set.iter().eq([&Segment::new(1, 1), &Segment::new(3, 4)]));
//!
//! // Make room for 3 new points at 3 and cover them
//! set.shift_insert(Segment::new(3, 5)).unwrap();
//! assert!(set.iter().eq([&Segment::new(1, 1), &Segment::new(3, 7)]));
//!
//! assert_eq!(set.len(), 6);
//! assert_eq!(set.count_less_than(5), 3);
//! assert_eq!(set.coverage(Segment::new(0, 3)), Ok(Coverage::Partial));
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Discrete-ness
//!
//! This crate is designed to work with [`Discrete`] types as compared to
//! [`Continuous`] types. For example, `u8` is a `Discrete` type, but
//! `f32` is `Continuous`.
//!
//! This matters because two segments which don't overlap may still leave
//! no point between them. For example `[5, 6]` and `[7, 8]` have no integer
//! between them, so the set stores them as the single segment `[5, 8]`.
//!
//! ### Invalid Segments
//!
//! Within this crate, not all segments are considered valid segments. A
//! segment `[start, end]` is inclusive at both ends and is only valid if
//! `start <= end`, that is if it contains at least one point.
//!
//! Invalid segments are fine to construct as values, [`Segment::new()`]
//! stores whatever it is given, but every [`SegmentSet`] operation that
//! takes a segment rejects an invalid one with
//! [`SegmentError::InvalidSegment`] and leaves the set untouched.
//!
//! | segment      | valid |
//! | ------------ | ----- |
//! | `[0, 0]`     | YES   |
//! | `[0, 1]`     | YES   |
//! | `[9, 8]`     | NO    |
//! | `[400, 400]` | YES   |
//!
//! ### Overlap
//!
//! Two segments are "overlapping" if there exists a point that is
//! contained within both segments.
//!
//! ### Nearby
//!
//! Two segments are "nearby" if they do not overlap and there exists no
//! point between them. For example, `[2, 3]` and `[4, 6]` are nearby but
//! `[2, 3]` and `[5, 8]` are not, neither are `[2, 6]` and `[4, 8]`.
//!
//! ### Merging
//!
//! When a segment "merges" other segments it absorbs them to become
//! larger. Inserted segments merge every stored segment they overlap or
//! are nearby, so a [`SegmentSet`] never stores two overlapping or nearby
//! segments.
//!
//! ### Shifting
//!
//! [`SegmentSet::shift_insert()`] and [`SegmentSet::shift_erase()`] treat
//! the domain like the positions of a buffer: inserting points in the
//! middle pushes every later segment forward and erasing points pulls
//! every later segment back, in both cases by the number of points
//! inserted or actually removed.
//!
//! ### Ordering
//!
//! Stored segments are ordered by their `end` and then by their `start`
//! in reverse. Every search in the set is keyed by a single-point segment,
//! [`Segment::point()`], under this ordering.
//!
//! ### Further Reading
//!
//! See Wikipedia's article on mathematical Intervals:
//! <https://en.wikipedia.org/wiki/Interval_(mathematics)>
//!
//! [`BTreeSet`]: https://doc.rust-lang.org/std/collections/struct.BTreeSet.html
//! [`Continuous`]: https://en.wikipedia.org/wiki/List_of_continuity-related_mathematical_topics

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod cache;
pub mod cursor;
pub mod discrete;
pub mod error;
pub mod segment;
pub mod set;

pub use crate::cache::{NoCache, OrderedCache, PrefixCache};
pub use crate::cursor::Cursor;
pub use crate::discrete::Discrete;
pub use crate::error::SegmentError;
pub use crate::segment::{Points, Segment, ShiftDirection};
pub use crate::set::{Coverage, SegmentSet};
