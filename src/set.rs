//! A module containing [`SegmentSet`] and [`Coverage`].

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::cell::RefCell;

use itertools::Itertools;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::cache::{OrderedCache, PrefixCache};
use crate::{Discrete, Segment, SegmentError, ShiftDirection};

/// An ordered set of disjoint, non-adjacent [`Segment`]s based on
/// [`BTreeSet`].
///
/// Segments that overlap or touch are merged on insertion, so the set
/// always stores the minimal number of segments covering its points.
///
/// `I` is the generic type parameter for the point type the segments are
/// over.
///
/// `C` is the generic type parameter for the [`PrefixCache`] used by
/// [`SegmentSet::count_less_than()`], see the [`cache`](crate::cache)
/// module.
///
/// # Examples
/// ```
/// use segset::{Segment, SegmentSet};
///
/// let mut set = SegmentSet::new();
///
/// for point in 1..=5 {
/// 	set.insert(point);
/// }
/// assert!(set.iter().eq([&Segment::new(1, 5)]));
///
/// set.erase(2);
/// assert!(set.iter().eq([&Segment::new(1, 1), &Segment::new(3, 5)]));
///
/// set.shift_erase(Segment::point(3)).unwrap();
/// assert!(set.iter().eq([&Segment::new(1, 1), &Segment::new(3, 4)]));
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.count_less_than(4), 2);
/// ```
///
/// [`BTreeSet`]: https://doc.rust-lang.org/std/collections/struct.BTreeSet.html
#[derive(Debug, Clone)]
pub struct SegmentSet<I, C = OrderedCache<I>> {
	pub(crate) segments: BTreeSet<Segment<I>>,
	len: I,
	cache: RefCell<C>,
}

/// How much of a segment is covered by a [`SegmentSet`], as returned by
/// [`SegmentSet::coverage()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
	/// None of the segment's points are in the set.
	Uncovered,
	/// Some, but not all, of the segment's points are in the set.
	Partial,
	/// Every one of the segment's points is in the set.
	Full,
}

impl<I> SegmentSet<I>
where
	I: Discrete,
{
	/// Makes a new, empty `SegmentSet` using the default [`OrderedCache`].
	///
	/// # Examples
	/// ```
	/// use segset::SegmentSet;
	///
	/// let set: SegmentSet<i8> = SegmentSet::new();
	/// assert!(set.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}
}

impl<I, C> SegmentSet<I, C>
where
	I: Discrete,
	C: PrefixCache<I>,
{
	/// Makes a new, empty `SegmentSet` using the given cache.
	///
	/// # Examples
	/// ```
	/// use segset::cache::NoCache;
	/// use segset::SegmentSet;
	///
	/// let mut set = SegmentSet::with_cache(NoCache);
	/// set.insert(4_u32);
	/// assert_eq!(set.count_less_than(10), 1);
	/// ```
	pub fn with_cache(cache: C) -> Self {
		SegmentSet {
			segments: BTreeSet::new(),
			len: I::ZERO,
			cache: RefCell::new(cache),
		}
	}

	/// The total number of points covered by the set.
	///
	/// This is kept as a running total in the point type itself, so
	/// insertions that would make the set cover more points than `I` can
	/// count (all 256 points of an `i8` for example) are rejected with
	/// [`SegmentError::LengthOverflow`].
	pub fn len(&self) -> I {
		self.len
	}

	/// Returns `true` if the set covers no points.
	pub fn is_empty(&self) -> bool {
		self.len == I::ZERO
	}

	/// Returns how much of `segment` is covered by the set.
	///
	/// # Errors
	///
	/// Returns [`SegmentError::InvalidSegment`] if `segment` is invalid.
	///
	/// # Examples
	/// ```
	/// use segset::{Coverage, Segment, SegmentSet};
	///
	/// let set: SegmentSet<_> = SegmentSet::from_segments([
	/// 	Segment::new(1, 4),
	/// 	Segment::new(8, 9),
	/// ])
	/// .unwrap();
	///
	/// assert_eq!(set.coverage(Segment::new(2, 3)), Ok(Coverage::Full));
	/// assert_eq!(set.coverage(Segment::new(3, 8)), Ok(Coverage::Partial));
	/// assert_eq!(set.coverage(Segment::new(5, 7)), Ok(Coverage::Uncovered));
	/// ```
	pub fn coverage(
		&self,
		segment: Segment<I>,
	) -> Result<Coverage, SegmentError<I>> {
		check_valid(segment)?;

		let coverage = match self.segments.range(Segment::point(segment.start)..).next() {
			Some(stored) if stored.contains_segment(&segment) => Coverage::Full,
			Some(stored) if stored.start <= segment.end => Coverage::Partial,
			_ => Coverage::Uncovered,
		};

		Ok(coverage)
	}

	/// Returns the number of covered points strictly less than `point`.
	///
	/// The count of points before each stored segment is memoized in the
	/// set's [`PrefixCache`], so repeated queries only walk back to the
	/// nearest segment that has already been counted.
	///
	/// # Examples
	/// ```
	/// use segset::{Segment, SegmentSet};
	///
	/// let set: SegmentSet<_> = SegmentSet::from_segments([
	/// 	Segment::new(1, 3),
	/// 	Segment::new(6, 9),
	/// ])
	/// .unwrap();
	///
	/// assert_eq!(set.count_less_than(1), 0);
	/// assert_eq!(set.count_less_than(2), 1);
	/// assert_eq!(set.count_less_than(5), 3);
	/// assert_eq!(set.count_less_than(8), 5);
	/// assert_eq!(set.count_less_than(100), 7);
	/// ```
	pub fn count_less_than(&self, point: I) -> I {
		if let Some(containing) = self.segment_containing(point) {
			if containing.start < point {
				return self.count_before(containing) + (point - containing.start);
			}
		}

		match self.last_segment_before(point) {
			Some(before) => self.count_before(before) + before.len(),
			None => I::ZERO,
		}
	}

	/// The number of points in the stored segments ordered before
	/// `segment`, which must itself be stored.
	fn count_before(&self, segment: &Segment<I>) -> I {
		let mut cache = self.cache.borrow_mut();

		if let Some(count) = cache.get(segment) {
			return count;
		}

		// walk back to the nearest counted segment, or the first one
		let mut count = I::ZERO;
		let mut uncounted = Vec::new();
		for stored in self.segments.range(..*segment).rev() {
			match cache.get(stored) {
				Some(memoized) => {
					count = memoized + stored.len();
					break;
				}
				None => uncounted.push(*stored),
			}
		}

		for stored in uncounted.iter().rev() {
			cache.insert(*stored, count);
			count = count + stored.len();
		}
		cache.insert(*segment, count);

		count
	}

	/// Inserts a single point, returning `false` if it was already covered
	/// in which case the set is not modified.
	///
	/// `false` is also returned, without modifying the set, if the set's
	/// [`len()`](SegmentSet::len) cannot count one more point.
	///
	/// # Examples
	/// ```
	/// use segset::{Segment, SegmentSet};
	///
	/// let mut set = SegmentSet::new();
	///
	/// assert!(set.insert(3));
	/// assert!(set.insert(4));
	/// assert!(!set.insert(3));
	///
	/// assert!(set.iter().eq([&Segment::new(3, 4)]));
	/// ```
	pub fn insert(&mut self, point: I) -> bool {
		matches!(self.absorb(Segment::point(point)), Ok((_, true)))
	}

	/// Inserts a segment, merging it with every stored segment it
	/// overlaps or touches.
	///
	/// The stored segment which now covers `segment` is returned. If
	/// `segment` was already fully covered the set is not modified.
	///
	/// # Errors
	///
	/// Returns [`SegmentError::InvalidSegment`] if `segment` is invalid, or
	/// [`SegmentError::LengthOverflow`] if the merged segment or the set as
	/// a whole would cover more points than `I` can count. The set is not
	/// modified in either case.
	///
	/// # Examples
	/// ```
	/// use segset::{Segment, SegmentSet};
	///
	/// let mut set: SegmentSet<_> = SegmentSet::from_segments([
	/// 	Segment::new(1, 3),
	/// 	Segment::new(6, 7),
	/// 	Segment::new(12, 14),
	/// ])
	/// .unwrap();
	///
	/// // Touching on the left, overlapping on the right
	/// assert_eq!(
	/// 	set.insert_segment(Segment::new(4, 6)),
	/// 	Ok(Segment::new(1, 7))
	/// );
	/// // Neither touching nor overlapping
	/// assert_eq!(
	/// 	set.insert_segment(Segment::new(9, 10)),
	/// 	Ok(Segment::new(9, 10))
	/// );
	///
	/// assert!(set.iter().eq([
	/// 	&Segment::new(1, 7),
	/// 	&Segment::new(9, 10),
	/// 	&Segment::new(12, 14),
	/// ]));
	/// assert_eq!(set.len(), 12);
	/// ```
	pub fn insert_segment(
		&mut self,
		segment: Segment<I>,
	) -> Result<Segment<I>, SegmentError<I>> {
		self.absorb(segment).map(|(stored, _)| stored)
	}

	/// Inserts `segment`, returning the stored segment now covering it and
	/// whether the set was modified.
	fn absorb(
		&mut self,
		segment: Segment<I>,
	) -> Result<(Segment<I>, bool), SegmentError<I>> {
		check_valid(segment)?;

		// a stored segment ending just before `segment` touches it, so
		// start looking one point earlier
		let reach = segment.start.down().unwrap_or(segment.start);
		let absorbed: SmallVec<[Segment<I>; 2]> = self
			.segments
			.range(Segment::point(reach)..)
			.take_while(|stored| {
				stored.intersects(&segment) || stored.is_nearby(&segment)
			})
			.copied()
			.collect();

		if let Some(stored) = absorbed
			.iter()
			.find(|stored| stored.contains_segment(&segment))
		{
			return Ok((*stored, false));
		}

		let mut merged = segment;
		for stored in absorbed.iter() {
			let did_merge = merged.merge(stored);
			debug_assert!(did_merge);
		}

		let overflow = length_overflow(segment);
		let merged_len = merged.checked_len().ok_or(overflow)?;
		let len = absorbed
			.iter()
			.fold(self.len, |len, stored| len - stored.len())
			.checked_add(merged_len)
			.ok_or(overflow)?;

		self.evict_from(merged.start);
		for stored in absorbed.iter() {
			self.segments.remove(stored);
		}
		self.segments.insert(merged);
		self.len = len;

		trace!(?segment, ?merged, absorbed = absorbed.len(), "inserted segment");

		Ok((merged, true))
	}

	/// Inserts `segment.len()` new points at `segment.start`, pushing every
	/// point at or after `segment.start` forward by that many.
	///
	/// If a stored segment already covers `segment.start` it simply grows
	/// by the inserted length, otherwise `segment` is inserted (and merged
	/// with a touching predecessor) after the later segments have moved out
	/// of its way.
	///
	/// # Errors
	///
	/// Returns [`SegmentError::InvalidSegment`] if `segment` is invalid,
	/// [`SegmentError::LengthOverflow`] if the set would cover more points
	/// than `I` can count, or [`SegmentError::ShiftOverflow`] if a stored
	/// segment would be pushed past the maximum point. The set is not
	/// modified in any of these cases.
	///
	/// # Examples
	/// ```
	/// use segset::{Segment, SegmentSet};
	///
	/// let mut set: SegmentSet<_> = SegmentSet::from_segments([
	/// 	Segment::new(1, 2),
	/// 	Segment::new(10, 11),
	/// 	Segment::new(20, 25),
	/// ])
	/// .unwrap();
	///
	/// set.shift_insert(Segment::new(10, 12)).unwrap();
	///
	/// assert!(set.iter().eq([
	/// 	&Segment::new(1, 2),
	/// 	&Segment::new(10, 14),
	/// 	&Segment::new(23, 28),
	/// ]));
	///
	/// set.shift_insert(Segment::point(3)).unwrap();
	///
	/// assert!(set.iter().eq([
	/// 	&Segment::new(1, 3),
	/// 	&Segment::new(11, 15),
	/// 	&Segment::new(24, 29),
	/// ]));
	/// ```
	pub fn shift_insert(
		&mut self,
		segment: Segment<I>,
	) -> Result<(), SegmentError<I>> {
		check_valid(segment)?;

		// the inserted points never overlap a stored one, so the set grows
		// by exactly `delta`
		let delta = segment.checked_len().ok_or(length_overflow(segment))?;
		self.len.checked_add(delta).ok_or(length_overflow(segment))?;
		let overflow = SegmentError::ShiftOverflow { delta };

		match self.segment_containing(segment.start).copied() {
			Some(containing) => {
				let grown = Segment::new(
					containing.start,
					containing.end.checked_add(delta).ok_or(overflow)?,
				);
				let after = containing.end.up().ok_or(overflow)?;

				self.shift_suffix(after, delta, ShiftDirection::Right)?;

				self.evict_from(containing.start);
				self.segments.remove(&containing);
				self.segments.insert(grown);
				self.len = self.len + delta;

				trace!(?segment, ?containing, ?grown, "shift-inserted into segment");
			}
			None => {
				self.shift_suffix(segment.start, delta, ShiftDirection::Right)?;
				self.insert_segment(segment)?;
			}
		}

		Ok(())
	}

	/// Removes a single point, returning `false` if it was not covered.
	///
	/// # Examples
	/// ```
	/// use segset::{Segment, SegmentSet};
	///
	/// let mut set: SegmentSet<_> = SegmentSet::from_segments([Segment::new(1, 5)]).unwrap();
	///
	/// assert!(set.erase(2));
	/// assert!(!set.erase(2));
	///
	/// assert!(set.iter().eq([&Segment::new(1, 1), &Segment::new(3, 5)]));
	/// ```
	pub fn erase(&mut self, point: I) -> bool {
		let Some(containing) = self.segment_containing(point).copied() else {
			return false;
		};

		self.evict_from(containing.start);
		self.segments.remove(&containing);
		let (before, after) = containing.split_at(point);
		self.segments.extend(before.into_iter().chain(after));
		self.len = self.len - I::ONE;

		trace!(?point, ?containing, "erased point");

		true
	}

	/// Removes every covered point within `segment`, returning how many
	/// points were removed.
	///
	/// Stored segments partially covered by `segment` are trimmed and
	/// those fully covered are removed.
	///
	/// # Errors
	///
	/// Returns [`SegmentError::InvalidSegment`] if `segment` is invalid.
	///
	/// # Examples
	/// ```
	/// use segset::{Segment, SegmentSet};
	///
	/// let mut set: SegmentSet<_> = SegmentSet::from_segments([
	/// 	Segment::new(1, 4),
	/// 	Segment::new(6, 7),
	/// 	Segment::new(9, 12),
	/// ])
	/// .unwrap();
	///
	/// assert_eq!(set.erase_segment(Segment::new(3, 10)), Ok(6));
	///
	/// assert!(set.iter().eq([&Segment::new(1, 2), &Segment::new(11, 12)]));
	/// ```
	pub fn erase_segment(
		&mut self,
		segment: Segment<I>,
	) -> Result<I, SegmentError<I>> {
		check_valid(segment)?;

		let overlapping: SmallVec<[Segment<I>; 2]> = self
			.segments
			.range(Segment::point(segment.start)..)
			.take_while(|stored| stored.start <= segment.end)
			.copied()
			.collect();

		let Some(first) = overlapping.first() else {
			return Ok(I::ZERO);
		};
		self.evict_from(first.start);

		let len_before = self.len;
		for stored in overlapping.iter() {
			self.segments.remove(stored);
			self.len = self.len - stored.len();

			let (before, after) = stored.split_around(&segment);
			for remnant in before.into_iter().chain(after) {
				self.segments.insert(remnant);
				self.len = self.len + remnant.len();
			}
		}
		let removed = len_before - self.len;

		trace!(?segment, ?removed, "erased segment");

		Ok(removed)
	}

	/// Removes every covered point within `segment` and then moves every
	/// later segment back by the number of points removed, closing the
	/// gap. Returns how many points were removed.
	///
	/// The shift is by the number of points *actually* removed, not by
	/// `segment.len()`. If closing the gap leaves the segments either side
	/// of it touching, they are merged.
	///
	/// # Errors
	///
	/// Returns [`SegmentError::InvalidSegment`] if `segment` is invalid.
	///
	/// # Examples
	/// ```
	/// use segset::{Segment, SegmentSet};
	///
	/// let mut set: SegmentSet<_> = SegmentSet::from_segments([
	/// 	Segment::new(1, 1),
	/// 	Segment::new(3, 5),
	/// 	Segment::new(9, 9),
	/// ])
	/// .unwrap();
	///
	/// assert_eq!(set.shift_erase(Segment::new(3, 3)), Ok(1));
	/// assert!(set.iter().eq([
	/// 	&Segment::new(1, 1),
	/// 	&Segment::new(3, 4),
	/// 	&Segment::new(8, 8),
	/// ]));
	///
	/// assert_eq!(set.shift_erase(Segment::new(2, 2)), Ok(0));
	/// assert_eq!(set.shift_erase(Segment::new(0, 1)), Ok(1));
	/// assert!(set.iter().eq([&Segment::new(2, 3), &Segment::new(7, 7)]));
	/// ```
	pub fn shift_erase(
		&mut self,
		segment: Segment<I>,
	) -> Result<I, SegmentError<I>> {
		let removed = self.erase_segment(segment)?;
		if removed == I::ZERO {
			return Ok(removed);
		}

		// every later point moves back, so none can leave the domain
		if let Some(after) = segment.end.up() {
			self.shift_suffix(after, removed, ShiftDirection::Left)?;
			self.merge_nearby_at(segment.start);
		}

		Ok(removed)
	}

	/// Removes every segment from the set, and empties the cache.
	pub fn clear(&mut self) {
		self.segments.clear();
		self.len = I::ZERO;
		self.cache.get_mut().clear();
	}

	/// Allocates a `SegmentSet` and inserts every given segment into it
	/// using [`SegmentSet::insert_segment()`].
	///
	/// # Errors
	///
	/// Returns [`SegmentError::InvalidSegment`] for the first invalid
	/// segment encountered.
	///
	/// # Examples
	/// ```
	/// use segset::{Segment, SegmentError, SegmentSet};
	///
	/// let set: SegmentSet<i32> = SegmentSet::from_segments([
	/// 	Segment::new(1, 4),
	/// 	Segment::new(5, 8),
	/// ])
	/// .unwrap();
	/// assert_eq!(set.segment_count(), 1);
	///
	/// assert_eq!(
	/// 	SegmentSet::<i32>::from_segments([Segment::new(4, 1)]),
	/// 	Err(SegmentError::InvalidSegment { start: 4, end: 1 })
	/// );
	/// ```
	pub fn from_segments(
		segments: impl IntoIterator<Item = Segment<I>>,
	) -> Result<Self, SegmentError<I>>
	where
		C: Default,
	{
		let mut set = SegmentSet::default();
		for segment in segments {
			set.insert_segment(segment)?;
		}
		Ok(set)
	}

	/// Moves every stored segment ending at or after `from` by `delta`.
	///
	/// The moved segments are taken out of the tree and re-inserted under
	/// their new keys, nothing is modified if any of them would leave the
	/// domain. Returns the number of segments moved.
	fn shift_suffix(
		&mut self,
		from: I,
		delta: I,
		direction: ShiftDirection,
	) -> Result<usize, SegmentError<I>> {
		let tail = self.segments.split_off(&Segment::point(from));
		let shifted: Option<Vec<Segment<I>>> = tail
			.iter()
			.map(|stored| stored.shift(delta, direction))
			.collect();

		match shifted {
			Some(shifted) => {
				self.evict_from(from);
				let moved = shifted.len();
				self.segments.extend(shifted);

				debug!(?from, ?delta, ?direction, moved, "shifted segments");

				Ok(moved)
			}
			None => {
				self.segments.extend(tail);
				Err(SegmentError::ShiftOverflow { delta })
			}
		}
	}

	/// Merges the segments either side of `point` if they have become
	/// nearby.
	fn merge_nearby_at(&mut self, point: I) {
		let before = self.last_segment_before(point).copied();
		let after = self.segments.range(Segment::point(point)..).next().copied();

		if let (Some(before), Some(after)) = (before, after) {
			let mut merged = before;
			if merged.merge(&after) {
				self.evict_from(before.start);
				self.segments.remove(&before);
				self.segments.remove(&after);
				self.segments.insert(merged);

				trace!(?before, ?after, "merged segments closed together");
			}
		}
	}

	fn evict_from(&mut self, point: I) {
		self.cache.get_mut().evict_from(&Segment::point(point));
	}
}

impl<I, C> SegmentSet<I, C> {
	/// Returns the number of segments stored in the set, which is not the
	/// number of points covered, see [`SegmentSet::len()`] for that.
	///
	/// # Examples
	/// ```
	/// use segset::SegmentSet;
	///
	/// let set: SegmentSet<_> = SegmentSet::from_iter([1, 2, 3, 7]);
	///
	/// assert_eq!(set.segment_count(), 2);
	/// assert_eq!(set.len(), 4);
	/// ```
	pub fn segment_count(&self) -> usize {
		self.segments.len()
	}

	/// Returns an iterator over every segment in the set in ascending
	/// order.
	///
	/// The segments are only ever handed out by shared reference, the set
	/// re-keys them internally when shifting.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Segment<I>> {
		self.segments.iter()
	}
}

impl<I, C> SegmentSet<I, C>
where
	I: Discrete,
{
	/// Returns `true` if `point` is covered by the set.
	///
	/// # Examples
	/// ```
	/// use segset::{Segment, SegmentSet};
	///
	/// let set: SegmentSet<_> = SegmentSet::from_segments([Segment::new(1, 4)]).unwrap();
	///
	/// assert!(set.contains(4));
	/// assert!(!set.contains(5));
	/// ```
	pub fn contains(&self, point: I) -> bool {
		self.segment_containing(point).is_some()
	}

	/// Returns the stored segment covering `point`, if any.
	pub fn segment_containing(&self, point: I) -> Option<&Segment<I>> {
		self.segments
			.range(Segment::point(point)..)
			.next()
			.filter(|stored| stored.contains(point))
	}

	/// Returns the last stored segment that lies entirely before `point`,
	/// if any.
	///
	/// # Examples
	/// ```
	/// use segset::{Segment, SegmentSet};
	///
	/// let set: SegmentSet<_> = SegmentSet::from_segments([
	/// 	Segment::new(1, 2),
	/// 	Segment::new(6, 8),
	/// ])
	/// .unwrap();
	///
	/// assert_eq!(set.last_segment_before(7), Some(&Segment::new(1, 2)));
	/// assert_eq!(set.last_segment_before(9), Some(&Segment::new(6, 8)));
	/// assert_eq!(set.last_segment_before(1), None);
	/// ```
	pub fn last_segment_before(&self, point: I) -> Option<&Segment<I>> {
		self.segments.range(..Segment::point(point)).next_back()
	}

	/// Returns the first segment in the set, if any.
	pub fn first(&self) -> Option<&Segment<I>> {
		self.segments.first()
	}

	/// Returns the last segment in the set, if any.
	pub fn last(&self) -> Option<&Segment<I>> {
		self.segments.last()
	}

	/// Returns an iterator over every covered point in ascending order.
	///
	/// # Examples
	/// ```
	/// use segset::{Segment, SegmentSet};
	///
	/// let set: SegmentSet<_> = SegmentSet::from_segments([
	/// 	Segment::new(1, 2),
	/// 	Segment::new(5, 6),
	/// ])
	/// .unwrap();
	///
	/// assert!(set.values().eq([1, 2, 5, 6]));
	/// assert!(set.values().rev().eq([6, 5, 2, 1]));
	/// ```
	pub fn values(&self) -> impl DoubleEndedIterator<Item = I> + '_ {
		self.segments.iter().flat_map(Segment::iter)
	}

	/// Returns an iterator over the uncovered segments between the stored
	/// segments in ascending order.
	///
	/// # Examples
	/// ```
	/// use segset::{Segment, SegmentSet};
	///
	/// let set: SegmentSet<_> = SegmentSet::from_segments([
	/// 	Segment::new(1, 2),
	/// 	Segment::new(5, 6),
	/// 	Segment::new(8, 9),
	/// ])
	/// .unwrap();
	///
	/// assert!(set.gaps().eq([Segment::new(3, 4), Segment::point(7)]));
	/// ```
	pub fn gaps(&self) -> impl Iterator<Item = Segment<I>> + '_ {
		self.segments.iter().tuple_windows().filter_map(|(before, after)| {
			Some(Segment::new(before.end.up()?, after.start.down()?))
		})
	}
}

fn length_overflow<I>(segment: Segment<I>) -> SegmentError<I> {
	SegmentError::LengthOverflow {
		start: segment.start,
		end: segment.end,
	}
}

fn check_valid<I>(segment: Segment<I>) -> Result<(), SegmentError<I>>
where
	I: Discrete,
{
	if segment.is_valid() {
		Ok(())
	} else {
		Err(SegmentError::InvalidSegment {
			start: segment.start,
			end: segment.end,
		})
	}
}

// Trait Impls ==========================

impl<I, C> Default for SegmentSet<I, C>
where
	I: Discrete,
	C: Default,
{
	fn default() -> Self {
		SegmentSet {
			segments: BTreeSet::new(),
			len: I::ZERO,
			cache: RefCell::new(C::default()),
		}
	}
}

/// Compares the stored segments only, the caches are ignored.
impl<I, C> PartialEq for SegmentSet<I, C>
where
	I: PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.segments == other.segments
	}
}
impl<I, C> Eq for SegmentSet<I, C> where I: Eq {}

impl<I, C> FromIterator<I> for SegmentSet<I, C>
where
	I: Discrete,
	C: PrefixCache<I> + Default,
{
	fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
		let mut set = SegmentSet::default();
		set.extend(iter);
		set
	}
}

impl<I, C> Extend<I> for SegmentSet<I, C>
where
	I: Discrete,
	C: PrefixCache<I>,
{
	fn extend<T: IntoIterator<Item = I>>(&mut self, iter: T) {
		for point in iter {
			self.insert(point);
		}
	}
}

impl<'a, I, C> IntoIterator for &'a SegmentSet<I, C> {
	type Item = &'a Segment<I>;
	type IntoIter = alloc::collections::btree_set::Iter<'a, Segment<I>>;
	fn into_iter(self) -> Self::IntoIter {
		self.segments.iter()
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{Discrete, PrefixCache, Segment, SegmentSet};

	impl<I, C> Serialize for SegmentSet<I, C>
	where
		I: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.segment_count()))?;
			for segment in self.iter() {
				seq.serialize_element(segment)?;
			}
			seq.end()
		}
	}

	impl<'de, I, C> Deserialize<'de> for SegmentSet<I, C>
	where
		I: Discrete + Deserialize<'de>,
		C: PrefixCache<I> + Default,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(SegmentSetVisitor {
				i: PhantomData,
				c: PhantomData,
			})
		}
	}

	struct SegmentSetVisitor<I, C> {
		i: PhantomData<I>,
		c: PhantomData<C>,
	}

	impl<'de, I, C> Visitor<'de> for SegmentSetVisitor<I, C>
	where
		I: Discrete + Deserialize<'de>,
		C: PrefixCache<I> + Default,
	{
		type Value = SegmentSet<I, C>;

		fn expecting(
			&self,
			formatter: &mut core::fmt::Formatter,
		) -> core::fmt::Result {
			formatter.write_str("a SegmentSet")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut set = SegmentSet::default();
			while let Some(segment) = access.next_element::<Segment<I>>()? {
				set.insert_segment(segment)
					.map_err(serde::de::Error::custom)?;
			}
			Ok(set)
		}
	}
}
