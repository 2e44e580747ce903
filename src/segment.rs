//! A module containing [`Segment`] and the interval algebra it supports.

use core::cmp::Ordering;
use core::iter::FusedIterator;
use core::ops::RangeInclusive;

use crate::Discrete;

/// A closed interval over a discrete domain, both ends are always
/// included.
///
/// A segment is only valid if `start <= end`. Invalid segments are
/// perfectly constructible, they just contain no points. See [`Invalid
/// Segments`](crate#invalid-segments) for how the set treats them.
///
/// # Ordering
///
/// Segments are ordered by their `end` ascending, with ties broken by
/// their `start` *descending*. For the disjoint segments stored in a
/// [`SegmentSet`](crate::SegmentSet) this is the same as ordering by
/// position, and it makes the single-point segment
/// [`Segment::point(x)`](Segment::point) a search key that sorts just after
/// every segment ending before `x` and not after any segment containing
/// `x`.
///
/// ```
/// use segset::Segment;
///
/// assert!(Segment::new(1, 4) < Segment::new(0, 5));
/// assert!(Segment::new(3, 5) < Segment::new(1, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment<I> {
	/// The first point of the segment, inclusive.
	pub start: I,
	/// The last point of the segment, inclusive.
	pub end: I,
}

/// The direction to translate a segment in with [`Segment::shift()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
	/// Towards decreasing values.
	Left,
	/// Towards increasing values.
	Right,
}

impl<I> Segment<I>
where
	I: Discrete,
{
	/// Makes a new segment, the bounds are stored as given.
	pub fn new(start: I, end: I) -> Self {
		Segment { start, end }
	}

	/// Makes the single-point segment `[point, point]`.
	pub fn point(point: I) -> Self {
		Segment {
			start: point,
			end: point,
		}
	}

	/// The number of points in the segment, `end - start + ONE`.
	///
	/// Only meaningful for valid segments.
	///
	/// # Panics
	///
	/// Panics in debug builds if the length does not fit in `I`, for example
	/// `[0, u8::MAX]` which has 256 points. See [`Segment::checked_len()`].
	///
	/// ```
	/// use segset::Segment;
	///
	/// assert_eq!(Segment::new(3, 7).len(), 5);
	/// assert_eq!(Segment::point(3).len(), 1);
	/// ```
	pub fn len(&self) -> I {
		self.end - self.start + I::ONE
	}

	/// The number of points in the segment, or `None` if that number does
	/// not fit in `I` or the segment is invalid.
	///
	/// ```
	/// use segset::Segment;
	///
	/// assert_eq!(Segment::new(3_u8, 7).checked_len(), Some(5));
	/// assert_eq!(Segment::new(1_u8, u8::MAX).checked_len(), Some(255));
	/// assert_eq!(Segment::new(0_u8, u8::MAX).checked_len(), None);
	/// assert_eq!(Segment::new(-100_i8, 100).checked_len(), None);
	/// ```
	pub fn checked_len(&self) -> Option<I> {
		if !self.is_valid() {
			return None;
		}
		self.end.checked_sub(self.start)?.checked_add(I::ONE)
	}

	/// Returns `true` if the segment contains no points, the opposite of
	/// [`Segment::is_valid()`].
	pub fn is_empty(&self) -> bool {
		!self.is_valid()
	}

	/// Returns `true` if `start <= end`.
	pub fn is_valid(&self) -> bool {
		self.start <= self.end
	}

	/// Returns `true` if `point` lies within the segment.
	pub fn contains(&self, point: I) -> bool {
		self.start <= point && point <= self.end
	}

	/// Returns `true` if `other` lies entirely within the segment.
	pub fn contains_segment(&self, other: &Self) -> bool {
		self.start <= other.start && other.end <= self.end
	}

	/// Returns `true` if the two segments do not overlap but there is no
	/// point between them, so together they cover one contiguous run.
	///
	/// ```
	/// use segset::Segment;
	///
	/// assert!(Segment::new(1, 3).is_nearby(&Segment::new(4, 9)));
	/// assert!(Segment::new(4, 9).is_nearby(&Segment::new(1, 3)));
	/// assert!(!Segment::new(1, 3).is_nearby(&Segment::new(5, 9)));
	/// assert!(!Segment::new(1, 4).is_nearby(&Segment::new(4, 9)));
	/// ```
	pub fn is_nearby(&self, other: &Self) -> bool {
		self.start.down() == Some(other.end) || self.end.up() == Some(other.start)
	}

	/// Returns `true` if there is at least one point contained in both
	/// segments.
	pub fn intersects(&self, other: &Self) -> bool {
		self.start.max(other.start) <= self.end.min(other.end)
	}

	/// Returns the segment of points contained in both segments, if any.
	pub fn intersection(&self, other: &Self) -> Option<Self> {
		Some(Segment {
			start: self.start.max(other.start),
			end: self.end.min(other.end),
		})
		.filter(Segment::is_valid)
	}

	/// Expands the segment to also cover `other` if the two intersect or
	/// are nearby, returning whether it did.
	///
	/// ```
	/// use segset::Segment;
	///
	/// let mut segment = Segment::new(1, 3);
	///
	/// assert!(segment.merge(&Segment::new(4, 6)));
	/// assert_eq!(segment, Segment::new(1, 6));
	///
	/// assert!(!segment.merge(&Segment::new(8, 9)));
	/// assert_eq!(segment, Segment::new(1, 6));
	/// ```
	pub fn merge(&mut self, other: &Self) -> bool {
		if self.intersects(other) || self.is_nearby(other) {
			self.force_merge(other);
			true
		} else {
			false
		}
	}

	/// Expands the segment to `[min(starts), max(ends)]` regardless of
	/// whether the two segments touch.
	pub fn force_merge(&mut self, other: &Self) {
		self.start = self.start.min(other.start);
		self.end = self.end.max(other.end);
	}

	/// Translates both bounds by `delta` in the given direction.
	///
	/// Returns `None` if either bound would leave the domain of `I`.
	///
	/// ```
	/// use segset::{Segment, ShiftDirection};
	///
	/// let segment = Segment::new(4_u8, 6);
	///
	/// assert_eq!(
	/// 	segment.shift(3, ShiftDirection::Right),
	/// 	Some(Segment::new(7, 9))
	/// );
	/// assert_eq!(
	/// 	segment.shift(4, ShiftDirection::Left),
	/// 	Some(Segment::new(0, 2))
	/// );
	/// assert_eq!(segment.shift(5, ShiftDirection::Left), None);
	/// ```
	#[must_use]
	pub fn shift(self, delta: I, direction: ShiftDirection) -> Option<Self> {
		match direction {
			ShiftDirection::Left => Some(Segment {
				start: self.start.checked_sub(delta)?,
				end: self.end.checked_sub(delta)?,
			}),
			ShiftDirection::Right => Some(Segment {
				start: self.start.checked_add(delta)?,
				end: self.end.checked_add(delta)?,
			}),
		}
	}

	/// Removes `point` from the segment, returning what is left before
	/// and after it.
	///
	/// Either side is `None` when it would contain no points, for example
	/// when `point` is one of the segment's bounds.
	///
	/// ```
	/// use segset::Segment;
	///
	/// assert_eq!(
	/// 	Segment::new(1, 5).split_at(3),
	/// 	(Some(Segment::new(1, 2)), Some(Segment::new(4, 5)))
	/// );
	/// assert_eq!(
	/// 	Segment::new(1, 5).split_at(1),
	/// 	(None, Some(Segment::new(2, 5)))
	/// );
	/// ```
	pub fn split_at(&self, point: I) -> (Option<Self>, Option<Self>) {
		self.split_around(&Segment::point(point))
	}

	/// Removes the points of `other` from the segment, returning what is
	/// left before and after it.
	///
	/// Either side is `None` when it would contain no points. `other` may
	/// only partially overlap the segment, or not at all in which case
	/// the whole segment is returned on one side.
	///
	/// ```
	/// use segset::Segment;
	///
	/// assert_eq!(
	/// 	Segment::new(1, 9).split_around(&Segment::new(3, 5)),
	/// 	(Some(Segment::new(1, 2)), Some(Segment::new(6, 9)))
	/// );
	/// assert_eq!(
	/// 	Segment::new(4, 9).split_around(&Segment::new(0, 5)),
	/// 	(None, Some(Segment::new(6, 9)))
	/// );
	/// ```
	pub fn split_around(&self, other: &Self) -> (Option<Self>, Option<Self>) {
		let before = other
			.start
			.down()
			.map(|end| Segment::new(self.start, self.end.min(end)))
			.filter(Segment::is_valid);
		let after = other
			.end
			.up()
			.map(|start| Segment::new(self.start.max(start), self.end))
			.filter(Segment::is_valid);

		(before, after)
	}

	/// Returns an iterator over every point in the segment in ascending
	/// order. The iterator is double-ended, and since segments are
	/// [`Copy`] it can be restarted by simply calling this again.
	///
	/// ```
	/// use segset::Segment;
	///
	/// let segment = Segment::new(3, 6);
	///
	/// assert!(segment.iter().eq([3, 4, 5, 6]));
	/// assert!(segment.iter().rev().eq([6, 5, 4, 3]));
	/// assert_eq!(Segment::new(6, 3).iter().next(), None);
	/// ```
	pub fn iter(&self) -> Points<I> {
		Points {
			front: self.start,
			back: self.end,
			exhausted: !self.is_valid(),
		}
	}
}

impl<I> Ord for Segment<I>
where
	I: Ord,
{
	fn cmp(&self, other: &Self) -> Ordering {
		self.end
			.cmp(&other.end)
			.then_with(|| other.start.cmp(&self.start))
	}
}
impl<I> PartialOrd for Segment<I>
where
	I: Ord,
{
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<I> From<RangeInclusive<I>> for Segment<I>
where
	I: Discrete,
{
	fn from(range: RangeInclusive<I>) -> Self {
		let (start, end) = range.into_inner();
		Segment { start, end }
	}
}

impl<I> IntoIterator for Segment<I>
where
	I: Discrete,
{
	type Item = I;
	type IntoIter = Points<I>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// An iterator over the points of a [`Segment`].
///
/// This `struct` is created by the [`iter`](Segment::iter) method on
/// [`Segment`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Points<I> {
	front: I,
	back: I,
	exhausted: bool,
}
impl<I> Iterator for Points<I>
where
	I: Discrete,
{
	type Item = I;
	fn next(&mut self) -> Option<Self::Item> {
		if self.exhausted {
			return None;
		}

		let point = self.front;
		match self.front.up() {
			Some(next) if point != self.back => self.front = next,
			_ => self.exhausted = true,
		}

		Some(point)
	}
}
impl<I> DoubleEndedIterator for Points<I>
where
	I: Discrete,
{
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.exhausted {
			return None;
		}

		let point = self.back;
		match self.back.down() {
			Some(next) if point != self.front => self.back = next,
			_ => self.exhausted = true,
		}

		Some(point)
	}
}
impl<I> FusedIterator for Points<I> where I: Discrete {}

#[cfg(test)]
mod tests {
	use alloc::vec::Vec;

	use pretty_assertions::assert_eq;

	use super::*;

	//small enough to brute force every segment over it
	const NUMBERS_DOMAIN: &[i8] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

	fn all_valid_segments() -> Vec<Segment<i8>> {
		let mut output = Vec::new();
		for i in NUMBERS_DOMAIN {
			for j in NUMBERS_DOMAIN {
				if i <= j {
					output.push(Segment::new(*i, *j));
				}
			}
		}
		output
	}

	#[test]
	fn ordering_is_end_ascending_then_start_descending() {
		let mut segments = [
			Segment::new(1, 5),
			Segment::new(0, 2),
			Segment::new(5, 5),
			Segment::new(2, 2),
			Segment::new(3, 5),
		];
		segments.sort();

		assert_eq!(
			segments,
			[
				Segment::new(2, 2),
				Segment::new(0, 2),
				Segment::new(5, 5),
				Segment::new(3, 5),
				Segment::new(1, 5),
			]
		);
	}

	#[test]
	fn point_key_does_not_sort_after_containing_segment() {
		for segment in all_valid_segments() {
			for point in NUMBERS_DOMAIN {
				let key = Segment::point(*point);
				if segment.contains(*point) {
					assert!(segment >= key, "{segment:?} {key:?}");
				}
				if segment.end < *point {
					assert!(segment < key, "{segment:?} {key:?}");
				}
			}
		}
	}

	#[test]
	fn intersects_tests() {
		for a in all_valid_segments() {
			for b in all_valid_segments() {
				let mathematical_definition_of_intersect = NUMBERS_DOMAIN
					.iter()
					.any(|x| a.contains(*x) && b.contains(*x));

				if a.intersects(&b) != mathematical_definition_of_intersect {
					dbg!(a, b);
					panic!("Discrepancy in intersects() detected!");
				}
				assert_eq!(a.intersection(&b).is_some(), a.intersects(&b));
			}
		}
	}

	#[test]
	fn merge_tests() {
		for a in all_valid_segments() {
			for b in all_valid_segments() {
				let mut merged = a;
				let did_merge = merged.merge(&b);

				//a merge is only allowed if the union leaves no hole
				let union_is_contiguous = NUMBERS_DOMAIN
					.iter()
					.filter(|x| {
						**x >= a.start.min(b.start) && **x <= a.end.max(b.end)
					})
					.all(|x| a.contains(*x) || b.contains(*x));

				assert_eq!(did_merge, union_is_contiguous, "{a:?} {b:?}");
				if did_merge {
					assert!(merged.contains_segment(&a));
					assert!(merged.contains_segment(&b));
				} else {
					assert_eq!(merged, a);
				}
			}
		}
	}

	#[test]
	fn split_around_tests() {
		// The definition of a split is: A && NOT B
		for base in all_valid_segments() {
			for cut in all_valid_segments() {
				let (before, after) = base.split_around(&cut);

				for x in NUMBERS_DOMAIN {
					let expected = base.contains(*x) && !cut.contains(*x);
					let in_before = before.is_some_and(|s| s.contains(*x));
					let in_after = after.is_some_and(|s| s.contains(*x));

					if expected != (in_before || in_after)
						|| (in_before && in_after)
					{
						dbg!(base, cut, before, after, x);
						panic!("Invariant Broken!");
					}
				}
			}
		}
	}

	#[test]
	fn split_at_domain_edges() {
		assert_eq!(
			Segment::new(i8::MIN, 0).split_at(i8::MIN),
			(None, Some(Segment::new(i8::MIN + 1, 0)))
		);
		assert_eq!(
			Segment::new(0, i8::MAX).split_at(i8::MAX),
			(Some(Segment::new(0, i8::MAX - 1)), None)
		);
		assert_eq!(Segment::point(i8::MAX).split_at(i8::MAX), (None, None));
	}

	#[test]
	fn nearby_at_domain_edges() {
		assert!(!Segment::point(i8::MIN).is_nearby(&Segment::point(i8::MAX)));
		assert!(
			Segment::new(i8::MIN, 0).is_nearby(&Segment::new(1, i8::MAX))
		);
	}

	#[test]
	fn iteration_tests() {
		assert_eq!(
			Segment::new(2_u8, 5).iter().collect::<Vec<_>>(),
			[2, 3, 4, 5]
		);
		assert_eq!(
			Segment::new(250_u8, u8::MAX).iter().rev().collect::<Vec<_>>(),
			[255, 254, 253, 252, 251, 250]
		);
		assert_eq!(
			Segment::new(0_u8, 1).iter().rev().collect::<Vec<_>>(),
			[1, 0]
		);

		let mut points = Segment::new(1, 4).iter();
		assert_eq!(points.next(), Some(1));
		assert_eq!(points.next_back(), Some(4));
		let restarted = points.clone();
		assert_eq!(points.collect::<Vec<_>>(), [2, 3]);
		assert_eq!(restarted.collect::<Vec<_>>(), [2, 3]);

		assert_eq!(Segment::new(5, 4).into_iter().count(), 0);
	}

	#[test]
	fn shift_tests() {
		let segment = Segment::new(-3_i8, 4);
		assert_eq!(
			segment.shift(10, ShiftDirection::Right),
			Some(Segment::new(7, 14))
		);
		assert_eq!(
			segment.shift(10, ShiftDirection::Left),
			Some(Segment::new(-13, -6))
		);
		assert_eq!(segment.shift(124, ShiftDirection::Right), None);
		assert_eq!(segment.shift(126, ShiftDirection::Left), None);
	}

	#[test]
	fn checked_len_at_domain_edges() {
		assert_eq!(Segment::new(i8::MIN, i8::MAX).checked_len(), None);
		assert_eq!(Segment::new(i8::MIN, -2).checked_len(), Some(127));
		assert_eq!(Segment::new(i8::MIN, -1).checked_len(), None);
		assert_eq!(Segment::new(0, usize::MAX).checked_len(), None);
		assert_eq!(Segment::new(1, usize::MAX).checked_len(), Some(usize::MAX));
		assert_eq!(Segment::new(4_u8, 3).checked_len(), None);

		for segment in all_valid_segments() {
			assert_eq!(segment.checked_len(), Some(segment.len()));
		}
	}

	#[test]
	fn len_and_validity() {
		assert_eq!(Segment::new(-2, 2).len(), 5);
		assert!(Segment::new(3, 3).is_valid());
		assert!(Segment::new(4, 3).is_empty());
		assert_eq!(Segment::from(1..=9), Segment::new(1, 9));
	}
}
