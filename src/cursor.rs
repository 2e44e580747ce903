//! A module containing [`Cursor`], a bidirectional read-only position
//! over the points of a [`SegmentSet`].
//!
//! A cursor is either at a covered point, or at one of the two sentinel
//! positions before the first point and after the last point. Moving off
//! either end of the set parks the cursor on the matching sentinel and
//! reports failure, moving from a sentinel back into the set works as you
//! would expect.

use core::ops::Bound::{Excluded, Unbounded};

use crate::{Discrete, Segment, SegmentSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position<I> {
	Start,
	At { point: I, segment: Segment<I> },
	End,
}

/// A read-only cursor over the covered points of a [`SegmentSet`], see
/// the [`cursor`](crate::cursor) module.
///
/// The cursor borrows the set, so the set cannot be mutated while a
/// cursor over it is alive.
///
/// # Examples
/// ```
/// use segset::{Segment, SegmentSet};
///
/// let set: SegmentSet<_> = SegmentSet::from_segments([
/// 	Segment::new(1, 2),
/// 	Segment::new(5, 5),
/// ])
/// .unwrap();
///
/// let mut cursor = set.cursor_at(2).unwrap();
/// assert_eq!(cursor.value(), Some(2));
///
/// assert!(cursor.move_next());
/// assert_eq!(cursor.value(), Some(5));
/// assert_eq!(cursor.segment(), Some(Segment::new(5, 5)));
///
/// assert!(!cursor.move_next());
/// assert!(cursor.is_end());
///
/// assert!(cursor.move_prev());
/// assert_eq!(cursor.value(), Some(5));
/// ```
#[derive(Debug)]
pub struct Cursor<'a, I, C> {
	set: &'a SegmentSet<I, C>,
	position: Position<I>,
}

impl<'a, I, C> Cursor<'a, I, C>
where
	I: Discrete,
{
	/// Returns the point the cursor is at, or `None` if it is at either
	/// sentinel.
	pub fn value(&self) -> Option<I> {
		match self.position {
			Position::At { point, .. } => Some(point),
			_ => None,
		}
	}

	/// Returns the stored segment containing the point the cursor is at,
	/// or `None` if it is at either sentinel.
	pub fn segment(&self) -> Option<Segment<I>> {
		match self.position {
			Position::At { segment, .. } => Some(segment),
			_ => None,
		}
	}

	/// Returns `true` if the cursor is before the first point.
	pub fn is_start(&self) -> bool {
		self.position == Position::Start
	}

	/// Returns `true` if the cursor is after the last point.
	pub fn is_end(&self) -> bool {
		self.position == Position::End
	}

	/// Moves the cursor to the next covered point, crossing into the next
	/// segment if needed, and returns `true`.
	///
	/// If there is no next point the cursor is parked after the last
	/// point and `false` is returned. Moving from before the first point
	/// goes to the first point.
	pub fn move_next(&mut self) -> bool {
		let next = match self.position {
			Position::Start => self.set.first().map(|first| at_start(*first)),
			Position::At { point, segment } => {
				match point.up().filter(|next| *next <= segment.end) {
					Some(next) => Some(Position::At {
						point: next,
						segment,
					}),
					None => self
						.set
						.segments
						.range((Excluded(segment), Unbounded))
						.next()
						.map(|after| at_start(*after)),
				}
			}
			Position::End => None,
		};

		self.settle(next, Position::End)
	}

	/// Moves the cursor to the previous covered point, crossing into the
	/// previous segment if needed, and returns `true`.
	///
	/// If there is no previous point the cursor is parked before the first
	/// point and `false` is returned. Moving from after the last point
	/// goes to the last point.
	pub fn move_prev(&mut self) -> bool {
		let prev = match self.position {
			Position::Start => None,
			Position::At { point, segment } => {
				match point.down().filter(|prev| *prev >= segment.start) {
					Some(prev) => Some(Position::At {
						point: prev,
						segment,
					}),
					None => self
						.set
						.segments
						.range(..segment)
						.next_back()
						.map(|before| at_end(*before)),
				}
			}
			Position::End => self.set.last().map(|last| at_end(*last)),
		};

		self.settle(prev, Position::Start)
	}

	fn settle(
		&mut self,
		position: Option<Position<I>>,
		sentinel: Position<I>,
	) -> bool {
		match position {
			Some(position) => {
				self.position = position;
				true
			}
			None => {
				self.position = sentinel;
				false
			}
		}
	}
}

fn at_start<I>(segment: Segment<I>) -> Position<I>
where
	I: Copy,
{
	Position::At {
		point: segment.start,
		segment,
	}
}
fn at_end<I>(segment: Segment<I>) -> Position<I>
where
	I: Copy,
{
	Position::At {
		point: segment.end,
		segment,
	}
}

impl<'a, I, C> Clone for Cursor<'a, I, C>
where
	I: Copy,
{
	fn clone(&self) -> Self {
		Cursor {
			set: self.set,
			position: self.position,
		}
	}
}

impl<I, C> SegmentSet<I, C>
where
	I: Discrete,
{
	/// Returns a cursor at `point`, or `None` if `point` is not covered.
	pub fn cursor_at(&self, point: I) -> Option<Cursor<'_, I, C>> {
		let segment = self.segment_containing(point)?;

		Some(Cursor {
			set: self,
			position: Position::At {
				point,
				segment: *segment,
			},
		})
	}

	/// Returns a cursor at the first covered point, or after the last
	/// point if the set is empty.
	///
	/// # Examples
	/// ```
	/// use segset::{Segment, SegmentSet};
	///
	/// let set: SegmentSet<_> = SegmentSet::from_segments([
	/// 	Segment::new(1, 2),
	/// 	Segment::new(5, 5),
	/// ])
	/// .unwrap();
	///
	/// let mut cursor = set.cursor_front();
	/// let mut points = vec![];
	/// while let Some(point) = cursor.value() {
	/// 	points.push(point);
	/// 	cursor.move_next();
	/// }
	/// assert_eq!(points, [1, 2, 5]);
	///
	/// let empty: SegmentSet<u8> = SegmentSet::new();
	/// assert!(empty.cursor_front().is_end());
	/// ```
	pub fn cursor_front(&self) -> Cursor<'_, I, C> {
		let mut cursor = self.cursor_start();
		cursor.move_next();
		cursor
	}

	/// Returns a cursor at the last covered point, or before the first
	/// point if the set is empty.
	pub fn cursor_back(&self) -> Cursor<'_, I, C> {
		let mut cursor = self.cursor_end();
		cursor.move_prev();
		cursor
	}

	/// Returns a cursor before the first point.
	pub fn cursor_start(&self) -> Cursor<'_, I, C> {
		Cursor {
			set: self,
			position: Position::Start,
		}
	}

	/// Returns a cursor after the last point.
	pub fn cursor_end(&self) -> Cursor<'_, I, C> {
		Cursor {
			set: self,
			position: Position::End,
		}
	}
}

#[cfg(test)]
mod tests {
	use alloc::vec::Vec;

	use pretty_assertions::assert_eq;

	use super::*;

	fn ii(start: i8, end: i8) -> Segment<i8> {
		Segment::new(start, end)
	}

	fn basic() -> SegmentSet<i8> {
		SegmentSet::from_segments([ii(0, 2), ii(5, 5), ii(8, 9)]).unwrap()
	}

	#[test]
	fn forwards_and_backwards_match_values() {
		let set = basic();

		let mut forwards = Vec::new();
		let mut cursor = set.cursor_front();
		while let Some(point) = cursor.value() {
			forwards.push(point);
			cursor.move_next();
		}
		assert_eq!(forwards, set.values().collect::<Vec<_>>());

		let mut backwards = Vec::new();
		let mut cursor = set.cursor_back();
		while let Some(point) = cursor.value() {
			backwards.push(point);
			cursor.move_prev();
		}
		assert_eq!(backwards, set.values().rev().collect::<Vec<_>>());
	}

	#[test]
	fn moving_off_the_ends() {
		let set = basic();

		let mut cursor = set.cursor_at(9).unwrap();
		assert!(!cursor.move_next());
		assert!(cursor.is_end());
		assert_eq!(cursor.value(), None);
		assert_eq!(cursor.segment(), None);
		assert!(!cursor.move_next());
		assert!(cursor.is_end());
		assert!(cursor.move_prev());
		assert_eq!(cursor.value(), Some(9));

		let mut cursor = set.cursor_at(0).unwrap();
		assert!(!cursor.move_prev());
		assert!(cursor.is_start());
		assert!(!cursor.move_prev());
		assert!(cursor.move_next());
		assert_eq!(cursor.value(), Some(0));
		assert_eq!(cursor.segment(), Some(ii(0, 2)));
	}

	#[test]
	fn crossing_segments() {
		let set = basic();

		let mut cursor = set.cursor_at(2).unwrap();
		assert!(cursor.move_next());
		assert_eq!(cursor.value(), Some(5));
		assert!(cursor.move_next());
		assert_eq!(cursor.value(), Some(8));
		assert_eq!(cursor.segment(), Some(ii(8, 9)));

		assert!(cursor.move_prev());
		assert!(cursor.move_prev());
		assert_eq!(cursor.value(), Some(2));
		assert_eq!(cursor.segment(), Some(ii(0, 2)));
	}

	#[test]
	fn cursor_at_uncovered_point() {
		let set = basic();
		assert!(set.cursor_at(3).is_none());
		assert!(set.cursor_at(10).is_none());

		for point in -1..=10 {
			let cursor = set.cursor_at(point);
			assert_eq!(
				cursor.as_ref().and_then(Cursor::segment),
				set.segment_containing(point).copied()
			);
			assert_eq!(
				cursor.and_then(|cursor| cursor.value()),
				set.contains(point).then_some(point)
			);
		}
	}

	#[test]
	fn empty_set() {
		let set: SegmentSet<i8> = SegmentSet::new();

		assert!(set.cursor_front().is_end());
		assert!(set.cursor_back().is_start());

		let mut cursor = set.cursor_start();
		assert!(!cursor.move_next());
		assert!(cursor.is_end());
		assert!(!cursor.move_prev());
		assert!(cursor.is_start());
	}

	#[test]
	fn domain_edges() {
		let set: SegmentSet<u8> =
			SegmentSet::from_segments([Segment::new(0, 1), Segment::new(254, 255)])
				.unwrap();

		let mut cursor = set.cursor_at(255).unwrap();
		assert!(!cursor.move_next());
		assert!(cursor.is_end());

		let mut cursor = set.cursor_at(0).unwrap();
		assert!(!cursor.move_prev());
		assert!(cursor.is_start());
	}
}
