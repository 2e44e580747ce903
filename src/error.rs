//! A module containing [`SegmentError`].

use thiserror::Error;

/// The error returned by [`SegmentSet`](crate::SegmentSet) operations
/// given a segment they cannot act on. The set is never modified when one
/// of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentError<I> {
	/// The given segment had `start > end`. See [`Invalid
	/// Segments`](crate#invalid-segments) for more details.
	#[error("invalid segment: start {start:?} is greater than end {end:?}")]
	InvalidSegment {
		/// The start of the rejected segment.
		start: I,
		/// The end of the rejected segment.
		end: I,
	},
	/// Inserting the segment would make the set, or one of its segments,
	/// cover more points than the point type can count.
	#[error(
		"inserting {start:?}..={end:?} covers more points than the point type can count"
	)]
	LengthOverflow {
		/// The start of the rejected segment.
		start: I,
		/// The end of the rejected segment.
		end: I,
	},
	/// Shifting the stored segments by `delta` would have moved one of
	/// them past the maximum value of the point type.
	#[error("shifting by {delta:?} moves a segment out of the domain")]
	ShiftOverflow {
		/// The amount the segments would have been shifted by.
		delta: I,
	},
}
