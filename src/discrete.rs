//! A module containing the [`Discrete`] trait and trait impls for the
//! primitive integer datatypes.

use core::fmt::Debug;
use core::ops::{Add, Sub};

/// A trait for the point types segments are made of. See the top-level
/// module documentation for more detailed descriptions on discrete-ness.
///
/// The same type is used both for points and for lengths (the number of
/// points in a segment), so `end - start + ONE` must be representable for
/// the segments you store.
pub trait Discrete:
	Ord + Copy + Debug + Add<Output = Self> + Sub<Output = Self>
{
	/// The length of an empty segment.
	const ZERO: Self;
	/// The distance between a point and its successor.
	const ONE: Self;
	/// The minimum value of the type.
	const MIN: Self;
	/// The maximum value of the type.
	const MAX: Self;

	/// The smallest value greater than `self` if one exists.
	fn up(self) -> Option<Self>;
	/// The greatest value smaller than `self` if one exists.
	fn down(self) -> Option<Self>;
	/// `self + rhs`, or `None` if the result would leave the domain.
	fn checked_add(self, rhs: Self) -> Option<Self>;
	/// `self - rhs`, or `None` if the result would leave the domain.
	fn checked_sub(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_discrete {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Discrete for $ident {
			const ZERO: Self = 0;
			const ONE: Self = 1;
			const MIN: Self = $ident::MIN;
			const MAX: Self = $ident::MAX;

			fn up(self) -> Option<Self> {
				$ident::checked_add(self, 1)
			}
			fn down(self) -> Option<Self> {
				$ident::checked_sub(self, 1)
			}
			fn checked_add(self, rhs: Self) -> Option<Self> {
				$ident::checked_add(self, rhs)
			}
			fn checked_sub(self, rhs: Self) -> Option<Self> {
				$ident::checked_sub(self, rhs)
			}
		}

		impl_discrete!($($t)*);
	};
}

impl_discrete!(
	u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,
);
