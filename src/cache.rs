//! A module containing the [`PrefixCache`] trait and its two
//! implementations, [`OrderedCache`] and [`NoCache`].
//!
//! [`SegmentSet::count_less_than()`](crate::SegmentSet::count_less_than)
//! memoizes, for every stored segment it visits, the number of points
//! covered by all the segments stored before it. Those counts only depend
//! on the segments *before* the key, so a mutation at some position can
//! only invalidate the entries keyed at or after it. That is the whole
//! contract a cache has to honour: [`PrefixCache::evict_from()`].

use alloc::collections::BTreeMap;

use crate::{Discrete, Segment};

/// A memo table from a stored segment to the number of points covered by
/// all segments ordered strictly before it.
///
/// Keys are ordered with the [`Segment`] ordering.
pub trait PrefixCache<I> {
	/// Returns the memoized count for `segment`, if any.
	fn get(&self, segment: &Segment<I>) -> Option<I>;
	/// Memoizes `count` for `segment`.
	fn insert(&mut self, segment: Segment<I>, count: I);
	/// Evicts every entry whose key orders at or after `from`.
	fn evict_from(&mut self, from: &Segment<I>);
	/// Evicts every entry.
	fn clear(&mut self);
}

/// The default [`PrefixCache`], based on [`BTreeMap`] so that
/// [`PrefixCache::evict_from()`] is a single `split_off()`.
///
/// [`BTreeMap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedCache<I> {
	entries: BTreeMap<Segment<I>, I>,
}

impl<I> OrderedCache<I> {
	/// Makes a new, empty `OrderedCache`.
	pub fn new() -> Self {
		OrderedCache {
			entries: BTreeMap::new(),
		}
	}
	/// Returns the number of memoized entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}
	/// Returns `true` if nothing is memoized.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<I> Default for OrderedCache<I> {
	fn default() -> Self {
		OrderedCache::new()
	}
}

impl<I> PrefixCache<I> for OrderedCache<I>
where
	I: Discrete,
{
	fn get(&self, segment: &Segment<I>) -> Option<I> {
		self.entries.get(segment).copied()
	}
	fn insert(&mut self, segment: Segment<I>, count: I) {
		self.entries.insert(segment, count);
	}
	fn evict_from(&mut self, from: &Segment<I>) {
		drop(self.entries.split_off(from));
	}
	fn clear(&mut self) {
		self.entries.clear();
	}
}

/// A [`PrefixCache`] that never memoizes anything, every
/// [`SegmentSet::count_less_than()`](crate::SegmentSet::count_less_than)
/// walks back to the first segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoCache;

impl<I> PrefixCache<I> for NoCache {
	fn get(&self, _: &Segment<I>) -> Option<I> {
		None
	}
	fn insert(&mut self, _: Segment<I>, _: I) {}
	fn evict_from(&mut self, _: &Segment<I>) {}
	fn clear(&mut self) {}
}
