//! A vector kept in best-first order by a pluggable comparator.
//!
//! A [`RankedVec`] can be ordered in two ways:
//! by the item type's own [`Ord`] implementation (its natural ordering),
//! or by any comparator chosen where the sequence is constructed.
//! The second lets the same type be ranked differently in different places,
//! without the type needing to know about any of them.
//!
//! ```
//! use ranked_vec::RankedVec;
//!
//! struct Friend {
//!     name: &'static str,
//!     talkativity: u32,
//!     kindness: u32,
//! }
//! let friends = || {
//!     [
//!         Friend { name: "Ada", talkativity: 5, kindness: 5 },
//!         Friend { name: "Bo", talkativity: 3, kindness: 7 },
//!         Friend { name: "Cy", talkativity: 10, kindness: 2 },
//!     ]
//! };
//!
//! let mut chatty = RankedVec::by_key(|f: &Friend| f.talkativity);
//! chatty.extend(friends());
//! assert_eq!(chatty.get(0)?.name, "Cy");
//!
//! let mut kind = RankedVec::by_key(|f: &Friend| f.kindness);
//! kind.extend(friends());
//! assert_eq!(kind.get(0)?.name, "Bo");
//! assert!(kind.get(3).is_err());
//! # Ok::<(), ranked_vec::Error>(())
//! ```
//!
//! Single insertions take `O(n)` time to move memory, just like [`Vec::insert`].
//! Inserting many items at once with [`RankedVec::extend_ranked`] (or [`Extend`])
//! merges the whole batch in with a single pass over the existing elements.
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

use log::{debug, trace};

pub mod compare;
mod error;
#[cfg(feature = "serde")]
mod serialize;
mod shift;
mod sorting;

pub use self::compare::{ByKey, Comparator, NaturalOrder, Reversed, Signed, Then};
pub use self::error::{Error, Result};

use self::shift::TailShifter;

/// Where a new item goes relative to the items it compares equal to
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TiePolicy {
    /// Newer items rank before equal older ones.
    #[default]
    NewestFirst,
    /// Equal items keep the order they were inserted in.
    OldestFirst,
}

/// Settings fixed when a [`RankedVec`] is constructed
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// How items comparing equal are ordered
    pub ties: TiePolicy,
    /// The number of items to reserve room for up front
    pub capacity: usize,
}

/// A sequence of items kept in best-first order.
///
/// The comparator and tie policy are bound at construction and never change.
/// For any two positions `i < j`, comparing the item at `i` against the item at `j`
/// never gives [`Ordering::Less`].
///
/// See module documentation for an overview.
#[derive(Clone)]
pub struct RankedVec<T, C = NaturalOrder> {
    items: Vec<T>,
    comparator: C,
    ties: TiePolicy,
}
impl<T: Ord> RankedVec<T> {
    /// Create an empty sequence ranked by the items' natural ordering,
    /// largest first
    #[inline]
    pub fn new() -> Self {
        RankedVec::with_comparator(NaturalOrder)
    }
}
impl<T, F> RankedVec<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Create an empty sequence ranked by the specified closure
    #[inline]
    pub fn by(compare: F) -> Self {
        RankedVec::with_comparator(compare)
    }
}
impl<T, K, F> RankedVec<T, ByKey<F>>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    /// Create an empty sequence ranked by a key, largest first
    #[inline]
    pub fn by_key(key: F) -> Self {
        RankedVec::with_comparator(ByKey(key))
    }
}
impl<T, R, F> RankedVec<T, Signed<F>>
where
    R: Ord + Default,
    F: Fn(&T, &T) -> R,
{
    /// Create an empty sequence ranked by a function returning
    /// a negative, zero or positive number.
    #[inline]
    pub fn with_signed(compare: F) -> Self {
        RankedVec::with_comparator(Signed(compare))
    }
}
impl<T, C: Comparator<T>> RankedVec<T, C> {
    /// Create an empty sequence ranked by the specified comparator
    #[inline]
    pub fn with_comparator(comparator: C) -> Self {
        RankedVec::with_options(comparator, Options::default())
    }
    /// Create an empty sequence with the specified comparator and options
    pub fn with_options(comparator: C, options: Options) -> Self {
        RankedVec {
            items: Vec::with_capacity(options.capacity),
            comparator,
            ties: options.ties,
        }
    }
    /// Rank the elements of an existing vector,
    /// treating them as if they had been inserted in their current order.
    #[inline]
    pub fn from_vec_with(comparator: C, items: Vec<T>) -> Self {
        RankedVec::from_vec_with_options(comparator, Options::default(), items)
    }
    /// Rank the elements of an existing vector under the specified options,
    /// treating them as if they had been inserted in their current order.
    ///
    /// This takes `O(n log n)` comparisons.
    pub fn from_vec_with_options(comparator: C, options: Options, mut items: Vec<T>) -> Self {
        sorting::rank_vec(&mut items, &comparator, options.ties);
        items.reserve(options.capacity.saturating_sub(items.len()));
        RankedVec {
            items,
            comparator,
            ties: options.ties,
        }
    }
    /// Insert the item just before the first item that doesn't rank above it,
    /// returning the rank it landed at.
    ///
    /// Items comparing equal to it are ordered by the [`TiePolicy`].
    pub fn insert(&mut self, item: T) -> usize {
        let rank = sorting::insertion_point(&self.items, &item, &self.comparator, self.ties);
        self.items.insert(rank, item);
        trace!("Inserted at rank {} of {}", rank, self.items.len());
        rank
    }
    /// Insert all of the items,
    /// giving the same result as calling [`Self::insert`] on each in order.
    ///
    /// The batch is ranked on its own first,
    /// then merged in with every existing item moving at most once.
    pub fn extend_ranked<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut batch: Vec<T> = items.into_iter().collect();
        if batch.is_empty() {
            return;
        }
        sorting::rank_vec(&mut batch, &self.comparator, self.ties);
        let mut positions = Vec::with_capacity(batch.len());
        let mut floor = 0;
        for item in &batch {
            /*
             * A well-behaved comparator always gives non-decreasing positions here.
             * Clamping keeps the merge sound for one that isn't,
             * at the cost of an unspecified order.
             */
            let position =
                sorting::insertion_point(&self.items, item, &self.comparator, self.ties).max(floor);
            positions.push(position);
            floor = position;
        }
        debug!(
            "Merging {} items into a sequence of {}",
            batch.len(),
            self.items.len()
        );
        let mut shifter = TailShifter::new(&mut self.items, batch.len());
        for (position, item) in positions.into_iter().rev().zip(batch.into_iter().rev()) {
            shifter.shift_from(position);
            shifter.place(item);
        }
        shifter.finish();
    }
    /// Whether every item still ranks at or above the one after it.
    ///
    /// This can only be false if the comparator is inconsistent.
    pub fn is_ranked(&self) -> bool {
        sorting::is_ranked_by(&self.items, &self.comparator)
    }
}
impl<T, C> RankedVec<T, C> {
    /// Get the item at the specified rank, where rank 0 is the best
    #[inline]
    pub fn get(&self, rank: usize) -> Result<&T> {
        self.items.get(rank).ok_or(Error::OutOfRange {
            rank,
            len: self.items.len(),
        })
    }
    /// The best item, if there are any
    #[inline]
    pub fn best(&self) -> Option<&T> {
        self.items.first()
    }
    /// The best `n` items, or all of them if there are fewer
    #[inline]
    pub fn top(&self, n: usize) -> &[T] {
        &self.items[..n.min(self.items.len())]
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    /// All of the items, best first
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
    #[inline]
    pub fn tie_policy(&self) -> TiePolicy {
        self.ties
    }
}
impl<T, C: Comparator<T> + Default> Default for RankedVec<T, C> {
    #[inline]
    fn default() -> Self {
        RankedVec::with_comparator(C::default())
    }
}
impl<T, C: Comparator<T>> Extend<T> for RankedVec<T, C> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_ranked(iter)
    }
}
impl<T, C: Comparator<T> + Default> FromIterator<T> for RankedVec<T, C> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        RankedVec::from_vec_with(C::default(), iter.into_iter().collect())
    }
}
impl<T, C> IntoIterator for RankedVec<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
impl<'a, T, C> IntoIterator for &'a RankedVec<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
impl<T: Debug, C> Debug for RankedVec<T, C> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("RankedVec")
            .field("items", &self.items)
            .field("ties", &self.ties)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn oldest_first<T, C: Comparator<T>>(comparator: C) -> RankedVec<T, C> {
        RankedVec::with_options(
            comparator,
            Options {
                ties: TiePolicy::OldestFirst,
                ..Options::default()
            },
        )
    }

    #[test]
    fn natural_order() {
        let mut ranked = RankedVec::new();
        assert_eq!(ranked.insert(5), 0);
        assert_eq!(ranked.insert(3), 1);
        assert_eq!(ranked.insert(10), 0);
        assert_eq!(ranked.as_slice(), &[10, 5, 3]);
        assert_eq!(ranked.best(), Some(&10));
        assert!(ranked.is_ranked());
    }
    #[test]
    fn out_of_range() {
        let mut ranked = RankedVec::<u32>::new();
        assert_eq!(ranked.get(0), Err(Error::OutOfRange { rank: 0, len: 0 }));
        ranked.extend([4, 8]);
        assert_eq!(ranked.get(1), Ok(&4));
        assert_eq!(ranked.get(2), Err(Error::OutOfRange { rank: 2, len: 2 }));
        assert_eq!(
            ranked.get(2).unwrap_err().to_string(),
            "rank 2 is out of range for a sequence of length 2"
        );
    }
    #[test]
    fn ties() {
        let by_score = |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0);
        let mut newest = RankedVec::by(by_score);
        let mut oldest = oldest_first(by_score);
        for pair in [(2, 'a'), (1, 'b'), (2, 'c')] {
            newest.insert(pair);
            oldest.insert(pair);
        }
        assert_eq!(newest.as_slice(), &[(2, 'c'), (2, 'a'), (1, 'b')]);
        assert_eq!(oldest.as_slice(), &[(2, 'a'), (2, 'c'), (1, 'b')]);
        assert_eq!(oldest.tie_policy(), TiePolicy::OldestFirst);
    }
    #[test]
    fn batched() {
        /*
         * Merging `[6, 2, 6, 0]` into `[9, 6, 4, 1]`.
         * With newest first, each new `6` goes ahead of every existing `6`.
         */
        let mut ranked = RankedVec::by_key(|x: &(u32, u32)| x.0);
        ranked.extend([(9, 0), (6, 0), (4, 0), (1, 0)]);
        ranked.extend_ranked([(6, 1), (2, 1), (6, 2), (0, 1)]);
        assert_eq!(
            ranked.as_slice(),
            &[
                (9, 0),
                (6, 2),
                (6, 1),
                (6, 0),
                (4, 0),
                (2, 1),
                (1, 0),
                (0, 1)
            ]
        );
    }
    #[test]
    fn batched_oldest_first() {
        let mut ranked = oldest_first(NaturalOrder);
        ranked.extend(vec![3, 1]);
        ranked.extend(vec![1, 4, 3, 0]);
        assert_eq!(ranked.into_vec(), vec![4, 3, 3, 1, 1, 0]);
    }
    #[test]
    fn empty_batch() {
        let mut ranked = RankedVec::<i8>::new();
        ranked.extend(Vec::new());
        assert!(ranked.is_empty());
        ranked.insert(1);
        ranked.extend(std::iter::empty());
        assert_eq!(ranked.len(), 1);
    }
    #[test]
    fn top_and_iter() {
        let ranked = [3, 9, 1, 7].iter().copied().collect::<RankedVec<u8>>();
        assert_eq!(ranked.top(2), &[9, 7]);
        assert_eq!(ranked.top(10), &[9, 7, 3, 1]);
        assert_eq!(ranked.iter().rev().next(), Some(&1));
        let doubled: Vec<u8> = (&ranked).into_iter().map(|x| x * 2).collect();
        assert_eq!(doubled, vec![18, 14, 6, 2]);
    }
    #[test]
    fn from_vec_keeps_ties() {
        let by_score = ByKey(|pair: &(u8, char)| pair.0);
        let ranked = RankedVec::from_vec_with(by_score, vec![(1, 'a'), (5, 'b'), (1, 'c')]);
        assert_eq!(ranked.as_slice(), &[(5, 'b'), (1, 'c'), (1, 'a')]);
    }
    #[test]
    fn from_vec_with_oldest_first() {
        let by_score = ByKey(|pair: &(u8, char)| pair.0);
        let options = Options {
            ties: TiePolicy::OldestFirst,
            capacity: 8,
        };
        let input = vec![(1, 'a'), (5, 'b'), (1, 'c')];
        let ranked = RankedVec::from_vec_with_options(by_score, options, input);
        assert_eq!(ranked.as_slice(), &[(5, 'b'), (1, 'a'), (1, 'c')]);
        assert_eq!(ranked.tie_policy(), TiePolicy::OldestFirst);
        assert!(ranked.items.capacity() >= 8);
    }
    #[test]
    fn large_batches() {
        let mut extended = RankedVec::new();
        extended.extend(0..5_000u32);
        let collected = (0..5_000u32).collect::<RankedVec<u32>>();
        assert!(extended.is_ranked());
        assert_eq!(extended.as_slice(), collected.as_slice());
        assert_eq!(extended.best(), Some(&4_999));
    }
    #[test]
    fn send_and_sync() {
        fn assert_send_sync<X: Send + Sync>() {}
        assert_send_sync::<RankedVec<String>>();
        assert_send_sync::<RankedVec<u8, ByKey<fn(&u8) -> u8>>>();
    }
    #[test]
    fn inconsistent_comparator_bulk() {
        let state = std::cell::Cell::new(7u32);
        let coin = |_: &u32, _: &u32| {
            let next = state.get().wrapping_mul(1_103_515_245).wrapping_add(12_345);
            state.set(next);
            (next >> 16).cmp(&(u32::MAX >> 17))
        };
        let ranked = RankedVec::from_vec_with(coin, (0..2_000u32).collect());
        let mut held = ranked.into_vec();
        held.sort_unstable();
        assert_eq!(held, (0..2_000u32).collect::<Vec<_>>());

        let mut extended = RankedVec::by(coin);
        extended.extend(0..2_000u32);
        assert_eq!(extended.len(), 2_000);
    }
    #[test]
    fn inconsistent_comparator() {
        // Random answers may scramble the order, but must never break memory
        let state = std::cell::Cell::new(7u32);
        let mut ranked = RankedVec::by(|_: &u32, _: &u32| {
            let next = state.get().wrapping_mul(1_103_515_245).wrapping_add(12_345);
            state.set(next);
            (next >> 16).cmp(&(u32::MAX >> 17))
        });
        let mut expected = Vec::new();
        for round in 0..20u32 {
            ranked.insert(round);
            expected.push(round);
            ranked.extend_ranked(round * 10..round * 10 + 5);
            expected.extend(round * 10..round * 10 + 5);
        }
        assert_eq!(ranked.len(), expected.len());
        let mut held = ranked.into_vec();
        held.sort_unstable();
        expected.sort_unstable();
        assert_eq!(held, expected);
    }
}
