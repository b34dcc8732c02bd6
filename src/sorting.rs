//! Utilities for ranking.

use std::cmp::Ordering;

use crate::compare::Comparator;
use crate::TiePolicy;

/// Whether a `resident` item keeps its place ahead of an `incoming` one.
#[inline]
fn stays_ahead<T, C>(comparator: &C, ties: TiePolicy, resident: &T, incoming: &T) -> bool
where
    C: Comparator<T>,
{
    match comparator.compare(resident, incoming) {
        Ordering::Greater => true,
        Ordering::Equal => ties == TiePolicy::OldestFirst,
        Ordering::Less => false,
    }
}

/// Find where `item` belongs in the already ranked slice.
///
/// This is the first position whose resident doesn't stay ahead of the item,
/// or `ranked.len()` if every resident does.
/// Since the residents that stay ahead form a prefix of a ranked slice,
/// a binary search finds the same position as scanning from the front.
#[inline]
pub fn insertion_point<T, C>(ranked: &[T], item: &T, comparator: &C, ties: TiePolicy) -> usize
where
    C: Comparator<T>,
{
    ranked.partition_point(|resident| stays_ahead(comparator, ties, resident, item))
}

/// Check that no item ranks below the one after it.
pub fn is_ranked_by<T, C>(items: &[T], comparator: &C) -> bool
where
    C: Comparator<T>,
{
    items
        .windows(2)
        .all(|pair| comparator.compare(&pair[0], &pair[1]) != Ordering::Less)
}

/// Performs an [insertion sort](https://en.wikipedia.org/wiki/Insertion_sort)
/// on the specified slice,
/// moving an element left for as long as `out_of_place(previous, element)` holds.
///
/// This has quadratic worst-case complexity,
/// so it should only be used if the input is small or already mostly sorted.
pub fn insertion_sort_by<T, F>(target: &mut [T], mut out_of_place: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..target.len() {
        let mut j = i;
        while j > 0 && out_of_place(&target[j - 1], &target[j]) {
            target.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Rank a small batch of items in place,
/// giving the same order as inserting them one by one.
///
/// Each element only moves past the elements that wouldn't have stayed ahead of it,
/// so equal elements end up exactly where the tie policy puts them.
#[inline]
pub fn rank_batch<T, C>(batch: &mut [T], comparator: &C, ties: TiePolicy)
where
    C: Comparator<T>,
{
    insertion_sort_by(batch, |previous, element| {
        !stays_ahead(comparator, ties, previous, element)
    })
}

/// Batches up to this length are ranked with insertion sort instead of merging.
pub const SMALL_BATCH: usize = 32;

/// Rank an arbitrarily large vector, as if its elements had been inserted in order.
///
/// Larger inputs go through a bottom-up merge sort over positions,
/// where an element from the later run goes first whenever the earlier one
/// wouldn't stay ahead of it. Every step only depends on run bounds,
/// so an inconsistent comparator scrambles the order but can't cause a panic.
pub fn rank_vec<T, C>(items: &mut Vec<T>, comparator: &C, ties: TiePolicy)
where
    C: Comparator<T>,
{
    let len = items.len();
    if len <= SMALL_BATCH {
        rank_batch(items, comparator, ties);
        return;
    }
    let mut order: Vec<usize> = (0..len).collect();
    let mut merged = vec![0; len];
    let mut width = 1;
    while width < len {
        for start in (0..len).step_by(2 * width) {
            let middle = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, middle);
            for slot in &mut merged[start..end] {
                let take_right = if right == end {
                    false
                } else if left == middle {
                    true
                } else {
                    let (earlier, later) = (&items[order[left]], &items[order[right]]);
                    !stays_ahead(comparator, ties, earlier, later)
                };
                if take_right {
                    *slot = order[right];
                    right += 1;
                } else {
                    *slot = order[left];
                    left += 1;
                }
            }
        }
        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }
    // `order` is a permutation, so every slot is taken exactly once
    let mut slots: Vec<Option<T>> = items.drain(..).map(Some).collect();
    items.extend(order.into_iter().filter_map(|index| slots[index].take()));
}
