//! Comparison strategies for ranking items.
//!
//! A [`Comparator`] answers one question: given two items,
//! which one is better? The answer uses the same three-way
//! convention as [`Ord::cmp`], where `Greater` means the first
//! item ranks above the second.
//!
//! There are two ways of supplying one:
//! 1. The type's natural ordering, through [`NaturalOrder`].
//!    This is fixed once for the type, wherever its `Ord` impl lives.
//! 2. Any other ordering chosen at the use site,
//!    such as a closure, a [`ByKey`] extractor or a [`Signed`] function.
//!    The item type doesn't need to implement anything for these,
//!    and many of them can coexist for the same type.
use std::cmp::Ordering;

/// A strategy for comparing two items of the same type.
///
/// Implementations must behave like a total preorder
/// (consistent, transitive) for a [`RankedVec`](crate::RankedVec)
/// to keep its ordering. Misbehaving comparators are never unsafe,
/// but the resulting order is unspecified.
pub trait Comparator<T> {
    /// Compare `a` against `b`,
    /// returning `Greater` if `a` should rank above `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Invert this comparator, so the worst item ranks first.
    #[inline]
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }

    /// Break ties of this comparator using `other`.
    #[inline]
    fn then<O>(self, other: O) -> Then<Self, O>
    where
        Self: Sized,
        O: Comparator<T>,
    {
        Then(self, other)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Compares items by their own [`Ord`] implementation.
///
/// Larger values rank first.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Compares items by a key extracted from each of them.
///
/// The item with the larger key ranks first.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Comparator<T> for ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// Adapts a comparison function that returns a signed number
/// (negative, zero or positive) instead of an [`Ordering`].
///
/// Any result type that has a zero through [`Default`] works,
/// so `i32`, `i64` and friends can be used directly.
#[derive(Debug, Clone, Copy)]
pub struct Signed<F>(pub F);

impl<T, R, F> Comparator<T> for Signed<F>
where
    R: Ord + Default,
    F: Fn(&T, &T) -> R,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b).cmp(&R::default())
    }
}

/// See [`Comparator::reversed`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// See [`Comparator::then`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Then<A, B>(pub A, pub B);

impl<T, A, B> Comparator<T> for Then<A, B>
where
    A: Comparator<T>,
    B: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.0.compare(a, b) {
            Ordering::Equal => self.1.compare(a, b),
            decided => decided,
        }
    }
}
