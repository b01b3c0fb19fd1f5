#[cfg(feature = "alloc")]
use crate::normalize::{OneShot, iterable};
use crate::{
    adaptors::{Pairs, Steps, Zip, pairs, steps, zip},
    error::EmptySequence,
    terminal::{first, last, reduce},
};

/// Extends [`Iterator`] with the combinators and terminals of this crate that have
/// no counterpart in the standard library, so they can sit in a method chain.
///
/// This trait is automatically implemented for all [`Iterator`] types.
///
/// # Examples
///
/// ```
/// use iterthing::prelude::*;
///
/// let peak_gain = [3, 8, 2, 9, 4]
///     .into_iter()
///     .pairs()
///     .map(|(a, b)| b - a)
///     .steps(0, |best: i32, gain| best.max(gain))
///     .last_or_err();
///
/// assert_eq!(peak_gain, Ok(7));
/// ```
pub trait IterthingExt: Iterator {
    /// Overlapping consecutive pairs of this cursor's items.
    ///
    /// See [`pairs()`](crate::pairs).
    #[inline]
    fn pairs(self) -> Pairs<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        pairs(self)
    }

    /// Every intermediate state of folding this cursor from `initial`.
    ///
    /// See [`steps()`](crate::steps).
    #[inline]
    fn steps<B, F>(self, initial: B, combine: F) -> Steps<Self, B, F>
    where
        Self: Sized,
        B: Clone,
        F: FnMut(B, Self::Item) -> B,
    {
        steps(self, combine, initial)
    }

    /// Pairs of this cursor's items with `other`'s, running until both are exhausted.
    ///
    /// Unlike [`Iterator::zip`], this does not stop at the shorter side.
    /// See [`zip()`](crate::zip).
    ///
    /// # Examples
    ///
    /// ```
    /// use iterthing::prelude::*;
    ///
    /// let mut zipped = (1..=2).zip_all("a".chars());
    /// assert_eq!(zipped.next(), Some((Some(1), Some('a'))));
    /// assert_eq!(zipped.next(), Some((Some(2), None)));
    /// assert_eq!(zipped.next(), None);
    /// ```
    #[inline]
    fn zip_all<R>(self, other: R) -> Zip<Self, R::IntoIter>
    where
        Self: Sized,
        R: IntoIterator,
    {
        zip(self, other)
    }

    /// Advances once, failing with [`EmptySequence`] if there was nothing left.
    ///
    /// See [`first()`](crate::first).
    #[inline]
    fn first_or_err(&mut self) -> Result<Self::Item, EmptySequence>
    where
        Self: Sized,
    {
        first(self)
    }

    /// Drains this cursor, failing with [`EmptySequence`] if it had nothing left.
    ///
    /// See [`last()`](crate::last).
    #[inline]
    fn last_or_err(self) -> Result<Self::Item, EmptySequence>
    where
        Self: Sized,
    {
        last(self)
    }

    /// Folds this cursor from `initial`, returning `initial` untouched if it is empty.
    ///
    /// Same as [`Iterator::fold`] with the arguments in the order [`steps`](Self::steps)
    /// takes them. See [`reduce()`](crate::reduce).
    #[inline]
    fn reduce_from<B, F>(self, initial: B, combine: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        reduce(self, combine, initial)
    }

    /// Wraps this cursor into a single-pass sequence view that clones can share.
    ///
    /// See [`iterable()`](crate::iterable).
    #[cfg(feature = "alloc")]
    #[inline]
    fn one_shot(self) -> OneShot<Self>
    where
        Self: Sized,
    {
        iterable(self)
    }
}

impl<I: Iterator> IterthingExt for I {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn first_or_err_advances_in_place() {
        let mut cursor = "abc".chars();
        assert_eq!(cursor.first_or_err(), Ok('a'));
        assert_eq!(cursor.first_or_err(), Ok('b'));
        assert_eq!(cursor.as_str(), "c");
    }

    #[test]
    fn last_or_err_on_empty() {
        assert_eq!((0..0).last_or_err(), Err(EmptySequence));
    }

    #[test]
    fn steps_takes_initial_first() {
        let running: Vec<_> = [1, 2, 3].into_iter().steps(10, |acc, n| acc - n).collect();
        assert_eq!(running, [9, 7, 4]);
    }

    #[test]
    fn reduce_from_agrees_with_the_last_step() {
        assert_eq!([1, 2, 3].into_iter().reduce_from(10, |acc, n| acc - n), 4);
        assert_eq!((0..0).reduce_from(10, |acc, n| acc - n), 10);
    }

    #[test]
    fn zip_all_runs_past_the_shorter_side() {
        let zipped: Vec<_> = [1].into_iter().zip_all([true, false]).collect();
        assert_eq!(zipped, [(Some(1), Some(true)), (None, Some(false))]);
    }

    #[test]
    fn one_shot_is_shared() {
        let view = (1..=3).one_shot();
        assert_eq!(view.clone().pairs().count(), 2);
        assert!(view.is_exhausted());
    }
}
