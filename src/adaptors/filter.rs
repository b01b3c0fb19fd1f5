use std::{fmt::Debug, iter::FusedIterator};

use super::Fuse;
use crate::assert_iterator;

/// Creates a lazy sequence of the items of `source` for which `predicate` holds,
/// keeping their relative order.
///
/// `predicate` runs exactly once per item pulled from `source`. Pulling one item from the
/// filter advances `source` only as far as the next match (or its end).
///
/// # Examples
///
/// ```
/// use iterthing::{collect, filter};
///
/// assert_eq!(collect(filter(1..=10, |n| n % 3 == 0)), [3, 6, 9]);
/// ```
#[inline]
pub fn filter<S, P>(source: S, predicate: P) -> Filter<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    assert_iterator(Filter::new(source.into_iter(), predicate))
}

/// A lazy sequence that only yields the items satisfying a predicate.
///
/// This `struct` is created by [`filter()`]. See its documentation for more.
#[derive(Clone)]
pub struct Filter<I, P> {
    iter: Fuse<I>,
    pred: P,
}

impl<I, P> Filter<I, P> {
    pub(crate) fn new(iter: I, pred: P) -> Self {
        Self {
            iter: Fuse::new(iter),
            pred,
        }
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.find(&mut self.pred)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

impl<I: Debug, P> Debug for Filter<I, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter").field("iter", &self.iter).finish()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::cell::Cell;

    use crate::test_utils::Counting;

    use super::*;

    #[test]
    fn keeps_matches_in_order() {
        let words = ["kiwi", "plum", "banana", "fig", "cherry"];
        let long: Vec<_> = filter(words, |w| w.len() > 4).collect();
        assert_eq!(long, ["banana", "cherry"]);
    }

    #[test]
    fn advances_upstream_only_to_next_match() {
        let (cursor, pulls) = Counting::new([1, 3, 4, 5, 6, 7]);
        let mut evens = filter(cursor, |n| n % 2 == 0);

        assert_eq!(evens.next(), Some(4));
        assert_eq!(pulls.get(), 3);
        assert_eq!(evens.next(), Some(6));
        assert_eq!(pulls.get(), 5);
    }

    #[test]
    fn predicate_runs_once_per_upstream_item() {
        let calls = Cell::new(0);
        let kept = filter(0..7, |_| {
            calls.set(calls.get() + 1);
            calls.get() % 2 == 0
        })
        .count();

        assert_eq!(kept, 3);
        assert_eq!(calls.get(), 7);
    }

    #[test]
    fn nothing_matches() {
        let mut none = filter([1, 3, 5], |n| n % 2 == 0);
        assert_eq!(none.next(), None);
        assert_eq!(none.next(), None);
    }
}
