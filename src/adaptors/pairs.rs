use std::iter::FusedIterator;

use super::Fuse;
use crate::assert_iterator;

/// Creates a lazy sequence of overlapping consecutive pairs: `(x0, x1), (x1, x2), …`.
///
/// A source with fewer than two items produces no pairs. A source of `n >= 2` items
/// produces exactly `n - 1` pairs. Each item but the first and the last appears in two
/// pairs, hence the [`Clone`] bound.
///
/// # Examples
///
/// ```
/// use iterthing::{collect, pairs};
///
/// assert_eq!(collect(pairs([1, 2, 3, 4])), [(1, 2), (2, 3), (3, 4)]);
/// assert!(collect(pairs([1])).is_empty());
/// ```
#[inline]
pub fn pairs<S>(source: S) -> Pairs<S::IntoIter>
where
    S: IntoIterator<Item: Clone>,
{
    assert_iterator(Pairs::new(source.into_iter()))
}

/// A lazy sequence of overlapping windows of two.
///
/// This `struct` is created by [`pairs()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Pairs<I: Iterator> {
    iter: Fuse<I>,
    prev: Option<I::Item>,
}

impl<I: Iterator> Pairs<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter: Fuse::new(iter),
            prev: None,
        }
    }
}

impl<I> Iterator for Pairs<I>
where
    I: Iterator<Item: Clone>,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let prev = match self.prev.take() {
            Some(prev) => prev,
            None => self.iter.next()?,
        };
        let next = self.iter.next()?;

        self.prev = Some(next.clone());
        Some((prev, next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();

        if self.prev.is_some() {
            (lower, upper)
        } else {
            (lower.saturating_sub(1), upper.map(|upper| upper.saturating_sub(1)))
        }
    }
}

impl<I> FusedIterator for Pairs<I> where I: Iterator<Item: Clone> {}

impl<I> ExactSizeIterator for Pairs<I> where I: ExactSizeIterator<Item: Clone> {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use rstest::rstest;

    use crate::test_utils::Counting;

    use super::*;

    #[rstest]
    #[case(&[], &[])]
    #[case(&[1], &[])]
    #[case(&[1, 2], &[(1, 2)])]
    #[case(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4)])]
    fn overlapping_windows(#[case] source: &[i32], #[case] expected: &[(i32, i32)]) {
        let windows: Vec<_> = pairs(source.iter().copied()).collect();
        assert_eq!(windows, expected);
        assert_eq!(pairs(source).len(), expected.len());
    }

    #[test]
    fn pulls_one_ahead_of_nothing() {
        let (cursor, pulls) = Counting::new(0..100);
        let mut windows = pairs(cursor);

        assert_eq!(windows.next(), Some((0, 1)));
        assert_eq!(pulls.get(), 2);
        assert_eq!(windows.next(), Some((1, 2)));
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn owned_items_are_cloned_once_per_pair() {
        let words = ["a", "b", "c"].map(String::from);
        let joined: Vec<_> = pairs(words).map(|(a, b)| a + &b).collect();
        assert_eq!(joined, ["ab", "bc"]);
    }
}
