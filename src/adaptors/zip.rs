use std::iter::FusedIterator;

use super::Fuse;
use crate::assert_iterator;

/// Creates a lazy sequence of pairs advancing `lhs` and `rhs` in lockstep.
///
/// Every step advances both sides once. The sequence goes on as long as at least one
/// side still has items: once a side is exhausted, its slot is `None` in every later
/// pair (it is not polled again and its last value is not repeated). The sequence ends
/// when both sides are exhausted.
///
/// # Examples
///
/// ```
/// use iterthing::{collect, zip};
///
/// assert_eq!(
///     collect(zip([1, 2, 3], ['a', 'b'])),
///     [(Some(1), Some('a')), (Some(2), Some('b')), (Some(3), None)],
/// );
/// ```
#[inline]
pub fn zip<L, R>(lhs: L, rhs: R) -> Zip<L::IntoIter, R::IntoIter>
where
    L: IntoIterator,
    R: IntoIterator,
{
    assert_iterator(Zip::new(lhs.into_iter(), rhs.into_iter()))
}

/// A lazy sequence of pairs running until both sides are exhausted.
///
/// This `struct` is created by [`zip()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Zip<L, R> {
    lhs: Fuse<L>,
    rhs: Fuse<R>,
}

impl<L, R> Zip<L, R> {
    pub(crate) fn new(lhs: L, rhs: R) -> Self {
        Self {
            lhs: Fuse::new(lhs),
            rhs: Fuse::new(rhs),
        }
    }
}

impl<L, R> Zip<L, R>
where
    L: Iterator,
    R: Iterator,
{
    /// Re-expresses each pair as an [`EitherOrBoth`](itertools::EitherOrBoth).
    ///
    /// # Examples
    ///
    /// ```
    /// use iterthing::zip;
    /// use itertools::EitherOrBoth::{Both, Left};
    ///
    /// let zipped: Vec<_> = zip([1, 2], ['x']).either_or_both().collect();
    /// assert_eq!(zipped, [Both(1, 'x'), Left(2)]);
    /// ```
    #[cfg(feature = "itertools")]
    pub fn either_or_both(
        self,
    ) -> impl FusedIterator<Item = itertools::EitherOrBoth<L::Item, R::Item>> {
        use itertools::EitherOrBoth;

        // A pair from `Zip` always has at least one side.
        self.filter_map(|pair| match pair {
            (Some(l), Some(r)) => Some(EitherOrBoth::Both(l, r)),
            (Some(l), None) => Some(EitherOrBoth::Left(l)),
            (None, Some(r)) => Some(EitherOrBoth::Right(r)),
            (None, None) => None,
        })
        .fuse()
    }
}

impl<L, R> Iterator for Zip<L, R>
where
    L: Iterator,
    R: Iterator,
{
    type Item = (Option<L::Item>, Option<R::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        let was_running = (!self.lhs.finished(), !self.rhs.finished());

        match (self.lhs.next(), self.rhs.next()) {
            (None, None) => None,
            pair => {
                if was_running.0 && pair.0.is_none() {
                    log::trace!("zip: left side exhausted, right side continues");
                } else if was_running.1 && pair.1.is_none() {
                    log::trace!("zip: right side exhausted, left side continues");
                }
                Some(pair)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (l_lower, l_upper) = self.lhs.size_hint();
        let (r_lower, r_upper) = self.rhs.size_hint();

        let upper = match (l_upper, r_upper) {
            (Some(l), Some(r)) => Some(l.max(r)),
            _ => None,
        };
        (l_lower.max(r_lower), upper)
    }
}

impl<L, R> FusedIterator for Zip<L, R>
where
    L: Iterator,
    R: Iterator,
{
}

impl<L, R> ExactSizeIterator for Zip<L, R>
where
    L: ExactSizeIterator,
    R: ExactSizeIterator,
{
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use rstest::rstest;

    use crate::test_utils::{Counting, Unfused};

    use super::*;

    #[rstest]
    #[case(&[1, 2, 3], &['a', 'b'], &[(Some(1), Some('a')), (Some(2), Some('b')), (Some(3), None)])]
    #[case(&[1], &['a', 'b', 'c'], &[(Some(1), Some('a')), (None, Some('b')), (None, Some('c'))])]
    #[case(&[1, 2], &['a', 'b'], &[(Some(1), Some('a')), (Some(2), Some('b'))])]
    #[case(&[], &['a'], &[(None, Some('a'))])]
    #[case(&[], &[], &[])]
    fn runs_until_both_sides_are_exhausted(
        #[case] lhs: &[i32],
        #[case] rhs: &[char],
        #[case] expected: &[(Option<i32>, Option<char>)],
    ) {
        let zipped: Vec<_> = zip(lhs.iter().copied(), rhs.iter().copied()).collect();
        assert_eq!(zipped, expected);
    }

    #[test]
    fn exhausted_side_is_not_polled_again() {
        let (short, short_pulls) = Counting::new(Unfused::new([1]));
        let mut zipped = zip(short, 0..4);

        assert_eq!(zipped.by_ref().count(), 4);
        // One item, then one completion; `Unfused` would have restarted otherwise.
        assert_eq!(short_pulls.get(), 2);
        assert_eq!(zipped.next(), None);
        assert_eq!(short_pulls.get(), 2);
    }

    #[test]
    fn advances_both_sides_once_per_step() {
        let (lhs, lhs_pulls) = Counting::new(0..10);
        let (rhs, rhs_pulls) = Counting::new(0..10);
        let mut zipped = zip(lhs, rhs);

        zipped.next();
        zipped.next();
        assert_eq!((lhs_pulls.get(), rhs_pulls.get()), (2, 2));
    }

    #[test]
    fn size_hint_is_the_longer_side() {
        let zipped = zip([1, 2, 3], [4]);
        assert_eq!(zipped.size_hint(), (3, Some(3)));
        assert_eq!(zipped.len(), 3);
        assert_eq!(zip(0.., [1]).size_hint(), (usize::MAX, None));
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use itertools::{EitherOrBoth, Itertools};
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::test_utils::test_adaptor;

    use super::*;

    proptest! {
        #[test]
        fn matches_zip_longest(
            lhs in propvec(any::<u8>(), ..=8),
            rhs in propvec(any::<char>(), ..=8),
        ) {
            let expected = lhs
                .iter()
                .copied()
                .zip_longest(rhs.iter().copied())
                .map(|pair| match pair {
                    EitherOrBoth::Both(l, r) => (Some(l), Some(r)),
                    EitherOrBoth::Left(l) => (Some(l), None),
                    EitherOrBoth::Right(r) => (None, Some(r)),
                })
                .collect();
            test_adaptor("zip", lhs, |src| zip(src, rhs.clone()), expected)?;
        }
    }
}
