use std::{fmt::Debug, iter::FusedIterator};

use super::Fuse;
use crate::assert_iterator;

/// Creates a lazy sequence of `transform(x)` for every `x` of `source`, in order.
///
/// `transform` runs exactly once per produced item, and only when that item is pulled.
///
/// # Examples
///
/// ```
/// use iterthing::{collect, map};
///
/// let words = ["apple", "fig"];
/// assert_eq!(collect(map(&words, |w| w.len())), [5, 3]);
/// ```
#[inline]
pub fn map<S, F, B>(source: S, transform: F) -> Map<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> B,
{
    assert_iterator(Map::new(source.into_iter(), transform))
}

/// A lazy sequence that calls a closure on each item of the sequence under it.
///
/// This `struct` is created by [`map()`]. See its documentation for more.
#[derive(Clone)]
pub struct Map<I, F> {
    iter: Fuse<I>,
    f: F,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        Self {
            iter: Fuse::new(iter),
            f,
        }
    }
}

impl<B, I, F> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.iter.next().map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<B, I, F> FusedIterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
}

impl<I: Debug, F> Debug for Map<I, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map").field("iter", &self.iter).finish()
    }
}


#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::test_utils::test_adaptor;

    use super::*;

    proptest! {
        #[test]
        fn matches_std_map(nums in propvec(any::<i32>(), ..=16)) {
            let expected = nums.iter().map(|n| n.wrapping_mul(3)).collect();
            test_adaptor("map", nums, |src| map(src, |n| n.wrapping_mul(3)), expected)?;
        }
    }
}
