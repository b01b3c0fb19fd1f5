use std::{fmt::Debug, iter::FusedIterator};

use super::Fuse;
use crate::assert_iterator;

/// Creates a lazy sequence of all items of the first source, then all items of the
/// second, and so on.
///
/// Sources are normalized and drained strictly from left to right. A source is not
/// touched, not even turned into a cursor, until every source before it has reported
/// completion.
///
/// Each source may be a repeatable source or a cursor, but they all have to be of the
/// same type. To chain sources of different types, nest [`Iterator::chain`] or chain
/// `Box<dyn Iterator>`s.
///
/// # Examples
///
/// ```
/// use iterthing::{chain, collect};
///
/// let parts: [&[i32]; 4] = [&[1, 2], &[3], &[], &[4]];
/// assert_eq!(collect(chain(parts)), [&1, &2, &3, &4]);
/// ```
#[inline]
pub fn chain<S>(sources: S) -> Chain<S::IntoIter, <S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    assert_iterator(Chain::new(sources.into_iter()))
}

/// A lazy sequence running through several sources one after another.
///
/// This `struct` is created by [`chain()`]. See its documentation for more.
#[derive(Clone)]
pub struct Chain<O, I> {
    sources: Fuse<O>,
    current: Option<I>,
}

impl<O, I> Chain<O, I> {
    pub(crate) fn new(sources: O) -> Self {
        Self {
            sources: Fuse::new(sources),
            current: None,
        }
    }
}

impl<O, I> Iterator for Chain<O, I>
where
    O: Iterator<Item: IntoIterator<IntoIter = I>>,
    I: Iterator<Item = <O::Item as IntoIterator>::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = &mut self.current {
                if let Some(item) = current.next() {
                    return Some(item);
                }

                // Dropped rather than kept, so it is never polled past its completion.
                self.current = None;
            }

            let source = self.sources.next()?;
            log::trace!("chain moving on to the next source");
            self.current = Some(source.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self
            .current
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint);

        // Nothing is known about sources that are not normalized yet.
        match self.sources.size_hint() {
            (0, Some(0)) => (lower, upper),
            _ => (lower, None),
        }
    }
}

impl<O, I> FusedIterator for Chain<O, I>
where
    O: Iterator<Item: IntoIterator<IntoIter = I>>,
    I: Iterator<Item = <O::Item as IntoIterator>::Item>,
{
}

impl<O: Debug, I: Debug> Debug for Chain<O, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("sources", &self.sources)
            .field("current", &self.current)
            .finish()
    }
}
