use std::{fmt::Debug, iter::FusedIterator};

use super::Fuse;
use crate::assert_iterator;

/// Creates a lazy running fold: every intermediate state of folding `source` with
/// `combine`, starting from `initial`.
///
/// Each upstream item produces exactly one state, `state = combine(state, item)`.
/// `initial` itself is never yielded, so an empty source produces an empty sequence.
///
/// The final value of this sequence is what [`reduce()`](crate::reduce) returns.
///
/// # Examples
///
/// ```
/// use iterthing::{collect, steps};
///
/// assert_eq!(collect(steps([1, 2, 3], |acc, n| acc + n, 0)), [1, 3, 6]);
/// assert!(collect(steps(Vec::<i32>::new(), |acc, n| acc + n, 0)).is_empty());
/// ```
#[inline]
pub fn steps<S, B, F>(source: S, combine: F, initial: B) -> Steps<S::IntoIter, B, F>
where
    S: IntoIterator,
    B: Clone,
    F: FnMut(B, S::Item) -> B,
{
    assert_iterator(Steps::new(source.into_iter(), initial, combine))
}

/// A lazy sequence of the intermediate states of a fold.
///
/// This `struct` is created by [`steps()`]. See its documentation for more.
#[derive(Clone)]
pub struct Steps<I, B, F> {
    iter: Fuse<I>,
    // `None` only if `combine` panicked halfway, which ends the sequence.
    state: Option<B>,
    f: F,
}

impl<I, B, F> Steps<I, B, F> {
    pub(crate) fn new(iter: I, initial: B, f: F) -> Self {
        Self {
            iter: Fuse::new(iter),
            state: Some(initial),
            f,
        }
    }

    /// Returns the current state: the last yielded value, or the initial state if
    /// nothing has been yielded yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use iterthing::steps;
    ///
    /// let mut running = steps([2, 3], |acc, n| acc * n, 1);
    /// assert_eq!(running.state(), Some(&1));
    ///
    /// running.next();
    /// assert_eq!(running.state(), Some(&2));
    /// ```
    #[inline]
    pub fn state(&self) -> Option<&B> {
        self.state.as_ref()
    }

    /// Consumes the sequence, returning its current state.
    #[inline]
    pub fn into_state(self) -> Option<B> {
        self.state
    }
}

impl<I, B, F> Iterator for Steps<I, B, F>
where
    I: Iterator,
    B: Clone,
    F: FnMut(B, I::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        self.state.as_ref()?;
        let item = self.iter.next()?;
        let state = (self.f)(self.state.take()?, item);

        self.state = Some(state.clone());
        Some(state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state.is_some() {
            self.iter.size_hint()
        } else {
            (0, Some(0))
        }
    }
}

impl<I, B, F> FusedIterator for Steps<I, B, F>
where
    I: Iterator,
    B: Clone,
    F: FnMut(B, I::Item) -> B,
{
}

impl<I: Debug, B: Debug, F> Debug for Steps<I, B, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Steps")
            .field("iter", &self.iter)
            .field("state", &self.state)
            .finish()
    }
}
