use alloc::rc::Rc;
use std::{cell::RefCell, fmt::Debug, iter::FusedIterator};

use crate::{adaptors::Fuse, assert_iterator};

/// Wraps a cursor into a sequence view that can be consumed exactly once.
///
/// The returned [`OneShot`] is a shared handle: every clone of it, and every cursor
/// obtained from it through [`Repeatable::cursor()`](crate::Repeatable::cursor), advances
/// the very same underlying cursor. Draining the view once therefore exhausts it for all
/// holders, and draining it a second time yields an empty run rather than an error.
///
/// Repeatable sources do not need this treatment; see [`Iterthing::iterable()`] for the
/// entry point that accepts both shapes.
///
/// # Examples
///
/// ```
/// use iterthing::{collect, iterable};
///
/// let view = iterable([1, 2, 3].into_iter());
///
/// assert_eq!(collect(view.clone()), [1, 2, 3]);
/// assert!(collect(view).is_empty());
/// ```
///
/// [`Iterthing::iterable()`]: crate::Iterthing::iterable
#[inline]
pub fn iterable<I>(cursor: I) -> OneShot<I>
where
    I: Iterator,
{
    assert_iterator(OneShot::new(cursor))
}

/// A single-pass sequence view over a shared cursor.
///
/// This `struct` is created by [`iterable()`]. See its documentation for more.
///
/// # Panics
///
/// The wrapped cursor must not advance the view it is wrapped in from inside its own
/// `next()`. Such re-entrant advancement panics.
pub struct OneShot<I> {
    shared: Rc<RefCell<Fuse<I>>>,
}

impl<I: Iterator> OneShot<I> {
    #[inline]
    fn new(cursor: I) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Fuse::new(cursor))),
        }
    }

    /// Returns `true` once the underlying cursor has reported completion.
    ///
    /// A view that has not been drained to the end yet returns `false`, even if
    /// there happens to be nothing left in it.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.shared.borrow().finished()
    }

    /// Returns `true` if `self` and `other` advance the same cursor.
    #[inline]
    pub fn shares_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl<I> Clone for OneShot<I> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<I: Iterator> Iterator for OneShot<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let mut shared = self.shared.borrow_mut();
        if shared.finished() {
            log::trace!("one-shot sequence polled after exhaustion");
            return None;
        }

        shared.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.shared.borrow().size_hint()
    }
}

impl<I: Iterator> FusedIterator for OneShot<I> {}

impl<I: Debug> Debug for OneShot<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.shared.try_borrow() {
            Ok(shared) => f.debug_struct("OneShot").field("cursor", &*shared).finish(),
            Err(_) => f.debug_struct("OneShot").finish_non_exhaustive(),
        }
    }
}
