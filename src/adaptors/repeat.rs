use std::{fmt::Debug, iter::FusedIterator};

use crate::assert_iterator;

/// Creates a lazy sequence yielding `value` exactly `times` times.
///
/// `times` may be any integer. A count that does not fit in a `usize`, which includes
/// every negative count, yields nothing.
///
/// The last item is `value` itself, the ones before it are clones.
///
/// # Examples
///
/// ```
/// use iterthing::{collect, repeat};
///
/// assert_eq!(collect(repeat(42, 3)), [42, 42, 42]);
/// assert!(collect(repeat(42, 0)).is_empty());
/// assert!(collect(repeat(42, -1)).is_empty());
/// ```
#[inline]
pub fn repeat<T, N>(value: T, times: N) -> Repeat<T>
where
    T: Clone,
    N: TryInto<usize>,
{
    let remaining = count(times);
    assert_iterator(Repeat {
        value: (remaining > 0).then_some(value),
        remaining,
    })
}

/// Creates a lazy sequence calling `producer` afresh for each of its `times` items.
///
/// `producer` runs once per pulled item, so side effects happen only as the sequence is
/// consumed. `times` follows the same rules as in [`repeat()`].
///
/// # Examples
///
/// ```
/// use iterthing::{collect, repeat_with};
///
/// assert_eq!(collect(repeat_with(|| 42, 3)), [42, 42, 42]);
///
/// let mut next_id = 0;
/// let ids = collect(repeat_with(
///     || {
///         next_id += 1;
///         next_id
///     },
///     4,
/// ));
/// assert_eq!(ids, [1, 2, 3, 4]);
/// ```
#[inline]
pub fn repeat_with<F, T, N>(producer: F, times: N) -> RepeatWith<F>
where
    F: FnMut() -> T,
    N: TryInto<usize>,
{
    assert_iterator(RepeatWith {
        f: producer,
        remaining: count(times),
    })
}

#[inline]
fn count(times: impl TryInto<usize>) -> usize {
    times.try_into().unwrap_or(0)
}

/// A lazy sequence repeating one value a fixed number of times.
///
/// This `struct` is created by [`repeat()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: Option<T>,
    remaining: usize,
}

impl<T: Clone> Iterator for Repeat<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        match self.remaining {
            0 => None,
            1 => {
                self.remaining = 0;
                self.value.take()
            }
            _ => {
                self.remaining -= 1;
                self.value.clone()
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> FusedIterator for Repeat<T> {}

impl<T: Clone> ExactSizeIterator for Repeat<T> {}

/// A lazy sequence of a fixed number of calls to a producer.
///
/// This `struct` is created by [`repeat_with()`]. See its documentation for more.
#[derive(Clone)]
pub struct RepeatWith<F> {
    f: F,
    remaining: usize,
}

impl<T, F: FnMut() -> T> Iterator for RepeatWith<F> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some((self.f)())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, F: FnMut() -> T> FusedIterator for RepeatWith<F> {}

impl<T, F: FnMut() -> T> ExactSizeIterator for RepeatWith<F> {}

impl<F> Debug for RepeatWith<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepeatWith")
            .field("remaining", &self.remaining)
            .finish()
    }
}
