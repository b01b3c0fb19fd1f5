use std::iter::FusedIterator;

#[cfg(feature = "alloc")]
use super::{OneShot, iterable};
use super::Repeatable;

/// Either shape of iterable input, tagged.
///
/// Most of the time the shape is known statically and [`iterate()`](crate::iterate) or
/// [`iterable()`](crate::iterable) can be called directly. `Iterthing` is for the places
/// where the shape is only known at runtime, such as a value that is sometimes a stored
/// collection and sometimes a live stream.
///
/// `Iterthing` implements [`IntoIterator`], so it can be passed to every combinator.
///
/// # Examples
///
/// ```
/// use iterthing::{Iterthing, collect};
///
/// fn source<'a>(
///     cached: Option<&'a Vec<u8>>,
///     live: std::slice::Iter<'a, u8>,
/// ) -> Iterthing<&'a Vec<u8>, std::slice::Iter<'a, u8>> {
///     match cached {
///         Some(bytes) => Iterthing::Repeatable(bytes),
///         None => Iterthing::Cursor(live),
///     }
/// }
///
/// let cache = vec![1, 2];
/// let stream = [7, 8, 9];
///
/// assert_eq!(collect(source(Some(&cache), stream.iter())), [&1, &2]);
/// assert_eq!(collect(source(None, stream[1..].iter())), [&8, &9]);
/// ```
#[derive(Debug)]
pub enum Iterthing<S, I> {
    /// A source that hands out a fresh cursor on demand.
    Repeatable(S),
    /// A cursor that is already positioned somewhere and is spent once drained.
    Cursor(I),
}

impl<S, I> Iterthing<S, I>
where
    S: Repeatable,
    I: Iterator<Item = S::Item>,
{
    /// Normalizes into a cursor.
    ///
    /// A repeatable source gets asked for a new cursor. A cursor is handed back as is.
    #[inline]
    pub fn iterate(self) -> Cursor<S::Cursor, I> {
        match self {
            Self::Repeatable(source) => Cursor::Fresh(source.cursor()),
            Self::Cursor(cursor) => Cursor::Given(cursor),
        }
    }

    /// Normalizes into a sequence view.
    ///
    /// A repeatable source is handed back as is. A cursor is wrapped into a
    /// [`OneShot`] view that shares the cursor's exhaustion.
    ///
    /// # Examples
    ///
    /// ```
    /// use iterthing::{Iterthing, Repeatable};
    ///
    /// let nums = [1, 2];
    /// let repeatable = Iterthing::<_, std::iter::Empty<_>>::Repeatable(&nums).iterable();
    /// assert_eq!(repeatable.cursor().count(), 2);
    /// assert_eq!(repeatable.cursor().count(), 2);
    ///
    /// let once = Iterthing::<&[i32; 0], _>::Cursor(nums.iter()).iterable();
    /// assert_eq!(once.cursor().count(), 2);
    /// assert_eq!(once.cursor().count(), 0);
    /// ```
    #[cfg(feature = "alloc")]
    #[inline]
    pub fn iterable(self) -> Sequence<S, I> {
        match self {
            Self::Repeatable(source) => Sequence::Repeatable(source),
            Self::Cursor(cursor) => Sequence::OneShot(iterable(cursor)),
        }
    }

    /// Returns `true` if this is a repeatable source.
    #[inline]
    pub fn is_repeatable(&self) -> bool {
        matches!(self, Self::Repeatable(_))
    }
}

impl<S, I> IntoIterator for Iterthing<S, I>
where
    S: Repeatable,
    I: Iterator<Item = S::Item>,
{
    type Item = S::Item;
    type IntoIter = Cursor<S::Cursor, I>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iterate()
    }
}

/// The cursor produced by normalizing an [`Iterthing`].
///
/// This `enum` is created by [`Iterthing::iterate()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub enum Cursor<F, G> {
    /// A new cursor requested from a repeatable source.
    Fresh(F),
    /// The cursor that was handed in.
    Given(G),
}

impl<F, G> Iterator for Cursor<F, G>
where
    F: Iterator,
    G: Iterator<Item = F::Item>,
{
    type Item = F::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Fresh(cursor) => cursor.next(),
            Self::Given(cursor) => cursor.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Fresh(cursor) => cursor.size_hint(),
            Self::Given(cursor) => cursor.size_hint(),
        }
    }
}

impl<F, G> FusedIterator for Cursor<F, G>
where
    F: FusedIterator,
    G: FusedIterator<Item = F::Item>,
{
}

/// A sequence view over either shape of input.
///
/// This `enum` is created by [`Iterthing::iterable()`]. See its documentation for more.
#[cfg(feature = "alloc")]
#[derive(Debug)]
pub enum Sequence<S, I> {
    /// The repeatable source, unchanged.
    Repeatable(S),
    /// A single-pass view over a cursor.
    OneShot(OneShot<I>),
}

#[cfg(feature = "alloc")]
impl<S, I> Repeatable for Sequence<S, I>
where
    S: Repeatable,
    I: Iterator<Item = S::Item>,
{
    type Item = S::Item;
    type Cursor = Cursor<S::Cursor, OneShot<I>>;

    #[inline]
    fn cursor(&self) -> Self::Cursor {
        match self {
            Self::Repeatable(source) => Cursor::Fresh(source.cursor()),
            Self::OneShot(view) => Cursor::Given(view.clone()),
        }
    }
}

#[cfg(feature = "alloc")]
impl<S, I> IntoIterator for Sequence<S, I>
where
    S: Repeatable,
    I: Iterator<Item = S::Item>,
{
    type Item = S::Item;
    type IntoIter = Cursor<S::Cursor, OneShot<I>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Repeatable(source) => Cursor::Fresh(source.cursor()),
            Self::OneShot(view) => Cursor::Given(view),
        }
    }
}
