/// Turns any iterable input into a cursor.
///
/// - Given a cursor (any [`Iterator`]), returns it unchanged. Its position is kept, so
///   whatever was already consumed stays consumed.
/// - Given a repeatable source such as `&Vec<T>`, requests a brand new cursor from it,
///   leaving the source untouched.
///
/// Every combinator and terminal in this crate normalizes its input through this function,
/// which is why all of them accept both shapes.
///
/// # Examples
///
/// ```
/// use iterthing::iterate;
///
/// let nums = vec![1, 2, 3];
/// assert_eq!(iterate(&nums).count(), 3);
/// assert_eq!(iterate(&nums).count(), 3);
///
/// let mut cursor = nums.into_iter();
/// cursor.next();
/// assert_eq!(iterate(cursor).collect::<Vec<_>>(), [2, 3]);
/// ```
#[inline]
pub fn iterate<S>(source: S) -> S::IntoIter
where
    S: IntoIterator,
{
    source.into_iter()
}
