/// Calls `callback` on every item of `source`, in order, for its side effects.
///
/// Whatever `callback` returns is discarded. There is no way to stop early; see
/// [`try_each()`] for that.
///
/// # Examples
///
/// ```
/// use iterthing::each;
///
/// let mut seen = String::new();
/// each(["a", "b"], |s| seen.push_str(s));
/// assert_eq!(seen, "ab");
/// ```
#[inline]
pub fn each<S, F, R>(source: S, mut callback: F)
where
    S: IntoIterator,
    F: FnMut(S::Item) -> R,
{
    for item in source {
        callback(item);
    }
}

/// Calls the fallible `callback` on every item of `source`, in order, stopping at the
/// first error.
///
/// The error is returned unchanged. Items after the failing one are not pulled, so a
/// cursor handed in by reference is left just past the failing item.
///
/// # Examples
///
/// ```
/// use iterthing::try_each;
///
/// let mut cursor = ["1", "x", "3"].into_iter();
/// let mut sum = 0;
///
/// let outcome = try_each(&mut cursor, |s| {
///     sum += s.parse::<i32>()?;
///     Ok::<_, std::num::ParseIntError>(())
/// });
///
/// assert!(outcome.is_err());
/// assert_eq!(sum, 1);
/// assert_eq!(cursor.next(), Some("3"));
/// ```
#[inline]
pub fn try_each<S, F, E>(source: S, callback: F) -> Result<(), E>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> Result<(), E>,
{
    source.into_iter().try_for_each(callback)
}
