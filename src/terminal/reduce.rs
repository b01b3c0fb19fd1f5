/// Folds `source` into a single value with `combine`, starting from `initial`.
///
/// This is the final value of [`steps(source, combine, initial)`](crate::steps), except
/// that an empty source yields `initial` instead of failing: reducing never errors.
///
/// # Examples
///
/// ```
/// use iterthing::reduce;
///
/// assert_eq!(reduce([1, 2, 3], |acc, n| acc + n, 0), 6);
/// assert_eq!(reduce(Vec::<i32>::new(), |acc, n| acc + n, 0), 0);
/// ```
#[inline]
pub fn reduce<S, B, F>(source: S, combine: F, initial: B) -> B
where
    S: IntoIterator,
    F: FnMut(B, S::Item) -> B,
{
    source.into_iter().fold(initial, combine)
}

/// Folds `source` with the fallible `combine`, stopping at the first error.
///
/// The error is returned unchanged and the items after the failing one are not pulled.
/// On an empty source, returns `Ok(initial)`.
///
/// # Examples
///
/// ```
/// use iterthing::try_reduce;
///
/// let sum = try_reduce([200_u8, 50, 10], |acc: u8, n| acc.checked_add(n).ok_or(acc), 0);
/// assert_eq!(sum, Err(250));
/// ```
#[inline]
pub fn try_reduce<S, B, F, E>(source: S, combine: F, initial: B) -> Result<B, E>
where
    S: IntoIterator,
    F: FnMut(B, S::Item) -> Result<B, E>,
{
    source.into_iter().try_fold(initial, combine)
}
