use alloc::vec::Vec;

/// Drains `source` into a new [`Vec`], keeping the order the items were produced in.
///
/// Collecting an already exhausted cursor is fine and yields an empty `Vec`, as many
/// times as it is asked to.
///
/// # Examples
///
/// ```
/// use iterthing::collect;
///
/// let mut cursor = "ab".chars();
/// assert_eq!(collect(&mut cursor), ['a', 'b']);
/// assert!(collect(&mut cursor).is_empty());
/// ```
#[inline]
pub fn collect<S>(source: S) -> Vec<S::Item>
where
    S: IntoIterator,
{
    source.into_iter().collect()
}
