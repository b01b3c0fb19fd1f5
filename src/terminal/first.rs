use crate::error::EmptySequence;

/// Advances `source` once and returns what it produced.
///
/// Handing in a cursor by `&mut` advances that cursor, so calling `first` twice on it
/// returns two successive items.
///
/// # Errors
///
/// Returns [`EmptySequence`] if the very first advance reports completion.
///
/// # Examples
///
/// ```
/// use iterthing::{EmptySequence, first};
///
/// let mut cursor = [1, 2].into_iter();
/// assert_eq!(first(&mut cursor), Ok(1));
/// assert_eq!(first(&mut cursor), Ok(2));
/// assert_eq!(first(&mut cursor), Err(EmptySequence));
/// ```
pub fn first<S>(source: S) -> Result<S::Item, EmptySequence>
where
    S: IntoIterator,
{
    source.into_iter().next().ok_or_else(|| {
        log::trace!("first: sequence is empty");
        EmptySequence
    })
}
