use crate::error::EmptySequence;

/// Drains `source` and returns the last item it produced.
///
/// Only the most recent item is kept while draining. A cursor handed in by `&mut` (or
/// shared through [`iterable()`](crate::iterable)) is exhausted afterwards.
///
/// # Errors
///
/// Returns [`EmptySequence`] if the very first advance reports completion.
///
/// # Examples
///
/// ```
/// use iterthing::{EmptySequence, last};
///
/// let mut cursor = [1, 2, 3].into_iter();
/// assert_eq!(last(&mut cursor), Ok(3));
/// assert_eq!(last(&mut cursor), Err(EmptySequence));
/// ```
pub fn last<S>(source: S) -> Result<S::Item, EmptySequence>
where
    S: IntoIterator,
{
    let mut cursor = source.into_iter();
    let Some(mut last) = cursor.next() else {
        log::trace!("last: sequence is empty");
        return Err(EmptySequence);
    };

    for item in cursor {
        last = item;
    }
    Ok(last)
}
