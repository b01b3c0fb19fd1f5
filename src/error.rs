use thiserror::Error;

/// The error returned when a value is demanded from a sequence that has nothing left.
///
/// Produced by [`first()`](crate::first) and [`last()`](crate::last) (and their
/// [`IterthingExt`](crate::IterthingExt) counterparts) when the very first advance of the
/// cursor already reports completion.
///
/// # Examples
///
/// ```
/// use iterthing::{first, EmptySequence};
///
/// assert_eq!(first(Vec::<i32>::new()), Err(EmptySequence));
/// assert_eq!(EmptySequence.to_string(), "sequence is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("sequence is empty")]
pub struct EmptySequence;

/// A [`Result`](std::result::Result) defaulting to [`EmptySequence`] as its error.
pub type Result<T, E = EmptySequence> = std::result::Result<T, E>;
