//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the extension trait and the protocol roles.
//!
//! # Example
//!
//! ```
//! use iterthing::prelude::*;
//!
//! assert_eq!([1, 2, 3].iter().copied().steps(0, |a, b| a + b).last_or_err(), Ok(6));
//! ```

pub use crate::error::EmptySequence;
pub use crate::iterator_ext::IterthingExt;
pub use crate::normalize::{Iterthing, Repeatable};
