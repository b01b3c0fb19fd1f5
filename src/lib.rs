//! Lazy sequence combinators over anything you can iterate, once or many times.
//!
//! Rust already has two shapes of "thing you can iterate":
//!
//! - A *repeatable source*, such as `&Vec<T>`, `&[T]` or `0..10`, which hands out a fresh
//!   cursor every time you ask and is never used up by doing so.
//! - A *cursor*, i.e. any [`Iterator`], which remembers its position and is spent once it
//!   returns `None`.
//!
//! This crate takes both behind one normalizer ([`iterate`], [`iterable`], [`Iterthing`])
//! and builds a small set of combinators on top:
//!
//! - Lazy adaptors: [`map()`], [`filter()`], [`chain()`], [`zip()`], [`pairs()`],
//!   [`repeat()`], [`repeat_with()`] and [`steps()`].
//! - Terminals: [`collect()`], [`each()`], [`first()`], [`last()`] and [`reduce()`],
//!   plus the fallible [`try_each()`] and [`try_reduce()`].
//!
//! Every adaptor is a plain state machine: it stays idle until pulled, produces exactly one
//! item per pull, and once it has returned `None` it keeps returning `None`, no matter how
//! the cursor underneath behaves afterwards.
//!
//! # Examples
//!
//! ```
//! use iterthing::{prelude::*, pairs, steps, zip};
//!
//! let nums = vec![1, 2, 3, 4];
//!
//! // A `&Vec` is repeatable: each call gets its own cursor.
//! let deltas: Vec<_> = pairs(&nums).map(|(a, b)| b - a).collect();
//! let sums: Vec<_> = steps(&nums, |acc, &n| acc + n, 0).collect();
//!
//! assert_eq!(deltas, [1, 1, 1]);
//! assert_eq!(sums, [1, 3, 6, 10]);
//!
//! // Zipping keeps going while either side has something left.
//! let zipped: Vec<_> = zip(&nums, ["a", "b"]).collect();
//! assert_eq!(zipped[1], (Some(&2), Some("b")));
//! assert_eq!(zipped[3], (Some(&4), None));
//! ```
//!
//! A cursor, on the other hand, is shared with whoever else holds it:
//!
//! ```
//! use iterthing::{first, iterable, last};
//!
//! let mut cursor = [10, 20, 30, 40].into_iter();
//!
//! assert_eq!(first(&mut cursor), Ok(10));
//! assert_eq!(first(&mut cursor), Ok(20));
//!
//! let view = iterable(cursor);
//! assert_eq!(view.clone().collect::<Vec<_>>(), [30, 40]);
//! assert!(last(view).is_err());
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

mod adaptors;
mod error;
mod iterator_ext;
mod normalize;
pub mod prelude;
mod terminal;
#[cfg(all(test, feature = "std"))]
mod test_utils;

pub use adaptors::*;
pub use error::*;
pub use iterator_ext::*;
pub use normalize::*;
pub use terminal::*;

#[inline(always)]
fn assert_iterator<I: Iterator>(iter: I) -> I {
    iter
}
