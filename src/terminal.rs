#[cfg(feature = "alloc")]
mod collect;
mod each;
mod first;
mod last;
mod reduce;

#[cfg(feature = "alloc")]
pub use collect::*;
pub use each::*;
pub use first::*;
pub use last::*;
pub use reduce::*;
