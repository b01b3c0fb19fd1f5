mod iterate;
mod iterthing;
#[cfg(feature = "alloc")]
mod one_shot;
mod repeatable;

pub use iterate::*;
pub use iterthing::*;
#[cfg(feature = "alloc")]
pub use one_shot::*;
pub use repeatable::*;
