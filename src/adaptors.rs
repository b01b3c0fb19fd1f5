mod chain;
mod filter;
mod fuse;
mod map;
mod pairs;
mod repeat;
mod steps;
mod zip;

pub use chain::*;
pub use filter::*;
pub(crate) use fuse::*;
pub use map::*;
pub use pairs::*;
pub use repeat::*;
pub use steps::*;
pub use zip::*;
