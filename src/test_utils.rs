mod adaptor_tester;
mod cursors;

pub use adaptor_tester::*;
pub use cursors::*;
