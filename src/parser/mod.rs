pub mod main;
pub mod record;
pub mod stream;

pub use main::*;
pub use record::*;
pub use stream::*;
