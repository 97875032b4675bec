pub mod header;
pub mod log;
pub mod track;

pub use header::*;
pub use log::*;
pub use track::*;
