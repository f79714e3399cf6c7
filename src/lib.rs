#[macro_use]
extern crate log;

pub use error::{ScratchError, ScratchResult};
pub use fixture::ScratchDir;

pub mod context;
pub mod error;
pub mod file;
pub mod fixture;
