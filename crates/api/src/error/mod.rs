//! Error handling for the bls381 ecosystem

pub mod traits;
pub mod types;

pub use traits::ResultExt;
pub use types::{Error, ErrorKind, Result};
