//! # Models Module
//!
//! Network descriptors, the resolved pairing and error types.

mod network;
pub use network::*;

mod pairing;
pub use pairing::*;

mod error;
pub use error::*;
