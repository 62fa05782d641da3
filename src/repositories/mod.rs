//! # Repository Module
//!
//! Registry of network descriptors consulted during chain resolution.

mod network;
pub use network::*;
