//! This module contains all the constant values used in the system
mod network;
pub use network::*;

/// Default timeout for direct RPC requests.
pub const DEFAULT_RPC_TIMEOUT_MS: u64 = 10_000;
