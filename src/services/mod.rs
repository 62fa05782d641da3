//! # Services Module
//!
//! Chain access for the resolver: providers, signers and the wallet boundary.

mod provider;
pub use provider::*;

mod signer;
pub use signer::*;

mod wallet;
pub use wallet::*;
