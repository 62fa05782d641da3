//! Signer service module.
//!
//! A pairing carries one signer per side. Which implementation backs it depends on
//! where the wallet is attached:
//!
//! ```text
//! Signer Trait (Common Interface)
//!   ├── LocalSigner (private key held in process, used by the local wallet)
//!   └── RpcSigner   (account managed by the node behind a direct RPC provider)
//! ```

use alloy::primitives::{Address, Bytes};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

mod local_signer;
pub use local_signer::*;

mod rpc_signer;
pub use rpc_signer::*;

use crate::models::SignerError;

#[async_trait]
#[cfg_attr(test, automock)]
pub trait Signer: Send + Sync {
    /// Returns the signer's address
    async fn address(&self) -> Result<Address, SignerError>;

    /// Signs arbitrary message data (EIP-191 personal message)
    async fn sign_data(&self, message: &[u8]) -> Result<Bytes, SignerError>;
}
