use std::sync::Arc;

use alloy::primitives::{Address, Bytes};
use async_trait::async_trait;

use crate::{
    models::SignerError,
    services::{EvmProviderTrait, Signer},
};

/// Signer for an account managed by the node behind `provider`.
///
/// Used for the side of a pairing the wallet is not attached to: the wallet
/// address is known, but signing has to go through a direct RPC connection.
#[derive(Clone)]
pub struct RpcSigner {
    provider: Arc<dyn EvmProviderTrait>,
    address: Address,
}

impl RpcSigner {
    pub fn new(provider: Arc<dyn EvmProviderTrait>, address: Address) -> Self {
        Self { provider, address }
    }

    pub fn provider(&self) -> &Arc<dyn EvmProviderTrait> {
        &self.provider
    }
}

impl std::fmt::Debug for RpcSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcSigner")
            .field("rpc_url", &self.provider.rpc_url())
            .field("address", &self.address)
            .finish()
    }
}

#[async_trait]
impl Signer for RpcSigner {
    async fn address(&self) -> Result<Address, SignerError> {
        Ok(self.address)
    }

    async fn sign_data(&self, message: &[u8]) -> Result<Bytes, SignerError> {
        self.provider
            .sign_message(self.address, message)
            .await
            .map_err(|e| SignerError::ProviderError(e.to_string()))
    }
}
