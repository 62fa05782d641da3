//! EVM Provider implementation for direct JSON-RPC connections.
//!
//! Both sides of a pairing talk to their chain through this provider, whether the
//! connection was handed over by the wallet or created from a network descriptor.

use std::time::Duration;

use alloy::{
    primitives::{Address, Bytes},
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::client::ClientBuilder,
    transports::http::{Client, Http},
};
use async_trait::async_trait;
use reqwest::ClientBuilder as ReqwestClientBuilder;

#[cfg(test)]
use mockall::automock;

use super::ProviderError;

/// Provider backed by a single HTTP RPC endpoint.
#[derive(Clone)]
pub struct EvmProvider {
    provider: RootProvider<Http<Client>>,
    rpc_url: String,
    timeout: Duration,
}

/// Read/write access to an EVM chain.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait EvmProviderTrait: Send + Sync {
    /// The endpoint this provider was built against.
    fn rpc_url(&self) -> String;

    /// Gets the chain id reported by the node.
    async fn get_chain_id(&self) -> Result<u64, ProviderError>;

    /// Performs a health check by attempting to get the latest block number.
    async fn health_check(&self) -> Result<bool, ProviderError>;

    /// Asks the node to sign `message` with an account it manages (`eth_sign`).
    ///
    /// # Arguments
    /// * `address` - The unlocked account to sign with
    /// * `message` - Raw message bytes
    async fn sign_message(&self, address: Address, message: &[u8])
        -> Result<Bytes, ProviderError>;
}

impl EvmProvider {
    /// Creates a new EVM provider instance.
    ///
    /// No request is made here; an unreachable endpoint only surfaces on the
    /// first call.
    ///
    /// # Arguments
    /// * `url` - The RPC endpoint
    /// * `timeout` - Per-request timeout of the HTTP client
    pub fn new(url: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let rpc_url: reqwest::Url = url.parse().map_err(|e| {
            ProviderError::NetworkConfiguration(format!("Invalid URL format '{}': {}", url, e))
        })?;

        let client = ReqwestClientBuilder::default()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Other(format!("Failed to build HTTP client: {}", e)))?;

        let mut transport = Http::new(rpc_url);
        transport.set_client(client);

        let is_local = transport.guess_local();
        let client = ClientBuilder::default().transport(transport, is_local);

        let provider = ProviderBuilder::new().on_client(client);

        Ok(Self {
            provider,
            rpc_url: url.to_string(),
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl EvmProviderTrait for EvmProvider {
    fn rpc_url(&self) -> String {
        self.rpc_url.clone()
    }

    async fn get_chain_id(&self) -> Result<u64, ProviderError> {
        log::debug!("Querying chain id from {}", self.rpc_url);
        self.provider
            .get_chain_id()
            .await
            .map_err(ProviderError::from)
    }

    async fn health_check(&self) -> Result<bool, ProviderError> {
        log::debug!("Checking {} is reachable", self.rpc_url);
        self.provider
            .get_block_number()
            .await
            .map(|_| true)
            .map_err(ProviderError::from)
    }

    async fn sign_message(
        &self,
        address: Address,
        message: &[u8],
    ) -> Result<Bytes, ProviderError> {
        let data = Bytes::copy_from_slice(message);
        self.provider
            .raw_request::<_, Bytes>("eth_sign".into(), (address, data))
            .await
            .map_err(ProviderError::from)
    }
}
