use std::{sync::Arc, time::Duration};

use alloy::transports::TransportError;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

mod evm;
pub use evm::*;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Network configuration error: {0}")]
    NetworkConfiguration(String),
    #[error("Request timed out")]
    Timeout,
    #[error("RPC error: {0}")]
    RpcError(String),
    #[error("Other provider error: {0}")]
    Other(String),
}

impl From<TransportError> for ProviderError {
    fn from(err: TransportError) -> Self {
        let message = err.to_string();
        let lowered = message.to_lowercase();
        if lowered.contains("timed out") || lowered.contains("timeout") {
            ProviderError::Timeout
        } else {
            ProviderError::RpcError(message)
        }
    }
}

/// Builds direct-RPC providers for network descriptors.
#[cfg_attr(test, automock)]
pub trait ProviderFactory: Send + Sync {
    fn create_provider(&self, rpc_url: &str) -> Result<Arc<dyn EvmProviderTrait>, ProviderError>;
}

/// Creates [`EvmProvider`]s sharing one request timeout.
#[derive(Debug, Clone)]
pub struct HttpProviderFactory {
    timeout: Duration,
}

impl HttpProviderFactory {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Factory using the configured RPC timeout in milliseconds.
    pub fn from_timeout_ms(rpc_timeout_ms: u64) -> Self {
        Self::new(Duration::from_millis(rpc_timeout_ms))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl ProviderFactory for HttpProviderFactory {
    fn create_provider(&self, rpc_url: &str) -> Result<Arc<dyn EvmProviderTrait>, ProviderError> {
        if rpc_url.is_empty() {
            return Err(ProviderError::NetworkConfiguration(
                "No RPC URL available for this network".to_string(),
            ));
        }
        let provider = EvmProvider::new(rpc_url, self.timeout)?;
        Ok(Arc::new(provider))
    }
}
