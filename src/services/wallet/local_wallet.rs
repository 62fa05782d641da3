//! Wallet backed by an in-process private key and a single RPC endpoint.
//!
//! Stands in for a browser/extension wallet when running headless: whatever chain
//! the endpoint serves is the chain the wallet is "attached" to.
use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use log::{info, warn};

use crate::{
    models::WalletError,
    services::{EvmProvider, EvmProviderTrait, LocalSigner, Signer},
};

use super::{ConnectOptions, WalletConnection, WalletConnector, WalletState};

pub struct LocalWallet {
    provider: Arc<EvmProvider>,
    signer: Arc<LocalSigner>,
}

impl LocalWallet {
    pub fn new(provider: EvmProvider, signer: LocalSigner) -> Self {
        Self {
            provider: Arc::new(provider),
            signer: Arc::new(signer),
        }
    }
}

impl WalletConnection for LocalWallet {
    fn provider(&self) -> Arc<dyn EvmProviderTrait> {
        self.provider.clone()
    }

    fn signer(&self) -> Arc<dyn Signer> {
        self.signer.clone()
    }
}

#[derive(Debug, Clone)]
pub struct LocalWalletConnector {
    rpc_url: String,
    private_key: Option<String>,
    timeout: Duration,
}

impl LocalWalletConnector {
    pub fn new(rpc_url: String, private_key: Option<String>, timeout: Duration) -> Self {
        Self {
            rpc_url,
            private_key,
            timeout,
        }
    }
}

#[async_trait]
impl WalletConnector for LocalWalletConnector {
    async fn connect(&self, options: &ConnectOptions) -> Result<WalletState, WalletError> {
        // Without a key there is no account to hand over.
        let key = self.private_key.as_deref().ok_or(WalletError::Rejected)?;

        let signer =
            LocalSigner::from_hex(key).map_err(|e| WalletError::ConnectFailed(e.to_string()))?;
        let account = signer
            .address()
            .await
            .map_err(|e| WalletError::ConnectFailed(e.to_string()))?;

        let provider = EvmProvider::new(&self.rpc_url, self.timeout)
            .map_err(|e| WalletError::ConnectFailed(e.to_string()))?;
        let chain_id = provider
            .get_chain_id()
            .await
            .map_err(|e| WalletError::ConnectFailed(e.to_string()))?;

        if let Some(preferred) = options.preferred_chain_id {
            if preferred != chain_id {
                warn!(
                    "Local wallet cannot switch chains: preferred {}, endpoint serves {}",
                    preferred, chain_id
                );
            }
        }

        info!("Local wallet connected: account {} on chain {}", account, chain_id);
        let connection: Arc<dyn WalletConnection> = Arc::new(LocalWallet::new(provider, signer));
        Ok(WalletState::connected(connection, account, chain_id))
    }
}
