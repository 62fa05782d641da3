//! Turns resolved descriptors into live base/rollup connections.
//!
//! The wallet side reuses the wallet's own signer. The other side gets a fresh
//! direct provider built from its descriptor's RPC endpoint, with a signer that
//! acts for the wallet account through that provider.

use std::sync::Arc;

use alloy::primitives::Address;
use log::debug;

use crate::{
    models::{ChainConnection, ConnectionPairing, Orientation, ResolutionError},
    services::{EvmProviderTrait, ProviderFactory, RpcSigner, Signer, WalletConnection},
};

use super::ResolvedChains;

pub struct ConnectionMaterializer<P: ProviderFactory> {
    factory: Arc<P>,
    verify_rpc_chain_id: bool,
}

impl<P: ProviderFactory> ConnectionMaterializer<P> {
    pub fn new(factory: Arc<P>, verify_rpc_chain_id: bool) -> Self {
        Self {
            factory,
            verify_rpc_chain_id,
        }
    }

    /// Builds the pairing for `resolved`. Fails if either side cannot be set up.
    pub async fn materialize(
        &self,
        resolved: ResolvedChains,
        wallet: &dyn WalletConnection,
        account: Address,
    ) -> Result<ConnectionPairing, ResolutionError> {
        let ResolvedChains {
            orientation,
            base,
            rollup,
            ..
        } = resolved;

        let base_provider = self.direct_provider(&base.rpc_url, base.chain_id).await?;
        let rollup_provider = self
            .direct_provider(&rollup.rpc_url, rollup.chain_id)
            .await?;

        let (base_signer, rollup_signer): (Arc<dyn Signer>, Arc<dyn Signer>) = match orientation {
            Orientation::WalletOnBase => (
                wallet.signer(),
                Arc::new(RpcSigner::new(rollup_provider.clone(), account)),
            ),
            Orientation::WalletOnRollup => (
                Arc::new(RpcSigner::new(base_provider.clone(), account)),
                wallet.signer(),
            ),
        };

        Ok(ConnectionPairing {
            l1: ChainConnection {
                network: base,
                signer: base_signer,
                provider: base_provider,
            },
            l2: ChainConnection {
                network: rollup,
                signer: rollup_signer,
                provider: rollup_provider,
            },
            is_connected_to_rollup: orientation == Orientation::WalletOnRollup,
        })
    }

    async fn direct_provider(
        &self,
        rpc_url: &str,
        expected_chain_id: u64,
    ) -> Result<Arc<dyn EvmProviderTrait>, ResolutionError> {
        let provider = self.factory.create_provider(rpc_url).map_err(|e| {
            ResolutionError::MaterializationFailed(format!(
                "provider for chain {} at {}: {}",
                expected_chain_id, rpc_url, e
            ))
        })?;

        if self.verify_rpc_chain_id {
            let reported = provider.get_chain_id().await.map_err(|e| {
                ResolutionError::MaterializationFailed(format!(
                    "chain {} unreachable at {}: {}",
                    expected_chain_id, rpc_url, e
                ))
            })?;
            if reported != expected_chain_id {
                return Err(ResolutionError::MaterializationFailed(format!(
                    "{} serves chain {}, expected {}",
                    rpc_url, reported, expected_chain_id
                )));
            }
        } else {
            let healthy = provider.health_check().await.map_err(|e| {
                ResolutionError::MaterializationFailed(format!(
                    "chain {} unreachable at {}: {}",
                    expected_chain_id, rpc_url, e
                ))
            })?;
            if !healthy {
                return Err(ResolutionError::MaterializationFailed(format!(
                    "chain {} at {} failed its health check",
                    expected_chain_id, rpc_url
                )));
            }
        }

        debug!("Direct provider ready for chain {} at {}", expected_chain_id, rpc_url);
        Ok(provider)
    }
}
