//! Chain orientation detection.
//!
//! The wallet hands over one connection regardless of which side of the bridge it
//! is attached to, so orientation is inferred: first as a base chain partnering
//! with the requested rollup, then as the requested rollup itself.

use std::sync::Arc;

use log::debug;

use crate::{
    config::CustomNetworkPairConfig,
    constants::default_rollup_chain_id,
    models::{BaseNetwork, Orientation, RegistryError, ResolutionError, RollupNetwork},
    repositories::NetworkRegistry,
    services::WalletConnection,
};

/// Both descriptors of a pairing plus which one the wallet is attached to.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedChains {
    pub orientation: Orientation,
    pub wallet_chain_id: u64,
    pub base: BaseNetwork,
    pub rollup: RollupNetwork,
}

pub struct ChainResolver<R: NetworkRegistry> {
    registry: Arc<R>,
    custom_networks: Vec<CustomNetworkPairConfig>,
}

impl<R: NetworkRegistry> ChainResolver<R> {
    pub fn new(registry: Arc<R>) -> Self {
        Self {
            registry,
            custom_networks: Vec::new(),
        }
    }

    /// Pairs registered on demand when a resolution involves one of their chains.
    pub fn with_custom_networks(mut self, custom_networks: Vec<CustomNetworkPairConfig>) -> Self {
        self.custom_networks = custom_networks;
        self
    }

    pub fn registry(&self) -> &Arc<R> {
        &self.registry
    }

    /// Resolves the wallet connection against `requested_rollup_chain_id`, or the
    /// default rollup for the wallet's chain when none is requested.
    pub async fn resolve(
        &self,
        wallet: &dyn WalletConnection,
        requested_rollup_chain_id: Option<u64>,
    ) -> Result<ResolvedChains, ResolutionError> {
        let wallet_chain_id = wallet.provider().get_chain_id().await?;
        self.resolve_chain_id(wallet_chain_id, requested_rollup_chain_id)
            .await
    }

    pub async fn resolve_chain_id(
        &self,
        wallet_chain_id: u64,
        requested_rollup_chain_id: Option<u64>,
    ) -> Result<ResolvedChains, ResolutionError> {
        let requested = requested_rollup_chain_id
            .or_else(|| default_rollup_chain_id(wallet_chain_id))
            .ok_or(ResolutionError::UnsupportedChain(wallet_chain_id))?;

        self.register_custom_networks(wallet_chain_id, requested)
            .await?;

        if let Some(resolved) = self.try_as_base(wallet_chain_id, requested).await? {
            return Ok(resolved);
        }
        debug!(
            "Chain {} is not a base chain for rollup {}, trying rollup orientation",
            wallet_chain_id, requested
        );

        self.try_as_rollup(wallet_chain_id, requested).await
    }

    async fn register_custom_networks(
        &self,
        wallet_chain_id: u64,
        requested: u64,
    ) -> Result<(), ResolutionError> {
        for pair in self
            .custom_networks
            .iter()
            .filter(|pair| pair.involves(wallet_chain_id) || pair.involves(requested))
        {
            self.registry
                .register(pair.base.clone(), pair.rollup.clone())
                .await?;
        }
        Ok(())
    }

    /// `Ok(None)` when the wallet chain is not a base partnering with `requested`.
    async fn try_as_base(
        &self,
        wallet_chain_id: u64,
        requested: u64,
    ) -> Result<Option<ResolvedChains>, ResolutionError> {
        let base = match self.registry.lookup_base(wallet_chain_id).await {
            Ok(base) => base,
            Err(RegistryError::UnknownNetwork(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if !base.partners_with(requested) {
            return Ok(None);
        }

        // The base lists the rollup as a partner, so the rollup must exist.
        let rollup = self.registry.lookup_rollup(requested).await?;
        if rollup.partner_chain_id != base.chain_id {
            return Ok(None);
        }

        Ok(Some(ResolvedChains {
            orientation: Orientation::WalletOnBase,
            wallet_chain_id,
            base,
            rollup,
        }))
    }

    async fn try_as_rollup(
        &self,
        wallet_chain_id: u64,
        requested: u64,
    ) -> Result<ResolvedChains, ResolutionError> {
        let unresolved = ResolutionError::UnresolvedChain {
            wallet_chain_id,
            requested_chain_id: requested,
        };

        if wallet_chain_id != requested {
            // A wallet on some other rollup is never silently re-paired.
            return match self.registry.lookup_rollup(wallet_chain_id).await {
                Ok(_) => Err(ResolutionError::RollupMismatch {
                    wallet_chain_id,
                    requested_chain_id: requested,
                }),
                Err(RegistryError::UnknownNetwork(_)) => Err(unresolved),
                Err(e) => Err(e.into()),
            };
        }

        let rollup = match self.registry.lookup_rollup(requested).await {
            Ok(rollup) => rollup,
            Err(RegistryError::UnknownNetwork(_)) => return Err(unresolved),
            Err(e) => return Err(e.into()),
        };

        let base = match self.registry.lookup_base(rollup.partner_chain_id).await {
            Ok(base) => base,
            Err(RegistryError::UnknownNetwork(_)) => return Err(unresolved),
            Err(e) => return Err(e.into()),
        };

        if !base.partners_with(rollup.chain_id) {
            return Err(unresolved);
        }

        Ok(ResolvedChains {
            orientation: Orientation::WalletOnRollup,
            wallet_chain_id,
            base,
            rollup,
        })
    }
}
