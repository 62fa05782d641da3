use thiserror::Error;

use crate::services::ProviderError;

use super::RegistryError;

/// Reasons a wallet connection could not be turned into a base/rollup pairing.
///
/// None of these reach consumers directly; they all collapse into
/// `ResolutionStatus::NotSupported`, since the remedy is always to switch the
/// wallet to a supported chain.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Unknown network: chain id {0}")]
    UnknownNetwork(u64),

    #[error("No default rollup configured for chain id {0}")]
    UnsupportedChain(u64),

    #[error("Chain id {wallet_chain_id} cannot be paired with rollup {requested_chain_id}")]
    UnresolvedChain {
        wallet_chain_id: u64,
        requested_chain_id: u64,
    },

    #[error("Wallet is on rollup {wallet_chain_id} but rollup {requested_chain_id} was requested")]
    RollupMismatch {
        wallet_chain_id: u64,
        requested_chain_id: u64,
    },

    #[error("Failed to query wallet provider: {0}")]
    WalletProvider(#[from] ProviderError),

    #[error("Failed to materialize connections: {0}")]
    MaterializationFailed(String),

    #[error("Registry error: {0}")]
    Registry(RegistryError),
}

impl From<RegistryError> for ResolutionError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::UnknownNetwork(chain_id) => ResolutionError::UnknownNetwork(chain_id),
            other => ResolutionError::Registry(other),
        }
    }
}
