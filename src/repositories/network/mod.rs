//! Network Registry Module
//!
//! Maps chain ids to network descriptors. Lookups fall through to the built-in
//! well-known networks; custom pairs (local dev chains, private deployments) must
//! be registered before a wallet on them can be resolved.
//!
//! ## Features
//!
//! - **Idempotent registration**: registering a pair again overwrites it in place
//! - **Pair validation**: a rollup must point at the base it is registered with
//! - **Well-known fallback**: public networks resolve without registration
//!
//! ## Implementations
//!
//! - [`InMemoryNetworkRegistry`]: process-local registry

use async_trait::async_trait;

mod network_in_memory;

pub use network_in_memory::InMemoryNetworkRegistry;

use crate::models::{BaseNetwork, NetworkDescriptor, RegistryError, RollupNetwork};

#[async_trait]
pub trait NetworkRegistry: Send + Sync {
    /// Adds or replaces a custom base/rollup pair.
    async fn register(&self, base: BaseNetwork, rollup: RollupNetwork)
        -> Result<(), RegistryError>;

    /// Get a base chain by chain ID
    async fn lookup_base(&self, chain_id: u64) -> Result<BaseNetwork, RegistryError>;

    /// Get a rollup chain by chain ID
    async fn lookup_rollup(&self, chain_id: u64) -> Result<RollupNetwork, RegistryError>;

    /// Registered (custom) descriptors only
    async fn list_all(&self) -> Result<Vec<NetworkDescriptor>, RegistryError>;

    async fn count(&self) -> Result<usize, RegistryError>;

    async fn has_entries(&self) -> Result<bool, RegistryError>;

    async fn drop_all_entries(&self) -> Result<(), RegistryError>;
}

#[cfg(test)]
mockall::mock! {
    pub NetworkRegistry {}

    #[async_trait]
    impl NetworkRegistry for NetworkRegistry {
        async fn register(&self, base: BaseNetwork, rollup: RollupNetwork) -> Result<(), RegistryError>;
        async fn lookup_base(&self, chain_id: u64) -> Result<BaseNetwork, RegistryError>;
        async fn lookup_rollup(&self, chain_id: u64) -> Result<RollupNetwork, RegistryError>;
        async fn list_all(&self) -> Result<Vec<NetworkDescriptor>, RegistryError>;
        async fn count(&self) -> Result<usize, RegistryError>;
        async fn has_entries(&self) -> Result<bool, RegistryError>;
        async fn drop_all_entries(&self) -> Result<(), RegistryError>;
    }
}
