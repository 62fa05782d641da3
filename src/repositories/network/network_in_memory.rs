//! This module defines an in-memory network registry. Custom pairs are kept in a
//! `Mutex`-protected `HashMap` keyed by chain id, so repeated registration of the
//! same pair replaces entries instead of accumulating them.

use crate::{
    models::{
        well_known_base, well_known_rollup, BaseNetwork, NetworkDescriptor, RegistryError,
        RollupNetwork,
    },
    repositories::NetworkRegistry,
};
use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Debug)]
pub struct InMemoryNetworkRegistry {
    store: Mutex<HashMap<u64, NetworkDescriptor>>,
}

impl InMemoryNetworkRegistry {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
        }
    }

    async fn acquire_lock<T>(lock: &Mutex<T>) -> Result<MutexGuard<T>, RegistryError> {
        Ok(lock.lock().await)
    }

    fn validate_pair(base: &BaseNetwork, rollup: &RollupNetwork) -> Result<(), RegistryError> {
        if base.chain_id == rollup.chain_id {
            return Err(RegistryError::InvalidPairing(format!(
                "base and rollup share chain id {}",
                base.chain_id
            )));
        }
        if rollup.partner_chain_id != base.chain_id {
            return Err(RegistryError::InvalidPairing(format!(
                "rollup {} settles on {}, not on {}",
                rollup.chain_id, rollup.partner_chain_id, base.chain_id
            )));
        }
        Ok(())
    }
}

impl Default for InMemoryNetworkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NetworkRegistry for InMemoryNetworkRegistry {
    async fn register(
        &self,
        base: BaseNetwork,
        rollup: RollupNetwork,
    ) -> Result<(), RegistryError> {
        Self::validate_pair(&base, &rollup)?;

        let mut store = Self::acquire_lock(&self.store).await?;

        if let Some(NetworkDescriptor::Rollup(_)) = store.get(&base.chain_id) {
            return Err(RegistryError::InvalidPairing(format!(
                "chain id {} is already registered as a rollup",
                base.chain_id
            )));
        }
        if let Some(NetworkDescriptor::Base(_)) = store.get(&rollup.chain_id) {
            return Err(RegistryError::InvalidPairing(format!(
                "chain id {} is already registered as a base chain",
                rollup.chain_id
            )));
        }

        // A rollup moving to another base is dropped from its previous base.
        let previous_base_id = match store.get(&rollup.chain_id) {
            Some(NetworkDescriptor::Rollup(previous)) => Some(previous.partner_chain_id),
            _ => well_known_rollup(rollup.chain_id).map(|n| n.partner_chain_id),
        };
        if let Some(previous_base_id) = previous_base_id.filter(|id| *id != base.chain_id) {
            let previous_base = match store.get(&previous_base_id) {
                Some(NetworkDescriptor::Base(existing)) => Some(existing.clone()),
                _ => well_known_base(previous_base_id),
            };
            if let Some(mut previous_base) = previous_base {
                debug!(
                    "Rollup {} moves from base {} to {}",
                    rollup.chain_id, previous_base_id, base.chain_id
                );
                previous_base.remove_partner(rollup.chain_id);
                store.insert(previous_base_id, NetworkDescriptor::Base(previous_base));
            }
        }

        // Partners are a relation, not content: keep the ones already known for
        // this base (registered or built in) alongside the new rollup.
        let known_partners = match store.get(&base.chain_id) {
            Some(NetworkDescriptor::Base(existing)) => existing.partner_chain_ids.clone(),
            _ => well_known_base(base.chain_id)
                .map(|n| n.partner_chain_ids)
                .unwrap_or_default(),
        };

        let mut base = base;
        base.is_custom = true;
        for partner in known_partners {
            base.add_partner(partner);
        }
        base.add_partner(rollup.chain_id);

        let mut rollup = rollup;
        rollup.is_custom = true;

        debug!(
            "Registering custom network pair {} ({}) <-> {} ({})",
            base.chain_id, base.name, rollup.chain_id, rollup.name
        );
        store.insert(base.chain_id, NetworkDescriptor::Base(base));
        store.insert(rollup.chain_id, NetworkDescriptor::Rollup(rollup));
        Ok(())
    }

    async fn lookup_base(&self, chain_id: u64) -> Result<BaseNetwork, RegistryError> {
        let store = Self::acquire_lock(&self.store).await?;
        match store.get(&chain_id) {
            Some(NetworkDescriptor::Base(network)) => Ok(network.clone()),
            Some(NetworkDescriptor::Rollup(_)) => Err(RegistryError::UnknownNetwork(chain_id)),
            None => well_known_base(chain_id).ok_or(RegistryError::UnknownNetwork(chain_id)),
        }
    }

    async fn lookup_rollup(&self, chain_id: u64) -> Result<RollupNetwork, RegistryError> {
        let store = Self::acquire_lock(&self.store).await?;
        match store.get(&chain_id) {
            Some(NetworkDescriptor::Rollup(network)) => Ok(network.clone()),
            Some(NetworkDescriptor::Base(_)) => Err(RegistryError::UnknownNetwork(chain_id)),
            None => well_known_rollup(chain_id).ok_or(RegistryError::UnknownNetwork(chain_id)),
        }
    }

    async fn list_all(&self) -> Result<Vec<NetworkDescriptor>, RegistryError> {
        let store = Self::acquire_lock(&self.store).await?;
        let mut networks: Vec<NetworkDescriptor> = store.values().cloned().collect();
        networks.sort_by_key(NetworkDescriptor::chain_id);
        Ok(networks)
    }

    async fn count(&self) -> Result<usize, RegistryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store.len())
    }

    async fn has_entries(&self) -> Result<bool, RegistryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(!store.is_empty())
    }

    async fn drop_all_entries(&self) -> Result<(), RegistryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        store.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::mocks::mockutils::{
        create_local_pair, create_mock_base_network, create_mock_rollup_network,
    };

    #[tokio::test]
    async fn test_new_registry_is_empty() {
        let registry = InMemoryNetworkRegistry::new();
        assert_eq!(registry.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_register_pair() {
        let registry = InMemoryNetworkRegistry::new();
        let (base, rollup) = create_local_pair();

        registry.register(base, rollup).await.unwrap();
        assert_eq!(registry.count().await.unwrap(), 2);

        let base = registry.lookup_base(1337).await.unwrap();
        let rollup = registry.lookup_rollup(412346).await.unwrap();
        assert!(base.is_custom);
        assert!(rollup.is_custom);
        assert_eq!(base.partner_chain_ids, vec![412346]);
        assert_eq!(rollup.partner_chain_id, 1337);
    }

    #[tokio::test]
    async fn test_register_twice_is_idempotent() {
        let registry = InMemoryNetworkRegistry::new();
        let (base, rollup) = create_local_pair();

        registry
            .register(base.clone(), rollup.clone())
            .await
            .unwrap();
        let once = registry.list_all().await.unwrap();

        registry.register(base, rollup).await.unwrap();
        let twice = registry.list_all().await.unwrap();

        assert_eq!(once, twice);
        assert_eq!(registry.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_reregistration_overwrites_contents() {
        let registry = InMemoryNetworkRegistry::new();
        let (base, mut rollup) = create_local_pair();
        registry
            .register(base.clone(), rollup.clone())
            .await
            .unwrap();

        rollup.rpc_url = "http://127.0.0.1:9547".to_string();
        rollup.confirm_period_blocks = 5;
        registry.register(base, rollup).await.unwrap();

        let stored = registry.lookup_rollup(412346).await.unwrap();
        assert_eq!(stored.rpc_url, "http://127.0.0.1:9547");
        assert_eq!(stored.confirm_period_blocks, 5);
        assert_eq!(registry.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_second_rollup_on_same_base_keeps_first_partner() {
        let registry = InMemoryNetworkRegistry::new();
        let base = create_mock_base_network(1337, &[]);

        registry
            .register(base.clone(), create_mock_rollup_network(412346, 1337))
            .await
            .unwrap();
        registry
            .register(base, create_mock_rollup_network(333333, 1337))
            .await
            .unwrap();

        let base = registry.lookup_base(1337).await.unwrap();
        assert_eq!(base.partner_chain_ids, vec![412346, 333333]);
    }

    #[tokio::test]
    async fn test_rollup_moving_to_new_base_leaves_old_base() {
        let registry = InMemoryNetworkRegistry::new();

        registry
            .register(
                create_mock_base_network(1337, &[]),
                create_mock_rollup_network(412346, 1337),
            )
            .await
            .unwrap();
        registry
            .register(
                create_mock_base_network(2222, &[]),
                create_mock_rollup_network(412346, 2222),
            )
            .await
            .unwrap();

        let old_base = registry.lookup_base(1337).await.unwrap();
        let new_base = registry.lookup_base(2222).await.unwrap();
        let rollup = registry.lookup_rollup(412346).await.unwrap();
        assert!(!old_base.partners_with(412346));
        assert!(new_base.partners_with(412346));
        assert_eq!(rollup.partner_chain_id, 2222);
    }

    #[tokio::test]
    async fn test_well_known_rollup_moving_to_custom_base_leaves_public_base() {
        let registry = InMemoryNetworkRegistry::new();

        registry
            .register(
                create_mock_base_network(2222, &[]),
                create_mock_rollup_network(42161, 2222),
            )
            .await
            .unwrap();

        let mainnet = registry.lookup_base(1).await.unwrap();
        assert!(!mainnet.partners_with(42161));
        assert!(registry.lookup_base(2222).await.unwrap().partners_with(42161));
    }

    #[tokio::test]
    async fn test_custom_rollup_on_well_known_base_keeps_public_partner() {
        let registry = InMemoryNetworkRegistry::new();
        let base = well_known_base(1).unwrap();

        registry
            .register(base, create_mock_rollup_network(555555, 1))
            .await
            .unwrap();

        let base = registry.lookup_base(1).await.unwrap();
        assert!(base.partners_with(42161));
        assert!(base.partners_with(555555));
    }

    #[tokio::test]
    async fn test_register_rejects_mismatched_partner() {
        let registry = InMemoryNetworkRegistry::new();
        let base = create_mock_base_network(1337, &[]);
        let rollup = create_mock_rollup_network(412346, 5);

        let result = registry.register(base, rollup).await;
        assert!(matches!(result, Err(RegistryError::InvalidPairing(_))));
        assert!(!registry.has_entries().await.unwrap());
    }

    #[tokio::test]
    async fn test_register_rejects_role_conflict() {
        let registry = InMemoryNetworkRegistry::new();
        let (base, rollup) = create_local_pair();
        registry.register(base, rollup).await.unwrap();

        // 412346 is a rollup now, it cannot become a base chain.
        let result = registry
            .register(
                create_mock_base_network(412346, &[]),
                create_mock_rollup_network(999, 412346),
            )
            .await;
        assert!(matches!(result, Err(RegistryError::InvalidPairing(_))));
    }

    #[tokio::test]
    async fn test_lookup_falls_back_to_well_known() {
        let registry = InMemoryNetworkRegistry::new();

        let mainnet = registry.lookup_base(1).await.unwrap();
        let arbitrum = registry.lookup_rollup(42161).await.unwrap();

        assert!(!mainnet.is_custom);
        assert_eq!(arbitrum.partner_chain_id, 1);
        assert!(!registry.has_entries().await.unwrap());
    }

    #[tokio::test]
    async fn test_lookup_unknown_network() {
        let registry = InMemoryNetworkRegistry::new();

        assert_eq!(
            registry.lookup_base(999999).await,
            Err(RegistryError::UnknownNetwork(999999))
        );
        assert_eq!(
            registry.lookup_rollup(1).await,
            Err(RegistryError::UnknownNetwork(1))
        );
    }

    #[tokio::test]
    async fn test_lookup_wrong_role() {
        let registry = InMemoryNetworkRegistry::new();
        let (base, rollup) = create_local_pair();
        registry.register(base, rollup).await.unwrap();

        assert!(registry.lookup_rollup(1337).await.is_err());
        assert!(registry.lookup_base(412346).await.is_err());
    }

    #[tokio::test]
    async fn test_drop_all_entries() {
        let registry = InMemoryNetworkRegistry::new();
        let (base, rollup) = create_local_pair();
        registry.register(base, rollup).await.unwrap();
        assert!(registry.has_entries().await.unwrap());

        registry.drop_all_entries().await.unwrap();
        assert!(!registry.has_entries().await.unwrap());
        assert!(registry.lookup_base(1337).await.is_err());
    }
}
