use std::time::Duration;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// Core bridge contracts deployed on the base chain for a rollup.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EthBridge {
    pub bridge: Address,
    pub inbox: Address,
    pub outbox: Address,
    pub rollup: Address,
    pub sequencer_inbox: Address,
}

/// Token bridge contracts, deployed as counterparts on both sides.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenBridge {
    pub l1_custom_gateway: Address,
    pub l1_erc20_gateway: Address,
    pub l1_gateway_router: Address,
    pub l1_multicall: Address,
    pub l1_proxy_admin: Address,
    pub l1_weth: Address,
    pub l1_weth_gateway: Address,

    pub l2_custom_gateway: Address,
    pub l2_erc20_gateway: Address,
    pub l2_gateway_router: Address,
    pub l2_multicall: Address,
    pub l2_proxy_admin: Address,
    pub l2_weth: Address,
    pub l2_weth_gateway: Address,
}

/// A settlement-layer chain that one or more rollups publish their state to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseNetwork {
    /// The unique chain identifier (Chain ID).
    pub chain_id: u64,
    /// Human readable network name.
    pub name: String,
    /// RPC endpoint used for direct connections to this chain.
    pub rpc_url: String,
    /// Block explorer base URL.
    pub explorer_url: String,
    /// Set for networks that were registered at runtime rather than built in.
    #[serde(default)]
    pub is_custom: bool,
    /// Average block time in seconds.
    pub block_time_secs: u64,
    /// Chain ids of the rollups settling on this chain.
    #[serde(default)]
    pub partner_chain_ids: Vec<u64>,
}

impl BaseNetwork {
    pub fn partners_with(&self, rollup_chain_id: u64) -> bool {
        self.partner_chain_ids.contains(&rollup_chain_id)
    }

    /// Adds a rollup partner unless it is already listed.
    pub fn add_partner(&mut self, rollup_chain_id: u64) {
        if !self.partners_with(rollup_chain_id) {
            self.partner_chain_ids.push(rollup_chain_id);
        }
    }

    pub fn remove_partner(&mut self, rollup_chain_id: u64) {
        self.partner_chain_ids.retain(|id| *id != rollup_chain_id);
    }
}

/// A rollup chain anchored to a single base chain.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollupNetwork {
    pub chain_id: u64,
    pub name: String,
    pub rpc_url: String,
    pub explorer_url: String,
    #[serde(default)]
    pub is_custom: bool,
    /// Chain id of the base chain this rollup settles on.
    pub partner_chain_id: u64,
    pub eth_bridge: EthBridge,
    pub token_bridge: TokenBridge,
    /// Number of base-chain blocks before an assertion can be confirmed.
    pub confirm_period_blocks: u64,
    /// Validity window of a retryable ticket, in seconds.
    pub retryable_lifetime_seconds: u64,
}

impl RollupNetwork {
    pub fn retryable_lifetime(&self) -> Duration {
        Duration::from_secs(self.retryable_lifetime_seconds)
    }
}

/// Either side of a bridge.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NetworkDescriptor {
    Base(BaseNetwork),
    Rollup(RollupNetwork),
}

impl NetworkDescriptor {
    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Base(network) => network.chain_id,
            Self::Rollup(network) => network.chain_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Base(network) => &network.name,
            Self::Rollup(network) => &network.name,
        }
    }

    pub fn rpc_url(&self) -> &str {
        match self {
            Self::Base(network) => &network.rpc_url,
            Self::Rollup(network) => &network.rpc_url,
        }
    }

    pub fn explorer_url(&self) -> &str {
        match self {
            Self::Base(network) => &network.explorer_url,
            Self::Rollup(network) => &network.explorer_url,
        }
    }

    pub fn is_custom(&self) -> bool {
        match self {
            Self::Base(network) => network.is_custom,
            Self::Rollup(network) => network.is_custom,
        }
    }

    pub fn is_rollup(&self) -> bool {
        matches!(self, Self::Rollup(_))
    }
}

impl From<BaseNetwork> for NetworkDescriptor {
    fn from(network: BaseNetwork) -> Self {
        Self::Base(network)
    }
}

impl From<RollupNetwork> for NetworkDescriptor {
    fn from(network: RollupNetwork) -> Self {
        Self::Rollup(network)
    }
}
