//! Well-known public networks.
//!
//! These resolve without registration. Anything else (local dev chains,
//! private deployments) has to be registered as a custom pair first.
use alloy::primitives::address;

use super::{BaseNetwork, EthBridge, RollupNetwork, TokenBridge};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::IntoStaticStr,
    strum::VariantNames,
    strum::VariantArray,
    strum::EnumString,
    strum::EnumIter,
    serde::Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "snake_case")]
#[derive(num_enum::TryFromPrimitive)] // TryFrom<u64>
#[repr(u64)]
pub enum NamedNetwork {
    Mainnet = 1,
    Sepolia = 11155111,

    #[strum(to_string = "arbitrum-one", serialize = "arbitrum")]
    #[serde(alias = "arbitrum-one", alias = "arbitrum")]
    ArbitrumOne = 42161,
    #[serde(alias = "arbitrum-sepolia")]
    ArbitrumSepolia = 421614,
}

impl NamedNetwork {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub const fn is_rollup(self) -> bool {
        matches!(self, Self::ArbitrumOne | Self::ArbitrumSepolia)
    }

    /// The base-chain descriptor, `None` for rollups.
    pub fn base_network(self) -> Option<BaseNetwork> {
        match self {
            Self::Mainnet => Some(BaseNetwork {
                chain_id: 1,
                name: "Mainnet".to_string(),
                rpc_url: "https://eth.llamarpc.com".to_string(),
                explorer_url: "https://etherscan.io".to_string(),
                is_custom: false,
                block_time_secs: 14,
                partner_chain_ids: vec![42161],
            }),
            Self::Sepolia => Some(BaseNetwork {
                chain_id: 11155111,
                name: "Sepolia".to_string(),
                rpc_url: "https://ethereum-sepolia-rpc.publicnode.com".to_string(),
                explorer_url: "https://sepolia.etherscan.io".to_string(),
                is_custom: false,
                block_time_secs: 12,
                partner_chain_ids: vec![421614],
            }),
            Self::ArbitrumOne | Self::ArbitrumSepolia => None,
        }
    }

    /// The rollup descriptor, `None` for base chains.
    pub fn rollup_network(self) -> Option<RollupNetwork> {
        match self {
            Self::ArbitrumOne => Some(RollupNetwork {
                chain_id: 42161,
                name: "Arbitrum One".to_string(),
                rpc_url: "https://arb1.arbitrum.io/rpc".to_string(),
                explorer_url: "https://arbiscan.io".to_string(),
                is_custom: false,
                partner_chain_id: 1,
                eth_bridge: EthBridge {
                    bridge: address!("8315177aB297bA92A06054cE80a67Ed4DBd7ed3a"),
                    inbox: address!("4Dbd4fc535Ac27206064B68FfCf827b0A60BAB3f"),
                    outbox: address!("0B9857ae2D4A3DBe74ffE1d7DF045bb7F96E4840"),
                    rollup: address!("5eF0D09d1E6204141B4d37530808eD19f60FBa35"),
                    sequencer_inbox: address!("1c479675ad559DC151F6Ec7ed3FbF8ceE79582B6"),
                },
                token_bridge: TokenBridge {
                    l1_custom_gateway: address!("cEe284F754E854890e311e3280b767F80797180d"),
                    l1_erc20_gateway: address!("a3A7B6F88361F48403514059F1F16C8E78d60EeC"),
                    l1_gateway_router: address!("72Ce9c846789fdB6fC1f34aC4AD25Dd9ef7031ef"),
                    l1_multicall: address!("5ba1e12693dc8f9c48aad8770482f4739beed696"),
                    l1_proxy_admin: address!("9aD46fac0Cf7f790E5be05A0F15223935A0c0aDa"),
                    l1_weth: address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
                    l1_weth_gateway: address!("d92023E9d9911199a6711321D1277285e6d4e2db"),
                    l2_custom_gateway: address!("096760F208390250649E3e8763348E783AEF5562"),
                    l2_erc20_gateway: address!("09e9222E96E7B4AE2a407B98d48e330053351EEe"),
                    l2_gateway_router: address!("5288c571Fd7aD117beA99bF60FE0846C4E84F933"),
                    l2_multicall: address!("842eC2c7D803033Edf55E478F461FC547Bc54EB2"),
                    l2_proxy_admin: address!("d570aCE65C43af47101fC6250FD6fC63D1c22a86"),
                    l2_weth: address!("82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
                    l2_weth_gateway: address!("6c411aD3E74De3E7Bd422b94A27770f5B86C623B"),
                },
                confirm_period_blocks: 45818,
                retryable_lifetime_seconds: 604800,
            }),
            Self::ArbitrumSepolia => Some(RollupNetwork {
                chain_id: 421614,
                name: "Arbitrum Sepolia".to_string(),
                rpc_url: "https://sepolia-rollup.arbitrum.io/rpc".to_string(),
                explorer_url: "https://sepolia.arbiscan.io".to_string(),
                is_custom: false,
                partner_chain_id: 11155111,
                eth_bridge: EthBridge {
                    bridge: address!("38f918D0E9F1b721EDaA41302E399fa1B79333a9"),
                    inbox: address!("aAe29B0366299461418F5324a79Afc425BE5ae21"),
                    outbox: address!("65f07C7D521164a4d5DaC6eB8Fac8DA067A3B78F"),
                    rollup: address!("d80810638dbDF9081b72C1B33c65375e807281C8"),
                    sequencer_inbox: address!("6c97864CE4bEf387dE0b3310A44230f7E3F1be0D"),
                },
                token_bridge: TokenBridge {
                    l1_custom_gateway: address!("ba2F7B6eAe1F9d174199C5E4867b563E0eaC40F3"),
                    l1_erc20_gateway: address!("902b3E5f8F19571859F4AB1003B960a5dF693aFF"),
                    l1_gateway_router: address!("cE18836b233C83325Cc8848CA4487e94C6288264"),
                    l1_multicall: address!("ded9AD2E65F3c4315745dD915Dbe0A4Df61b2320"),
                    l1_proxy_admin: address!("DBFC2FfB44A5D841aB42b0882711ed6e5A9244b0"),
                    l1_weth: address!("7b79995e5f793A07Bc00c21412e50Ecae098E7f9"),
                    l1_weth_gateway: address!("A8aD8d7e13cbf556eE75CB0324c13535d8100e1E"),
                    l2_custom_gateway: address!("8Ca1e1AC0f260BC4dA7Dd60aCA6CA66208E642C5"),
                    l2_erc20_gateway: address!("6e244cD02BBB8a6dbd7F626f05B2ef82151Ab502"),
                    l2_gateway_router: address!("9fDD1C4E4AA24EEc1d913FABea925594a20d43C7"),
                    l2_multicall: address!("A115146782b7143fAdB3065D86eACB54c169d092"),
                    l2_proxy_admin: address!("715D99480b77A8d9D603638e593a539E21345FdF"),
                    l2_weth: address!("980B62Da83eFf3D4576C647993b0c1D7faf17c73"),
                    l2_weth_gateway: address!("CFB1f08A4852699a979909e22c30263ca249556D"),
                },
                confirm_period_blocks: 20,
                retryable_lifetime_seconds: 604800,
            }),
            Self::Mainnet | Self::Sepolia => None,
        }
    }
}

/// Looks up a well-known base chain by id.
pub fn well_known_base(chain_id: u64) -> Option<BaseNetwork> {
    NamedNetwork::try_from(chain_id)
        .ok()
        .and_then(NamedNetwork::base_network)
}

/// Looks up a well-known rollup chain by id.
pub fn well_known_rollup(chain_id: u64) -> Option<RollupNetwork> {
    NamedNetwork::try_from(chain_id)
        .ok()
        .and_then(NamedNetwork::rollup_network)
}
