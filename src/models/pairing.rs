//! The resolved unit handed to consumers and the status wrapping it.
use std::{fmt, sync::Arc};

use serde::Serialize;

use crate::services::{EvmProviderTrait, Signer};

use super::{BaseNetwork, RollupNetwork};

/// Which side of the bridge the wallet connection is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    WalletOnBase,
    WalletOnRollup,
}

/// Network descriptor plus live handles for one side of the pairing.
#[derive(Clone)]
pub struct ChainConnection<N> {
    pub network: N,
    pub signer: Arc<dyn Signer>,
    pub provider: Arc<dyn EvmProviderTrait>,
}

impl<N: fmt::Debug> fmt::Debug for ChainConnection<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainConnection")
            .field("network", &self.network)
            .field("rpc_url", &self.provider.rpc_url())
            .finish()
    }
}

/// Base and rollup connections resolved from one wallet connection.
///
/// Built once per successful resolution and never mutated afterwards; the next
/// resolution publishes a new pairing instead.
#[derive(Clone, Debug)]
pub struct ConnectionPairing {
    pub l1: ChainConnection<BaseNetwork>,
    pub l2: ChainConnection<RollupNetwork>,
    pub is_connected_to_rollup: bool,
}

impl ConnectionPairing {
    pub fn orientation(&self) -> Orientation {
        if self.is_connected_to_rollup {
            Orientation::WalletOnRollup
        } else {
            Orientation::WalletOnBase
        }
    }

    /// One-line description for logs.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}) <-> {} ({}), {}",
            self.l1.network.name,
            self.l1.network.chain_id,
            self.l2.network.name,
            self.l2.network.chain_id,
            self.orientation()
        )
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Loading,
    NotConnected,
    NotSupported,
    Connected,
}

/// The single value consumers gate on. Only `Connected` carries a pairing.
#[derive(Clone, Debug, Default)]
pub enum ResolutionStatus {
    #[default]
    Loading,
    NotConnected,
    NotSupported,
    Connected(Arc<ConnectionPairing>),
}

impl ResolutionStatus {
    pub fn kind(&self) -> StatusKind {
        match self {
            Self::Loading => StatusKind::Loading,
            Self::NotConnected => StatusKind::NotConnected,
            Self::NotSupported => StatusKind::NotSupported,
            Self::Connected(_) => StatusKind::Connected,
        }
    }

    pub fn pairing(&self) -> Option<&Arc<ConnectionPairing>> {
        match self {
            Self::Connected(pairing) => Some(pairing),
            _ => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }
}

impl fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connected(pairing) => write!(f, "connected: {}", pairing.summary()),
            other => write!(f, "{}", other.kind()),
        }
    }
}
