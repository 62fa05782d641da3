//! Wallet-side inputs of the resolver.
//!
//! The wallet supplies one connection (provider + active-account signer) that may
//! be attached to either side of the bridge, plus the account and chain it
//! currently reports. Every change to those values is fed to the resolver as a
//! fresh [`WalletState`].

use std::{fmt, sync::Arc};

use alloy::primitives::Address;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

mod local_wallet;
pub use local_wallet::*;

use crate::{
    models::WalletError,
    services::{EvmProviderTrait, Signer},
};

/// A live wallet connection.
pub trait WalletConnection: Send + Sync {
    /// The wallet's own provider, attached to whatever chain the wallet is on.
    fn provider(&self) -> Arc<dyn EvmProviderTrait>;

    /// Signer for the active account.
    fn signer(&self) -> Arc<dyn Signer>;
}

/// Snapshot of the wallet as last reported.
#[derive(Clone, Default)]
pub struct WalletState {
    pub connection: Option<Arc<dyn WalletConnection>>,
    pub account: Option<Address>,
    pub active_chain_id: Option<u64>,
}

impl WalletState {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(
        connection: Arc<dyn WalletConnection>,
        account: Address,
        active_chain_id: u64,
    ) -> Self {
        Self {
            connection: Some(connection),
            account: Some(account),
            active_chain_id: Some(active_chain_id),
        }
    }

    /// Same connection instance, account and chain.
    pub fn same_as(&self, other: &WalletState) -> bool {
        let same_connection = match (&self.connection, &other.connection) {
            (Some(a), Some(b)) => {
                std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
            }
            (None, None) => true,
            _ => false,
        };

        same_connection
            && self.account == other.account
            && self.active_chain_id == other.active_chain_id
    }
}

impl fmt::Debug for WalletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletState")
            .field("connected", &self.connection.is_some())
            .field("account", &self.account)
            .field("active_chain_id", &self.active_chain_id)
            .finish()
    }
}

/// Options passed along with a connect request.
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    /// Chain the caller would like the wallet to be on.
    pub preferred_chain_id: Option<u64>,
}

/// Establishes wallet connections. A user may decline.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait WalletConnector: Send + Sync {
    async fn connect(&self, options: &ConnectOptions) -> Result<WalletState, WalletError>;
}
