//! Configuration for the resolver, read from the environment.
use std::{env, fmt, time::Duration};

use crate::constants::DEFAULT_RPC_TIMEOUT_MS;

#[derive(Clone)]
pub struct ResolverConfig {
    /// Timeout for direct RPC requests, in milliseconds.
    pub rpc_timeout_ms: u64,
    /// Rollup the caller wants to pair with. Derived from the wallet chain when unset.
    pub requested_rollup_chain_id: Option<u64>,
    /// Whether freshly built providers must report the descriptor's chain id.
    pub verify_rpc_chain_id: bool,
    /// The file path to the custom networks file.
    pub custom_networks_file_path: String,
    /// Endpoint the local wallet is attached to.
    pub wallet_rpc_url: String,
    /// Hex private key of the local wallet account.
    pub wallet_private_key: Option<String>,
}

impl ResolverConfig {
    /// Creates a new `ResolverConfig` instance from environment variables.
    ///
    /// # Defaults
    ///
    /// - `RPC_TIMEOUT_MS` defaults to `10000`.
    /// - `REQUESTED_ROLLUP_CHAIN_ID` is unset (derive from the wallet chain).
    /// - `VERIFY_RPC_CHAIN_ID` defaults to `true`.
    /// - `CONFIG_DIR` defaults to `"./config"`, `CUSTOM_NETWORKS_FILE_NAME` to `"networks.json"`.
    /// - `WALLET_RPC_URL` defaults to `"http://localhost:8545"`.
    /// - `WALLET_PRIVATE_KEY` is unset (the wallet declines to connect).
    pub fn from_env() -> Self {
        let conf_dir = env::var("IN_DOCKER")
            .map(|val| val == "true")
            .unwrap_or(false)
            .then(|| "config/".to_string())
            .unwrap_or_else(|| env::var("CONFIG_DIR").unwrap_or_else(|_| "./config".to_string()));

        let conf_dir = format!("{}/", conf_dir.trim_end_matches('/'));

        let file_name = env::var("CUSTOM_NETWORKS_FILE_NAME")
            .unwrap_or_else(|_| "networks.json".to_string());

        Self {
            rpc_timeout_ms: env::var("RPC_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RPC_TIMEOUT_MS),
            requested_rollup_chain_id: env::var("REQUESTED_ROLLUP_CHAIN_ID")
                .ok()
                .and_then(|v| v.trim().parse().ok()),
            verify_rpc_chain_id: env::var("VERIFY_RPC_CHAIN_ID")
                .map(|v| v.to_lowercase() != "false")
                .unwrap_or(true),
            custom_networks_file_path: format!("{}{}", conf_dir, file_name),
            wallet_rpc_url: env::var("WALLET_RPC_URL")
                .unwrap_or_else(|_| "http://localhost:8545".to_string()),
            wallet_private_key: env::var("WALLET_PRIVATE_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_millis(self.rpc_timeout_ms)
    }
}

impl fmt::Debug for ResolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverConfig")
            .field("rpc_timeout_ms", &self.rpc_timeout_ms)
            .field("requested_rollup_chain_id", &self.requested_rollup_chain_id)
            .field("verify_rpc_chain_id", &self.verify_rpc_chain_id)
            .field("custom_networks_file_path", &self.custom_networks_file_path)
            .field("wallet_rpc_url", &self.wallet_rpc_url)
            .field(
                "wallet_private_key",
                &self.wallet_private_key.as_ref().map(|_| "REDACTED"),
            )
            .finish()
    }
}
