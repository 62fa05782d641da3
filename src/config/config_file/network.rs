//! Custom Network Pair Configuration
//!
//! A custom pair describes a base chain and the rollup settling on it. Both halves
//! use the descriptor layout directly, so the file mirrors what gets registered.

use crate::config::ConfigFileError;
use crate::models::{BaseNetwork, RollupNetwork};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CustomNetworkPairConfig {
    pub base: BaseNetwork,
    pub rollup: RollupNetwork,
}

impl CustomNetworkPairConfig {
    /// Validates both halves and the link between them.
    ///
    /// # Returns
    /// - `Ok(())` if the pair is valid.
    /// - `Err(ConfigFileError)` if validation fails (missing names, invalid URLs, broken link).
    pub fn validate(&self) -> Result<(), ConfigFileError> {
        validate_common(&self.base.name, &self.base.rpc_url, &self.base.explorer_url)?;
        validate_common(
            &self.rollup.name,
            &self.rollup.rpc_url,
            &self.rollup.explorer_url,
        )?;

        if self.base.chain_id == self.rollup.chain_id {
            return Err(ConfigFileError::InvalidReference(format!(
                "base and rollup share chain id {}",
                self.base.chain_id
            )));
        }

        if self.rollup.partner_chain_id != self.base.chain_id {
            return Err(ConfigFileError::InvalidReference(format!(
                "rollup {} declares partner chain {}, expected {}",
                self.rollup.chain_id, self.rollup.partner_chain_id, self.base.chain_id
            )));
        }

        Ok(())
    }

    /// Whether this pair is relevant for resolving `chain_id`.
    pub fn involves(&self, chain_id: u64) -> bool {
        self.base.chain_id == chain_id || self.rollup.chain_id == chain_id
    }
}

fn validate_common(name: &str, rpc_url: &str, explorer_url: &str) -> Result<(), ConfigFileError> {
    if name.is_empty() {
        return Err(ConfigFileError::MissingField("network name".into()));
    }

    if rpc_url.is_empty() {
        return Err(ConfigFileError::MissingField("rpc_url".into()));
    }

    reqwest::Url::parse(rpc_url)
        .map_err(|_| ConfigFileError::InvalidFormat(format!("Invalid RPC URL: {}", rpc_url)))?;

    // Local chains usually have no explorer.
    if !explorer_url.is_empty() {
        reqwest::Url::parse(explorer_url).map_err(|_| {
            ConfigFileError::InvalidFormat(format!("Invalid Explorer URL: {}", explorer_url))
        })?;
    }

    Ok(())
}
