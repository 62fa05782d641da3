//! Custom networks file.
//!
//! ```json
//! {
//!   "networks": [
//!     { "base": { "chain_id": 1337, ... }, "rollup": { "chain_id": 412346, ... } }
//!   ]
//! }
//! ```
use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

mod network;
pub use network::*;

use crate::config::ConfigFileError;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CustomNetworksFile {
    #[serde(default)]
    pub networks: Vec<CustomNetworkPairConfig>,
}

impl CustomNetworksFile {
    pub fn validate(&self) -> Result<(), ConfigFileError> {
        let mut seen = HashSet::new();
        for pair in &self.networks {
            pair.validate()?;
            if !seen.insert(pair.rollup.chain_id) {
                return Err(ConfigFileError::DuplicateId(format!(
                    "rollup chain id {} is configured more than once",
                    pair.rollup.chain_id
                )));
            }
        }
        Ok(())
    }
}

pub fn load_custom_networks(path: impl AsRef<Path>) -> Result<CustomNetworksFile, ConfigFileError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigFileError::FileNotFound(path.display().to_string()));
    }
    let contents = fs::read_to_string(path)?;
    let file: CustomNetworksFile = serde_json::from_str(&contents)?;
    file.validate()?;
    Ok(file)
}

/// Like [`load_custom_networks`], but a missing file means no custom networks.
pub fn load_custom_networks_if_present(
    path: impl AsRef<Path>,
) -> Result<CustomNetworksFile, ConfigFileError> {
    match load_custom_networks(path) {
        Err(ConfigFileError::FileNotFound(path)) => {
            log::info!("No custom networks file at {}", path);
            Ok(CustomNetworksFile::default())
        }
        other => other,
    }
}
