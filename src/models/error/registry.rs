use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown network: chain id {0}")]
    UnknownNetwork(u64),

    #[error("Invalid network pairing: {0}")]
    InvalidPairing(String),

    #[error("Failed to acquire registry lock: {0}")]
    LockError(String),
}
