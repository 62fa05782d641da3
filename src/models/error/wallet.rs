use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Wallet connection rejected by user")]
    Rejected,

    #[error("Wallet connection failed: {0}")]
    ConnectFailed(String),
}
