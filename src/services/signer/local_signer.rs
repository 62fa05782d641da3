use alloy::{
    primitives::{hex, Address, Bytes, FixedBytes},
    signers::{local::PrivateKeySigner, Signer as AlloySigner},
};
use async_trait::async_trait;

use crate::{models::SignerError, services::Signer};

/// Signer holding a raw secp256k1 key in process.
#[derive(Clone, Debug)]
pub struct LocalSigner {
    local_signer_client: PrivateKeySigner,
}

impl LocalSigner {
    pub fn new(raw_key: &[u8]) -> Result<Self, SignerError> {
        if raw_key.len() != 32 {
            return Err(SignerError::KeyError(format!(
                "expected 32 key bytes, got {}",
                raw_key.len()
            )));
        }

        let key_bytes = FixedBytes::from_slice(raw_key);
        let local_signer_client = PrivateKeySigner::from_bytes(&key_bytes)
            .map_err(|e| SignerError::KeyError(e.to_string()))?;

        Ok(Self {
            local_signer_client,
        })
    }

    /// Parses a hex encoded private key, with or without `0x` prefix.
    pub fn from_hex(key: &str) -> Result<Self, SignerError> {
        let raw_key = hex::decode(key.trim().trim_start_matches("0x"))
            .map_err(|e| SignerError::KeyError(e.to_string()))?;
        Self::new(&raw_key)
    }
}

#[async_trait]
impl Signer for LocalSigner {
    async fn address(&self) -> Result<Address, SignerError> {
        Ok(self.local_signer_client.address())
    }

    async fn sign_data(&self, message: &[u8]) -> Result<Bytes, SignerError> {
        let signature = self
            .local_signer_client
            .sign_message(message)
            .await
            .map_err(|e| SignerError::SigningError(format!("Failed to sign message: {}", e)))?;

        Ok(Bytes::from(signature.as_bytes().to_vec()))
    }
}
