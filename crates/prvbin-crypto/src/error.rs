use thiserror::Error;

pub type CryptoResult<T> = Result<T, CryptoError>;

/// Failures inside the encryption pipeline. All of them are fatal for the
/// paste being built; a new paste must start over with fresh randomness.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("random source failed: {0}")]
    RandomSource(String),

    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("compression failed: {0}")]
    Compression(#[source] std::io::Error),

    #[error("invalid key size: expected {expected} bytes, got {got}")]
    InvalidKeySize { expected: usize, got: usize },

    #[error("cipher initialization failed: {0}")]
    CipherInit(String),

    #[error("encryption failed")]
    Seal,

    #[error("adata serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
