use thiserror::Error;

use prvbin_core::PrvbinError;
use prvbin_crypto::CryptoError;

pub type PasteResult<T> = Result<T, PasteError>;

#[derive(Debug, Error)]
pub enum PasteError {
    #[error(transparent)]
    Validation(#[from] PrvbinError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("request serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The server answered with a non-200 HTTP status.
    #[error("{status}: {text}")]
    Transport { status: u16, text: String },

    #[error("connection failed: {0}")]
    Connection(String),

    /// The server answered 200 but reported a nonzero paste status.
    #[error("{status}: {message}")]
    Service { status: i64, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}
