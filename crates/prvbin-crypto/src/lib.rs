//! prvbin-crypto: client-side encryption for PrivateBin pastes
//!
//! Pipeline: raw paste JSON → deflate (optional) → AES-256-GCM seal → base64
//!
//! Key material:
//! ```text
//! Passphrase (256-bit random, only ever shared via the URL fragment)
//!   └── Paste Key: PBKDF2-HMAC-SHA256(passphrase || password, salt=random_64bit, 100000 rounds)
//!       └── AEAD: AES-256-GCM (key=paste_key, nonce=random_128bit, AAD=serialized adata array)
//! ```
//!
//! The adata array is sent in the clear next to the ciphertext and is also the
//! AAD, so its serialized bytes must be produced exactly once and reused.

pub mod adata;
pub mod cipher;
pub mod compress;
pub mod error;
pub mod kdf;
pub mod rng;

pub use adata::{build_adata, AssociatedData, CipherParams};
pub use cipher::seal;
pub use compress::{compress, Compression};
pub use error::{CryptoError, CryptoResult};
pub use kdf::{derive_key, Passphrase, PasteKey};
pub use rng::{random_array, OsRandom, RandomSource};

/// Size of the random passphrase in bytes (256-bit)
pub const PASSPHRASE_SIZE: usize = 32;

/// Size of the derived AES key in bytes (256-bit)
pub const KEY_SIZE: usize = 32;

/// Size of the PBKDF2 salt in bytes (64-bit)
pub const KDF_SALT_SIZE: usize = 8;

/// Size of the GCM nonce in bytes. PrivateBin uses 128 bits, not the usual 96.
pub const NONCE_SIZE: usize = 16;

/// Size of the GCM authentication tag in bytes
pub const TAG_SIZE: usize = 16;

/// PBKDF2 iteration count
pub const KDF_ITERATIONS: u32 = 100_000;

/// Key size in bits, as advertised in the adata array
pub const KDF_KEY_BITS: u32 = 256;

/// Tag size in bits, as advertised in the adata array
pub const ADATA_TAG_BITS: u32 = 128;

pub const CIPHER_ALGO: &str = "aes";
pub const CIPHER_MODE: &str = "gcm";
