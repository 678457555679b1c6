//! AES-256-GCM sealing with a 128-bit nonce
//!
//! Output format: `[N bytes: ciphertext][16 bytes: GCM tag]`, the same layout
//! WebCrypto produces. The nonce travels in the adata array, not here.
//!
//! PrivateBin uses a 16-byte GCM nonce. Most AEAD APIs default to 12 bytes,
//! so the cipher type fixes the nonce length explicitly; with a non-96-bit
//! nonce GCM derives its initial counter block by GHASHing the nonce.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Nonce};

use crate::error::{CryptoError, CryptoResult};
use crate::kdf::PasteKey;
use crate::{KEY_SIZE, NONCE_SIZE};

/// AES-256-GCM with a 16-byte nonce and 16-byte tag.
pub(crate) type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Encrypt `plaintext` under `key`, authenticating `aad` alongside it.
///
/// Returns ciphertext with the tag appended. A nonce must never be reused
/// with the same key; callers draw a fresh one per paste.
pub fn seal(
    key: &PasteKey,
    nonce: &[u8; NONCE_SIZE],
    plaintext: &[u8],
    aad: &[u8],
) -> CryptoResult<Vec<u8>> {
    let cipher = new_cipher(key.as_bytes())?;

    cipher
        .encrypt(
            Nonce::<U16>::from_slice(nonce),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|_| CryptoError::Seal)
}

pub(crate) fn new_cipher(key: &[u8]) -> CryptoResult<Aes256Gcm16> {
    if key.len() != KEY_SIZE {
        return Err(CryptoError::InvalidKeySize {
            expected: KEY_SIZE,
            got: key.len(),
        });
    }
    Aes256Gcm16::new_from_slice(key).map_err(|e| CryptoError::CipherInit(e.to_string()))
}
