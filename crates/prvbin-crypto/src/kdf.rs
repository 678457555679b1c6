//! Key derivation: PBKDF2-HMAC-SHA256 over passphrase (+ password) → paste key

use hmac::Hmac;
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use zeroize::{Zeroize, Zeroizing};

use crate::error::{CryptoError, CryptoResult};
use crate::rng::{random_array, RandomSource};
use crate::{KDF_ITERATIONS, KDF_SALT_SIZE, KEY_SIZE, PASSPHRASE_SIZE};

/// The 256-bit random secret of a paste.
///
/// It never leaves the client except base58-encoded in the URL fragment of
/// the share link. Zeroized on drop.
#[derive(Clone)]
pub struct Passphrase {
    bytes: [u8; PASSPHRASE_SIZE],
}

impl Passphrase {
    /// Draw a fresh passphrase from `source`.
    pub fn generate(source: &dyn RandomSource) -> CryptoResult<Self> {
        Ok(Self::from_bytes(random_array(source)?))
    }

    pub fn from_bytes(bytes: [u8; PASSPHRASE_SIZE]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; PASSPHRASE_SIZE] {
        &self.bytes
    }

    /// Base58 (Bitcoin alphabet) form used as the share link fragment.
    pub fn to_base58(&self) -> String {
        bs58::encode(&self.bytes).into_string()
    }
}

impl Drop for Passphrase {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Passphrase")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// A 256-bit AES key derived for a single paste. Zeroized on drop.
pub struct PasteKey {
    bytes: [u8; KEY_SIZE],
}

impl PasteKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl Drop for PasteKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for PasteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasteKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Derive the paste key from the passphrase and an optional user password.
///
/// The PBKDF2 input is `passphrase || utf8(password)` with no separator or
/// length prefix; an empty password is the same as none. Other PrivateBin
/// clients derive the key exactly this way, so the layout must not change
/// even though it is not self-delimiting.
pub fn derive_key(
    passphrase: &Passphrase,
    password: Option<&SecretString>,
    salt: &[u8; KDF_SALT_SIZE],
) -> CryptoResult<PasteKey> {
    let password = password
        .map(|p| p.expose_secret().as_bytes())
        .unwrap_or_default();

    let mut ikm = Zeroizing::new(Vec::with_capacity(PASSPHRASE_SIZE + password.len()));
    ikm.extend_from_slice(passphrase.as_bytes());
    ikm.extend_from_slice(password);

    Ok(PasteKey::from_bytes(pbkdf2_sha256(&ikm, salt, KDF_ITERATIONS)?))
}

fn pbkdf2_sha256(ikm: &[u8], salt: &[u8], rounds: u32) -> CryptoResult<[u8; KEY_SIZE]> {
    let mut key = [0u8; KEY_SIZE];
    pbkdf2::pbkdf2::<Hmac<Sha256>>(ikm, salt, rounds, &mut key)
        .map_err(|e| CryptoError::KeyDerivation(format!("PBKDF2 failed: {e}")))?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: [u8; KDF_SALT_SIZE] = [1, 2, 3, 4, 5, 6, 7, 8];

    fn counting_passphrase() -> Passphrase {
        let mut bytes = [0u8; PASSPHRASE_SIZE];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        Passphrase::from_bytes(bytes)
    }

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn test_pbkdf2_known_vector() {
        // PBKDF2-HMAC-SHA256, P="password", S="salt", c=100000, dkLen=32
        let key = pbkdf2_sha256(b"password", b"salt", 100_000).unwrap();
        assert_eq!(
            hex(&key),
            "0394a2ede332c9a13eb82e9b24631604c31df978b4e2f0fbd2c549944f9d79a5"
        );
    }

    #[test]
    fn test_derive_key_without_password() {
        let key = derive_key(&counting_passphrase(), None, &SALT).unwrap();
        assert_eq!(
            hex(key.as_bytes()),
            "b77c3fee6f79dfd9777a86850ec41e8b6b2564bd192c35476a0ec0bf44117bda"
        );
    }

    #[test]
    fn test_derive_key_appends_password() {
        let password = SecretString::from("hunter2");
        let key = derive_key(&counting_passphrase(), Some(&password), &SALT).unwrap();
        assert_eq!(
            hex(key.as_bytes()),
            "b23ef1df0cd50d1c34cfb9b4411495eff5a137bf2d2f83316c19e062608ba4ae"
        );
    }

    #[test]
    fn test_derive_key_deterministic() {
        let passphrase = counting_passphrase();
        let password = SecretString::from("correct horse");

        let key1 = derive_key(&passphrase, Some(&password), &SALT).unwrap();
        let key2 = derive_key(&passphrase, Some(&password), &SALT).unwrap();

        assert_eq!(key1.as_bytes(), key2.as_bytes(), "KDF must be deterministic");
    }

    #[test]
    fn test_empty_password_same_as_none() {
        let passphrase = counting_passphrase();
        let empty = SecretString::from("");

        let key1 = derive_key(&passphrase, None, &SALT).unwrap();
        let key2 = derive_key(&passphrase, Some(&empty), &SALT).unwrap();

        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salts() {
        let passphrase = counting_passphrase();

        let key1 = derive_key(&passphrase, None, &[1u8; KDF_SALT_SIZE]).unwrap();
        let key2 = derive_key(&passphrase, None, &[2u8; KDF_SALT_SIZE]).unwrap();

        assert_ne!(
            key1.as_bytes(),
            key2.as_bytes(),
            "different salts must produce different keys"
        );
    }

    #[test]
    fn test_base58_fragment() {
        let passphrase = Passphrase::from_bytes([0u8; PASSPHRASE_SIZE]);
        // Leading zero bytes map to '1' in the Bitcoin alphabet
        assert_eq!(passphrase.to_base58(), "1".repeat(PASSPHRASE_SIZE));

        let passphrase = counting_passphrase();
        let decoded = bs58::decode(passphrase.to_base58()).into_vec().unwrap();
        assert_eq!(decoded, passphrase.as_bytes());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let passphrase = counting_passphrase();
        let key = PasteKey::from_bytes([7u8; KEY_SIZE]);

        assert!(format!("{passphrase:?}").contains("REDACTED"));
        assert!(!format!("{key:?}").contains('7'));
    }
}
