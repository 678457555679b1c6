//! Secure random source for passphrases, salts, and nonces

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{CryptoError, CryptoResult};

/// Source of cryptographically secure random bytes.
///
/// Implementations must be safe to share between threads; every paste draws
/// its own passphrase, salt and nonce from it.
pub trait RandomSource: Send + Sync {
    fn fill_bytes(&self, dest: &mut [u8]) -> CryptoResult<()>;
}

/// The operating system CSPRNG. Needs no seeding.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> CryptoResult<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| CryptoError::RandomSource(e.to_string()))
    }
}

/// Draw exactly `N` random bytes from `source`.
pub fn random_array<const N: usize>(source: &dyn RandomSource) -> CryptoResult<[u8; N]> {
    let mut bytes = [0u8; N];
    source.fill_bytes(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl RandomSource for Broken {
        fn fill_bytes(&self, _dest: &mut [u8]) -> CryptoResult<()> {
            Err(CryptoError::RandomSource("entropy pool unavailable".into()))
        }
    }

    #[test]
    fn test_os_random_fills_requested_length() {
        let a: [u8; 32] = random_array(&OsRandom).unwrap();
        let b: [u8; 32] = random_array(&OsRandom).unwrap();
        assert_ne!(a, b, "two 256-bit draws must differ");
    }

    #[test]
    fn test_zero_length_draw() {
        let empty: [u8; 0] = random_array(&OsRandom).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_source_failure_propagates() {
        let err = random_array::<16>(&Broken).unwrap_err();
        assert!(matches!(err, CryptoError::RandomSource(_)));
    }
}
