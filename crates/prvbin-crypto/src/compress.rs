//! Optional compression of the paste blob before encryption
//!
//! PrivateBin labels its compression "zlib" in the adata array, but the bytes
//! are a raw deflate stream (no zlib header or Adler-32 trailer).

use flate2::write::DeflateEncoder;
use std::io::Write;

use crate::error::{CryptoError, CryptoResult};

/// Compression applied to the blob, recorded in the adata so the reader knows
/// how to reverse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Zlib,
}

impl Compression {
    pub fn from_flag(compress: bool) -> Self {
        if compress {
            Compression::Zlib
        } else {
            Compression::None
        }
    }

    /// Name used in the adata array.
    pub fn as_str(self) -> &'static str {
        match self {
            Compression::None => "none",
            Compression::Zlib => "zlib",
        }
    }
}

/// Compress `blob` according to `compression`. `None` returns the input unchanged.
pub fn compress(blob: Vec<u8>, compression: Compression) -> CryptoResult<Vec<u8>> {
    match compression {
        Compression::None => Ok(blob),
        Compression::Zlib => {
            let mut encoder = DeflateEncoder::new(
                Vec::with_capacity(blob.len() / 2 + 64),
                flate2::Compression::default(),
            );
            encoder.write_all(&blob).map_err(CryptoError::Compression)?;
            let out = encoder.finish().map_err(CryptoError::Compression)?;
            tracing::debug!(before = blob.len(), after = out.len(), "deflated paste blob");
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::DeflateDecoder;
    use proptest::prelude::*;
    use std::io::Read;

    fn inflate(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        DeflateDecoder::new(data).read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_none_is_identity() {
        let blob = br#"{"paste":"hello"}"#.to_vec();
        assert_eq!(compress(blob.clone(), Compression::None).unwrap(), blob);
    }

    #[test]
    fn test_zlib_is_raw_deflate() {
        let blob = b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_vec();
        let out = compress(blob.clone(), Compression::Zlib).unwrap();

        assert!(out.len() < blob.len());
        // A zlib header would start with 0x78
        assert_ne!(out[0], 0x78);
        assert_eq!(inflate(&out), blob);
    }

    #[test]
    fn test_names() {
        assert_eq!(Compression::from_flag(true).as_str(), "zlib");
        assert_eq!(Compression::from_flag(false).as_str(), "none");
    }

    proptest! {
        #[test]
        fn deflate_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
            let out = compress(data.clone(), Compression::Zlib).unwrap();
            prop_assert_eq!(inflate(&out), data);
        }
    }
}
