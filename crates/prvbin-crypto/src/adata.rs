//! PrivateBin v2 associated data ("adata")
//!
//! Wire shape (a JSON array, not an object):
//! ```text
//! [[nonce_b64, salt_b64, iterations, key_bits, tag_bits, "aes", "gcm", compression],
//!  formatter, open_discussion (0|1), burn (0|1)]
//! ```
//!
//! The serialized bytes are both the `adata` field of the request and the AAD
//! of the GCM seal. Readers re-serialize what they received and authenticate
//! against it, so element order and number-vs-string typing are fixed.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::ser::{Serialize, SerializeTuple, Serializer};

use prvbin_core::Formatter;

use crate::compress::Compression;
use crate::error::CryptoResult;
use crate::{
    ADATA_TAG_BITS, CIPHER_ALGO, CIPHER_MODE, KDF_ITERATIONS, KDF_KEY_BITS, KDF_SALT_SIZE,
    NONCE_SIZE,
};

/// Per-paste cipher parameters: the random nonce and salt plus the fixed
/// algorithm constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherParams {
    pub nonce: [u8; NONCE_SIZE],
    pub kdf_salt: [u8; KDF_SALT_SIZE],
    pub kdf_iterations: u32,
    pub kdf_key_bits: u32,
    pub tag_bits: u32,
    pub cipher_algo: &'static str,
    pub cipher_mode: &'static str,
    pub compression: Compression,
}

impl CipherParams {
    pub fn new(
        nonce: [u8; NONCE_SIZE],
        kdf_salt: [u8; KDF_SALT_SIZE],
        compression: Compression,
    ) -> Self {
        Self {
            nonce,
            kdf_salt,
            kdf_iterations: KDF_ITERATIONS,
            kdf_key_bits: KDF_KEY_BITS,
            tag_bits: ADATA_TAG_BITS,
            cipher_algo: CIPHER_ALGO,
            cipher_mode: CIPHER_MODE,
            compression,
        }
    }
}

impl Serialize for CipherParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_tuple(8)?;
        seq.serialize_element(&STANDARD.encode(self.nonce))?;
        seq.serialize_element(&STANDARD.encode(self.kdf_salt))?;
        seq.serialize_element(&self.kdf_iterations)?;
        seq.serialize_element(&self.kdf_key_bits)?;
        seq.serialize_element(&self.tag_bits)?;
        seq.serialize_element(self.cipher_algo)?;
        seq.serialize_element(self.cipher_mode)?;
        seq.serialize_element(self.compression.as_str())?;
        seq.end()
    }
}

/// The full adata structure of a paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociatedData {
    pub params: CipherParams,
    pub formatter: Formatter,
    pub open_discussion: bool,
    pub burn: bool,
}

impl Serialize for AssociatedData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_tuple(4)?;
        seq.serialize_element(&self.params)?;
        seq.serialize_element(self.formatter.as_str())?;
        // Flags are integers on the wire, never JSON booleans
        seq.serialize_element(&u8::from(self.open_discussion))?;
        seq.serialize_element(&u8::from(self.burn))?;
        seq.end()
    }
}

/// Build the adata structure and its serialized bytes.
///
/// The returned bytes are the only serialization that may be used, both as
/// AAD and in the request body.
pub fn build_adata(
    params: CipherParams,
    formatter: Formatter,
    open_discussion: bool,
    burn: bool,
) -> CryptoResult<(AssociatedData, Vec<u8>)> {
    let adata = AssociatedData {
        params,
        formatter,
        open_discussion,
        burn,
    };
    let bytes = serde_json::to_vec(&adata)?;
    Ok((adata, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_wire_bytes() {
        let params = CipherParams::new([0u8; NONCE_SIZE], [0u8; KDF_SALT_SIZE], Compression::Zlib);
        let (_, bytes) = build_adata(params, Formatter::Markdown, true, false).unwrap();

        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            r#"[["AAAAAAAAAAAAAAAAAAAAAA==","AAAAAAAAAAA=",100000,256,128,"aes","gcm","zlib"],"markdown",1,0]"#
        );
    }

    #[test]
    fn test_flags_are_integers() {
        let params = CipherParams::new([9u8; NONCE_SIZE], [3u8; KDF_SALT_SIZE], Compression::None);
        let (_, bytes) = build_adata(params, Formatter::PlainText, false, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value[1], "plaintext");
        assert_eq!(value[2], serde_json::json!(0));
        assert_eq!(value[3], serde_json::json!(1));
        assert!(value[3].is_u64(), "burn must not serialize as a boolean");
        assert_eq!(value[0][7], "none");
    }

    #[test]
    fn test_structured_value_matches_bytes() {
        let params = CipherParams::new([1u8; NONCE_SIZE], [2u8; KDF_SALT_SIZE], Compression::Zlib);
        let (adata, bytes) =
            build_adata(params, Formatter::SyntaxHighlighting, true, true).unwrap();

        assert_eq!(serde_json::to_vec(&adata).unwrap(), bytes);
    }

    proptest! {
        #[test]
        fn reserialized_adata_is_byte_identical(
            nonce in any::<[u8; NONCE_SIZE]>(),
            salt in any::<[u8; KDF_SALT_SIZE]>(),
            compress in any::<bool>(),
            open_discussion in any::<bool>(),
            burn in any::<bool>(),
            formatter in prop_oneof![
                Just(Formatter::PlainText),
                Just(Formatter::Markdown),
                Just(Formatter::SyntaxHighlighting),
            ],
        ) {
            let params = CipherParams::new(nonce, salt, Compression::from_flag(compress));
            let (_, bytes) = build_adata(params, formatter, open_discussion, burn).unwrap();

            let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            prop_assert_eq!(serde_json::to_vec(&value).unwrap(), bytes);

            let outer = value.as_array().unwrap();
            prop_assert_eq!(outer.len(), 4);
            prop_assert_eq!(outer[0].as_array().unwrap().len(), 8);
            prop_assert_eq!(
                STANDARD.decode(outer[0][0].as_str().unwrap()).unwrap(),
                nonce.to_vec()
            );
            prop_assert_eq!(
                STANDARD.decode(outer[0][1].as_str().unwrap()).unwrap(),
                salt.to_vec()
            );
        }
    }
}
