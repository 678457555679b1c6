//! PrivateBin v2 request envelope
//!
//! ```text
//! { "v": 2, "adata": [...], "ct": "<base64 ciphertext+tag>", "meta": { "expire": "1week" } }
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use serde_json::value::RawValue;

use prvbin_core::Expire;
use prvbin_crypto::{
    build_adata, compress, derive_key, random_array, seal, AssociatedData, CipherParams,
    Compression, Passphrase, RandomSource,
};

use crate::error::PasteResult;
use crate::paste::Paste;

/// Paste format version understood by the server
pub const PASTE_FORMAT_VERSION: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasteMeta {
    pub expire: Expire,
}

/// The body POSTed to the server.
#[derive(Debug, Serialize)]
pub struct PasteRequest {
    pub v: u8,
    /// Exactly the bytes that were authenticated as AAD
    pub adata: Box<RawValue>,
    pub ct: String,
    pub meta: PasteMeta,
}

impl PasteRequest {
    pub fn to_json(&self) -> PasteResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// A built request together with the secret needed for the share link.
#[derive(Debug)]
pub struct EncryptedPaste {
    pub request: PasteRequest,
    pub adata: AssociatedData,
    /// Goes into the URL fragment only, never into the request
    pub passphrase: Passphrase,
}

/// Run the encryption pipeline for `paste` and wrap the result in a request.
///
/// Steps: validate → passphrase → salt + key → raw blob → compress → nonce →
/// adata → seal → base64. Validation failures return before `rng` is touched.
pub fn build_request(paste: &Paste, rng: &dyn RandomSource) -> PasteResult<EncryptedPaste> {
    paste.validate()?;

    let passphrase = Passphrase::generate(rng)?;
    let kdf_salt = random_array(rng)?;
    let key = derive_key(&passphrase, paste.password.as_ref(), &kdf_salt)?;

    let raw_blob = paste.raw_blob().to_json()?;
    let compression = Compression::from_flag(paste.compress);
    let blob = compress(raw_blob, compression)?;

    let nonce = random_array(rng)?;
    let params = CipherParams::new(nonce, kdf_salt, compression);
    let (adata, adata_bytes) =
        build_adata(params, paste.formatter, paste.open_discussion, paste.burn)?;
    let adata_raw: Box<RawValue> = serde_json::from_slice(&adata_bytes)?;

    let sealed = seal(&key, &nonce, &blob, adata_raw.get().as_bytes())?;

    tracing::debug!(
        blob_bytes = blob.len(),
        sealed_bytes = sealed.len(),
        compression = compression.as_str(),
        formatter = %paste.formatter,
        "paste encrypted"
    );

    Ok(EncryptedPaste {
        request: PasteRequest {
            v: PASTE_FORMAT_VERSION,
            adata: adata_raw,
            ct: STANDARD.encode(sealed),
            meta: PasteMeta {
                expire: paste.expire,
            },
        },
        adata,
        passphrase,
    })
}
