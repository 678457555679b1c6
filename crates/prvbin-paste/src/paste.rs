//! Plaintext paste model and the inner JSON blob that gets encrypted

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use secrecy::SecretString;
use serde::Serialize;
use std::borrow::Cow;

use prvbin_core::{Expire, Formatter, PrvbinError, PrvbinResult};

/// A file attached to a paste, already in data-URI form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name shown by the frontend
    pub name: String,
    /// `data:<mime>;base64,<payload>`
    pub data_uri: String,
}

impl Attachment {
    pub fn new(name: impl Into<String>, data_uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_uri: data_uri.into(),
        }
    }

    /// Encode raw file bytes as a data URI of the given MIME type.
    pub fn from_bytes(name: impl Into<String>, mime: &str, data: &[u8]) -> Self {
        let data_uri = format!("data:{mime};base64,{}", STANDARD.encode(data));
        Self::new(name, data_uri)
    }
}

/// Everything needed to encrypt one paste.
#[derive(Debug, Default)]
pub struct Paste {
    pub content: Vec<u8>,
    /// Optional user password mixed into the key derivation
    pub password: Option<SecretString>,
    pub formatter: Formatter,
    pub attachment: Option<Attachment>,
    /// Deflate the blob before encryption
    pub compress: bool,
    /// Delete after the first read
    pub burn: bool,
    /// Allow comments
    pub open_discussion: bool,
    pub expire: Expire,
}

impl Paste {
    /// Checks that must pass before any randomness is drawn.
    pub fn validate(&self) -> PrvbinResult<()> {
        if self.content.is_empty() {
            return Err(PrvbinError::EmptyContent);
        }
        Ok(())
    }

    /// The inner blob for this paste.
    pub fn raw_blob(&self) -> RawPasteBlob<'_> {
        RawPasteBlob {
            paste: String::from_utf8_lossy(&self.content),
            attachment: self.attachment.as_ref().map(|a| a.data_uri.as_str()),
            attachment_name: self.attachment.as_ref().map(|a| a.name.as_str()),
        }
    }
}

/// The plaintext JSON object that is compressed and encrypted:
/// `{"paste": ..., "attachment"?: ..., "attachment_name"?: ...}`
#[derive(Debug, Serialize)]
pub struct RawPasteBlob<'a> {
    pub paste: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_name: Option<&'a str>,
}

impl RawPasteBlob<'_> {
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
