//! Paste client: encrypt, send, interpret, and build the share link

use prvbin_crypto::{OsRandom, Passphrase, RandomSource};

use crate::error::PasteResult;
use crate::paste::Paste;
use crate::request::build_request;
use crate::response::{interpret, PasteCreated};
use crate::transport::{HttpTransport, Transport};

pub struct Client<T: Transport = HttpTransport> {
    server_url: String,
    transport: T,
    rng: Box<dyn RandomSource>,
}

impl Client<HttpTransport> {
    /// HTTP client for the instance at `server_url`.
    pub fn new(server_url: impl Into<String>) -> PasteResult<Self> {
        Ok(Self::with_transport(server_url, HttpTransport::new()?))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(server_url: impl Into<String>, transport: T) -> Self {
        Self {
            server_url: server_url.into(),
            transport,
            rng: Box::new(OsRandom),
        }
    }

    /// Replace the OS random source.
    pub fn with_random_source(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Encrypt and upload one paste. Nothing is retried.
    pub async fn send(&self, paste: &Paste) -> PasteResult<SentPaste> {
        let encrypted = build_request(paste, self.rng.as_ref())?;
        let body = encrypted.request.to_json()?;

        tracing::debug!(url = %self.server_url, bytes = body.len(), "posting paste");
        let response = self.transport.send(&self.server_url, body).await?;
        let created = interpret(&response)?;

        tracing::info!(id = %created.id, expire = %paste.expire, "paste created");

        Ok(SentPaste {
            created,
            passphrase: encrypted.passphrase,
            server_url: self.server_url.clone(),
        })
    }
}

/// A paste the server accepted, with the secret needed to link to it.
#[derive(Debug)]
pub struct SentPaste {
    pub created: PasteCreated,
    passphrase: Passphrase,
    server_url: String,
}

impl SentPaste {
    pub fn passphrase(&self) -> &Passphrase {
        &self.passphrase
    }

    /// `<server><url>#<base58(passphrase)>`. The fragment is never sent to the
    /// server by browsers.
    pub fn share_url(&self) -> String {
        format!(
            "{}{}#{}",
            self.base_url(),
            self.created.url,
            self.passphrase.to_base58()
        )
    }

    /// Link that deletes the paste before it expires.
    pub fn delete_url(&self) -> String {
        format!(
            "{}/?pasteid={}&deletetoken={}",
            self.base_url(),
            self.created.id,
            self.created.delete_token
        )
    }

    fn base_url(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sent(server_url: &str) -> SentPaste {
        SentPaste {
            created: PasteCreated {
                id: "abc".into(),
                url: "/?abc".into(),
                delete_token: "xyz".into(),
            },
            passphrase: Passphrase::from_bytes([0u8; 32]),
            server_url: server_url.into(),
        }
    }

    #[test]
    fn test_share_url() {
        assert_eq!(
            sent("https://bin.example.org").share_url(),
            format!("https://bin.example.org/?abc#{}", "1".repeat(32))
        );
    }

    #[test]
    fn test_share_url_trailing_slash() {
        let link = sent("https://bin.example.org/").share_url();
        assert!(link.starts_with("https://bin.example.org/?abc#"));
    }

    #[test]
    fn test_delete_url() {
        assert_eq!(
            sent("https://bin.example.org").delete_url(),
            "https://bin.example.org/?pasteid=abc&deletetoken=xyz"
        );
    }
}
