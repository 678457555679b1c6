//! HTTP transport for paste requests

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;

use crate::error::{PasteError, PasteResult};

/// Header PrivateBin requires to treat a POST as an API call
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "JSONHttpRequest";

/// Sends a serialized request body and returns the raw response body.
///
/// Implementations report a non-200 status as [`PasteError::Transport`]
/// before looking at the body, and never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, url: &str, body: Vec<u8>) -> PasteResult<Vec<u8>>;
}

/// `reqwest`-backed transport. Timeouts follow the client's defaults.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> PasteResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("prvbin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PasteError::Connection(format!("building HTTP client: {e}")))?;
        Ok(Self { http })
    }

    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, url: &str, body: Vec<u8>) -> PasteResult<Vec<u8>> {
        let resp = self
            .http
            .post(url)
            .header(REQUESTED_WITH_HEADER, HeaderValue::from_static(REQUESTED_WITH_VALUE))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await
            .map_err(|e| PasteError::Connection(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(PasteError::Transport {
                status: status.as_u16(),
                text: status_text(status),
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| PasteError::Connection(format!("reading response body: {e}")))?;
        Ok(bytes.to_vec())
    }
}

/// Canonical reason phrase for `status`; reqwest does not expose the one the
/// server sent.
fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unknown status")
        .to_string()
}
