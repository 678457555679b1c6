//! Interpreting the server's JSON reply

use serde::Deserialize;

use crate::error::{PasteError, PasteResult};

/// A paste the server accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PasteCreated {
    pub id: String,
    /// Path + query of the paste, relative to the server URL (e.g. `/?abc`)
    pub url: String,
    #[serde(rename = "deletetoken")]
    pub delete_token: String,
}

#[derive(Deserialize)]
struct Status {
    status: i64,
}

#[derive(Deserialize)]
struct ServiceFailure {
    status: i64,
    #[serde(default)]
    message: String,
}

/// Classify a 200 response body.
///
/// `status` is read first; zero means success, anything else is surfaced as
/// [`PasteError::Service`] with the server's message.
pub fn interpret(body: &[u8]) -> PasteResult<PasteCreated> {
    let Status { status } = serde_json::from_slice(body).map_err(PasteError::MalformedResponse)?;

    if status != 0 {
        let failure: ServiceFailure =
            serde_json::from_slice(body).map_err(PasteError::MalformedResponse)?;
        return Err(PasteError::Service {
            status: failure.status,
            message: failure.message,
        });
    }

    serde_json::from_slice(body).map_err(PasteError::MalformedResponse)
}
