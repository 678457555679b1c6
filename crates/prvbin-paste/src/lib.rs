//! prvbin-paste: build, send, and interpret PrivateBin v2 pastes
//!
//! - `paste`: the plaintext paste and its inner JSON blob
//! - `options`: every option a paste can be created with
//! - `request`: encryption pipeline → `{v, adata, ct, meta}` envelope
//! - `response`: service reply → created paste or service error
//! - `transport`: HTTP POST seam (`reqwest` by default)
//! - `client`: send a paste and build its share link

pub mod client;
pub mod error;
pub mod options;
pub mod paste;
pub mod request;
pub mod response;
pub mod transport;

pub use client::{Client, SentPaste};
pub use error::{PasteError, PasteResult};
pub use options::{ContentSource, PasteOptions};
pub use paste::{Attachment, Paste, RawPasteBlob};
pub use request::{build_request, EncryptedPaste, PasteMeta, PasteRequest, PASTE_FORMAT_VERSION};
pub use response::{interpret, PasteCreated};
pub use transport::{HttpTransport, Transport};
