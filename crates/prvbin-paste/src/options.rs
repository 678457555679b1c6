//! The complete set of options a paste is created with.
//!
//! | option            | effect                                                   |
//! |-------------------|----------------------------------------------------------|
//! | `source`          | where the content comes from: text, a file, or an editor |
//! | `password`        | mixed into the key derivation; readers must supply it    |
//! | `formatter`       | frontend rendering (adata element 1)                     |
//! | `attachment`      | file sent inside the encrypted blob as a data URI        |
//! | `compress`        | deflate before encryption (adata compression field)      |
//! | `burn`            | delete after first read (adata element 3)                |
//! | `open_discussion` | allow comments (adata element 2)                         |
//! | `expire`          | `meta.expire` of the request                             |
//! | `server_url`      | instance the paste is posted to and the link points at   |

use secrecy::SecretString;
use std::path::PathBuf;

use prvbin_core::config::{PasteDefaults, PrvbinConfig};
use prvbin_core::{Expire, Formatter};

use crate::error::PasteResult;
use crate::paste::{Attachment, Paste};

/// Where the paste content is read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentSource {
    Text(String),
    File(PathBuf),
    /// Interactive editor session on a temporary file
    #[default]
    Editor,
}

#[derive(Debug)]
pub struct PasteOptions {
    pub source: ContentSource,
    pub password: Option<SecretString>,
    pub formatter: Formatter,
    pub attachment: Option<PathBuf>,
    pub compress: bool,
    pub burn: bool,
    pub open_discussion: bool,
    pub expire: Expire,
    pub server_url: String,
}

impl PasteOptions {
    /// Options seeded from the config file; flags are applied on top by the caller.
    pub fn from_config(config: &PrvbinConfig) -> Self {
        let PasteDefaults {
            expire,
            formatter,
            compress,
            burn,
            open_discussion,
        } = config.paste.clone();

        Self {
            source: ContentSource::default(),
            password: None,
            formatter,
            attachment: None,
            compress,
            burn,
            open_discussion,
            expire,
            server_url: config.server.url.clone(),
        }
    }

    /// Combine the options with the resolved content and attachment.
    ///
    /// Fails on empty content, before any cryptographic work.
    pub fn into_paste(self, content: Vec<u8>, attachment: Option<Attachment>) -> PasteResult<Paste> {
        let paste = Paste {
            content,
            password: self.password,
            formatter: self.formatter,
            attachment,
            compress: self.compress,
            burn: self.burn,
            open_discussion: self.open_discussion,
            expire: self.expire,
        };
        paste.validate()?;
        Ok(paste)
    }
}
