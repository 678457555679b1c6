pub mod config;
pub mod error;
pub mod types;

pub use error::{PrvbinError, PrvbinResult};
pub use types::{valid_expire, Expire, Formatter};

/// Server used when neither the config file nor the command line names one
pub const DEFAULT_URL: &str = "https://bin.0xfc.de";
