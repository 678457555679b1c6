use thiserror::Error;

pub type PrvbinResult<T> = Result<T, PrvbinError>;

#[derive(Debug, Error)]
pub enum PrvbinError {
    #[error("invalid expire time: {0:?}")]
    InvalidExpire(String),

    #[error("invalid formatter: {0:?}")]
    InvalidFormatter(String),

    #[error("won't upload an empty paste")]
    EmptyContent,

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
