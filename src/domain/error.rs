use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not a valid HTTPS URL")]
    InvalidInput,

    #[error("Proxy error: {0}")]
    Proxy(String),

    #[error("I/O error: {0}")]
    Io(String),
}
