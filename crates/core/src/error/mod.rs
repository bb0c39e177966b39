mod compute;
mod config;

pub use compute::ComputeError;
pub use config::ConfigurationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Compute(#[from] ComputeError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("authorization denied: {operation}")]
    Authorization { operation: String },

    #[error("authentication failed")]
    Authentication,

    #[error("not found: {resource}")]
    NotFound { resource: String },

    #[error("rate limit or quota exceeded")]
    Quota,

    #[error("transient error during {operation_name}")]
    Transient { operation_name: String },

    #[error("unexpected error during {operation_name}: {detail}")]
    Unknown {
        operation_name: String,
        detail: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
