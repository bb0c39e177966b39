use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("missing required parameter: {name}")]
    MissingParameter { name: String },

    #[error("invalid instance action: {0}")]
    InvalidInstanceAction(String),
}
