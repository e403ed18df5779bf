use datanexus_interface::InterfaceError;
use thiserror::Error;

/// SDK-specific error types for DataNexus operations
#[derive(Debug, Error)]
pub enum DataNexusSdkError {
    /// Invalid typed field (hash length, amount range, params encoding)
    #[error(transparent)]
    Interface(#[from] InterfaceError),

    /// Program id could not be parsed as a base58 public key
    #[error("Invalid program id: {0}")]
    InvalidProgramId(String),

    /// A builder was asked to build without a required account
    #[error("Missing account: {0}")]
    MissingAccount(&'static str),

    /// A builder was asked to build without a required parameter
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, DataNexusSdkError>;
