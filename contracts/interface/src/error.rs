//! DataNexus Interface Error Types

use thiserror::Error;

/// Construction-time failures raised while building typed wire values.
///
/// The payload codec itself never fails; these are produced by the
/// constructors of [`ContentHash`](crate::ContentHash),
/// [`Amount`](crate::Amount) and friends before anything is encoded.
#[derive(Debug, Error)]
pub enum InterfaceError {
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Amount {0} does not fit in an unsigned 64-bit integer")]
    Overflow(String),

    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid opcode: {0}")]
    InvalidOpcode(u8),

    #[error("Invalid account type: {0}")]
    InvalidAccountType(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InterfaceError>;
