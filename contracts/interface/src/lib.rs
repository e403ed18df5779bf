//! DataNexus Interface
//!
//! Wire contract of the DataNexus dataset marketplace program: opcodes, the
//! typed fields each instruction carries and the payload codec that lays
//! them out as bytes.

pub mod codec;
pub mod error;
pub mod hash;
pub mod instruction;
pub mod params;
pub mod types;

pub use codec::{encode, Field};
pub use error::{InterfaceError, Result};
pub use hash::ContentHash;
pub use instruction::{DataNexusInstruction, Opcode};
pub use params::DatasetParams;
pub use types::{AccountTypeTag, Amount};
