pub mod advanced;
pub mod basic;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::basic::encoder::DataNexusEncoder;
pub use crate::core::config::EncoderConfig;
pub use crate::core::constants::{DEFAULT_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID};
pub use crate::error::{DataNexusSdkError, Result};
pub use crate::utils::{
    find_access_address, find_associated_access_address, find_dataset_address,
    find_owner_address,
};

pub mod interface {
    pub use datanexus_interface::{
        encode, AccountTypeTag, Amount, ContentHash, DataNexusInstruction, DatasetParams, Field,
        InterfaceError, Opcode,
    };
}

pub use datanexus_interface::{AccountTypeTag, Amount, ContentHash, DatasetParams, Opcode};
