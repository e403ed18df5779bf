//! DataNexus Instruction Definitions

use crate::codec::{encode, Field};
use crate::error::InterfaceError;
use crate::hash::ContentHash;
use crate::types::{AccountTypeTag, Amount};

/// Instruction discriminators, always the first payload byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    InitUserAccount = 0,
    InitDataAccount = 1,
    SetDataParams = 2,
    PurchaseAccess = 3,
    ShareAccess = 4,
}

impl Opcode {
    pub const ALL: [Opcode; 5] = [
        Opcode::InitUserAccount,
        Opcode::InitDataAccount,
        Opcode::SetDataParams,
        Opcode::PurchaseAccess,
        Opcode::ShareAccess,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Opcode::InitUserAccount => "InitUserAccount",
            Opcode::InitDataAccount => "InitDataAccount",
            Opcode::SetDataParams => "SetDataParams",
            Opcode::PurchaseAccess => "PurchaseAccess",
            Opcode::ShareAccess => "ShareAccess",
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = InterfaceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Opcode::ALL
            .get(value as usize)
            .copied()
            .ok_or(InterfaceError::InvalidOpcode(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataNexusInstruction {
    /// Create an owner or access index account for an authority
    ///
    /// Accounts:
    /// 0. `[writable, signer]` Payer
    /// 1. `[writable]` Authority
    /// 2. `[writable]` New user account
    /// 3. `[]` System program
    InitUserAccount { account_type: AccountTypeTag },

    /// Register a dataset under its owner account
    ///
    /// Accounts:
    /// 0. `[writable, signer]` Authority
    /// 1. `[writable]` Owner account
    /// 2. `[writable]` Dataset account
    /// 3. `[]` System program
    InitDataAccount { hash: ContentHash },

    /// Write dataset parameters
    ///
    /// Accounts:
    /// 0. `[writable, signer]` Authority
    /// 1. `[writable]` Dataset account
    SetDataParams {
        hash: ContentHash,
        /// Pre-serialized, schema owned by the program
        params: Vec<u8>,
    },

    /// Purchase access to a dataset
    ///
    /// Accounts:
    /// 0. `[writable, signer]` User authority
    /// 1. `[writable]` User access account
    /// 2. `[writable]` User token account
    /// 3. `[writable]` Owner authority
    /// 4. `[writable]` Owner token account
    /// 5. `[]` Dataset account
    /// 6. `[]` Token program
    PurchaseAccess { hash: ContentHash, amount: Amount },

    /// Share dataset access with another authority
    ///
    /// Accounts:
    /// 0. `[writable, signer]` User authority
    /// 1. `[writable]` User access account
    /// 2. `[writable]` Recipient authority
    /// 3. `[writable]` Recipient access account
    /// 4. `[]` Dataset account
    ShareAccess { hash: ContentHash },
}

impl DataNexusInstruction {
    pub fn opcode(&self) -> Opcode {
        match self {
            Self::InitUserAccount { .. } => Opcode::InitUserAccount,
            Self::InitDataAccount { .. } => Opcode::InitDataAccount,
            Self::SetDataParams { .. } => Opcode::SetDataParams,
            Self::PurchaseAccess { .. } => Opcode::PurchaseAccess,
            Self::ShareAccess { .. } => Opcode::ShareAccess,
        }
    }

    /// Instruction data layout:
    /// - [0]: opcode (1 byte, u8)
    /// - InitUserAccount: [1] account type (u8)
    /// - InitDataAccount, ShareAccess: [1..33] content hash
    /// - SetDataParams: [1..33] content hash, [33..] params
    /// - PurchaseAccess: [1..33] content hash, [33..41] amount (u64 LE)
    pub fn pack(&self) -> Vec<u8> {
        let opcode = self.opcode();
        match self {
            Self::InitUserAccount { account_type } => {
                encode(opcode, &[Field::AccountType(*account_type)])
            },
            Self::InitDataAccount { hash } | Self::ShareAccess { hash } => {
                encode(opcode, &[Field::Hash(hash)])
            },
            Self::SetDataParams { hash, params } => {
                encode(opcode, &[Field::Hash(hash), Field::Params(params.as_slice())])
            },
            Self::PurchaseAccess { hash, amount } => {
                encode(opcode, &[Field::Hash(hash), Field::Amount(*amount)])
            },
        }
    }
}
