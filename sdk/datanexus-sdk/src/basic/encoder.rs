use crate::advanced::accounts::{
    InitDataAccountAccounts, InitUserAccountAccounts, PurchaseAccessAccounts,
    SetDataParamsAccounts, ShareAccessAccounts,
};
use crate::advanced::instructions;
use crate::basic::actions::{
    InitDataAccountBuilder, InitUserAccountBuilder, PurchaseAccessBuilder, SetDataParamsBuilder,
    ShareAccessBuilder,
};
use crate::core::config::EncoderConfig;
use crate::core::constants::DEFAULT_PROGRAM_ID;
use crate::error::Result;
use crate::utils;
use datanexus_interface::{AccountTypeTag, Amount, ContentHash, Opcode};
use log::{debug, trace};
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;

/// Instruction encoder bound to one DataNexus deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataNexusEncoder {
    config: EncoderConfig,
}

impl Default for DataNexusEncoder {
    fn default() -> Self {
        Self::new(EncoderConfig::default())
    }
}

impl DataNexusEncoder {
    pub const DEFAULT_PROGRAM_ID: Pubkey = DEFAULT_PROGRAM_ID;

    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn with_program_id(program_id: Pubkey) -> Self {
        Self::new(EncoderConfig::new(program_id))
    }

    /// Encoder for the deployment named by `DATANEXUS_PROGRAM_ID`
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(EncoderConfig::from_env()?))
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.config.program_id
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    //=========================================================================
    // Instruction encoding
    //=========================================================================

    pub fn init_user_account(
        &self,
        accounts: &InitUserAccountAccounts,
        account_type: AccountTypeTag,
    ) -> Instruction {
        let ix = instructions::init_user_account(self.program_id(), accounts, account_type);
        log_instruction(Opcode::InitUserAccount, &ix);
        ix
    }

    pub fn init_data_account(
        &self,
        accounts: &InitDataAccountAccounts,
        hash: &ContentHash,
    ) -> Instruction {
        let ix = instructions::init_data_account(self.program_id(), accounts, hash);
        log_instruction(Opcode::InitDataAccount, &ix);
        ix
    }

    pub fn set_data_params(
        &self,
        accounts: &SetDataParamsAccounts,
        hash: &ContentHash,
        params: &[u8],
    ) -> Instruction {
        let ix = instructions::set_data_params(self.program_id(), accounts, hash, params);
        log_instruction(Opcode::SetDataParams, &ix);
        ix
    }

    pub fn purchase_access(
        &self,
        accounts: &PurchaseAccessAccounts,
        hash: &ContentHash,
        amount: Amount,
    ) -> Instruction {
        let ix = instructions::purchase_access(self.program_id(), accounts, hash, amount);
        log_instruction(Opcode::PurchaseAccess, &ix);
        ix
    }

    pub fn share_access(&self, accounts: &ShareAccessAccounts, hash: &ContentHash) -> Instruction {
        let ix = instructions::share_access(self.program_id(), accounts, hash);
        log_instruction(Opcode::ShareAccess, &ix);
        ix
    }

    //=========================================================================
    // Builders
    //=========================================================================

    pub fn create_user_account(&self) -> InitUserAccountBuilder<'_> {
        InitUserAccountBuilder::new(self)
    }

    pub fn register_dataset(&self) -> InitDataAccountBuilder<'_> {
        InitDataAccountBuilder::new(self)
    }

    pub fn update_params(&self) -> SetDataParamsBuilder<'_> {
        SetDataParamsBuilder::new(self)
    }

    pub fn purchase(&self) -> PurchaseAccessBuilder<'_> {
        PurchaseAccessBuilder::new(self)
    }

    pub fn share(&self) -> ShareAccessBuilder<'_> {
        ShareAccessBuilder::new(self)
    }

    //=========================================================================
    // Address derivation for this deployment
    //=========================================================================

    pub fn owner_address(&self, authority: &Pubkey) -> Pubkey {
        utils::find_owner_address(self.program_id(), authority).0
    }

    pub fn access_address(&self, authority: &Pubkey) -> Pubkey {
        utils::find_access_address(self.program_id(), authority).0
    }

    pub fn dataset_address(&self, hash: &ContentHash) -> Pubkey {
        utils::find_dataset_address(self.program_id(), hash).0
    }

    pub fn associated_access_address(&self, authority: &Pubkey, dataset: &Pubkey) -> Pubkey {
        utils::find_associated_access_address(self.program_id(), authority, dataset).0
    }
}

fn log_instruction(opcode: Opcode, ix: &Instruction) {
    debug!(
        "encoded {} for program {}: {} accounts, {} data bytes",
        opcode.name(),
        ix.program_id,
        ix.accounts.len(),
        ix.data.len()
    );
    trace!("{} data: {}", opcode.name(), hex::encode(&ix.data));
}
