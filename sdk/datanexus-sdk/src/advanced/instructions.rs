use crate::advanced::accounts::{
    AccountList, InitDataAccountAccounts, InitUserAccountAccounts, PurchaseAccessAccounts,
    SetDataParamsAccounts, ShareAccessAccounts,
};
use datanexus_interface::{AccountTypeTag, Amount, ContentHash, DataNexusInstruction};
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;

fn build_instruction(
    program_id: &Pubkey,
    accounts: &impl AccountList,
    instruction: &DataNexusInstruction,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(),
        data: instruction.pack(),
    }
}

pub fn init_user_account(
    program_id: &Pubkey,
    accounts: &InitUserAccountAccounts,
    account_type: AccountTypeTag,
) -> Instruction {
    build_instruction(
        program_id,
        accounts,
        &DataNexusInstruction::InitUserAccount { account_type },
    )
}

pub fn init_data_account(
    program_id: &Pubkey,
    accounts: &InitDataAccountAccounts,
    hash: &ContentHash,
) -> Instruction {
    build_instruction(
        program_id,
        accounts,
        &DataNexusInstruction::InitDataAccount { hash: *hash },
    )
}

/// Creates a `SetDataParams` instruction
///
/// `params` is passed through untouched; use
/// [`DatasetParams::to_bytes`](datanexus_interface::DatasetParams::to_bytes)
/// to produce the layout the program currently accepts.
pub fn set_data_params(
    program_id: &Pubkey,
    accounts: &SetDataParamsAccounts,
    hash: &ContentHash,
    params: &[u8],
) -> Instruction {
    build_instruction(
        program_id,
        accounts,
        &DataNexusInstruction::SetDataParams {
            hash: *hash,
            params: params.to_vec(),
        },
    )
}

pub fn purchase_access(
    program_id: &Pubkey,
    accounts: &PurchaseAccessAccounts,
    hash: &ContentHash,
    amount: Amount,
) -> Instruction {
    build_instruction(
        program_id,
        accounts,
        &DataNexusInstruction::PurchaseAccess {
            hash: *hash,
            amount,
        },
    )
}

pub fn share_access(
    program_id: &Pubkey,
    accounts: &ShareAccessAccounts,
    hash: &ContentHash,
) -> Instruction {
    build_instruction(
        program_id,
        accounts,
        &DataNexusInstruction::ShareAccess { hash: *hash },
    )
}
