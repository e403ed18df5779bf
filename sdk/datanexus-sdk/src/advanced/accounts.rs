//! Account lists for each DataNexus instruction.
//!
//! The program resolves accounts by position, so the order produced here is
//! part of the wire contract together with the payload layout.

use solana_sdk::instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;

/// A fixed, ordered set of accounts for one instruction.
pub trait AccountList {
    /// Number of accounts the instruction expects
    const LEN: usize;

    fn to_account_metas(&self) -> Vec<AccountMeta>;
}

/// Accounts:
/// 0. `[writable, signer]` Payer
/// 1. `[writable]` Authority
/// 2. `[writable]` New user account
/// 3. `[]` System program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitUserAccountAccounts {
    pub payer: Pubkey,
    pub authority: Pubkey,
    pub user_account: Pubkey,
    pub system_program: Pubkey,
}

impl AccountList for InitUserAccountAccounts {
    const LEN: usize = 4;

    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.payer, true),
            AccountMeta::new(self.authority, false),
            AccountMeta::new(self.user_account, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

/// Accounts:
/// 0. `[writable, signer]` Authority
/// 1. `[writable]` Owner account
/// 2. `[writable]` Dataset account
/// 3. `[]` System program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitDataAccountAccounts {
    pub authority: Pubkey,
    pub owner_account: Pubkey,
    pub dataset_account: Pubkey,
    pub system_program: Pubkey,
}

impl AccountList for InitDataAccountAccounts {
    const LEN: usize = 4;

    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.authority, true),
            AccountMeta::new(self.owner_account, false),
            AccountMeta::new(self.dataset_account, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

/// Accounts:
/// 0. `[writable, signer]` Authority
/// 1. `[writable]` Dataset account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetDataParamsAccounts {
    pub authority: Pubkey,
    pub dataset_account: Pubkey,
}

impl AccountList for SetDataParamsAccounts {
    const LEN: usize = 2;

    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.authority, true),
            AccountMeta::new(self.dataset_account, false),
        ]
    }
}

/// Accounts:
/// 0. `[writable, signer]` User authority
/// 1. `[writable]` User access account
/// 2. `[writable]` User token account
/// 3. `[writable]` Owner authority
/// 4. `[writable]` Owner token account
/// 5. `[]` Dataset account
/// 6. `[]` Token program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseAccessAccounts {
    pub user_authority: Pubkey,
    pub user_access_account: Pubkey,
    pub user_token_account: Pubkey,
    pub owner_authority: Pubkey,
    pub owner_token_account: Pubkey,
    pub dataset_account: Pubkey,
    pub token_program: Pubkey,
}

impl AccountList for PurchaseAccessAccounts {
    const LEN: usize = 7;

    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.user_authority, true),
            AccountMeta::new(self.user_access_account, false),
            AccountMeta::new(self.user_token_account, false),
            AccountMeta::new(self.owner_authority, false),
            AccountMeta::new(self.owner_token_account, false),
            AccountMeta::new_readonly(self.dataset_account, false),
            AccountMeta::new_readonly(self.token_program, false),
        ]
    }
}

/// Accounts:
/// 0. `[writable, signer]` User authority
/// 1. `[writable]` User access account
/// 2. `[writable]` Recipient authority
/// 3. `[writable]` Recipient access account
/// 4. `[]` Dataset account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareAccessAccounts {
    pub user_authority: Pubkey,
    pub user_access_account: Pubkey,
    pub recipient_authority: Pubkey,
    pub recipient_access_account: Pubkey,
    pub dataset_account: Pubkey,
}

impl AccountList for ShareAccessAccounts {
    const LEN: usize = 5;

    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.user_authority, true),
            AccountMeta::new(self.user_access_account, false),
            AccountMeta::new(self.recipient_authority, false),
            AccountMeta::new(self.recipient_access_account, false),
            AccountMeta::new_readonly(self.dataset_account, false),
        ]
    }
}
