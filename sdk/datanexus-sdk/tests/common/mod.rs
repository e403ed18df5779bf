#![allow(dead_code)]

use datanexus_sdk::advanced::accounts::{
    InitDataAccountAccounts, InitUserAccountAccounts, PurchaseAccessAccounts,
    SetDataParamsAccounts, ShareAccessAccounts,
};
use datanexus_sdk::{ContentHash, DataNexusEncoder, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID};
use solana_sdk::instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;

/// Distinct keys for every account role an instruction can take
pub struct TestContext {
    pub encoder: DataNexusEncoder,
    pub payer: Pubkey,
    pub authority: Pubkey,
    pub user_account: Pubkey,
    pub owner_account: Pubkey,
    pub dataset_account: Pubkey,
    pub user_access_account: Pubkey,
    pub user_token_account: Pubkey,
    pub owner_authority: Pubkey,
    pub owner_token_account: Pubkey,
    pub recipient_authority: Pubkey,
    pub recipient_access_account: Pubkey,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            encoder: DataNexusEncoder::with_program_id(Pubkey::new_unique()),
            payer: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
            user_account: Pubkey::new_unique(),
            owner_account: Pubkey::new_unique(),
            dataset_account: Pubkey::new_unique(),
            user_access_account: Pubkey::new_unique(),
            user_token_account: Pubkey::new_unique(),
            owner_authority: Pubkey::new_unique(),
            owner_token_account: Pubkey::new_unique(),
            recipient_authority: Pubkey::new_unique(),
            recipient_access_account: Pubkey::new_unique(),
        }
    }

    pub fn init_user_accounts(&self) -> InitUserAccountAccounts {
        InitUserAccountAccounts {
            payer: self.payer,
            authority: self.authority,
            user_account: self.user_account,
            system_program: SYSTEM_PROGRAM_ID,
        }
    }

    pub fn init_data_accounts(&self) -> InitDataAccountAccounts {
        InitDataAccountAccounts {
            authority: self.authority,
            owner_account: self.owner_account,
            dataset_account: self.dataset_account,
            system_program: SYSTEM_PROGRAM_ID,
        }
    }

    pub fn set_params_accounts(&self) -> SetDataParamsAccounts {
        SetDataParamsAccounts {
            authority: self.authority,
            dataset_account: self.dataset_account,
        }
    }

    pub fn purchase_accounts(&self) -> PurchaseAccessAccounts {
        PurchaseAccessAccounts {
            user_authority: self.authority,
            user_access_account: self.user_access_account,
            user_token_account: self.user_token_account,
            owner_authority: self.owner_authority,
            owner_token_account: self.owner_token_account,
            dataset_account: self.dataset_account,
            token_program: TOKEN_PROGRAM_ID,
        }
    }

    pub fn share_accounts(&self) -> ShareAccessAccounts {
        ShareAccessAccounts {
            user_authority: self.authority,
            user_access_account: self.user_access_account,
            recipient_authority: self.recipient_authority,
            recipient_access_account: self.recipient_access_account,
            dataset_account: self.dataset_account,
        }
    }
}

pub fn setup_test_context() -> TestContext {
    TestContext::new()
}

pub fn hash_of(byte: u8) -> ContentHash {
    ContentHash::new([byte; 32])
}

/// Compare an account list against `(key, is_signer, is_writable)` triples
pub fn assert_metas(actual: &[AccountMeta], expected: &[(Pubkey, bool, bool)]) {
    assert_eq!(actual.len(), expected.len(), "account count");
    for (i, (meta, (key, signer, writable))) in actual.iter().zip(expected).enumerate() {
        assert_eq!(meta.pubkey, *key, "account {} key", i);
        assert_eq!(meta.is_signer, *signer, "account {} signer flag", i);
        assert_eq!(meta.is_writable, *writable, "account {} writable flag", i);
    }
}
