use crate::advanced::accounts::{
    InitDataAccountAccounts, InitUserAccountAccounts, PurchaseAccessAccounts,
    SetDataParamsAccounts, ShareAccessAccounts,
};
use crate::basic::encoder::DataNexusEncoder;
use crate::core::constants::{SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::error::{DataNexusSdkError, Result};
use datanexus_interface::{AccountTypeTag, Amount, ContentHash, DatasetParams};
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;

pub struct InitUserAccountBuilder<'a> {
    encoder: &'a DataNexusEncoder,
    payer: Option<Pubkey>,
    authority: Option<Pubkey>,
    user_account: Option<Pubkey>,
    account_type: Option<AccountTypeTag>,
    system_program: Pubkey,
}

impl<'a> InitUserAccountBuilder<'a> {
    pub fn new(encoder: &'a DataNexusEncoder) -> Self {
        Self {
            encoder,
            payer: None,
            authority: None,
            user_account: None,
            account_type: None,
            system_program: SYSTEM_PROGRAM_ID,
        }
    }

    pub fn with_payer(mut self, payer: Pubkey) -> Self {
        self.payer = Some(payer);
        self
    }

    /// Owner of the new account. Defaults to the payer.
    pub fn with_authority(mut self, authority: Pubkey) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn with_type(mut self, account_type: AccountTypeTag) -> Self {
        self.account_type = Some(account_type);
        self
    }

    /// Overrides the derived owner/access address
    pub fn with_user_account(mut self, user_account: Pubkey) -> Self {
        self.user_account = Some(user_account);
        self
    }

    pub fn with_system_program(mut self, system_program: Pubkey) -> Self {
        self.system_program = system_program;
        self
    }

    pub fn build(&self) -> Result<Instruction> {
        let payer = self.payer.ok_or(DataNexusSdkError::MissingAccount("payer"))?;
        let account_type = self
            .account_type
            .ok_or(DataNexusSdkError::MissingField("account_type"))?;
        let authority = self.authority.unwrap_or(payer);
        let user_account = self.user_account.unwrap_or_else(|| match account_type {
            AccountTypeTag::Owner => self.encoder.owner_address(&authority),
            AccountTypeTag::Access => self.encoder.access_address(&authority),
        });

        let accounts = InitUserAccountAccounts {
            payer,
            authority,
            user_account,
            system_program: self.system_program,
        };
        Ok(self.encoder.init_user_account(&accounts, account_type))
    }
}

pub struct InitDataAccountBuilder<'a> {
    encoder: &'a DataNexusEncoder,
    authority: Option<Pubkey>,
    hash: Option<ContentHash>,
    owner_account: Option<Pubkey>,
    dataset_account: Option<Pubkey>,
    system_program: Pubkey,
}

impl<'a> InitDataAccountBuilder<'a> {
    pub fn new(encoder: &'a DataNexusEncoder) -> Self {
        Self {
            encoder,
            authority: None,
            hash: None,
            owner_account: None,
            dataset_account: None,
            system_program: SYSTEM_PROGRAM_ID,
        }
    }

    pub fn with_authority(mut self, authority: Pubkey) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn with_hash(mut self, hash: ContentHash) -> Self {
        self.hash = Some(hash);
        self
    }

    pub fn with_owner_account(mut self, owner_account: Pubkey) -> Self {
        self.owner_account = Some(owner_account);
        self
    }

    pub fn with_dataset_account(mut self, dataset_account: Pubkey) -> Self {
        self.dataset_account = Some(dataset_account);
        self
    }

    pub fn with_system_program(mut self, system_program: Pubkey) -> Self {
        self.system_program = system_program;
        self
    }

    pub fn build(&self) -> Result<Instruction> {
        let authority = self
            .authority
            .ok_or(DataNexusSdkError::MissingAccount("authority"))?;
        let hash = self.hash.ok_or(DataNexusSdkError::MissingField("hash"))?;

        let accounts = InitDataAccountAccounts {
            authority,
            owner_account: self
                .owner_account
                .unwrap_or_else(|| self.encoder.owner_address(&authority)),
            dataset_account: self
                .dataset_account
                .unwrap_or_else(|| self.encoder.dataset_address(&hash)),
            system_program: self.system_program,
        };
        Ok(self.encoder.init_data_account(&accounts, &hash))
    }
}

pub struct SetDataParamsBuilder<'a> {
    encoder: &'a DataNexusEncoder,
    authority: Option<Pubkey>,
    hash: Option<ContentHash>,
    dataset_account: Option<Pubkey>,
    params: Option<Vec<u8>>,
    dataset_params: Option<DatasetParams>,
}

impl<'a> SetDataParamsBuilder<'a> {
    pub fn new(encoder: &'a DataNexusEncoder) -> Self {
        Self {
            encoder,
            authority: None,
            hash: None,
            dataset_account: None,
            params: None,
            dataset_params: None,
        }
    }

    pub fn with_authority(mut self, authority: Pubkey) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn with_hash(mut self, hash: ContentHash) -> Self {
        self.hash = Some(hash);
        self
    }

    pub fn with_dataset_account(mut self, dataset_account: Pubkey) -> Self {
        self.dataset_account = Some(dataset_account);
        self
    }

    /// Pre-serialized params, passed through as-is
    pub fn with_params(mut self, params: Vec<u8>) -> Self {
        self.params = Some(params);
        self.dataset_params = None;
        self
    }

    pub fn with_dataset_params(mut self, params: DatasetParams) -> Self {
        self.dataset_params = Some(params);
        self.params = None;
        self
    }

    pub fn build(&self) -> Result<Instruction> {
        let authority = self
            .authority
            .ok_or(DataNexusSdkError::MissingAccount("authority"))?;
        let hash = self.hash.ok_or(DataNexusSdkError::MissingField("hash"))?;
        let params = match (&self.params, &self.dataset_params) {
            (Some(raw), _) => raw.clone(),
            (None, Some(typed)) => typed.to_bytes()?,
            (None, None) => return Err(DataNexusSdkError::MissingField("params")),
        };

        let accounts = SetDataParamsAccounts {
            authority,
            dataset_account: self
                .dataset_account
                .unwrap_or_else(|| self.encoder.dataset_address(&hash)),
        };
        Ok(self.encoder.set_data_params(&accounts, &hash, &params))
    }
}

pub struct PurchaseAccessBuilder<'a> {
    encoder: &'a DataNexusEncoder,
    user_authority: Option<Pubkey>,
    user_access_account: Option<Pubkey>,
    user_token_account: Option<Pubkey>,
    owner_authority: Option<Pubkey>,
    owner_token_account: Option<Pubkey>,
    dataset_account: Option<Pubkey>,
    token_program: Pubkey,
    hash: Option<ContentHash>,
    amount: Option<Amount>,
}

impl<'a> PurchaseAccessBuilder<'a> {
    pub fn new(encoder: &'a DataNexusEncoder) -> Self {
        Self {
            encoder,
            user_authority: None,
            user_access_account: None,
            user_token_account: None,
            owner_authority: None,
            owner_token_account: None,
            dataset_account: None,
            token_program: TOKEN_PROGRAM_ID,
            hash: None,
            amount: None,
        }
    }

    pub fn with_user(mut self, user_authority: Pubkey) -> Self {
        self.user_authority = Some(user_authority);
        self
    }

    pub fn with_user_access_account(mut self, user_access_account: Pubkey) -> Self {
        self.user_access_account = Some(user_access_account);
        self
    }

    pub fn with_user_token_account(mut self, user_token_account: Pubkey) -> Self {
        self.user_token_account = Some(user_token_account);
        self
    }

    pub fn with_owner(mut self, owner_authority: Pubkey) -> Self {
        self.owner_authority = Some(owner_authority);
        self
    }

    pub fn with_owner_token_account(mut self, owner_token_account: Pubkey) -> Self {
        self.owner_token_account = Some(owner_token_account);
        self
    }

    pub fn with_dataset_account(mut self, dataset_account: Pubkey) -> Self {
        self.dataset_account = Some(dataset_account);
        self
    }

    pub fn with_token_program(mut self, token_program: Pubkey) -> Self {
        self.token_program = token_program;
        self
    }

    pub fn with_hash(mut self, hash: ContentHash) -> Self {
        self.hash = Some(hash);
        self
    }

    pub fn with_amount(mut self, amount: impl Into<Amount>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn build(&self) -> Result<Instruction> {
        let user_authority = self
            .user_authority
            .ok_or(DataNexusSdkError::MissingAccount("user_authority"))?;
        let hash = self.hash.ok_or(DataNexusSdkError::MissingField("hash"))?;
        let amount = self.amount.ok_or(DataNexusSdkError::MissingField("amount"))?;

        let accounts = PurchaseAccessAccounts {
            user_authority,
            user_access_account: self
                .user_access_account
                .unwrap_or_else(|| self.encoder.access_address(&user_authority)),
            user_token_account: self
                .user_token_account
                .ok_or(DataNexusSdkError::MissingAccount("user_token_account"))?,
            owner_authority: self
                .owner_authority
                .ok_or(DataNexusSdkError::MissingAccount("owner_authority"))?,
            owner_token_account: self
                .owner_token_account
                .ok_or(DataNexusSdkError::MissingAccount("owner_token_account"))?,
            dataset_account: self
                .dataset_account
                .unwrap_or_else(|| self.encoder.dataset_address(&hash)),
            token_program: self.token_program,
        };
        Ok(self.encoder.purchase_access(&accounts, &hash, amount))
    }
}

pub struct ShareAccessBuilder<'a> {
    encoder: &'a DataNexusEncoder,
    user_authority: Option<Pubkey>,
    user_access_account: Option<Pubkey>,
    recipient_authority: Option<Pubkey>,
    recipient_access_account: Option<Pubkey>,
    dataset_account: Option<Pubkey>,
    hash: Option<ContentHash>,
}

impl<'a> ShareAccessBuilder<'a> {
    pub fn new(encoder: &'a DataNexusEncoder) -> Self {
        Self {
            encoder,
            user_authority: None,
            user_access_account: None,
            recipient_authority: None,
            recipient_access_account: None,
            dataset_account: None,
            hash: None,
        }
    }

    pub fn with_user(mut self, user_authority: Pubkey) -> Self {
        self.user_authority = Some(user_authority);
        self
    }

    pub fn with_user_access_account(mut self, user_access_account: Pubkey) -> Self {
        self.user_access_account = Some(user_access_account);
        self
    }

    pub fn with_recipient(mut self, recipient_authority: Pubkey) -> Self {
        self.recipient_authority = Some(recipient_authority);
        self
    }

    pub fn with_recipient_access_account(mut self, recipient_access_account: Pubkey) -> Self {
        self.recipient_access_account = Some(recipient_access_account);
        self
    }

    pub fn with_dataset_account(mut self, dataset_account: Pubkey) -> Self {
        self.dataset_account = Some(dataset_account);
        self
    }

    pub fn with_hash(mut self, hash: ContentHash) -> Self {
        self.hash = Some(hash);
        self
    }

    pub fn build(&self) -> Result<Instruction> {
        let user_authority = self
            .user_authority
            .ok_or(DataNexusSdkError::MissingAccount("user_authority"))?;
        let recipient_authority = self
            .recipient_authority
            .ok_or(DataNexusSdkError::MissingAccount("recipient_authority"))?;
        let hash = self.hash.ok_or(DataNexusSdkError::MissingField("hash"))?;

        let accounts = ShareAccessAccounts {
            user_authority,
            user_access_account: self
                .user_access_account
                .unwrap_or_else(|| self.encoder.access_address(&user_authority)),
            recipient_authority,
            recipient_access_account: self
                .recipient_access_account
                .unwrap_or_else(|| self.encoder.access_address(&recipient_authority)),
            dataset_account: self
                .dataset_account
                .unwrap_or_else(|| self.encoder.dataset_address(&hash)),
        };
        Ok(self.encoder.share_access(&accounts, &hash))
    }
}
