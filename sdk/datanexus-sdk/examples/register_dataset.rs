// Example: Registering a dataset with the DataNexus program
//
// This example demonstrates how to:
// 1. Create the owner index for an authority
// 2. Register a dataset by its SHA-256 content hash
// 3. Set its key, price and share limit
//
// Run with RUST_LOG=debug to see the encoder's log output.

use datanexus_sdk::advanced::builders::DatasetParamsBuilder;
use datanexus_sdk::{AccountTypeTag, ContentHash, DataNexusEncoder};
use solana_sdk::pubkey::Pubkey;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Program id from DATANEXUS_PROGRAM_ID, or the default deployment
    let encoder = DataNexusEncoder::from_env()?;
    let authority = Pubkey::new_unique(); // Replace with actual owner

    // 1. Owner index
    let create_owner = encoder
        .create_user_account()
        .with_payer(authority)
        .with_type(AccountTypeTag::Owner)
        .build()?;

    // 2. Dataset account
    let hash = ContentHash::digest(b"example dataset contents");
    let register = encoder
        .register_dataset()
        .with_authority(authority)
        .with_hash(hash)
        .build()?;

    // 3. Key, price and share limit in one Init write
    let decryption_key = [7u8; 32]; // Replace with the dataset's real key
    let params = DatasetParamsBuilder::new()
        .with_key(decryption_key)
        .with_value(1_000_000)
        .with_share_limit(3)
        .build()?;
    let set_params = encoder
        .update_params()
        .with_authority(authority)
        .with_hash(hash)
        .with_dataset_params(params)
        .build()?;

    println!("Program:  {}", encoder.program_id());
    println!("Dataset:  {} ({})", encoder.dataset_address(&hash), hash);
    for (name, ix) in [
        ("InitUserAccount", &create_owner),
        ("InitDataAccount", &register),
        ("SetDataParams", &set_params),
    ] {
        println!("{:<16} {} accounts, data {}", name, ix.accounts.len(), hex::encode(&ix.data));
    }

    Ok(())
}
