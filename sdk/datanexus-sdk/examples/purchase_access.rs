// Example: Buying access to a dataset and sharing it
//
// This example demonstrates how to:
// 1. Parse a content hash and an amount from user input
// 2. Build a PurchaseAccess instruction with derived access accounts
// 3. Share the purchased access with another authority

use datanexus_sdk::{Amount, ContentHash, DataNexusEncoder};
use solana_sdk::pubkey::Pubkey;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let encoder = DataNexusEncoder::default();

    // 1. Inputs as a CLI would receive them
    let hash: ContentHash =
        "0x9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08".parse()?;
    let amount: Amount = "250000".parse()?;

    // Replace with actual accounts
    let buyer = Pubkey::new_unique();
    let buyer_tokens = Pubkey::new_unique();
    let seller = Pubkey::new_unique();
    let seller_tokens = Pubkey::new_unique();
    let friend = Pubkey::new_unique();

    // 2. Purchase
    let purchase = encoder
        .purchase()
        .with_user(buyer)
        .with_user_token_account(buyer_tokens)
        .with_owner(seller)
        .with_owner_token_account(seller_tokens)
        .with_hash(hash)
        .with_amount(amount)
        .build()?;
    println!("PurchaseAccess: {}", hex::encode(&purchase.data));

    // 3. Share
    let share = encoder
        .share()
        .with_user(buyer)
        .with_recipient(friend)
        .with_hash(hash)
        .build()?;
    println!("ShareAccess:    {}", hex::encode(&share.data));

    for meta in &share.accounts {
        println!(
            "  {} signer={} writable={}",
            meta.pubkey, meta.is_signer, meta.is_writable
        );
    }

    Ok(())
}
