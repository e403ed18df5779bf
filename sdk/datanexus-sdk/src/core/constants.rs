use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;

// Default Program ID for Devnet/Testnet
pub const DEFAULT_PROGRAM_ID: Pubkey = pubkey!("DataNexus1111111111111111111111111111111111");

pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk::system_program::ID;

pub const TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// Environment variable read by `EncoderConfig::from_env`
pub const PROGRAM_ID_ENV: &str = "DATANEXUS_PROGRAM_ID";

// PDA seeds
pub const OWNER_SEED: &[u8] = b"owner";
pub const ACCESS_SEED: &[u8] = b"access";
