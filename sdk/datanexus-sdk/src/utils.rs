use crate::core::constants::{ACCESS_SEED, OWNER_SEED};
use datanexus_interface::ContentHash;
use solana_sdk::pubkey::Pubkey;

//=============================================================================
// PDA Derivation Helpers
//=============================================================================

/// Derive the owner index account of an authority
pub fn find_owner_address(program_id: &Pubkey, authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[OWNER_SEED, authority.as_ref()], program_id)
}

/// Derive the access index account of an authority
pub fn find_access_address(program_id: &Pubkey, authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ACCESS_SEED, authority.as_ref()], program_id)
}

/// Derive the dataset account addressed by a content hash
pub fn find_dataset_address(program_id: &Pubkey, hash: &ContentHash) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[hash.as_ref()], program_id)
}

/// Derive the account recording an authority's access to one dataset
pub fn find_associated_access_address(
    program_id: &Pubkey,
    authority: &Pubkey,
    dataset: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[authority.as_ref(), dataset.as_ref()], program_id)
}
