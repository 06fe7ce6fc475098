use solana_program::{program_error::ProgramError, pubkey::Pubkey};

use crate::error::MetadataError;

/// prefix used for PDAs to avoid certain collision attacks:
/// <https://en.wikipedia.org/wiki/Collision_attack#Chosen-prefix_collision_attack>

pub const PREFIX: &str = "metadata";

pub const EDITION: &str = "edition";

pub const COLLECTION_AUTHORITY: &str = "collection_authority";

/// Seeds of the metadata account of `mint`.
pub fn metadata_seeds<'a>(program_id: &'a Pubkey, mint: &'a Pubkey) -> [&'a [u8]; 3] {
    [PREFIX.as_bytes(), program_id.as_ref(), mint.as_ref()]
}

/// Seeds of the master edition account of `mint`.
pub fn master_edition_seeds<'a>(program_id: &'a Pubkey, mint: &'a Pubkey) -> [&'a [u8]; 4] {
    [
        PREFIX.as_bytes(),
        program_id.as_ref(),
        mint.as_ref(),
        EDITION.as_bytes(),
    ]
}

/// Seeds of the record delegating collection authority over `collection_mint` to `authority`.
pub fn collection_authority_seeds<'a>(
    program_id: &'a Pubkey,
    collection_mint: &'a Pubkey,
    authority: &'a Pubkey,
) -> [&'a [u8]; 5] {
    [
        PREFIX.as_bytes(),
        program_id.as_ref(),
        collection_mint.as_ref(),
        COLLECTION_AUTHORITY.as_bytes(),
        authority.as_ref(),
    ]
}

pub fn find_metadata_account(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&metadata_seeds(&crate::ID, mint), &crate::ID)
}

pub fn find_master_edition_account(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&master_edition_seeds(&crate::ID, mint), &crate::ID)
}

pub fn find_collection_authority_account(mint: &Pubkey, authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &collection_authority_seeds(&crate::ID, mint, authority),
        &crate::ID,
    )
}

/// Searches bumps from 255 downwards for the first off-curve address.
///
/// Unlike [`Pubkey::find_program_address`] this does not panic when every bump lands on
/// the curve; it returns [`MetadataError::DerivationExhausted`] instead.
pub fn try_find_program_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ProgramError> {
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or_else(|| MetadataError::DerivationExhausted.into())
}

/// Checks that `address` is the program address of `seeds` with the explicit `bump`.
///
/// Only public inputs are needed, so anyone holding the seeds and the bump can verify a
/// derivation without repeating the bump search.
pub fn verify_derivation(
    program_id: &Pubkey,
    seeds: &[&[u8]],
    bump: u8,
    address: &Pubkey,
) -> bool {
    let bump = [bump];
    let mut signer_seeds = seeds.to_vec();
    signer_seeds.push(&bump);

    match Pubkey::create_program_address(&signer_seeds, program_id) {
        Ok(derived) => derived == *address,
        Err(_) => false,
    }
}
