use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey,
};
use spl_token::state::Mint;

use crate::{
    error::MetadataError,
    pda::{master_edition_seeds, try_find_program_address},
};

/// Checks the edition account is the canonical master edition address of `mint` and returns
/// its bump.
pub fn assert_edition_valid(
    program_id: &Pubkey,
    mint: &Pubkey,
    edition_account_info: &AccountInfo,
) -> Result<u8, ProgramError> {
    let (edition_key, bump) =
        try_find_program_address(&master_edition_seeds(program_id, mint), program_id)?;
    if edition_key != *edition_account_info.key {
        return Err(MetadataError::InvalidEditionKey.into());
    }

    Ok(bump)
}

/// A master edition can only sit on a non-fungible mint: no decimals and exactly one token.
pub fn assert_mint_is_non_fungible(mint: &Mint) -> ProgramResult {
    if mint.decimals != 0 {
        return Err(MetadataError::EditionMintDecimalsShouldBeZero.into());
    }

    if mint.supply != 1 {
        return Err(MetadataError::EditionsMustHaveExactlyOneToken.into());
    }

    Ok(())
}
