use mpl_utils::cmp_pubkeys;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    program_option::COption,
    program_pack::{IsInitialized, Pack},
    pubkey::Pubkey,
};

use crate::{error::MetadataError, pda::try_find_program_address};

pub fn assert_initialized<T: Pack + IsInitialized>(
    account_info: &AccountInfo,
) -> Result<T, ProgramError> {
    mpl_utils::assert_initialized(account_info, MetadataError::Uninitialized)
}

/// The account must not hold any data yet.
pub fn assert_uninitialized(account_info: &AccountInfo) -> ProgramResult {
    if !account_info.data_is_empty() {
        msg!("Account {} already holds data", account_info.key);
        return Err(MetadataError::AlreadyInitialized.into());
    }

    Ok(())
}

pub fn assert_mint_authority_matches_mint(
    mint_authority: &COption<Pubkey>,
    mint_authority_info: &AccountInfo,
) -> ProgramResult {
    match mint_authority {
        COption::None => {
            return Err(MetadataError::InvalidMintAuthority.into());
        }
        COption::Some(key) => {
            if mint_authority_info.key != key {
                return Err(MetadataError::InvalidMintAuthority.into());
            }
        }
    }

    if !mint_authority_info.is_signer {
        return Err(MetadataError::NotMintAuthority.into());
    }

    Ok(())
}

/// The mint must have a freeze authority, and it must be the mint authority so both can
/// be handed over by the same signer.
pub fn assert_freeze_authority_matches_mint(
    freeze_authority: &COption<Pubkey>,
    mint_authority_info: &AccountInfo,
) -> ProgramResult {
    match freeze_authority {
        COption::None => Err(MetadataError::NoFreezeAuthoritySet.into()),
        COption::Some(key) if key != mint_authority_info.key => {
            Err(MetadataError::InvalidFreezeAuthority.into())
        }
        COption::Some(_) => Ok(()),
    }
}

/// Checks `account` is the canonical program address of `path` and returns its bump.
pub fn assert_derivation(
    program_id: &Pubkey,
    account: &AccountInfo,
    path: &[&[u8]],
) -> Result<u8, ProgramError> {
    let (key, bump) = try_find_program_address(path, program_id)?;
    if !cmp_pubkeys(&key, account.key) {
        msg!(
            "derivation assertion failed for {}: expected {}",
            account.key,
            key
        );
        return Err(MetadataError::DerivedKeyInvalid.into());
    }
    Ok(bump)
}

pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> ProgramResult {
    mpl_utils::assert_owned_by(account, owner, MetadataError::IncorrectOwner)
}

pub fn assert_token_program_matches_package(token_program_info: &AccountInfo) -> ProgramResult {
    if !cmp_pubkeys(token_program_info.key, &spl_token::ID) {
        return Err(MetadataError::InvalidTokenProgram.into());
    }

    Ok(())
}
