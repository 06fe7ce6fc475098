pub(crate) mod metadata;
pub(crate) mod mint_authority;

pub use metadata::*;
pub use mint_authority::*;
pub use mpl_utils::{assert_signer, create_or_allocate_account_raw};
use solana_program::{
    account_info::AccountInfo, borsh::try_from_slice_unchecked, entrypoint::ProgramResult,
    program_error::ProgramError,
};
use spl_token::state::Mint;

pub use crate::assertions::{
    assert_derivation, assert_initialized, assert_mint_authority_matches_mint, assert_owned_by,
    assert_token_program_matches_package,
    metadata::{assert_data_valid, assert_update_authority_is_correct},
};
use crate::{
    error::MetadataError,
    state::{Key, Metadata, TokenMetadataAccount, MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH},
};

/// Unpacks an initialized SPL token mint, checking the account belongs to the token program.
pub fn unpack_mint(mint_info: &AccountInfo) -> Result<Mint, ProgramError> {
    assert_owned_by(mint_info, &spl_token::ID)?;
    assert_initialized(mint_info)
}

pub fn puff_out_data_fields(metadata: &mut Metadata) {
    metadata.data.name = puffed_out_string(&metadata.data.name, MAX_NAME_LENGTH);
    metadata.data.symbol = puffed_out_string(&metadata.data.symbol, MAX_SYMBOL_LENGTH);
    metadata.data.uri = puffed_out_string(&metadata.data.uri, MAX_URI_LENGTH);
}

/// Pads the string to the desired size with `0u8`s.
/// Strings already at or beyond `size` are returned unchanged.
pub fn puffed_out_string(s: &str, size: usize) -> String {
    let puff_amount = size.saturating_sub(s.len());
    let mut puffed = String::with_capacity(s.len() + puff_amount);
    puffed.push_str(s);
    puffed.extend(std::iter::repeat('\0').take(puff_amount));
    puffed
}

pub fn try_from_slice_checked<T: TokenMetadataAccount>(
    data: &[u8],
    data_type: Key,
    data_size: usize,
) -> Result<T, ProgramError> {
    if !T::is_correct_account_type(data, data_type, data_size) {
        return Err(MetadataError::DataTypeMismatch.into());
    }

    let result: T = try_from_slice_unchecked(data)?;

    Ok(result)
}

/// Zeroes the whole account before serializing so a shrinking creators array leaves no
/// trailing bytes behind.
pub fn clean_write_metadata(
    metadata: &mut Metadata,
    metadata_account_info: &AccountInfo,
) -> ProgramResult {
    puff_out_data_fields(metadata);

    let mut metadata_account_info_data = metadata_account_info.try_borrow_mut_data()?;
    metadata_account_info_data[0..].fill(0);

    borsh::BorshSerialize::serialize(metadata, &mut *metadata_account_info_data)?;

    Ok(())
}
