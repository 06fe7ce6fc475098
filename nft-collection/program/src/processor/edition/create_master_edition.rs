use borsh::BorshSerialize;
use mpl_utils::{assert_signer, create_or_allocate_account_raw};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::set_return_data,
    pubkey::Pubkey,
};

use crate::{
    assertions::{
        assert_freeze_authority_matches_mint, assert_mint_authority_matches_mint,
        assert_owned_by, assert_token_program_matches_package, assert_uninitialized,
        edition::{assert_edition_valid, assert_mint_is_non_fungible},
        metadata::assert_update_authority_is_correct,
    },
    error::MetadataError,
    pda::master_edition_seeds,
    state::{
        EditionSupply, MasterEditionV2, Metadata, TokenMetadataAccount, TokenStandard,
        MAX_MASTER_EDITION_LEN,
    },
    utils::{clean_write_metadata, transfer_mint_authority, unpack_mint},
};

/// Create master edition
///
/// On success the mint and freeze authority of the mint belong to the edition address, and
/// the borsh-encoded [`crate::utils::MintAuthorityTransfer`] is set as return data.
pub fn process_create_master_edition(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    max_supply: Option<u64>,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let edition_account_info = next_account_info(account_info_iter)?;
    let mint_info = next_account_info(account_info_iter)?;
    let update_authority_info = next_account_info(account_info_iter)?;
    let mint_authority_info = next_account_info(account_info_iter)?;
    let payer_account_info = next_account_info(account_info_iter)?;
    let metadata_account_info = next_account_info(account_info_iter)?;
    let token_program_info = next_account_info(account_info_iter)?;
    let system_account_info = next_account_info(account_info_iter)?;

    let mut metadata = Metadata::from_account_info(metadata_account_info)?;
    let mint = unpack_mint(mint_info)?;

    let bump_seed = assert_edition_valid(program_id, mint_info.key, edition_account_info)?;
    assert_uninitialized(edition_account_info)?;

    assert_token_program_matches_package(token_program_info)?;
    assert_mint_authority_matches_mint(&mint.mint_authority, mint_authority_info)?;
    assert_owned_by(metadata_account_info, program_id)?;
    assert_signer(payer_account_info)?;

    if metadata.mint != *mint_info.key {
        return Err(MetadataError::MintMismatch.into());
    }

    assert_update_authority_is_correct(&metadata, update_authority_info)?;
    assert_mint_is_non_fungible(&mint)?;
    assert_freeze_authority_matches_mint(&mint.freeze_authority, mint_authority_info)?;

    let seeds = master_edition_seeds(program_id, mint_info.key);
    let edition_authority_seeds = &[seeds[0], seeds[1], seeds[2], seeds[3], &[bump_seed]];

    create_or_allocate_account_raw(
        *program_id,
        edition_account_info,
        system_account_info,
        payer_account_info,
        MAX_MASTER_EDITION_LEN,
        edition_authority_seeds,
    )?;

    let edition_supply = EditionSupply::from(max_supply);
    MasterEditionV2::new(edition_supply).save(edition_account_info)?;

    metadata.token_standard = Some(TokenStandard::NonFungible);
    clean_write_metadata(&mut metadata, metadata_account_info)?;

    // While you can't mint any more of your master record, you can
    // mint as many limited editions as you like within your max supply.
    let transfer = transfer_mint_authority(
        edition_account_info.key,
        edition_account_info,
        mint_info,
        mint_authority_info,
        token_program_info,
    )?;

    msg!(
        "Master edition {} created ({:?}), authorities {:?} moved from {}",
        edition_account_info.key,
        edition_supply,
        transfer.kinds,
        transfer.previous_authority
    );
    set_return_data(&transfer.try_to_vec()?);

    Ok(())
}
