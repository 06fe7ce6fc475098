use mpl_utils::assert_signer;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

use crate::{
    assertions::{
        assert_owned_by,
        collection::{
            assert_collection_edition_is_valid, assert_collection_metadata_is_valid,
            assert_has_collection_authority,
        },
    },
    state::{Metadata, TokenMetadataAccount},
    utils::clean_write_metadata,
};

pub fn verify_sized_collection_item(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let metadata_info = next_account_info(account_info_iter)?;
    let collection_authority_info = next_account_info(account_info_iter)?;
    let payer_info = next_account_info(account_info_iter)?;
    let collection_mint = next_account_info(account_info_iter)?;
    let collection_info = next_account_info(account_info_iter)?;
    let edition_account_info = next_account_info(account_info_iter)?;

    assert_signer(collection_authority_info)?;
    assert_signer(payer_info)?;

    assert_owned_by(metadata_info, program_id)?;
    assert_owned_by(collection_mint, &spl_token::ID)?;

    let mut metadata = Metadata::from_account_info(metadata_info)?;

    // Checks the member references this collection and is not verified yet. The change
    // only reaches the account once every other check below has passed.
    metadata.verify_collection(collection_mint.key)?;

    let collection_metadata =
        assert_collection_metadata_is_valid(program_id, collection_mint.key, collection_info)?;

    assert_collection_edition_is_valid(
        program_id,
        collection_mint.key,
        &collection_metadata,
        edition_account_info,
    )?;

    let delegated_collection_authority_opt = account_info_iter.next();

    assert_has_collection_authority(
        program_id,
        collection_authority_info,
        &collection_metadata,
        collection_mint.key,
        delegated_collection_authority_opt,
    )?;

    clean_write_metadata(&mut metadata, metadata_info)?;

    msg!(
        "Verified {} as a member of collection {}",
        metadata.mint,
        collection_mint.key
    );

    Ok(())
}
