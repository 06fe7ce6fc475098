use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

use crate::{
    assertions::collection::{
        assert_collection_metadata_matches_mint, assert_has_collection_authority,
    },
    error::MetadataError,
    state::CollectionDetails,
    utils::clean_write_metadata,
};

/// Sizes an unsized collection parent. Only the update authority or an approved delegate
/// may do so, and only once.
pub fn process_set_collection_size(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    size: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let collection_metadata_info = next_account_info(account_info_iter)?;
    let collection_authority_info = next_account_info(account_info_iter)?;
    let collection_mint_info = next_account_info(account_info_iter)?;

    let mut collection_metadata = assert_collection_metadata_matches_mint(
        program_id,
        collection_metadata_info,
        collection_mint_info,
    )?;

    if !collection_authority_info.is_signer {
        return Err(MetadataError::UpdateAuthorityIsNotSigner.into());
    }

    let delegated_collection_authority_opt = account_info_iter.next();

    assert_has_collection_authority(
        program_id,
        collection_authority_info,
        &collection_metadata,
        collection_mint_info.key,
        delegated_collection_authority_opt,
    )?;

    if let Some(details) = &collection_metadata.collection_details {
        msg!("Collection is already sized at {}", details.size());
        return Err(MetadataError::SizedCollection.into());
    }
    collection_metadata.collection_details = Some(CollectionDetails::V1 { size });

    clean_write_metadata(&mut collection_metadata, collection_metadata_info)
}
