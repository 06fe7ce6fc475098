use borsh::BorshSerialize;
use mpl_utils::{assert_signer, create_or_allocate_account_raw};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

use super::publish_delegation;
use crate::{
    assertions::{
        assert_uninitialized,
        collection::{
            assert_collection_authority_record_address, assert_collection_metadata_matches_mint,
        },
        metadata::assert_update_authority_is_correct,
    },
    error::MetadataError,
    pda::collection_authority_seeds,
    state::{
        CollectionAuthorityRecord, CollectionDelegation, DelegationChange,
        COLLECTION_AUTHORITY_RECORD_SIZE,
    },
};

/// Records `delegate` as a collection authority issued by the current update authority.
///
/// The delegate may then verify items of the collection and size it, until the record is
/// revoked or the update authority changes hands.
pub fn process_approve_collection_authority(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let record_info = next_account_info(account_info_iter)?;
    let delegate_info = next_account_info(account_info_iter)?;
    let update_authority_info = next_account_info(account_info_iter)?;
    let payer_info = next_account_info(account_info_iter)?;
    let collection_metadata_info = next_account_info(account_info_iter)?;
    let collection_mint_info = next_account_info(account_info_iter)?;
    let system_account_info = next_account_info(account_info_iter)?;

    assert_signer(payer_info)?;

    let collection_metadata = assert_collection_metadata_matches_mint(
        program_id,
        collection_metadata_info,
        collection_mint_info,
    )?;
    assert_update_authority_is_correct(&collection_metadata, update_authority_info)?;

    assert_uninitialized(record_info)
        .map_err(|_| MetadataError::CollectionAuthorityRecordAlreadyExists)?;

    let bump = assert_collection_authority_record_address(
        program_id,
        record_info,
        collection_mint_info.key,
        delegate_info.key,
    )?;

    let seeds = collection_authority_seeds(program_id, collection_mint_info.key, delegate_info.key);
    create_or_allocate_account_raw(
        *program_id,
        record_info,
        system_account_info,
        payer_info,
        COLLECTION_AUTHORITY_RECORD_SIZE,
        &[seeds[0], seeds[1], seeds[2], seeds[3], seeds[4], &[bump]],
    )?;

    CollectionAuthorityRecord::new(bump, collection_metadata.update_authority)
        .serialize(&mut *record_info.try_borrow_mut_data()?)?;

    publish_delegation(&CollectionDelegation {
        collection_mint: *collection_mint_info.key,
        delegate: *delegate_info.key,
        record: *record_info.key,
        change: DelegationChange::Approved,
    })
}
