use mpl_utils::assert_signer;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    program_memory::sol_memset,
    pubkey::Pubkey,
};

use super::publish_delegation;
use crate::{
    assertions::collection::{
        assert_collection_authority_record_address, assert_collection_metadata_matches_mint,
    },
    error::MetadataError,
    state::{
        CollectionAuthorityRecord, CollectionDelegation, DelegationChange, TokenMetadataAccount,
        COLLECTION_AUTHORITY_RECORD_SIZE,
    },
};

/// Closes a delegation record, paying its rent to the signer.
///
/// Either the current update authority or the delegate itself may revoke. Items the
/// delegate already verified stay verified.
pub fn process_revoke_collection_authority(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let record_info = next_account_info(account_info_iter)?;
    let delegate_info = next_account_info(account_info_iter)?;
    let revoke_authority_info = next_account_info(account_info_iter)?;
    let collection_metadata_info = next_account_info(account_info_iter)?;
    let collection_mint_info = next_account_info(account_info_iter)?;

    assert_signer(revoke_authority_info)?;

    let collection_metadata = assert_collection_metadata_matches_mint(
        program_id,
        collection_metadata_info,
        collection_mint_info,
    )?;

    let signed_by_update_authority =
        collection_metadata.update_authority == *revoke_authority_info.key;
    if !signed_by_update_authority && delegate_info.key != revoke_authority_info.key {
        return Err(MetadataError::RevokeCollectionAuthoritySignerIncorrect.into());
    }

    if record_info.try_data_is_empty()? {
        return Err(MetadataError::CollectionAuthorityDoesNotExist.into());
    }

    let bump = assert_collection_authority_record_address(
        program_id,
        record_info,
        collection_mint_info.key,
        delegate_info.key,
    )?;
    let record = CollectionAuthorityRecord::from_account_info(record_info)?;
    if record.bump != bump {
        return Err(MetadataError::DerivedKeyInvalid.into());
    }

    let change = if record.is_issued_by(&collection_metadata.update_authority) {
        DelegationChange::Revoked
    } else {
        DelegationChange::RevokedStale
    };

    close_record(record_info, revoke_authority_info)?;

    publish_delegation(&CollectionDelegation {
        collection_mint: *collection_mint_info.key,
        delegate: *delegate_info.key,
        record: *record_info.key,
        change,
    })
}

fn close_record(record_info: &AccountInfo, recipient_info: &AccountInfo) -> ProgramResult {
    let lamports = record_info.lamports();
    **record_info.try_borrow_mut_lamports()? = 0;
    **recipient_info.try_borrow_mut_lamports()? = recipient_info
        .lamports()
        .checked_add(lamports)
        .ok_or(MetadataError::NumericalOverflowError)?;

    sol_memset(
        &mut record_info.try_borrow_mut_data()?,
        0,
        COLLECTION_AUTHORITY_RECORD_SIZE,
    );

    Ok(())
}
