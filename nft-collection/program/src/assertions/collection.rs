use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, msg, program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::{
    assertions::{assert_derivation, assert_owned_by},
    error::MetadataError,
    pda::{
        collection_authority_seeds, master_edition_seeds, metadata_seeds,
        try_find_program_address, verify_derivation,
    },
    state::{
        Collection, CollectionAuthorityRecord, MasterEditionV2, Metadata, TokenMetadataAccount,
    },
};

/// A verified collection can only be resubmitted unchanged. An unverified one can be set,
/// changed or cleared, but never marked verified outside of collection verification.
pub fn assert_collection_update_is_valid(
    existing: &Option<Collection>,
    incoming: &Option<Collection>,
) -> Result<(), ProgramError> {
    match (existing, incoming) {
        (Some(current), _) if current.verified => {
            if incoming.as_ref() != Some(current) {
                return Err(MetadataError::CannotUpdateVerifiedCollection.into());
            }
        }
        (_, Some(collection)) if collection.verified => {
            return Err(MetadataError::CollectionCannotBeVerifiedInThisInstruction.into());
        }
        _ => (),
    }

    Ok(())
}

/// Loads the collection parent's metadata, checking it is the canonical metadata account of
/// `collection_mint`.
pub fn assert_collection_metadata_is_valid(
    program_id: &Pubkey,
    collection_mint: &Pubkey,
    collection_metadata_info: &AccountInfo,
) -> Result<Metadata, ProgramError> {
    let (expected, _) =
        try_find_program_address(&metadata_seeds(program_id, collection_mint), program_id)?;

    if expected != *collection_metadata_info.key {
        return Err(MetadataError::CollectionMetadataAccountInvalid.into());
    }

    let collection_metadata = Metadata::from_account_info(collection_metadata_info)
        .map_err(|_| MetadataError::CollectionMetadataAccountInvalid)?;

    if collection_metadata.mint != *collection_mint {
        return Err(MetadataError::CollectionMetadataAccountInvalid.into());
    }

    Ok(collection_metadata)
}

/// The collection parent must have a master edition at its canonical address whose max
/// supply marks it as a collection.
pub fn assert_collection_edition_is_valid(
    program_id: &Pubkey,
    collection_mint: &Pubkey,
    collection_metadata: &Metadata,
    edition_account_info: &AccountInfo,
) -> ProgramResult {
    let seeds = master_edition_seeds(program_id, collection_mint);
    let bump = collection_metadata.edition_nonce;

    // The stored nonce proves the derivation without searching again.
    let derived = match bump {
        Some(bump) => verify_derivation(program_id, &seeds, bump, edition_account_info.key),
        None => try_find_program_address(&seeds, program_id)?.0 == *edition_account_info.key,
    };

    if !derived {
        return Err(MetadataError::CollectionMasterEditionAccountInvalid.into());
    }

    let master_edition = MasterEditionV2::from_account_info(edition_account_info)
        .map_err(|_| MetadataError::CollectionMasterEditionAccountInvalid)?;

    if !master_edition.edition_supply().is_collection_marker() {
        return Err(MetadataError::CollectionMustBeAUniqueMasterEdition.into());
    }

    Ok(())
}

/// Loads the metadata of a collection parent passed next to its mint, checking it belongs
/// to that mint.
pub fn assert_collection_metadata_matches_mint(
    program_id: &Pubkey,
    collection_metadata_info: &AccountInfo,
    collection_mint_info: &AccountInfo,
) -> Result<Metadata, ProgramError> {
    assert_owned_by(collection_metadata_info, program_id)?;
    assert_owned_by(collection_mint_info, &spl_token::ID)?;

    let collection_metadata = Metadata::from_account_info(collection_metadata_info)?;
    if collection_metadata.mint != *collection_mint_info.key {
        return Err(MetadataError::MintMismatch.into());
    }

    Ok(collection_metadata)
}

/// Checks `record_info` is the delegation record address of `delegate` for
/// `collection_mint` and returns its bump.
pub fn assert_collection_authority_record_address(
    program_id: &Pubkey,
    record_info: &AccountInfo,
    collection_mint: &Pubkey,
    delegate: &Pubkey,
) -> Result<u8, ProgramError> {
    assert_derivation(
        program_id,
        record_info,
        &collection_authority_seeds(program_id, collection_mint, delegate),
    )
}

/// The signer must be the collection's update authority, or hold a delegation record for
/// `collection_mint` that was issued by the current update authority.
pub fn assert_has_collection_authority(
    program_id: &Pubkey,
    collection_authority_info: &AccountInfo,
    collection_metadata: &Metadata,
    collection_mint: &Pubkey,
    delegate_collection_authority_record: Option<&AccountInfo>,
) -> ProgramResult {
    if collection_metadata.update_authority == *collection_authority_info.key {
        return Ok(());
    }

    let record_info = match delegate_collection_authority_record {
        Some(record_info) => record_info,
        None => {
            msg!("Signer is not the collection update authority");
            return Err(MetadataError::InvalidCollectionUpdateAuthority.into());
        }
    };

    let seeds = collection_authority_seeds(
        program_id,
        collection_mint,
        collection_authority_info.key,
    );
    let (expected, _) = try_find_program_address(&seeds, program_id)?;

    if expected != *record_info.key || record_info.data_is_empty() {
        msg!("No delegation record for this signer");
        return Err(MetadataError::InvalidCollectionUpdateAuthority.into());
    }

    let record = CollectionAuthorityRecord::from_account_info(record_info)
        .map_err(|_| MetadataError::InvalidCollectionUpdateAuthority)?;

    if !record.is_issued_by(&collection_metadata.update_authority) {
        msg!("Delegation record was issued by a previous update authority");
        return Err(MetadataError::InvalidCollectionUpdateAuthority.into());
    }

    Ok(())
}
