use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

use crate::{
    assertions::{
        assert_owned_by,
        collection::assert_collection_update_is_valid,
        metadata::{assert_data_valid, assert_update_authority_is_correct},
        uses::assert_valid_use,
    },
    error::MetadataError,
    instruction::UpdateMetadataAccountArgs,
    state::{Metadata, TokenMetadataAccount},
    utils::clean_write_metadata,
};

// Update existing account instruction
pub fn process_update_metadata_account(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: UpdateMetadataAccountArgs,
) -> ProgramResult {
    let UpdateMetadataAccountArgs {
        data: optional_data,
        update_authority,
        primary_sale_happened,
        is_mutable,
    } = args;

    let account_info_iter = &mut accounts.iter();

    let metadata_account_info = next_account_info(account_info_iter)?;
    let update_authority_info = next_account_info(account_info_iter)?;
    let mut metadata = Metadata::from_account_info(metadata_account_info)?;

    assert_owned_by(metadata_account_info, program_id)?;
    assert_update_authority_is_correct(&metadata, update_authority_info)?;

    if let Some(data) = optional_data {
        // Once immutable, the data can never be written again.
        if !metadata.is_mutable {
            return Err(MetadataError::DataIsImmutable.into());
        }

        let compatible_data = data.to_v1();
        assert_data_valid(
            &compatible_data,
            update_authority_info.key,
            &metadata,
            false,
            update_authority_info.is_signer,
        )?;
        metadata.data = compatible_data;

        // Passing no collection clears an unverified one. A verified collection has to be
        // passed back exactly as stored.
        assert_collection_update_is_valid(&metadata.collection, &data.collection)?;
        metadata.collection = data.collection;

        assert_valid_use(&data.uses, &metadata.uses)?;
        metadata.uses = data.uses;
    }

    if let Some(val) = update_authority {
        metadata.update_authority = val;
    }

    if let Some(val) = primary_sale_happened {
        // If received val is true, flip to true.
        if val || !metadata.primary_sale_happened {
            metadata.primary_sale_happened = val
        } else {
            return Err(MetadataError::PrimarySaleCanOnlyBeFlippedToTrue.into());
        }
    }

    if let Some(val) = is_mutable {
        // If received value is false, flip to false.
        if !val || metadata.is_mutable {
            metadata.is_mutable = val
        } else {
            return Err(MetadataError::IsMutableCanOnlyBeFlippedToFalse.into());
        }
    }

    clean_write_metadata(&mut metadata, metadata_account_info)?;
    Ok(())
}
