use mpl_utils::{assert_signer, create_or_allocate_account_raw};
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, msg, pubkey::Pubkey};

use super::*;
use crate::{
    assertions::{
        assert_mint_authority_matches_mint, assert_uninitialized,
        collection::assert_collection_update_is_valid, metadata::assert_data_valid,
        uses::assert_valid_use,
    },
    pda::{master_edition_seeds, metadata_seeds, try_find_program_address},
    state::{CollectionDetails, Creator, DataV2, Key, Metadata, TokenStandard, MAX_METADATA_LEN},
};

pub struct CreateMetadataAccountsLogicArgs<'a, 'info> {
    pub metadata_account_info: &'a AccountInfo<'info>,
    pub mint_info: &'a AccountInfo<'info>,
    pub mint_authority_info: &'a AccountInfo<'info>,
    pub payer_account_info: &'a AccountInfo<'info>,
    pub update_authority_info: &'a AccountInfo<'info>,
    pub system_account_info: &'a AccountInfo<'info>,
}

/// Create a new metadata account for a mint.
pub fn process_create_metadata_accounts_logic(
    program_id: &Pubkey,
    accounts: CreateMetadataAccountsLogicArgs,
    data: DataV2,
    is_mutable: bool,
    collection_details: Option<CollectionDetails>,
) -> ProgramResult {
    let CreateMetadataAccountsLogicArgs {
        metadata_account_info,
        mint_info,
        mint_authority_info,
        payer_account_info,
        update_authority_info,
        system_account_info,
    } = accounts;

    let mint = unpack_mint(mint_info)?;
    assert_mint_authority_matches_mint(&mint.mint_authority, mint_authority_info)?;
    assert_signer(payer_account_info)?;

    let seeds = metadata_seeds(program_id, mint_info.key);
    let (metadata_key, metadata_bump_seed) = try_find_program_address(&seeds, program_id)?;

    if metadata_account_info.key != &metadata_key {
        return Err(MetadataError::InvalidMetadataKey.into());
    }

    assert_uninitialized(metadata_account_info)?;

    // The program decides which creators are verified: exactly those whose address signed.
    let mut signers = vec![mint_authority_info.key, payer_account_info.key];
    if update_authority_info.is_signer {
        signers.push(update_authority_info.key);
    }

    let creators = data
        .creators
        .as_ref()
        .map(|creators| Creator::with_signer_verification(creators, &signers));

    let mut metadata = Metadata {
        key: Key::MetadataV1,
        update_authority: *update_authority_info.key,
        mint: *mint_info.key,
        data: data.to_v1(),
        primary_sale_happened: false,
        is_mutable,
        edition_nonce: None,
        token_standard: None,
        collection: None,
        uses: None,
        collection_details,
    };
    metadata.data.creators = creators;

    assert_data_valid(
        &metadata.data,
        update_authority_info.key,
        &Metadata::default(),
        true,
        update_authority_info.is_signer,
    )?;

    assert_collection_update_is_valid(&None, &data.collection)?;
    metadata.collection = data.collection;

    assert_valid_use(&data.uses, &None)?;
    metadata.uses = data.uses;

    metadata.token_standard = Some(if mint.decimals == 0 {
        TokenStandard::FungibleAsset
    } else {
        TokenStandard::Fungible
    });

    let (_, edition_bump_seed) =
        try_find_program_address(&master_edition_seeds(program_id, mint_info.key), program_id)?;
    metadata.edition_nonce = Some(edition_bump_seed);

    let metadata_authority_signer_seeds = &[seeds[0], seeds[1], seeds[2], &[metadata_bump_seed]];

    create_or_allocate_account_raw(
        *program_id,
        metadata_account_info,
        system_account_info,
        payer_account_info,
        MAX_METADATA_LEN,
        metadata_authority_signer_seeds,
    )?;

    clean_write_metadata(&mut metadata, metadata_account_info)?;

    msg!(
        "Metadata {} created for mint {}",
        metadata_account_info.key,
        mint_info.key
    );

    Ok(())
}
