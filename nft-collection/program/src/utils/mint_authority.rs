use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::AccountInfo, msg, program::invoke, program_error::ProgramError,
    program_option::COption, pubkey::Pubkey,
};
use spl_token::instruction::{set_authority, AuthorityType};

use super::unpack_mint;
use crate::error::MetadataError;

/// Authority kinds of an SPL mint that the program takes over.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintAuthorityKind {
    MintTokens,
    FreezeAccount,
}

/// Record of a completed hand-over of mint authorities.
///
/// Published as the return data of the instruction that performed it.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MintAuthorityTransfer {
    pub mint: Pubkey,
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
    pub kinds: Vec<MintAuthorityKind>,
}

/// Hands the mint and freeze authority of `mint_info` to `new_authority`.
///
/// This is the only place the program asks the token program to change a mint.
pub fn transfer_mint_authority<'a>(
    new_authority: &Pubkey,
    new_authority_info: &AccountInfo<'a>,
    mint_info: &AccountInfo<'a>,
    mint_authority_info: &AccountInfo<'a>,
    token_program_info: &AccountInfo<'a>,
) -> Result<MintAuthorityTransfer, ProgramError> {
    let mint = unpack_mint(mint_info)?;

    if mint.freeze_authority == COption::None {
        return Err(MetadataError::NoFreezeAuthoritySet.into());
    }

    let accounts = &[
        mint_authority_info.clone(),
        mint_info.clone(),
        token_program_info.clone(),
        new_authority_info.clone(),
    ];

    let kinds = vec![MintAuthorityKind::MintTokens, MintAuthorityKind::FreezeAccount];

    for kind in &kinds {
        let authority_type = match kind {
            MintAuthorityKind::MintTokens => AuthorityType::MintTokens,
            MintAuthorityKind::FreezeAccount => AuthorityType::FreezeAccount,
        };

        invoke(
            &set_authority(
                token_program_info.key,
                mint_info.key,
                Some(new_authority),
                authority_type,
                mint_authority_info.key,
                &[mint_authority_info.key],
            )?,
            accounts,
        )?;
    }

    msg!("Mint authority of {} handed to {}", mint_info.key, new_authority);

    Ok(MintAuthorityTransfer {
        mint: *mint_info.key,
        previous_authority: *mint_authority_info.key,
        new_authority: *new_authority,
        kinds,
    })
}
