mod collection;
mod edition;
mod metadata;

use borsh::BorshDeserialize;
pub use collection::*;
pub use edition::*;
pub use metadata::*;
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, msg, pubkey::Pubkey};

use crate::{error::MetadataError, instruction::MetadataInstruction};

/// Process Metadata instructions.
///
/// The `processor!` harness of `solana-program-test` and the on-chain entrypoint both call
/// into this function.
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    input: &[u8],
) -> ProgramResult {
    let instruction = MetadataInstruction::try_from_slice(input)
        .map_err(|_| MetadataError::InstructionUnpackError)?;

    match instruction {
        MetadataInstruction::CreateMetadataAccount(args) => {
            msg!("IX: Create Metadata Account");
            process_create_metadata_account(
                program_id,
                accounts,
                args.data,
                args.is_mutable,
                args.collection_details,
            )
        }
        MetadataInstruction::UpdateMetadataAccount(args) => {
            msg!("IX: Update Metadata Account");
            process_update_metadata_account(program_id, accounts, args)
        }
        MetadataInstruction::CreateMasterEdition(args) => {
            msg!("IX: Create Master Edition");
            process_create_master_edition(program_id, accounts, args.max_supply)
        }
        MetadataInstruction::VerifySizedCollectionItem => {
            msg!("IX: Verify Sized Collection Item");
            verify_sized_collection_item(program_id, accounts)
        }
        MetadataInstruction::ApproveCollectionAuthority => {
            msg!("IX: Approve Collection Authority");
            process_approve_collection_authority(program_id, accounts)
        }
        MetadataInstruction::RevokeCollectionAuthority => {
            msg!("IX: Revoke Collection Authority");
            process_revoke_collection_authority(program_id, accounts)
        }
        MetadataInstruction::SetCollectionSize(args) => {
            msg!("IX: Set Collection Size");
            process_set_collection_size(program_id, accounts, args.size)
        }
    }
}
