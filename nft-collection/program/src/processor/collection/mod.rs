mod approve_collection_authority;
mod revoke_collection_authority;
mod set_collection_size;
mod verify_sized_collection_item;

pub use approve_collection_authority::process_approve_collection_authority;
use borsh::BorshSerialize;
pub use revoke_collection_authority::process_revoke_collection_authority;
pub use set_collection_size::process_set_collection_size;
use solana_program::{entrypoint::ProgramResult, msg, program::set_return_data};
pub use verify_sized_collection_item::verify_sized_collection_item;

use crate::state::CollectionDelegation;

/// Logs a delegation change and hands it to the caller as return data.
fn publish_delegation(delegation: &CollectionDelegation) -> ProgramResult {
    msg!(
        "Collection {} delegate {}: {:?}",
        delegation.collection_mint,
        delegation.delegate,
        delegation.change
    );
    set_return_data(&delegation.try_to_vec()?);

    Ok(())
}
