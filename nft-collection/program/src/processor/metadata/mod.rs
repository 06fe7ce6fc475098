mod create_metadata_account;
mod update_metadata_account;

pub use create_metadata_account::process_create_metadata_account;
pub use update_metadata_account::process_update_metadata_account;
