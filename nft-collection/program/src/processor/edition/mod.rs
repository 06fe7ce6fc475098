mod create_master_edition;

pub use create_master_edition::process_create_master_edition;
