//! A metadata program for NFT collections on the Solana blockchain.
//!
//! The program attaches metadata and a master edition to a mint and lets the authority of a
//! sized collection verify that another mint's metadata belongs to it.

pub mod assertions;
pub mod entrypoint;
pub mod error;
pub mod instruction;
pub mod pda;
pub mod processor;
pub mod state;
pub mod utils;

// Export current sdk types for downstream users building with a different sdk version
pub use solana_program;

solana_program::declare_id!("7NnjQxQqB4Et5qQQVGDyHYKzCy2iTH24yMb7aB2qV3c6");
