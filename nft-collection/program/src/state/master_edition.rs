use solana_program::entrypoint::ProgramResult;

use super::*;

// Sized like the standard master edition account so existing readers and
// indexers keep working.
pub const MAX_MASTER_EDITION_LEN: usize = 1 + 9 + 8 + 264;

#[repr(C)]
#[cfg_attr(feature = "serde-feature", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize, ShankAccount)]
pub struct MasterEditionV2 {
    pub key: Key,

    pub supply: u64,

    pub max_supply: Option<u64>,
}

/// How many prints a master edition admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditionSupply {
    /// `max_supply` is absent.
    Unlimited,
    /// `max_supply` is a positive bound.
    Limited(u64),
    /// `max_supply` is zero: the mint is a unique item usable as a collection parent.
    CollectionMarker,
}

impl From<Option<u64>> for EditionSupply {
    fn from(max_supply: Option<u64>) -> Self {
        match max_supply {
            None => EditionSupply::Unlimited,
            Some(0) => EditionSupply::CollectionMarker,
            Some(max) => EditionSupply::Limited(max),
        }
    }
}

impl EditionSupply {
    pub fn max_supply(&self) -> Option<u64> {
        match self {
            EditionSupply::Unlimited => None,
            EditionSupply::Limited(max) => Some(*max),
            EditionSupply::CollectionMarker => Some(0),
        }
    }

    pub fn is_collection_marker(&self) -> bool {
        matches!(self, EditionSupply::CollectionMarker)
    }
}

impl Default for MasterEditionV2 {
    fn default() -> Self {
        MasterEditionV2 {
            key: Key::MasterEditionV2,
            supply: 0,
            max_supply: Some(0),
        }
    }
}

impl TokenMetadataAccount for MasterEditionV2 {
    fn key() -> Key {
        Key::MasterEditionV2
    }

    fn size() -> usize {
        MAX_MASTER_EDITION_LEN
    }
}

impl MasterEditionV2 {
    pub fn new(edition_supply: EditionSupply) -> Self {
        MasterEditionV2 {
            key: Key::MasterEditionV2,
            supply: 0,
            max_supply: edition_supply.max_supply(),
        }
    }

    pub fn edition_supply(&self) -> EditionSupply {
        EditionSupply::from(self.max_supply)
    }

    pub fn save(&self, account: &AccountInfo) -> ProgramResult {
        let mut storage = &mut account.try_borrow_mut_data()?[..];
        BorshSerialize::serialize(self, &mut storage)?;
        Ok(())
    }
}
