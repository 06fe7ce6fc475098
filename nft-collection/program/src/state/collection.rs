use super::*;

pub const COLLECTION_AUTHORITY_RECORD_SIZE: usize = 35;

/// Stored form of a collection reference on a member's metadata.
#[repr(C)]
#[cfg_attr(feature = "serde-feature", derive(Serialize, Deserialize))]
#[derive(BorshSerialize, BorshDeserialize, PartialEq, Eq, Debug, Clone)]
pub struct Collection {
    pub verified: bool,
    #[cfg_attr(feature = "serde-feature", serde(with = "As::<DisplayFromStr>"))]
    pub key: Pubkey,
}

/// Membership state of a metadata account with respect to a collection.
///
/// `Unlinked -> Linked` and `Linked -> Unlinked` happen through metadata creation and
/// update; `Linked -> Verified` only through collection verification. There is no way
/// back from `Verified`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionStatus {
    Unlinked,
    Linked(Pubkey),
    Verified(Pubkey),
}

impl From<&Option<Collection>> for CollectionStatus {
    fn from(collection: &Option<Collection>) -> Self {
        match collection {
            None => CollectionStatus::Unlinked,
            Some(Collection {
                verified: false,
                key,
            }) => CollectionStatus::Linked(*key),
            Some(Collection {
                verified: true,
                key,
            }) => CollectionStatus::Verified(*key),
        }
    }
}

impl CollectionStatus {
    pub fn collection_mint(&self) -> Option<&Pubkey> {
        match self {
            CollectionStatus::Unlinked => None,
            CollectionStatus::Linked(key) | CollectionStatus::Verified(key) => Some(key),
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, CollectionStatus::Verified(_))
    }
}

/// Size information of a collection parent.
#[repr(C)]
#[cfg_attr(feature = "serde-feature", derive(Serialize, Deserialize))]
#[derive(BorshSerialize, BorshDeserialize, PartialEq, Eq, Debug, Clone)]
pub enum CollectionDetails {
    V1 { size: u64 },
}

impl CollectionDetails {
    pub fn size(&self) -> u64 {
        match self {
            CollectionDetails::V1 { size } => *size,
        }
    }
}

#[repr(C)]
#[cfg_attr(feature = "serde-feature", derive(Serialize, Deserialize))]
#[derive(BorshSerialize, BorshDeserialize, PartialEq, Eq, Debug, Clone, ShankAccount)]
pub struct CollectionAuthorityRecord {
    pub key: Key,                         //1
    pub bump: u8,                         //1
    pub update_authority: Option<Pubkey>, //33 (1 + 32)
}

impl Default for CollectionAuthorityRecord {
    fn default() -> Self {
        CollectionAuthorityRecord {
            key: Key::CollectionAuthorityRecord,
            bump: 255,
            update_authority: None,
        }
    }
}

impl TokenMetadataAccount for CollectionAuthorityRecord {
    fn key() -> Key {
        Key::CollectionAuthorityRecord
    }

    fn size() -> usize {
        COLLECTION_AUTHORITY_RECORD_SIZE
    }
}

impl CollectionAuthorityRecord {
    pub fn new(bump: u8, update_authority: Pubkey) -> Self {
        CollectionAuthorityRecord {
            key: Key::CollectionAuthorityRecord,
            bump,
            update_authority: Some(update_authority),
        }
    }

    /// A record only grants authority while the update authority that issued it is still
    /// the collection's update authority.
    pub fn is_issued_by(&self, update_authority: &Pubkey) -> bool {
        self.update_authority.as_ref() == Some(update_authority)
    }

    pub fn from_bytes(b: &[u8]) -> Result<CollectionAuthorityRecord, ProgramError> {
        let ca: CollectionAuthorityRecord = try_from_slice_checked(
            b,
            Key::CollectionAuthorityRecord,
            COLLECTION_AUTHORITY_RECORD_SIZE,
        )?;
        Ok(ca)
    }
}

#[derive(BorshSerialize, BorshDeserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum DelegationChange {
    Approved,
    /// The record was closed while its issuer still held the update authority.
    Revoked,
    /// The record was closed after the update authority had moved on, so it granted
    /// nothing anymore.
    RevokedStale,
}

/// Change to a collection delegation, published as return data by approve and revoke.
#[derive(BorshSerialize, BorshDeserialize, PartialEq, Eq, Debug, Clone)]
pub struct CollectionDelegation {
    pub collection_mint: Pubkey,
    pub delegate: Pubkey,
    pub record: Pubkey,
    pub change: DelegationChange,
}
