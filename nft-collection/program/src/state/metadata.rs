use super::*;

pub const MAX_NAME_LENGTH: usize = 32;

pub const MAX_SYMBOL_LENGTH: usize = 10;

pub const MAX_URI_LENGTH: usize = 200;

pub const MAX_SELLER_FEE_BASIS_POINTS: u16 = 10000;

pub const MAX_METADATA_LEN: usize = 1 // key
+ 32             // update auth pubkey
+ 32             // mint pubkey
+ MAX_DATA_SIZE
+ 1              // primary sale
+ 1              // mutable
+ 9              // nonce (pretty sure this only needs to be 2)
+ 2              // token standard
+ 34             // collection
+ 18             // uses
+ 118; // Padding, collection details live here

pub const MAX_DATA_SIZE: usize = 4
    + MAX_NAME_LENGTH
    + 4
    + MAX_SYMBOL_LENGTH
    + 4
    + MAX_URI_LENGTH
    + 2
    + 1
    + 4
    + MAX_CREATOR_LIMIT * MAX_CREATOR_LEN;

#[repr(C)]
#[cfg_attr(feature = "serde-feature", derive(Serialize, Deserialize))]
#[derive(Clone, BorshSerialize, BorshDeserialize, Debug, PartialEq, Eq, ShankAccount)]
pub struct Metadata {
    pub key: Key,
    #[cfg_attr(feature = "serde-feature", serde(with = "As::<DisplayFromStr>"))]
    pub update_authority: Pubkey,
    #[cfg_attr(feature = "serde-feature", serde(with = "As::<DisplayFromStr>"))]
    pub mint: Pubkey,
    pub data: Data,
    // Immutable, once flipped, all sales of this metadata are considered secondary.
    pub primary_sale_happened: bool,
    // Whether or not the data struct is mutable, default is not
    pub is_mutable: bool,
    /// nonce for easy calculation of editions, if present
    pub edition_nonce: Option<u8>,
    /// Fungible or non-fungible, settled by the mint and its master edition
    pub token_standard: Option<TokenStandard>,
    /// Collection
    pub collection: Option<Collection>,
    /// Uses
    pub uses: Option<Uses>,
    /// Set on collection parents that carry a size
    pub collection_details: Option<CollectionDetails>,
}

impl Metadata {
    pub fn collection_status(&self) -> CollectionStatus {
        CollectionStatus::from(&self.collection)
    }

    /// Moves the collection reference from linked to verified.
    ///
    /// The reference must name `collection_mint` and must not be verified yet. Nothing
    /// other than the verified flag changes.
    pub fn verify_collection(&mut self, collection_mint: &Pubkey) -> Result<(), MetadataError> {
        match self.collection_status() {
            CollectionStatus::Unlinked => Err(MetadataError::CollectionNotFound),
            CollectionStatus::Linked(key) | CollectionStatus::Verified(key)
                if key != *collection_mint =>
            {
                Err(MetadataError::CollectionKeyMismatch)
            }
            CollectionStatus::Verified(_) => Err(MetadataError::AlreadyVerified),
            CollectionStatus::Linked(key) => {
                self.collection = Some(Collection {
                    verified: true,
                    key,
                });
                Ok(())
            }
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Metadata {
            key: Key::MetadataV1,
            update_authority: Pubkey::default(),
            mint: Pubkey::default(),
            data: Data::default(),
            primary_sale_happened: false,
            is_mutable: false,
            edition_nonce: None,
            token_standard: None,
            collection: None,
            uses: None,
            collection_details: None,
        }
    }
}

impl TokenMetadataAccount for Metadata {
    fn key() -> Key {
        Key::MetadataV1
    }

    fn size() -> usize {
        MAX_METADATA_LEN
    }
}
