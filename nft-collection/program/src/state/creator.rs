use super::*;

pub const MAX_CREATOR_LIMIT: usize = 5;

pub const MAX_CREATOR_LEN: usize = 32 + 1 + 1;

#[repr(C)]
#[cfg_attr(feature = "serde-feature", derive(Serialize, Deserialize))]
#[derive(BorshSerialize, BorshDeserialize, PartialEq, Debug, Clone, Eq, Hash)]
pub struct Creator {
    #[cfg_attr(feature = "serde-feature", serde(with = "As::<DisplayFromStr>"))]
    pub address: Pubkey,
    pub verified: bool,
    // In percentages, NOT basis points ;) Watch out!
    pub share: u8,
}

impl Creator {
    /// Returns a copy of `creators` whose `verified` flags say whether each creator's
    /// address is among `signers`. Whatever the caller claimed is ignored.
    pub fn with_signer_verification(creators: &[Creator], signers: &[&Pubkey]) -> Vec<Creator> {
        creators
            .iter()
            .map(|creator| Creator {
                address: creator.address,
                verified: signers.iter().any(|signer| **signer == creator.address),
                share: creator.share,
            })
            .collect()
    }
}
