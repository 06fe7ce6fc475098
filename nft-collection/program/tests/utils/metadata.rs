use nft_collection::{
    id, instruction,
    pda::{find_collection_authority_account, find_metadata_account},
    state::{
        Collection, CollectionDetails, Creator, DataV2, Metadata as ProgramMetadata,
        TokenMetadataAccount,
    },
};
use solana_sdk::{
    pubkey::Pubkey, signature::Signer, signer::keypair::Keypair, transaction::Transaction,
};

use crate::*;

#[derive(Debug)]
pub struct Metadata {
    pub mint: Keypair,
    pub pubkey: Pubkey,
    pub token: Keypair,
}

impl Metadata {
    pub fn new() -> Self {
        let mint = Keypair::new();
        let (pubkey, _) = find_metadata_account(&mint.pubkey());

        Metadata {
            mint,
            pubkey,
            token: Keypair::new(),
        }
    }

    pub async fn get_data(&self, context: &mut ProgramTestContext) -> ProgramMetadata {
        let account = get_account(context, &self.pubkey).await;
        ProgramMetadata::safe_deserialize(&account.data).unwrap()
    }

    /// Creates the mint with the payer as mint and freeze authority, then mints `supply`
    /// tokens to `self.token`.
    pub async fn create_mint(
        &self,
        context: &mut ProgramTestContext,
        decimals: u8,
        supply: u64,
    ) -> Result<(), BanksClientError> {
        let payer = context.payer.pubkey();
        create_mint(context, &self.mint, &payer, Some(&payer), decimals).await?;
        create_token_account(context, &self.token, &self.mint.pubkey(), &payer).await?;
        if supply > 0 {
            mint_tokens(
                context,
                &self.mint.pubkey(),
                &self.token.pubkey(),
                supply,
                &payer,
                None,
            )
            .await?;
        }

        Ok(())
    }

    /// Sends a create instruction for an existing mint whose authority is the payer.
    pub async fn create_metadata(
        &self,
        context: &mut ProgramTestContext,
        data: DataV2,
        is_mutable: bool,
        update_authority: Option<&Keypair>,
    ) -> Result<(), BanksClientError> {
        self.create_metadata_with_details(context, data, is_mutable, update_authority, None)
            .await
    }

    pub async fn create_metadata_with_details(
        &self,
        context: &mut ProgramTestContext,
        data: DataV2,
        is_mutable: bool,
        update_authority: Option<&Keypair>,
        collection_details: Option<CollectionDetails>,
    ) -> Result<(), BanksClientError> {
        let mut signers = vec![&context.payer];
        let update_authority_pubkey = match update_authority {
            Some(authority) => {
                signers.push(authority);
                authority.pubkey()
            }
            None => context.payer.pubkey(),
        };

        let tx = Transaction::new_signed_with_payer(
            &[instruction::create_metadata_account(
                id(),
                self.pubkey,
                self.mint.pubkey(),
                context.payer.pubkey(),
                context.payer.pubkey(),
                Some(update_authority_pubkey),
                true,
                data,
                is_mutable,
                collection_details,
            )],
            Some(&context.payer.pubkey()),
            &signers,
            context.last_blockhash,
        );

        context.banks_client.process_transaction(tx).await
    }

    /// Creates a single-token mint and its metadata.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        context: &mut ProgramTestContext,
        name: String,
        symbol: String,
        uri: String,
        creators: Option<Vec<Creator>>,
        seller_fee_basis_points: u16,
        is_mutable: bool,
        collection: Option<Collection>,
    ) -> Result<(), BanksClientError> {
        self.create_mint(context, 0, 1).await?;

        self.create_metadata(
            context,
            DataV2 {
                name,
                symbol,
                uri,
                seller_fee_basis_points,
                creators,
                collection,
                uses: None,
            },
            is_mutable,
            None,
        )
        .await
    }

    /// Creates a single-token mint whose metadata is a collection parent of `size`.
    pub async fn create_sized(
        &self,
        context: &mut ProgramTestContext,
        size: u64,
    ) -> Result<(), BanksClientError> {
        self.create_mint(context, 0, 1).await?;

        self.create_metadata_with_details(
            context,
            DataV2 {
                name: "Sized Collection".to_string(),
                symbol: "COL".to_string(),
                uri: "https://example.com/collection.json".to_string(),
                seller_fee_basis_points: 0,
                creators: None,
                collection: None,
                uses: None,
            },
            true,
            None,
            Some(CollectionDetails::V1 { size }),
        )
        .await
    }

    /// Creates an item linked, but not verified, to `collection`.
    pub async fn create_member_of(
        &self,
        context: &mut ProgramTestContext,
        collection: &Metadata,
    ) -> Result<(), BanksClientError> {
        self.create(
            context,
            "Member".to_string(),
            "MBR".to_string(),
            "https://example.com/member.json".to_string(),
            None,
            500,
            true,
            Some(Collection {
                verified: false,
                key: collection.mint.pubkey(),
            }),
        )
        .await
    }

    /// Updates the metadata, signing with `update_authority` or the payer when `None`.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        context: &mut ProgramTestContext,
        update_authority: Option<&Keypair>,
        data: Option<DataV2>,
        new_update_authority: Option<Pubkey>,
        primary_sale_happened: Option<bool>,
        is_mutable: Option<bool>,
    ) -> Result<(), BanksClientError> {
        let mut signers = vec![&context.payer];
        let update_authority_pubkey = match update_authority {
            Some(authority) => {
                signers.push(authority);
                authority.pubkey()
            }
            None => context.payer.pubkey(),
        };

        let tx = Transaction::new_signed_with_payer(
            &[instruction::update_metadata_account(
                id(),
                self.pubkey,
                update_authority_pubkey,
                new_update_authority,
                data,
                primary_sale_happened,
                is_mutable,
            )],
            Some(&context.payer.pubkey()),
            &signers,
            context.last_blockhash,
        );

        context.banks_client.process_transaction(tx).await
    }

    /// Verifies this item as a member of `collection`, signing as `collection_authority` or
    /// the payer when `None`.
    ///
    /// A fresh payer signs each time so otherwise identical retries are not deduplicated.
    pub async fn verify_sized_collection_item(
        &self,
        context: &mut ProgramTestContext,
        collection: &Metadata,
        collection_edition: &Pubkey,
        collection_authority: Option<&Keypair>,
        collection_authority_record: Option<Pubkey>,
    ) -> Result<(), BanksClientError> {
        let payer = Keypair::new();
        let mut signers = vec![&context.payer, &payer];
        let collection_authority_pubkey = match collection_authority {
            Some(authority) => {
                signers.push(authority);
                authority.pubkey()
            }
            None => context.payer.pubkey(),
        };

        let tx = Transaction::new_signed_with_payer(
            &[instruction::verify_sized_collection_item(
                id(),
                self.pubkey,
                collection_authority_pubkey,
                payer.pubkey(),
                collection.mint.pubkey(),
                collection.pubkey,
                *collection_edition,
                collection_authority_record,
            )],
            Some(&context.payer.pubkey()),
            &signers,
            context.last_blockhash,
        );

        context.banks_client.process_transaction(tx).await
    }

    /// Delegates collection authority over this mint to `delegate`, returning the record
    /// address. `update_authority` and `payer` default to the context payer.
    pub async fn approve_collection_authority(
        &self,
        context: &mut ProgramTestContext,
        delegate: &Pubkey,
        update_authority: Option<&Keypair>,
        payer: Option<&Keypair>,
    ) -> Result<Pubkey, BanksClientError> {
        let (record, _) = find_collection_authority_account(&self.mint.pubkey(), delegate);

        let mut signers = vec![&context.payer];
        let update_authority_pubkey = match update_authority {
            Some(authority) => {
                signers.push(authority);
                authority.pubkey()
            }
            None => context.payer.pubkey(),
        };
        let payer_pubkey = match payer {
            Some(payer) => {
                signers.push(payer);
                payer.pubkey()
            }
            None => context.payer.pubkey(),
        };

        let tx = Transaction::new_signed_with_payer(
            &[instruction::approve_collection_authority(
                id(),
                record,
                *delegate,
                update_authority_pubkey,
                payer_pubkey,
                self.pubkey,
                self.mint.pubkey(),
            )],
            Some(&context.payer.pubkey()),
            &signers,
            context.last_blockhash,
        );

        context.banks_client.process_transaction(tx).await?;

        Ok(record)
    }

    /// Sets the collection size of this parent, signing as `collection_authority` or the
    /// payer when `None`.
    pub async fn set_collection_size(
        &self,
        context: &mut ProgramTestContext,
        collection_authority: Option<&Keypair>,
        collection_authority_record: Option<Pubkey>,
        size: u64,
    ) -> Result<(), BanksClientError> {
        let mut signers = vec![&context.payer];
        let collection_authority_pubkey = match collection_authority {
            Some(authority) => {
                signers.push(authority);
                authority.pubkey()
            }
            None => context.payer.pubkey(),
        };

        let tx = Transaction::new_signed_with_payer(
            &[instruction::set_collection_size(
                id(),
                self.pubkey,
                collection_authority_pubkey,
                self.mint.pubkey(),
                collection_authority_record,
                size,
            )],
            Some(&context.payer.pubkey()),
            &signers,
            context.last_blockhash,
        );

        context.banks_client.process_transaction(tx).await
    }

    /// Revokes the delegation to `delegate`, signing as `revoke_authority` or the payer when
    /// `None`.
    pub async fn revoke_collection_authority(
        &self,
        context: &mut ProgramTestContext,
        delegate: &Pubkey,
        revoke_authority: Option<&Keypair>,
    ) -> Result<(), BanksClientError> {
        let (record, _) = find_collection_authority_account(&self.mint.pubkey(), delegate);

        let mut signers = vec![&context.payer];
        let revoke_authority_pubkey = match revoke_authority {
            Some(authority) => {
                signers.push(authority);
                authority.pubkey()
            }
            None => context.payer.pubkey(),
        };

        let tx = Transaction::new_signed_with_payer(
            &[instruction::revoke_collection_authority(
                id(),
                record,
                *delegate,
                revoke_authority_pubkey,
                self.pubkey,
                self.mint.pubkey(),
            )],
            Some(&context.payer.pubkey()),
            &signers,
            context.last_blockhash,
        );

        context.banks_client.process_transaction(tx).await
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}
