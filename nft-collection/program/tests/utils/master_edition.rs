use borsh::ser::BorshSerialize;
use nft_collection::{
    instruction::{self, CreateMasterEditionArgs, MetadataInstruction},
    pda::find_master_edition_account,
    state::{MasterEditionV2, TokenMetadataAccount},
    ID,
};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};

use crate::*;

#[derive(Debug)]
pub struct MasterEdition {
    pub pubkey: Pubkey,
    pub metadata_pubkey: Pubkey,
    pub mint_pubkey: Pubkey,
}

impl MasterEdition {
    pub fn new(metadata: &Metadata) -> Self {
        let mint_pubkey = metadata.mint.pubkey();
        let (pubkey, _) = find_master_edition_account(&mint_pubkey);

        MasterEdition {
            pubkey,
            metadata_pubkey: metadata.pubkey,
            mint_pubkey,
        }
    }

    pub async fn get_data(&self, context: &mut ProgramTestContext) -> MasterEditionV2 {
        let account = get_account(context, &self.pubkey).await;
        MasterEditionV2::safe_deserialize(&account.data).unwrap()
    }

    pub async fn create_with_invalid_token_program(
        &self,
        context: &mut ProgramTestContext,
        max_supply: Option<u64>,
    ) -> Result<(), BanksClientError> {
        let fake_token_program = Keypair::new();

        let fake_instruction = Instruction {
            program_id: ID,
            accounts: vec![
                AccountMeta::new(self.pubkey, false),
                AccountMeta::new(self.mint_pubkey, false),
                AccountMeta::new_readonly(context.payer.pubkey(), true),
                AccountMeta::new_readonly(context.payer.pubkey(), true),
                AccountMeta::new(context.payer.pubkey(), true),
                AccountMeta::new(self.metadata_pubkey, false),
                AccountMeta::new_readonly(fake_token_program.pubkey(), false),
                AccountMeta::new_readonly(solana_program::system_program::ID, false),
            ],
            data: MetadataInstruction::CreateMasterEdition(CreateMasterEditionArgs { max_supply })
                .try_to_vec()
                .unwrap(),
        };

        let tx = Transaction::new_signed_with_payer(
            &[fake_instruction],
            Some(&context.payer.pubkey()),
            &[&context.payer],
            context.last_blockhash,
        );

        context.banks_client.process_transaction(tx).await
    }

    /// Creates the master edition with the payer as update authority, mint authority and
    /// payer.
    pub async fn create(
        &self,
        context: &mut ProgramTestContext,
        max_supply: Option<u64>,
    ) -> Result<(), BanksClientError> {
        let tx = Transaction::new_signed_with_payer(
            &[instruction::create_master_edition(
                ID,
                self.pubkey,
                self.mint_pubkey,
                context.payer.pubkey(),
                context.payer.pubkey(),
                self.metadata_pubkey,
                context.payer.pubkey(),
                max_supply,
            )],
            Some(&context.payer.pubkey()),
            &[&context.payer],
            context.last_blockhash,
        );

        context.banks_client.process_transaction(tx).await
    }

    pub async fn create_with_update_authority(
        &self,
        context: &mut ProgramTestContext,
        update_authority: &Keypair,
        max_supply: Option<u64>,
    ) -> Result<(), BanksClientError> {
        let tx = Transaction::new_signed_with_payer(
            &[instruction::create_master_edition(
                ID,
                self.pubkey,
                self.mint_pubkey,
                update_authority.pubkey(),
                context.payer.pubkey(),
                self.metadata_pubkey,
                context.payer.pubkey(),
                max_supply,
            )],
            Some(&context.payer.pubkey()),
            &[&context.payer, update_authority],
            context.last_blockhash,
        );

        context.banks_client.process_transaction(tx).await
    }
}
