mod assert;
mod master_edition;
mod metadata;

pub use assert::*;
pub use master_edition::MasterEdition;
pub use metadata::Metadata;
pub use nft_collection::instruction;
use solana_program::{instruction::Instruction, program_pack::Pack};
use solana_program_test::*;
use solana_sdk::{
    account::Account, pubkey::Pubkey, signature::Signer, signer::keypair::Keypair,
    system_instruction, transaction::Transaction,
};
use spl_token::state::Mint;

pub fn program_test() -> ProgramTest {
    ProgramTest::new(
        "nft_collection",
        nft_collection::id(),
        processor!(nft_collection::processor::process_instruction),
    )
}

pub async fn get_account(context: &mut ProgramTestContext, pubkey: &Pubkey) -> Account {
    context
        .banks_client
        .get_account(*pubkey)
        .await
        .expect("account not found")
        .expect("account empty")
}

/// Simulates `instruction` paid by the context payer and returns the program's return data.
/// Nothing is committed.
pub async fn simulate_return_data(
    context: &mut ProgramTestContext,
    instruction: Instruction,
    additional_signers: &[&Keypair],
) -> Vec<u8> {
    let mut signers = vec![&context.payer];
    signers.extend_from_slice(additional_signers);

    let tx = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&context.payer.pubkey()),
        &signers,
        context.last_blockhash,
    );

    let simulation = context.banks_client.simulate_transaction(tx).await.unwrap();
    assert!(
        matches!(simulation.result, Some(Ok(()))),
        "simulation failed: {:?}",
        simulation.result
    );

    let return_data = simulation
        .simulation_details
        .and_then(|details| details.return_data)
        .expect("no return data");
    assert_eq!(return_data.program_id, nft_collection::id());

    return_data.data
}

pub async fn get_mint(context: &mut ProgramTestContext, pubkey: &Pubkey) -> Mint {
    let account = get_account(context, pubkey).await;
    Mint::unpack(&account.data).unwrap()
}

pub async fn airdrop(
    context: &mut ProgramTestContext,
    receiver: &Pubkey,
    amount: u64,
) -> Result<(), BanksClientError> {
    let tx = Transaction::new_signed_with_payer(
        &[system_instruction::transfer(
            &context.payer.pubkey(),
            receiver,
            amount,
        )],
        Some(&context.payer.pubkey()),
        &[&context.payer],
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await
}

pub async fn mint_tokens(
    context: &mut ProgramTestContext,
    mint: &Pubkey,
    account: &Pubkey,
    amount: u64,
    owner: &Pubkey,
    additional_signer: Option<&Keypair>,
) -> Result<(), BanksClientError> {
    let mut signing_keypairs = vec![&context.payer];
    if let Some(signer) = additional_signer {
        signing_keypairs.push(signer);
    }

    let tx = Transaction::new_signed_with_payer(
        &[
            spl_token::instruction::mint_to(&spl_token::id(), mint, account, owner, &[], amount)
                .unwrap(),
        ],
        Some(&context.payer.pubkey()),
        &signing_keypairs,
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await
}

pub async fn create_token_account(
    context: &mut ProgramTestContext,
    account: &Keypair,
    mint: &Pubkey,
    manager: &Pubkey,
) -> Result<(), BanksClientError> {
    let rent = context.banks_client.get_rent().await.unwrap();

    let tx = Transaction::new_signed_with_payer(
        &[
            system_instruction::create_account(
                &context.payer.pubkey(),
                &account.pubkey(),
                rent.minimum_balance(spl_token::state::Account::LEN),
                spl_token::state::Account::LEN as u64,
                &spl_token::id(),
            ),
            spl_token::instruction::initialize_account(
                &spl_token::id(),
                &account.pubkey(),
                mint,
                manager,
            )
            .unwrap(),
        ],
        Some(&context.payer.pubkey()),
        &[&context.payer, account],
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await
}

pub async fn create_mint(
    context: &mut ProgramTestContext,
    mint: &Keypair,
    manager: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
) -> Result<(), BanksClientError> {
    let rent = context.banks_client.get_rent().await.unwrap();

    let tx = Transaction::new_signed_with_payer(
        &[
            system_instruction::create_account(
                &context.payer.pubkey(),
                &mint.pubkey(),
                rent.minimum_balance(Mint::LEN),
                Mint::LEN as u64,
                &spl_token::id(),
            ),
            spl_token::instruction::initialize_mint(
                &spl_token::id(),
                &mint.pubkey(),
                manager,
                freeze_authority,
                decimals,
            )
            .unwrap(),
        ],
        Some(&context.payer.pubkey()),
        &[&context.payer, mint],
        context.last_blockhash,
    );

    context.banks_client.process_transaction(tx).await
}

/// Creates a collection parent: a single-token mint with metadata and a master edition of
/// the given max supply.
pub async fn create_collection_parent(
    context: &mut ProgramTestContext,
    max_supply: Option<u64>,
) -> Result<(Metadata, MasterEdition), BanksClientError> {
    let collection = Metadata::new();
    collection
        .create(
            context,
            "Collection".to_string(),
            "COL".to_string(),
            "https://example.com/collection.json".to_string(),
            None,
            0,
            true,
            None,
        )
        .await?;

    let collection_edition = MasterEdition::new(&collection);
    collection_edition.create(context, max_supply).await?;

    Ok((collection, collection_edition))
}
