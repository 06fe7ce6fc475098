pub mod utils;

use nft_collection::{
    error::{ErrorCategory, MetadataError},
    id,
    state::CollectionDetails,
};
use solana_program_test::*;
use solana_sdk::{
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use utils::*;

mod set_collection_size {
    use super::*;

    #[tokio::test]
    async fn update_authority_sets_size() {
        let mut context = program_test().start_with_context().await;
        let (collection, _) = create_collection_parent(&mut context, Some(0))
            .await
            .unwrap();
        assert_eq!(collection.get_data(&mut context).await.collection_details, None);

        collection
            .set_collection_size(&mut context, None, None, 1123)
            .await
            .unwrap();

        let metadata = collection.get_data(&mut context).await;
        assert_eq!(
            metadata.collection_details,
            Some(CollectionDetails::V1 { size: 1123 })
        );
    }

    #[tokio::test]
    async fn delegate_sets_size() {
        let mut context = program_test().start_with_context().await;
        let (collection, _) = create_collection_parent(&mut context, Some(0))
            .await
            .unwrap();
        let delegate = Keypair::new();

        let record = collection
            .approve_collection_authority(&mut context, &delegate.pubkey(), None, None)
            .await
            .unwrap();

        collection
            .set_collection_size(&mut context, Some(&delegate), Some(record), 7)
            .await
            .unwrap();

        let metadata = collection.get_data(&mut context).await;
        assert_eq!(metadata.collection_details.unwrap().size(), 7);
    }

    #[tokio::test]
    async fn fail_size_set_twice() {
        let mut context = program_test().start_with_context().await;
        let (collection, _) = create_collection_parent(&mut context, Some(0))
            .await
            .unwrap();

        collection
            .set_collection_size(&mut context, None, None, 10)
            .await
            .unwrap();

        let err = collection
            .set_collection_size(&mut context, None, None, 20)
            .await
            .unwrap_err();

        assert_custom_error!(err, MetadataError::SizedCollection);
        assert_eq!(
            MetadataError::SizedCollection.category(),
            ErrorCategory::AlreadyExists
        );

        let metadata = collection.get_data(&mut context).await;
        assert_eq!(metadata.collection_details.unwrap().size(), 10);
    }

    #[tokio::test]
    async fn fail_collection_created_sized() {
        let mut context = program_test().start_with_context().await;
        let collection = Metadata::new();
        collection.create_sized(&mut context, 3).await.unwrap();

        let err = collection
            .set_collection_size(&mut context, None, None, 4)
            .await
            .unwrap_err();

        assert_custom_error!(err, MetadataError::SizedCollection);
    }

    #[tokio::test]
    async fn fail_stranger_sets_size() {
        let mut context = program_test().start_with_context().await;
        let (collection, _) = create_collection_parent(&mut context, Some(0))
            .await
            .unwrap();
        let stranger = Keypair::new();

        let err = collection
            .set_collection_size(&mut context, Some(&stranger), None, 5)
            .await
            .unwrap_err();

        assert_custom_error!(err, MetadataError::InvalidCollectionUpdateAuthority);
        assert_eq!(collection.get_data(&mut context).await.collection_details, None);
    }

    #[tokio::test]
    async fn fail_mint_mismatch() {
        let mut context = program_test().start_with_context().await;
        let (collection, _) = create_collection_parent(&mut context, Some(0))
            .await
            .unwrap();
        let (other, _) = create_collection_parent(&mut context, Some(0))
            .await
            .unwrap();

        let tx = Transaction::new_signed_with_payer(
            &[instruction::set_collection_size(
                id(),
                collection.pubkey,
                context.payer.pubkey(),
                other.mint.pubkey(),
                None,
                5,
            )],
            Some(&context.payer.pubkey()),
            &[&context.payer],
            context.last_blockhash,
        );

        let err = context
            .banks_client
            .process_transaction(tx)
            .await
            .unwrap_err();

        assert_custom_error!(err, MetadataError::MintMismatch);
    }

    #[tokio::test]
    async fn verification_leaves_size_untouched() {
        let mut context = program_test().start_with_context().await;
        let collection = Metadata::new();
        collection.create_sized(&mut context, 3).await.unwrap();
        let collection_edition = MasterEdition::new(&collection);
        collection_edition
            .create(&mut context, Some(0))
            .await
            .unwrap();

        let member = Metadata::new();
        member
            .create_member_of(&mut context, &collection)
            .await
            .unwrap();

        member
            .verify_sized_collection_item(
                &mut context,
                &collection,
                &collection_edition.pubkey,
                None,
                None,
            )
            .await
            .unwrap();

        assert!(member.get_data(&mut context).await.collection.unwrap().verified);
        assert_eq!(
            collection.get_data(&mut context).await.collection_details,
            Some(CollectionDetails::V1 { size: 3 })
        );
    }
}
