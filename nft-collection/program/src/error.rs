//! Error types

use num_derive::FromPrimitive;
use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use thiserror::Error;

/// Errors that may be returned by the program.
#[derive(Clone, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum MetadataError {
    /// 0 Failed to unpack instruction data
    #[error("Failed to unpack instruction data")]
    InstructionUnpackError,

    /// Account at the target address already holds data
    #[error("Already initialized")]
    AlreadyInitialized,

    /// Account at the target address holds no data
    #[error("Uninitialized")]
    Uninitialized,

    /// Metadata's key must match seed of ['metadata', program id, mint] provided
    #[error("Metadata's key must match seed of ['metadata', program id, mint] provided")]
    InvalidMetadataKey,

    /// Edition's key must match seed of ['metadata', program id, mint, 'edition'] provided
    #[error("Edition's key must match seed of ['metadata', program id, mint, 'edition'] provided")]
    InvalidEditionKey,

    /// 5 - Update Authority given does not match
    #[error("Update Authority given does not match")]
    UpdateAuthorityIncorrect,

    /// Update Authority needs to be signer to update metadata
    #[error("Update Authority needs to be signer to update metadata")]
    UpdateAuthorityIsNotSigner,

    /// You must be the mint authority and signer on this transaction
    #[error("You must be the mint authority and signer on this transaction")]
    NotMintAuthority,

    /// Mint authority provided does not match the authority on the mint
    #[error("Mint authority provided does not match the authority on the mint")]
    InvalidMintAuthority,

    /// Name too long
    #[error("Name too long")]
    NameTooLong,

    /// 10 - Symbol too long
    #[error("Symbol too long")]
    SymbolTooLong,

    /// URI too long
    #[error("URI too long")]
    UriTooLong,

    /// Mint given does not match mint on Metadata
    #[error("Mint given does not match mint on Metadata")]
    MintMismatch,

    /// Editions must have exactly one token
    #[error("Editions must have exactly one token")]
    EditionsMustHaveExactlyOneToken,

    /// Edition mint decimals should be zero
    #[error("Edition mint decimals should be zero")]
    EditionMintDecimalsShouldBeZero,

    /// 15 - The mint has no freeze authority to hand over
    #[error("No freeze authority set")]
    NoFreezeAuthoritySet,

    /// Freeze authority of the mint must be the mint authority
    #[error("Freeze authority of the mint must be the mint authority")]
    InvalidFreezeAuthority,

    /// Derived key invalid
    #[error("Derived key invalid")]
    DerivedKeyInvalid,

    /// No bump seed produced an off-curve address for the given seeds
    #[error("Unable to find a viable program address bump seed")]
    DerivationExhausted,

    /// Creators list too long
    #[error("Creators list too long")]
    CreatorsTooLong,

    /// 20 - No duplicate creator addresses
    #[error("No duplicate creator addresses")]
    DuplicateCreatorAddress,

    /// Share total must equal 100 for creator array
    #[error("Share total must equal 100 for creator array")]
    ShareTotalMustBe100,

    /// Basis points cannot be more than 10000
    #[error("Basis points cannot be more than 10000")]
    InvalidBasisPoints,

    /// You cannot unilaterally verify another creator, they must sign
    #[error("You cannot unilaterally verify another creator, they must sign")]
    CannotVerifyAnotherCreator,

    /// You cannot unilaterally unverify another creator
    #[error("You cannot unilaterally unverify another creator")]
    CannotUnverifyAnotherCreator,

    /// 25 - Cannot remove Verified Creator
    #[error("Cannot remove Verified Creator")]
    CannotRemoveVerifiedCreator,

    /// Data is immutable
    #[error("Data is immutable")]
    DataIsImmutable,

    /// Primary sale can only be flipped to true and is immutable
    #[error("Primary sale can only be flipped to true and is immutable")]
    PrimarySaleCanOnlyBeFlippedToTrue,

    /// Is Mutable can only be flipped to false
    #[error("Is Mutable can only be flipped to false")]
    IsMutableCanOnlyBeFlippedToFalse,

    /// Incorrect account owner
    #[error("Incorrect account owner")]
    IncorrectOwner,

    /// 30 - Data type mismatch
    #[error("Data type mismatch")]
    DataTypeMismatch,

    /// Invalid token program
    #[error("Invalid token program")]
    InvalidTokenProgram,

    /// NumericalOverflowError
    #[error("NumericalOverflowError")]
    NumericalOverflowError,

    /// Collection cannot be verified in this instruction
    #[error("Collection cannot be verified in this instruction")]
    CollectionCannotBeVerifiedInThisInstruction,

    /// Cannot change or remove a verified collection with this instruction
    #[error("Cannot change or remove a verified collection with this instruction")]
    CannotUpdateVerifiedCollection,

    /// 35 - This metadata does not reference a collection
    #[error("Collection Not Found on Metadata")]
    CollectionNotFound,

    /// The collection referenced by the metadata is a different mint
    #[error("Collection key on the metadata does not match the collection mint")]
    CollectionKeyMismatch,

    /// Collection metadata is not the derived metadata of the collection mint
    #[error("Collection metadata account is invalid for the collection mint")]
    CollectionMetadataAccountInvalid,

    /// Collection master edition is missing or not the derived edition of the collection mint
    #[error("Collection Master Edition Account is invalid")]
    CollectionMasterEditionAccountInvalid,

    /// Collection must be a unique master edition, max supply 0
    #[error("Collection Must Be a Unique Master Edition v2")]
    CollectionMustBeAUniqueMasterEdition,

    /// 40 - Signer is neither the collection update authority nor an approved delegate
    #[error("Collection Update Authority is invalid")]
    InvalidCollectionUpdateAuthority,

    /// The collection reference is already verified
    #[error("This NFT is already a verified member of the collection")]
    AlreadyVerified,

    /// Collection authority record already exists
    #[error("This Collection Authority Record Already Exists.")]
    CollectionAuthorityRecordAlreadyExists,

    /// Collection authority record does not exist
    #[error("This Collection Authority Record Does Not Exist.")]
    CollectionAuthorityDoesNotExist,

    /// Only the update authority or the delegate can revoke a collection authority
    #[error("Revoke Collection Authority signer is incorrect")]
    RevokeCollectionAuthoritySignerIncorrect,

    /// 45 - Uses descriptor does not fit its use method
    #[error("Invalid use method")]
    InvalidUseMethod,

    /// Use method cannot change once a use was consumed
    #[error("Cannot Change Use Method after the first use")]
    CannotChangeUseMethodAfterFirstUse,

    /// Use counts cannot change once a use was consumed
    #[error("Cannot Change Remaining or Available uses after the first use")]
    CannotChangeUsesAfterFirstUse,

    /// The collection already carries a size
    #[error("Collection size can only be set once on an unsized collection")]
    SizedCollection,
}

/// Coarse outcome classes of [`MetadataError`].
///
/// Callers that only need to know *why* an operation was refused, not which check refused
/// it, match on the category instead of the individual error code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    AlreadyExists,
    NotFound,
    Unauthorized,
    InvalidMintState,
    InvalidCollectionReference,
    InvalidCollectionEdition,
    AlreadyVerified,
    ValidationError,
    DerivationExhausted,
}

impl MetadataError {
    pub fn category(&self) -> ErrorCategory {
        use MetadataError::*;

        match self {
            AlreadyInitialized | CollectionAuthorityRecordAlreadyExists | SizedCollection => {
                ErrorCategory::AlreadyExists
            }
            Uninitialized | CollectionAuthorityDoesNotExist => ErrorCategory::NotFound,
            UpdateAuthorityIncorrect
            | UpdateAuthorityIsNotSigner
            | NotMintAuthority
            | InvalidMintAuthority
            | DataIsImmutable
            | InvalidCollectionUpdateAuthority
            | RevokeCollectionAuthoritySignerIncorrect => ErrorCategory::Unauthorized,
            EditionsMustHaveExactlyOneToken
            | EditionMintDecimalsShouldBeZero
            | NoFreezeAuthoritySet
            | InvalidFreezeAuthority => ErrorCategory::InvalidMintState,
            CollectionNotFound | CollectionKeyMismatch | CollectionMetadataAccountInvalid => {
                ErrorCategory::InvalidCollectionReference
            }
            CollectionMasterEditionAccountInvalid | CollectionMustBeAUniqueMasterEdition => {
                ErrorCategory::InvalidCollectionEdition
            }
            AlreadyVerified => ErrorCategory::AlreadyVerified,
            DerivationExhausted => ErrorCategory::DerivationExhausted,
            InstructionUnpackError
            | InvalidMetadataKey
            | InvalidEditionKey
            | NameTooLong
            | SymbolTooLong
            | UriTooLong
            | MintMismatch
            | DerivedKeyInvalid
            | CreatorsTooLong
            | DuplicateCreatorAddress
            | ShareTotalMustBe100
            | InvalidBasisPoints
            | CannotVerifyAnotherCreator
            | CannotUnverifyAnotherCreator
            | CannotRemoveVerifiedCreator
            | PrimarySaleCanOnlyBeFlippedToTrue
            | IsMutableCanOnlyBeFlippedToFalse
            | IncorrectOwner
            | DataTypeMismatch
            | InvalidTokenProgram
            | NumericalOverflowError
            | CollectionCannotBeVerifiedInThisInstruction
            | CannotUpdateVerifiedCollection
            | InvalidUseMethod
            | CannotChangeUseMethodAfterFirstUse
            | CannotChangeUsesAfterFirstUse => ErrorCategory::ValidationError,
        }
    }
}

impl PrintProgramError for MetadataError {
    fn print<E>(&self) {
        msg!(&self.to_string());
    }
}

impl From<MetadataError> for ProgramError {
    fn from(e: MetadataError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for MetadataError {
    fn type_of() -> &'static str {
        "Metadata Error"
    }
}
