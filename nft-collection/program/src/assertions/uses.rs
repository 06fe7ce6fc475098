use solana_program::program_error::ProgramError;

use crate::{
    error::MetadataError,
    state::{UseMethod, Uses},
};

/// Checks an incoming uses descriptor on its own, then against the stored one. Once any
/// use has been consumed the stored descriptor is frozen.
pub fn assert_valid_use(
    incoming_use: &Option<Uses>,
    current_use: &Option<Uses>,
) -> Result<(), ProgramError> {
    if let Some(i) = incoming_use {
        if i.use_method == UseMethod::Single && (i.total != 1 || i.remaining != 1) {
            return Err(MetadataError::InvalidUseMethod.into());
        }
        if i.use_method == UseMethod::Multiple && i.total < 2 {
            return Err(MetadataError::InvalidUseMethod.into());
        }
        if i.remaining > i.total {
            return Err(MetadataError::InvalidUseMethod.into());
        }
    }

    match (incoming_use, current_use) {
        (Some(incoming), Some(current)) if !current.is_untouched() => {
            if incoming.use_method != current.use_method {
                return Err(MetadataError::CannotChangeUseMethodAfterFirstUse.into());
            }
            if incoming.total != current.total || incoming.remaining != current.remaining {
                return Err(MetadataError::CannotChangeUsesAfterFirstUse.into());
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
