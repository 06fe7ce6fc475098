pub mod collection;
pub mod edition;
pub mod metadata;
pub mod misc;
pub mod uses;

pub use misc::*;
