// Utility functions
// Pure helpers with no UI dependencies

pub mod fetch;
pub mod localized;
pub mod markdown;

pub use localized::{resolve_localized, LocalizedSource};
