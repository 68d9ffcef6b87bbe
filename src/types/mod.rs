pub mod identifiers;
pub mod terminology;

pub use identifiers::{DocumentId, RowKey};
pub use terminology::{ExperienceTier, TerminologySystem, UnknownTier};
