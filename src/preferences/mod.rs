pub mod store;
pub mod tier;

pub use store::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceError, PreferenceFile, PreferenceStore,
};
pub use tier::{resolve_system, ExperienceTierController, TIER_KEY};
