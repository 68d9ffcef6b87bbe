use tracing::{debug, warn};

use crate::preferences::store::{PreferenceError, PreferenceStore};
use crate::types::terminology::{ExperienceTier, TerminologySystem};

pub const TIER_KEY: &str = "experience_tier";

/// Terminology system shown to readers at `tier`.
pub fn resolve_system(tier: ExperienceTier) -> TerminologySystem {
    tier.terminology()
}

/// Holds the reader's audience tier and maps it to a terminology system.
#[derive(Debug)]
pub struct ExperienceTierController<S> {
    store: S,
}

impl<S: PreferenceStore> ExperienceTierController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted tier, or `Basic` when nothing usable is stored.
    pub fn get_stored_tier(&self) -> ExperienceTier {
        let raw = match self.store.read(TIER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ExperienceTier::default(),
            Err(err) => {
                warn!(error = %err, "could not read experience tier, using default");
                return ExperienceTier::default();
            }
        };

        raw.parse().unwrap_or_else(|err| {
            warn!(error = %err, "ignoring stored experience tier");
            ExperienceTier::default()
        })
    }

    pub fn set_tier(&mut self, tier: ExperienceTier) -> Result<(), PreferenceError> {
        self.store.write(TIER_KEY, tier.as_str())?;
        debug!(%tier, "experience tier updated");
        Ok(())
    }

    pub fn active_system(&self) -> TerminologySystem {
        resolve_system(self.get_stored_tier())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
