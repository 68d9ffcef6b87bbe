use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the parallel label sets describing the same grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminologySystem {
    /// The canonical record itself.
    Base,
    Learner,
    /// Cherokee Reference Grammar labels. Not reachable from any tier yet.
    Crg,
}

/// Audience level chosen by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceTier {
    #[default]
    Basic,
    Learner,
    Advanced,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown experience tier: {0:?}")]
pub struct UnknownTier(pub String);

impl ExperienceTier {
    pub const ALL: [ExperienceTier; 3] = [
        ExperienceTier::Basic,
        ExperienceTier::Learner,
        ExperienceTier::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceTier::Basic => "basic",
            ExperienceTier::Learner => "learner",
            ExperienceTier::Advanced => "advanced",
        }
    }

    /// Advanced readers see the base labels; everyone else gets learner labels.
    pub fn terminology(self) -> TerminologySystem {
        match self {
            ExperienceTier::Advanced => TerminologySystem::Base,
            ExperienceTier::Basic | ExperienceTier::Learner => TerminologySystem::Learner,
        }
    }
}

impl fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(ExperienceTier::Basic),
            "learner" => Ok(ExperienceTier::Learner),
            "advanced" => Ok(ExperienceTier::Advanced),
            other => Err(UnknownTier(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_tier() {
        for tier in ExperienceTier::ALL {
            assert_eq!(tier.as_str().parse::<ExperienceTier>(), Ok(tier));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Advanced".parse::<ExperienceTier>().is_err());
        assert!("".parse::<ExperienceTier>().is_err());
    }
}
