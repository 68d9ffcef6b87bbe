pub mod attestation;
pub mod grouping;
pub mod query;

pub use attestation::{Attestation, SourceDate};
pub use grouping::{group_by_type, Classified, GroupedResults, Heading};
pub use query::{GlossQuery, SearchScope, TimelineRequest};
