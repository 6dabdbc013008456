pub mod types;
pub mod config;
pub mod parser;
pub mod assets;
pub mod source;
pub mod fields;
pub mod traits;
pub mod aggregator;
pub mod sources;
pub mod utils;

pub use types::*;
pub use config::{AggregatorConfig, RunContext};
pub use parser::parse_document;
pub use source::SourceDocument;
pub use fields::{Candidate, Resolver};
pub use traits::ContentKind;
pub use aggregator::ContentAggregator;
pub use sources::{NewsSource, PublicationsSource, ResearchSource, TeamSource};

/// Run one collection with the default configuration. Shared by the
/// single-collection executables; progress is logged by the run itself.
pub fn generate<K: ContentKind>(kind: &K) -> Result<RunReport> {
    let aggregator = ContentAggregator::new(AggregatorConfig::default());
    aggregator.run(kind)
}
