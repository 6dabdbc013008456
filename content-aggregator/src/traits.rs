use crate::config::RunContext;
use crate::source::SourceDocument;
use crate::types::Result;
use serde::Serialize;
use std::cmp::Ordering;

/// One kind of content folder (news, publications, ...) and the rules that
/// turn its folders into records.
///
/// Implementations hold no per-run state; everything a build needs comes
/// from the document and the run context.
pub trait ContentKind {
    type Record: Serialize;

    /// Sub-directory of the content root and prefix of public asset paths.
    fn collection(&self) -> &'static str;

    /// Metadata document every qualifying folder contains.
    fn index_file(&self) -> &'static str {
        "index.md"
    }

    /// File name of the generated JSON inside the data directory.
    fn output_file(&self) -> &'static str;

    /// Normalize one parsed folder into a record.
    fn build(&self, doc: &SourceDocument, ctx: &RunContext) -> Result<Self::Record>;

    /// Total order of the generated collection.
    fn compare(&self, a: &Self::Record, b: &Self::Record) -> Ordering;
}
