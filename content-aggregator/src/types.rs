use serde::Serialize;
use std::path::PathBuf;

// Use the interfaces crate for the generated record shapes
pub use interfaces::defs::{
    ContentItem, EducationEntry, EducationStatus, Grant, GrantStatus, NewsItem, Organization,
    Publication, TeamMember,
};

/// Ordered front-matter key/value map of one metadata document.
pub type FrontMatter = serde_json::Map<String, serde_json::Value>;

#[derive(Debug)]
pub struct ParsedDocument {
    pub front_matter: FrontMatter,
    /// Text after the front-matter block, trimmed.
    pub body: String,
}

/// A folder that was seen but produced no record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderFailure {
    pub folder: String,
    pub reason: String,
}

/// Outcome of one aggregator run, returned to the caller instead of being
/// printed from inside the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub collection: String,
    pub output: Option<PathBuf>,
    /// Records in the generated collection.
    pub written: usize,
    /// Folders without a metadata document.
    pub skipped: Vec<String>,
    pub failed: Vec<FolderFailure>,
}

impl RunReport {
    pub fn new(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            output: None,
            written: 0,
            skipped: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Number of folders the run looked at.
    pub fn total_seen(&self) -> usize {
        self.written + self.skipped.len() + self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }
}

/// Sorted records of one collection plus the report describing how they
/// were gathered.
#[derive(Debug)]
pub struct Collection<R> {
    pub records: Vec<R>,
    pub report: RunReport,
}

#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    #[error("Content root not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("Front matter error: {message}")]
    FrontMatter { message: String },

    #[error("Field `{field}` has an unexpected shape, expected {expected}")]
    FieldShape { field: String, expected: &'static str },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AggregatorError {
    pub fn front_matter(message: impl Into<String>) -> Self {
        Self::FrontMatter {
            message: message.into(),
        }
    }

    pub fn field_shape(field: impl Into<String>, expected: &'static str) -> Self {
        Self::FieldShape {
            field: field.into(),
            expected,
        }
    }
}

pub type Result<T> = std::result::Result<T, AggregatorError>;
