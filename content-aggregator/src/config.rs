use chrono::{Datelike, Local, NaiveDate};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Directory holding one sub-directory per collection.
    pub content_root: PathBuf,
    /// Directory the generated JSON files are written to.
    pub data_dir: PathBuf,
    /// Date the run pretends to happen on. `None` means today.
    pub reference_date: Option<NaiveDate>,
    /// Author identifiers that map to a fixed display name.
    pub author_aliases: Vec<(String, String)>,
    pub default_organization: String,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("public"),
            data_dir: PathBuf::from("src/data"),
            reference_date: None,
            author_aliases: vec![("admin".to_string(), "Amanda Watson".to_string())],
            default_organization: "University of Virginia".to_string(),
        }
    }
}

impl AggregatorConfig {
    pub fn with_content_root(mut self, content_root: impl Into<PathBuf>) -> Self {
        self.content_root = content_root.into();
        self
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn with_author_alias(mut self, identifier: &str, display_name: &str) -> Self {
        self.author_aliases
            .retain(|(existing, _)| existing != identifier);
        self.author_aliases
            .push((identifier.to_string(), display_name.to_string()));
        self
    }

    pub fn collection_root(&self, collection: &str) -> PathBuf {
        self.content_root.join(collection)
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    /// Freeze the per-run values every folder of one run must agree on.
    pub fn run_context(&self) -> RunContext {
        RunContext {
            today: self.reference_date.unwrap_or_else(|| Local::now().date_naive()),
        }
    }
}

/// Values fixed once at the start of a run.
#[derive(Debug, Clone, Copy)]
pub struct RunContext {
    pub today: NaiveDate,
}

impl RunContext {
    pub fn current_year(&self) -> i32 {
        self.today.year()
    }
}

