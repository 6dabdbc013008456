#![allow(dead_code)]

use chrono::NaiveDate;
use content_aggregator::AggregatorConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

/// Throwaway site with a content root and a data directory.
pub struct Site {
    dir: TempDir,
}

impl Site {
    pub fn new() -> Self {
        init_tracing();
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn content_root(&self) -> PathBuf {
        self.dir.path().join("public")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("src").join("data")
    }

    pub fn config(&self) -> AggregatorConfig {
        AggregatorConfig::default()
            .with_content_root(self.content_root())
            .with_data_dir(self.data_dir())
            .with_reference_date(reference_date())
    }

    pub fn folder(&self, collection: &str, folder: &str) -> PathBuf {
        let path = self.content_root().join(collection).join(folder);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Create `<collection>/<folder>/<file>` with `contents`.
    pub fn write(&self, collection: &str, folder: &str, file: &str, contents: &str) -> PathBuf {
        let path = self.folder(collection, folder).join(file);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read_output(&self, file: &str) -> String {
        fs::read_to_string(self.data_dir().join(file)).unwrap()
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
