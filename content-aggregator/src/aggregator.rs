use crate::config::{AggregatorConfig, RunContext};
use crate::sources::{NewsSource, PublicationsSource, ResearchSource, TeamSource};
use crate::source::SourceDocument;
use crate::traits::ContentKind;
use crate::types::{AggregatorError, Collection, FolderFailure, Result, RunReport};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Scans a collection root, normalizes every content folder and writes the
/// sorted collection as one JSON array.
pub struct ContentAggregator {
    config: AggregatorConfig,
}

impl ContentAggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    /// Scan, build and sort one collection without writing anything.
    ///
    /// Only a missing or unlistable root is an error; every per-folder
    /// problem ends up in the report.
    pub fn collect<K: ContentKind>(&self, kind: &K) -> Result<Collection<K::Record>> {
        let root = self.config.collection_root(kind.collection());
        let ctx = self.config.run_context();
        let folders = list_folders(&root)?;
        let mut report = RunReport::new(kind.collection());
        let mut records = Vec::with_capacity(folders.len());

        info!("Scanning {} folders in {}", folders.len(), root.display());

        for folder_path in folders {
            let folder = folder_name(&folder_path);

            if !folder_path.join(kind.index_file()).is_file() {
                warn!("No {} found for {}", kind.index_file(), folder);
                report.skipped.push(folder);
                continue;
            }

            match build_folder(kind, &folder_path, &ctx) {
                Ok(record) => {
                    info!("✓ Processed {}", folder);
                    records.push(record);
                }
                Err(e) => {
                    error!("Error processing {}: {}", folder, e);
                    report.failed.push(FolderFailure {
                        folder,
                        reason: e.to_string(),
                    });
                }
            }
        }

        // Stable, so equal keys keep folder-name order.
        records.sort_by(|a, b| kind.compare(a, b));
        report.written = records.len();

        Ok(Collection { records, report })
    }

    /// Full scan-normalize-sort-write cycle for one collection.
    pub fn run<K: ContentKind>(&self, kind: &K) -> Result<RunReport> {
        let Collection { records, mut report } = self.collect(kind)?;
        let output = self.config.output_path(kind.output_file());

        let json = serde_json::to_string_pretty(&records)?;
        write_atomically(&output, &json)?;

        info!(
            "Generated {} {} items to {}",
            report.written,
            kind.collection(),
            output.display()
        );
        if !report.is_clean() {
            warn!(
                "{}: skipped {} folders, {} failed",
                kind.collection(),
                report.skipped.len(),
                report.failed.len()
            );
        }

        report.output = Some(output);
        Ok(report)
    }

    /// Run every collection independently; one failing does not stop the
    /// others.
    pub fn run_all(&self) -> Vec<(&'static str, Result<RunReport>)> {
        let publications = PublicationsSource::new(self.config.author_aliases.clone());
        let team = TeamSource::new(self.config.default_organization.clone());

        vec![
            (NewsSource.collection(), self.run(&NewsSource)),
            (publications.collection(), self.run(&publications)),
            (ResearchSource.collection(), self.run(&ResearchSource)),
            (team.collection(), self.run(&team)),
        ]
    }
}

fn build_folder<K: ContentKind>(
    kind: &K,
    folder_path: &Path,
    ctx: &RunContext,
) -> Result<K::Record> {
    let doc = SourceDocument::load(kind.collection(), folder_path, kind.index_file())?;
    kind.build(&doc, ctx)
}

/// Sub-directories of `root`, sorted by name. Plain files are ignored.
fn list_folders(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(AggregatorError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut folders = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() {
            folders.push(path);
        }
    }
    folders.sort();
    Ok(folders)
}

fn folder_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Write through a sibling temp file and rename it over `path`, so readers
/// never see a half-written collection.
fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| AggregatorError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    if let Err(e) = fs::write(&tmp_path, contents) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_err(e));
    }
    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        write_err(e)
    })
}
