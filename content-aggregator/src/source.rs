use crate::assets;
use crate::parser::parse_document;
use crate::types::{FrontMatter, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// One content folder, loaded and parsed, ready for field resolution.
#[derive(Debug)]
pub struct SourceDocument {
    pub collection: String,
    pub folder: String,
    pub path: PathBuf,
    /// Direct file entries of the folder, used for sidecar lookup.
    pub entries: Vec<String>,
    pub front_matter: FrontMatter,
    pub body: String,
}

impl SourceDocument {
    pub fn load(collection: &str, folder_path: &Path, index_file: &str) -> Result<Self> {
        let folder = folder_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let content = fs::read_to_string(folder_path.join(index_file))?;
        let parsed = parse_document(&content)?;

        Ok(Self {
            collection: collection.to_string(),
            folder,
            path: folder_path.to_path_buf(),
            entries: assets::list_entries(folder_path),
            front_matter: parsed.front_matter,
            body: parsed.body,
        })
    }

    /// Build a document from already-parsed parts.
    pub fn from_parts(
        collection: &str,
        folder: &str,
        front_matter: FrontMatter,
        body: &str,
        entries: Vec<String>,
    ) -> Self {
        Self {
            collection: collection.to_string(),
            folder: folder.to_string(),
            path: PathBuf::from(folder),
            entries,
            front_matter,
            body: body.trim().to_string(),
        }
    }

    pub fn sidecar<S: AsRef<str>>(&self, names: &[S]) -> Option<&str> {
        assets::find_sidecar(&self.entries, names)
    }

    /// Public path of the first matching sidecar.
    pub fn sidecar_url<S: AsRef<str>>(&self, names: &[S]) -> Option<String> {
        self.sidecar(names)
            .map(|file| assets::public_path(&self.collection, &self.folder, file))
    }

    /// Contents of the first matching sidecar. Read failures count as
    /// "not found".
    pub fn read_sidecar<S: AsRef<str>>(&self, names: &[S]) -> Option<String> {
        let file = self.sidecar(names)?;
        let path = self.path.join(file);
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!("Could not read {}: {}", path.display(), e);
                None
            }
        }
    }
}
