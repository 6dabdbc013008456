//! Sidecar files: assets found next to a folder's metadata document by
//! naming convention rather than by explicit reference.

use std::fs;
use std::path::Path;
use tracing::warn;

/// Cover image for news, publications and research folders.
pub const FEATURED: &[&str] = &["featured.jpg", "featured.jpeg", "featured.png"];

/// Portrait for team folders.
pub const AVATAR: &[&str] = &["avatar.jpg", "avatar.jpeg", "avatar.png"];

/// BibTeX citation for publication folders.
pub const CITATION: &[&str] = &["cite.bib"];

/// File names directly inside `folder`, sorted.
///
/// An unreadable folder yields no entries: a failed lookup only means no
/// asset is found.
pub fn list_entries(folder: &Path) -> Vec<String> {
    let read_dir = match fs::read_dir(folder) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            warn!("Could not list {}: {}", folder.display(), e);
            return Vec::new();
        }
    };

    let mut entries: Vec<String> = read_dir
        .filter_map(|entry| entry.ok())
        // Follows symlinks, so a linked `featured.jpg` still counts.
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    entries.sort();
    entries
}

/// First entry matching `names`, tried in order and compared without case.
/// The entry is returned with its on-disk spelling.
pub fn find_sidecar<'a, S: AsRef<str>>(entries: &'a [String], names: &[S]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        let name = name.as_ref();
        entries
            .iter()
            .find(|entry| entry.eq_ignore_ascii_case(name))
            .map(String::as_str)
    })
}

/// Site path the pages use to reach a sidecar file.
pub fn public_path(collection: &str, folder: &str, file_name: &str) -> String {
    format!("/{}/{}/{}", collection, folder, file_name)
}
