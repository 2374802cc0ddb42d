//! Corpus directory listing.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Regular files found in a corpus directory.
#[derive(Debug, Clone, Default)]
pub struct CorpusListing {
    /// Every regular file, sorted by file name.
    pub files: Vec<PathBuf>,
    /// How many of `files` carry an `.xml` extension.
    pub xml_count: usize,
}

impl CorpusListing {
    /// True when some files lack an `.xml` extension.
    ///
    /// Advisory only: every file is still attempted as XML.
    pub fn has_non_xml_files(&self) -> bool {
        self.files.len() > self.xml_count
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Lists all regular files in a corpus directory (non-recursive).
///
/// Returns files sorted by filename.
pub fn list_corpus_files(dir: &Path) -> Result<CorpusListing> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }
        files.push(path);
    }

    // Sort by filename
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let xml_count = files.iter().filter(|path| is_xml_file(path)).count();

    Ok(CorpusListing { files, xml_count })
}

/// Check for an `.xml` extension (case-insensitive).
///
/// A file named just `.xml` has no extension and does not count.
fn is_xml_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("xml"))
        .unwrap_or(false)
}
