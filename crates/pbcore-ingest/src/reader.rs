//! Reads one corpus file as a PBCore description document.

use std::path::{Path, PathBuf};

use tracing::trace;

use pbcore_model::vocabulary::DESCRIPTION_DOCUMENT;

use crate::decode::decode_document;
use crate::document::{XmlElement, parse_document};
use crate::error::{IngestError, Result};

/// A parsed file whose root is a `pbcoreDescriptionDocument`.
#[derive(Debug, Clone)]
pub struct DescriptionDocument {
    pub path: PathBuf,
    pub root: XmlElement,
}

impl DescriptionDocument {
    /// File name for diagnostics.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unknown")
    }
}

/// Read, parse, and verify the root of one file.
///
/// The root check compares the local name only; the namespace is ignored.
pub fn read_description_document(path: &Path) -> Result<DescriptionDocument> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let root = decode_document(&bytes)
        .and_then(|text| parse_document(&text))
        .map_err(|source| IngestError::XmlParse {
            path: path.to_path_buf(),
            source,
        })?;
    if root.local_name != DESCRIPTION_DOCUMENT {
        return Err(IngestError::UnexpectedRoot {
            path: path.to_path_buf(),
            root: root.local_name,
        });
    }
    trace!(
        file = %path.display(),
        element_count = root.descendants().len(),
        "document parsed"
    );
    Ok(DescriptionDocument {
        path: path.to_path_buf(),
        root,
    })
}
