//! Error types for PBCore corpus ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning XML text into an element tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The reader rejected the input (bad syntax, mismatched tags, bad entity).
    #[error("{message}")]
    Malformed { message: String },

    /// Bytes that do not decode in the document's encoding.
    #[error("invalid {encoding} byte sequence")]
    InvalidEncoding { encoding: String },

    /// The XML declaration names an encoding that is not recognized.
    #[error("unsupported encoding '{label}'")]
    UnsupportedEncoding { label: String },

    /// End of input reached with elements still open.
    #[error("unclosed element <{name}>")]
    UnclosedElement { name: String },

    /// No element at all.
    #[error("no root element")]
    NoRootElement,

    /// A second top-level element after the root closed.
    #[error("multiple root elements (second is <{name}>)")]
    MultipleRoots { name: String },

    /// Non-whitespace character data outside the root element.
    #[error("text outside the root element")]
    TextOutsideRoot,
}

/// Errors that can occur during corpus ingestion.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Corpus errors (fatal) ===
    /// Corpus directory missing or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Document errors (file is skipped) ===
    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not well-formed XML.
    #[error("failed to parse XML {path}: {source}")]
    XmlParse {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    /// Well-formed XML whose root is not a PBCore description document.
    #[error("unexpected root element <{root}> in {path}")]
    UnexpectedRoot { path: PathBuf, root: String },
}

impl IngestError {
    /// Whether the batch can continue by skipping the offending file.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. } | Self::XmlParse { .. } | Self::UnexpectedRoot { .. }
        )
    }

    /// Short label for summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DirectoryNotFound { .. } => "directory not found",
            Self::DirectoryRead { .. } => "directory unreadable",
            Self::FileRead { .. } => "unreadable",
            Self::XmlParse { .. } => "malformed XML",
            Self::UnexpectedRoot { .. } => "wrong root element",
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
