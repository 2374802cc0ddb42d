//! PBCore corpus ingestion.
//!
//! - **decode**: strict byte-to-text decoding by BOM or declared encoding
//! - **discovery**: list the files of a corpus directory
//! - **document**: parse XML into a namespace-aware element tree
//! - **reader**: read one file and verify it is a description document

pub mod decode;
pub mod discovery;
pub mod document;
pub mod error;
pub mod reader;

pub use decode::decode_document;
pub use discovery::{CorpusListing, list_corpus_files};
pub use document::{XmlElement, parse_document};
pub use error::{DocumentError, IngestError, Result};
pub use reader::{DescriptionDocument, read_description_document};
