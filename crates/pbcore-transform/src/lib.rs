//! PBCore extraction and consolidation.
//!
//! - **select**: namespaced child lookup with attribute filters
//! - **canonical**: title, description, date, media type and proxy rules
//! - **instantiation**: per-copy rows and the rollups derived from them
//! - **aggregate**: one asset row plus its copies per document, corpus anomalies

pub mod aggregate;
pub mod canonical;
pub mod instantiation;
pub mod select;

pub use aggregate::{AssetExtraction, CorpusAggregator, extract_asset};
pub use canonical::{CopyKind, DateParts, DescriptionParts, MediaTypeCandidates, TitleParts};
pub use instantiation::{ExtractedInstantiation, IDENTIFIER_SEPARATOR, InstantiationSet};
pub use select::Filter;
