//! CLI library components for the PBCore table extractor.

pub mod logging;
pub mod pipeline;
pub mod types;
