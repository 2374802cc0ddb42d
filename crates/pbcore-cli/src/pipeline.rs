//! Corpus extraction pipeline with explicit stages.
//!
//! 1. **Ingest**: list the corpus directory
//! 2. **Extract**: read each file, skip unusable ones, accumulate rows
//! 3. **Output**: build tables, project, and write CSV/JSON files
//!
//! Nothing is written until every document has been processed, so a fatal
//! error leaves no partial outputs.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug_span, info, info_span, warn};

use pbcore_ingest::{CorpusListing, list_corpus_files, read_description_document};
use pbcore_model::{AssetRecord, Projection};
use pbcore_output::{ASSET_TABLE, Table, build_tables, project, write_csv, write_json};
use pbcore_transform::CorpusAggregator;

use crate::types::{RunResult, SkippedFile, WrittenOutput};

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub corpus_dir: PathBuf,
    /// Destination of the projected asset table.
    pub output: PathBuf,
    pub projection: Projection,
    pub instantiations: Option<PathBuf>,
    pub joined: Option<PathBuf>,
    pub anomalies: Option<PathBuf>,
}

impl PipelineConfig {
    pub fn new(corpus_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            corpus_dir: corpus_dir.into(),
            output: output.into(),
            projection: Projection::Default,
            instantiations: None,
            joined: None,
            anomalies: None,
        }
    }
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// List the corpus and warn about files without an `.xml` extension.
pub fn ingest(corpus_dir: &Path) -> Result<CorpusListing> {
    let listing = list_corpus_files(corpus_dir)
        .with_context(|| format!("list corpus {}", corpus_dir.display()))?;
    if listing.has_non_xml_files() {
        warn!(
            corpus = %corpus_dir.display(),
            file_count = listing.len(),
            xml_count = listing.xml_count,
            "corpus contains files without an .xml extension; attempting them as XML"
        );
    }
    Ok(listing)
}

// ============================================================================
// Stage 2: Extract
// ============================================================================

/// Result of the extract stage.
#[derive(Debug, Default)]
pub struct ExtractResult {
    pub aggregator: CorpusAggregator,
    pub parsed: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Read every listed file in order and accumulate its rows.
///
/// Malformed and wrong-root documents are skipped with a warning; any other
/// ingest failure aborts the run.
pub fn extract(listing: &CorpusListing) -> Result<ExtractResult> {
    let mut result = ExtractResult::default();
    for path in &listing.files {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        let _document_guard = debug_span!("document", file = %file_name).entered();
        match read_description_document(path) {
            Ok(document) => {
                result.aggregator.add_document(&document);
                result.parsed += 1;
            }
            Err(error) if error.is_recoverable() => {
                warn!(
                    file = %path.display(),
                    kind = error.kind(),
                    error = %error,
                    "skipping document"
                );
                result.skipped.push(SkippedFile {
                    path: path.clone(),
                    kind: error.kind(),
                    reason: error.to_string(),
                });
            }
            Err(error) => {
                return Err(error).with_context(|| format!("read {}", path.display()));
            }
        }
    }
    Ok(result)
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Fail before any work when the projection names an unknown column.
pub fn check_projection(projection: &Projection) -> Result<()> {
    let empty = Table::from_rows::<AssetRecord>(ASSET_TABLE, &[]);
    project(&empty, projection).context("invalid column selection")?;
    Ok(())
}

/// Build the tables and write every requested output.
pub fn output(config: &PipelineConfig, aggregator: &CorpusAggregator) -> Result<Vec<WrittenOutput>> {
    let tables = build_tables(&aggregator.assets, &aggregator.instantiations);
    let mut outputs = Vec::new();

    let assets = project(&tables.assets, &config.projection).context("project asset table")?;
    let file = write_csv(&assets, &config.output)
        .with_context(|| format!("write {}", config.output.display()))?;
    outputs.push(WrittenOutput {
        label: "assets",
        file,
    });

    if let Some(path) = &config.instantiations {
        let file = write_csv(&tables.instantiations, path)
            .with_context(|| format!("write {}", path.display()))?;
        outputs.push(WrittenOutput {
            label: "instantiations",
            file,
        });
    }

    if let Some(path) = &config.joined {
        let joined = tables.left_join();
        let file =
            write_csv(&joined, path).with_context(|| format!("write {}", path.display()))?;
        outputs.push(WrittenOutput {
            label: "joined",
            file,
        });
    }

    if let Some(path) = &config.anomalies {
        let file = write_json(&aggregator.anomalies, path)
            .with_context(|| format!("write {}", path.display()))?;
        outputs.push(WrittenOutput {
            label: "anomalies",
            file,
        });
    }

    Ok(outputs)
}

/// Run all three stages.
pub fn run_pipeline(config: &PipelineConfig) -> Result<RunResult> {
    check_projection(&config.projection)?;

    let ingest_span = info_span!("ingest", corpus = %config.corpus_dir.display());
    let ingest_start = Instant::now();
    let listing = ingest_span.in_scope(|| ingest(&config.corpus_dir))?;
    info!(
        file_count = listing.len(),
        xml_count = listing.xml_count,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let extract_span = info_span!("extract", file_count = listing.len());
    let extract_start = Instant::now();
    let ExtractResult {
        aggregator,
        parsed,
        skipped,
    } = extract_span.in_scope(|| extract(&listing))?;
    info!(
        parsed,
        skipped = skipped.len(),
        asset_count = aggregator.asset_count(),
        instantiation_count = aggregator.instantiation_count(),
        duration_ms = extract_start.elapsed().as_millis(),
        "extract complete"
    );

    let output_span = info_span!("output", output = %config.output.display());
    let output_start = Instant::now();
    let outputs = output_span.in_scope(|| output(config, &aggregator))?;
    info!(
        file_count = outputs.len(),
        row_count = aggregator.asset_count(),
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );

    Ok(RunResult {
        corpus_dir: config.corpus_dir.clone(),
        documents_seen: listing.len(),
        documents_parsed: parsed,
        skipped,
        asset_rows: aggregator.asset_count(),
        instantiation_rows: aggregator.instantiation_count(),
        outputs,
        anomalies: aggregator.anomalies,
    })
}
