use std::path::PathBuf;

use pbcore_model::CorpusAnomalies;
use pbcore_output::WrittenFile;

#[derive(Debug)]
pub struct RunResult {
    pub corpus_dir: PathBuf,
    /// Regular files found in the corpus directory.
    pub documents_seen: usize,
    pub documents_parsed: usize,
    pub skipped: Vec<SkippedFile>,
    pub asset_rows: usize,
    pub instantiation_rows: usize,
    pub outputs: Vec<WrittenOutput>,
    pub anomalies: CorpusAnomalies,
}

#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub kind: &'static str,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct WrittenOutput {
    pub label: &'static str,
    pub file: WrittenFile,
}
