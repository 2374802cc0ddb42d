//! CSV and JSON serialization.
//!
//! Each output is serialized fully in memory and then written to disk in
//! one step, so a failed run never leaves a half-written CSV behind.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{OutputError, Result};
use crate::hash::sha256_hex;
use crate::table::Table;

/// A file written by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    /// Data rows (header excluded); zero for JSON reports.
    pub rows: usize,
    pub sha256: String,
}

/// Serialize a table as CSV: header row, one line per row, no index column.
pub fn table_to_csv(table: &Table, path: &Path) -> Result<Vec<u8>> {
    let csv_error = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(&table.columns).map_err(csv_error)?;
    for row in &table.rows {
        writer.write_record(row).map_err(csv_error)?;
    }
    writer
        .into_inner()
        .map_err(|error| OutputError::Write {
            path: path.to_path_buf(),
            source: error.into_error(),
        })
}

/// Write a table to `path` as CSV.
pub fn write_csv(table: &Table, path: &Path) -> Result<WrittenFile> {
    let bytes = table_to_csv(table, path)?;
    write_bytes(path, &bytes)?;
    debug!(
        table = %table.name,
        path = %path.display(),
        row_count = table.row_count(),
        "csv written"
    );
    Ok(WrittenFile {
        path: path.to_path_buf(),
        rows: table.row_count(),
        sha256: sha256_hex(&bytes),
    })
}

/// Write any serializable report as pretty JSON.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<WrittenFile> {
    let mut bytes = serde_json::to_vec_pretty(value).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    bytes.push(b'\n');
    write_bytes(path, &bytes)?;
    Ok(WrittenFile {
        path: path.to_path_buf(),
        rows: 0,
        sha256: sha256_hex(&bytes),
    })
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, bytes).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table {
            name: "assets".into(),
            columns: vec!["asset_id".into(), "consolidated_title".into()],
            rows: vec![
                vec!["a".into(), "Civil War: No. 3: Shiloh".into()],
                vec!["b".into(), "Says \"hi\", twice\nthen stops".into()],
                vec!["c".into(), String::new()],
            ],
        }
    }

    #[test]
    fn csv_quotes_separators_and_newlines() {
        let bytes = table_to_csv(&table(), Path::new("assets.csv")).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        insta::assert_snapshot!(text, @r#"
        asset_id,consolidated_title
        a,Civil War: No. 3: Shiloh
        b,"Says ""hi"", twice
        then stops"
        c,
        "#);
    }

    #[test]
    fn header_only_for_empty_table() {
        let empty = Table {
            rows: vec![],
            ..table()
        };
        let bytes = table_to_csv(&empty, Path::new("assets.csv")).unwrap();
        assert_eq!(bytes, b"asset_id,consolidated_title\n");
    }

    #[test]
    fn write_creates_parent_and_reports_digest() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("assets.csv");
        let written = write_csv(&table(), &path).unwrap();
        assert_eq!(written.rows, 3);
        let on_disk = fs::read(&path).unwrap();
        assert_eq!(written.sha256, sha256_hex(&on_disk));
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let error = write_csv(&table(), &blocker.join("assets.csv")).unwrap_err();
        assert!(matches!(
            error,
            OutputError::CreateDir { .. } | OutputError::Write { .. }
        ));
    }
}
