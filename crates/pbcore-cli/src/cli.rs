//! CLI argument definitions for the PBCore table extractor.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pbcore-tables",
    version,
    about = "Extract PBCore XML records into asset and instantiation CSV tables",
    long_about = "Extract a directory of PBCore description documents into flat tables.\n\n\
                  Writes one asset row per document, optionally an instantiation table,\n\
                  the asset/instantiation join view, and a JSON anomaly report."
)]
pub struct Cli {
    /// Directory containing PBCore XML files (not searched recursively).
    #[arg(value_name = "DIR")]
    pub corpus_dir: PathBuf,

    /// Destination CSV for the asset table.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Write every asset column instead of the default selection.
    #[arg(long = "all-columns", conflicts_with = "columns")]
    pub all_columns: bool,

    /// Comma-separated asset columns to write, in order.
    #[arg(long = "columns", value_name = "LIST")]
    pub columns: Option<String>,

    /// Also write the instantiation table to PATH.
    #[arg(long = "instantiations", value_name = "PATH")]
    pub instantiations: Option<PathBuf>,

    /// Also write the asset/instantiation left join to PATH.
    #[arg(long = "joined", value_name = "PATH")]
    pub joined: Option<PathBuf>,

    /// Also write corpus anomalies as JSON to PATH.
    #[arg(long = "anomalies", value_name = "PATH")]
    pub anomalies: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positionals_are_required() {
        let error = Cli::try_parse_from(["pbcore-tables", "corpus"]).err().unwrap();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn all_columns_conflicts_with_columns() {
        let error = Cli::try_parse_from([
            "pbcore-tables",
            "corpus",
            "out.csv",
            "--all-columns",
            "--columns",
            "asset_id",
        ])
        .err()
        .unwrap();
        assert_eq!(error.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn optional_outputs_parse() {
        let cli = Cli::try_parse_from([
            "pbcore-tables",
            "corpus",
            "out.csv",
            "--instantiations",
            "inst.csv",
            "--anomalies",
            "anomalies.json",
        ])
        .unwrap();
        assert_eq!(cli.instantiations, Some(PathBuf::from("inst.csv")));
        assert!(cli.joined.is_none());
        assert!(!cli.all_columns);
    }
}
