use anyhow::Result;
use tracing::info_span;

use pbcore_cli::pipeline::{PipelineConfig, run_pipeline};
use pbcore_cli::types::RunResult;
use pbcore_model::Projection;

use crate::cli::Cli;

pub fn run(cli: &Cli) -> Result<RunResult> {
    let config = pipeline_config(cli);
    let run_span = info_span!("run", corpus = %config.corpus_dir.display());
    let _run_guard = run_span.enter();
    run_pipeline(&config)
}

fn pipeline_config(cli: &Cli) -> PipelineConfig {
    let projection = match (&cli.columns, cli.all_columns) {
        (Some(list), _) => Projection::from_list(list),
        (None, true) => Projection::All,
        (None, false) => Projection::Default,
    };
    PipelineConfig {
        projection,
        instantiations: cli.instantiations.clone(),
        joined: cli.joined.clone(),
        anomalies: cli.anomalies.clone(),
        ..PipelineConfig::new(&cli.corpus_dir, &cli.output)
    }
}
