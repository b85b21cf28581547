use crate::cli::input::{InputArgs, PipelineArgs};
use crate::cli::output::{OutputFormat, dump_json, dump_yaml, emit, render_table};
use crate::conf::PipelineConfig;
use crate::discover::read_experiment_dir;
use crate::normalize::normalize_tables;
use crate::stats::{Metric, SummaryTable, metric_statistics, summarize};
use crate::table::Table;
use anyhow::{Context, Result, bail};
use clap::Args;
use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::io::{self, IsTerminal};
use tracing::{info, warn};

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Metric to summarize: `best_fx` or `diversity`
    #[arg(short, long)]
    pub metric: Option<Metric>,

    /// Summarize an arbitrary numeric column instead of a metric
    #[arg(long, conflicts_with = "metric")]
    pub value: Option<String>,

    /// Aggregate the raw rows without densifying runs first
    #[arg(long)]
    pub no_fill: bool,

    /// Treat every subdirectory of the given directories as one experiment
    #[arg(long)]
    pub experiments: bool,

    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

pub fn run(args: SummarizeArgs) -> Result<()> {
    let config = args
        .pipeline
        .resolve_summary(args.metric, args.value.as_deref(), args.no_fill)?;

    if args.experiments {
        let summaries = summarize_experiments(&args.input, &config)?;
        return emit_experiments(&summaries, args.output);
    }

    let tables: Vec<Table> = args
        .input
        .load(&config)?
        .into_iter()
        .map(|(_, table)| table)
        .collect();
    if tables.is_empty() {
        bail!("No run logs found");
    }

    let summary = summarize_tables(&tables, &config)?;
    emit(&summary, &summary.to_table()?, args.output)
}

/// Runs the full pipeline over the logs of one experiment.
pub fn summarize_tables(tables: &[Table], config: &PipelineConfig) -> Result<SummaryTable> {
    let table = if config.fill {
        normalize_tables(tables, &config.counter)?
    } else {
        Table::concat(tables)
    };

    let summary = match &config.value {
        Some(value) => summarize(&table, &config.counter, value),
        None => metric_statistics(&table, &config.counter, config.metric),
    }
    .context("Failed to compute summary statistics")?;

    info!(
        logs = tables.len(),
        rows = table.len(),
        groups = summary.len(),
        "Summarized run logs"
    );
    Ok(summary)
}

fn summarize_experiments(
    input: &InputArgs,
    config: &PipelineConfig,
) -> Result<BTreeMap<String, SummaryTable>> {
    let mut summaries = BTreeMap::new();

    for root in &input.paths {
        let experiments = read_experiment_dir(root, &config.extension)
            .with_context(|| format!("Failed to read experiments in {}", root.display()))?;

        for (name, logs) in experiments {
            if logs.is_empty() {
                warn!(experiment = %name, "Skipping experiment without run logs");
                continue;
            }
            let tables: Vec<Table> = logs.into_values().collect();
            let summary = summarize_tables(&tables, config)
                .with_context(|| format!("Failed to summarize experiment {name}"))?;
            summaries.insert(name, summary);
        }
    }

    if summaries.is_empty() {
        bail!("No experiments with run logs found");
    }
    Ok(summaries)
}

fn emit_experiments(
    summaries: &BTreeMap<String, SummaryTable>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => dump_json(summaries),
        OutputFormat::Yaml => dump_yaml(summaries),
        OutputFormat::Text => {
            let color = io::stdout().is_terminal();
            for (i, (name, summary)) in summaries.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                if color {
                    println!("{}", name.underline());
                } else {
                    println!("{name}");
                }
                print!("{}", render_table(&summary.to_table()?, color));
            }
            Ok(())
        }
    }
}
