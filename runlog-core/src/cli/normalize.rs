use crate::cli::input::{InputArgs, PipelineArgs};
use crate::cli::output::{OutputFormat, emit};
use crate::normalize::normalize_tables;
use crate::table::Table;
use anyhow::{Context, Result, bail};
use clap::Args;

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

/// Prints the densified, forward-filled runs of all inputs as one table.
pub fn run(args: NormalizeArgs) -> Result<()> {
    let config = args.pipeline.resolve()?;

    let tables: Vec<Table> = args
        .input
        .load(&config)?
        .into_iter()
        .map(|(_, table)| table)
        .collect();
    if tables.is_empty() {
        bail!("No run logs found");
    }

    let normalized = normalize_tables(&tables, &config.counter)
        .with_context(|| format!("Failed to normalize runs on '{}'", config.counter))?;

    emit(&normalized, &normalized, args.output)
}
