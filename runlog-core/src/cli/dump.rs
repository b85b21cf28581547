use crate::cli::output::{OutputFormat, emit};
use crate::codec::{Format, read_log, read_log_as};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Log file to decode
    pub path: PathBuf,

    /// Container format; guessed from the extension when omitted
    #[arg(long)]
    pub format: Option<Format>,

    /// Print only the column names
    #[arg(long)]
    pub columns: bool,

    #[arg(short, long, default_value = "json")]
    pub output: OutputFormat,
}

pub fn run(args: DumpArgs) -> Result<()> {
    let table = match args.format {
        Some(format) => read_log_as(&args.path, format),
        None => read_log(&args.path),
    }?;

    if args.columns {
        for column in table.columns() {
            println!("{column}");
        }
        return Ok(());
    }

    emit(&table, &table, args.output)
}
