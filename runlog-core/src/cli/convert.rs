use crate::codec::{Format, read_log, read_log_as, write_log};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Log file to read
    pub input: PathBuf,

    /// File to write
    pub output: PathBuf,

    /// Format of the input; guessed from its extension when omitted
    #[arg(long)]
    pub from: Option<Format>,

    /// Format of the output; guessed from its extension when omitted
    #[arg(long)]
    pub to: Option<Format>,
}

/// Re-encodes a run log, e.g. from CBOR to MessagePack.
pub fn run(args: ConvertArgs) -> Result<()> {
    let table = match args.from {
        Some(format) => read_log_as(&args.input, format),
        None => read_log(&args.input),
    }?;

    let to = args
        .to
        .or_else(|| Format::from_path(&args.output))
        .unwrap_or_default();

    write_log(&args.output, &table, to)?;

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        format = %to,
        rows = table.len(),
        "Converted run log"
    );
    Ok(())
}
