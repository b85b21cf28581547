use clap::{Parser, Subcommand};
use runlog_core::cli::{convert, dump, normalize, summarize};
use runlog_core::logging::{LogStyle, default_log_style, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "runlog",
    version,
    about = "runlog: aggregate and summarize experiment run logs"
)]
struct Cli {
    /// Emit diagnostics as JSON lines instead of compact text
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summary statistics per counter value across runs
    Summarize(summarize::SummarizeArgs),

    /// Densify and forward-fill runs against a shared counter grid
    Normalize(normalize::NormalizeArgs),

    /// Decode one log file and print its table
    Dump(dump::DumpArgs),

    /// Re-encode a log file between CBOR and MessagePack
    Convert(convert::ConvertArgs),
}

fn main() {
    let cli = Cli::parse();

    let style = if cli.log_json {
        LogStyle::Json
    } else {
        default_log_style()
    };
    init_logging(style);

    let result = match cli.command {
        Command::Summarize(args) => summarize::run(args),
        Command::Normalize(args) => normalize::run(args),
        Command::Dump(args) => dump::run(args),
        Command::Convert(args) => convert::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
