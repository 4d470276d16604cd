#![forbid(unsafe_code)]

mod cmd;
mod output;
mod record;

use clap::{Parser, Subcommand};
use output::OutputMode;
use std::env;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "nullable: tri-state JSON field samples and inspection",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format for reports.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Print sample records as JSON",
        long_about = "Print sample records whose tri-state fields are set, absent, or null.\n\
                      Absent fields are omitted from the output.",
        after_help = "EXAMPLES:\n    # Indented output\n    nullable sample\n\n    # Pin the current time\n    nullable sample --compact --at 2022-01-01T12:00:00Z"
    )]
    Sample(cmd::sample::SampleArgs),

    #[command(
        about = "Report the state of each tri-state field",
        long_about = "Decode a JSON array of records (or one record) and report whether each\n\
                      field was absent, explicitly null, or set.",
        after_help = "EXAMPLES:\n    # Inspect a file\n    nullable inspect people.json\n\n    # Inspect stdin as JSON\n    nullable sample | nullable inspect --format json"
    )]
    Inspect(cmd::inspect::InspectArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("NULLABLE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "nullable=debug,info"
        } else {
            "nullable=info,warn"
        })
    });

    let format = env::var("NULLABLE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Sample(ref args) => cmd::sample::run_sample(args, &mut out)?,
        Commands::Inspect(ref args) => {
            let mode = output::resolve_output_mode(cli.format, cli.json);
            cmd::inspect::run_inspect(args, mode, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
