mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_categories, run_extract};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Extract {
            document,
            variables,
            corrections,
            categories,
            format,
            output,
        } => run_extract(
            args.config,
            args.verbose,
            document,
            variables,
            corrections,
            categories,
            format,
            output,
        ),
        Commands::Categories { format } => run_categories(format),
    }
}

/// Logs go to stderr so stdout carries only the JSON payload.
/// `DTX_LOG` (or `RUST_LOG`) overrides the level; `--verbose` defaults it to debug.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "dtx_lib=debug,dtx=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("DTX_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
