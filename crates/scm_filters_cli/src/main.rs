use std::io::{self, Write};

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod errors;

use commands::{check_regex_cmd, filter_cmd, init_cmd, FilterArgs, InitArgs};
use errors::Error;

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// scm-filters: decide which discovered repositories a navigator keeps
#[derive(Parser)]
#[command(name = "scm-filters")]
#[command(about = "Apply repository filters to a discovered organization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a regular expression is valid
    CheckRegex {
        /// The regular expression to check
        value: String,
    },

    /// Print the repositories that pass the configured filters
    Filter(FilterArgs),

    /// Create a filter configuration with a project name filter
    Init(InitArgs),

    /// Show the CLI version
    Version,
}

/// Reports a command failure to the log and to `out`.
fn report_error(e: &Error, out: &mut impl Write) {
    error!("Error: {e}");
    // Nothing useful can be done if stderr itself is gone.
    let _ = writeln!(out, "Error: {e}");
}

/// Reports a command failure on stderr and in the log, then exits.
fn exit_with_error(e: &Error, code: i32) -> ! {
    report_error(e, &mut io::stderr());
    std::process::exit(code);
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_env("SCM_FILTERS_LOG"))
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Commands::CheckRegex { value } => match check_regex_cmd(value, &mut stdout) {
            Ok(true) => std::process::exit(0),
            Ok(false) => std::process::exit(1),
            Err(e) => exit_with_error(&e, 2),
        },
        Commands::Filter(args) => {
            if let Err(e) = filter_cmd(args, &mut stdout) {
                exit_with_error(&e, 1);
            }
        }
        Commands::Init(args) => {
            if let Err(e) = init_cmd(args, &mut stdout) {
                exit_with_error(&e, 1);
            }
        }
        Commands::Version => {
            println!("scm-filters version {}", env!("CARGO_PKG_VERSION"));
        }
    }
}
