//! aiprompt: prompt assembly for an LLM-driven coding agent.
//!
//! This is the main entry point for the `aiprompt` CLI. It sets up logging,
//! parses arguments, dispatches to the command handler, and maps errors to
//! exit codes.

use aiprompt::cli::Cli;
use aiprompt::{commands, exit_codes};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Log to stderr so prompts on stdout stay clean. `RUST_LOG` overrides the
/// default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
