//! CLI entry point for hypernet.
//!
//! Parses command-line arguments with clap, runs one query against the
//! loaded WordNet, renders the report to stdout, and maps errors to exit
//! codes. Logging is initialised first so loading and validation can emit
//! structured diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use hypernet_cli::{
    cli::{Cli, CliError, render_report, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, render the report, and flush the
/// output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let report = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_report(&report, &mut writer).context("failed to render report")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let wordnet_error = err
            .downcast_ref::<CliError>()
            .and_then(CliError::wordnet_error);
        let code = wordnet_error.map(|core| field::display(core.code().as_str()));
        let graph_code = wordnet_error
            .and_then(|core| core.graph_code())
            .map(|code| field::display(code.as_str()));
        let message = format!("{err:#}");

        error!(
            error = %message,
            code,
            graph_code,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
