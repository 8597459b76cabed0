//! Argument-driven variant: takes N as the first command-line argument.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use overrun_cli::init_logger;
use overrun_core::{clamp_count, parse_count, run, BufferConfig, LessonError};

/// Deliberately defective buffer demo, argument-driven variant.
#[derive(Parser)]
#[command(name = "overrun-args", version, about, allow_negative_numbers = true)]
struct Cli {
    /// Requested logical array length; parsed with C atoi rules, so
    /// non-numeric input becomes 0.
    count: Option<String>,
}

fn main() -> ExitCode {
    init_logger();
    if let Err(err) = demo(Cli::parse()) {
        log::error!("demo aborted: {err}");
    }
    // Always 0, including the missing-argument path.
    ExitCode::SUCCESS
}

fn demo(cli: Cli) -> Result<(), LessonError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(raw) = cli.count else {
        writeln!(
            out,
            "Not enough arguments. Needs one command-line argument (e.g. 5)."
        )?;
        return Ok(());
    };

    let config = BufferConfig::default();
    let parsed = parse_count(&raw);
    writeln!(out, "\nN is {parsed}")?;
    let count = clamp_count(parsed, config.capacity);

    let total = run(&config, count, &mut out)?;
    log::debug!("final sum {total}");
    Ok(())
}
