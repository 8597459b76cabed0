//! Interactive variant: asks for N on standard input.

use std::io;
use std::process::ExitCode;

use overrun_cli::{init_logger, print_banner, prompt_for_line};
use overrun_core::{clamp_count, parse_count, run, BufferConfig, LessonError};

fn main() -> ExitCode {
    init_logger();
    if let Err(err) = demo() {
        log::error!("demo aborted: {err}");
    }
    // The classroom script always exits 0, even when the transcript
    // cannot be written.
    ExitCode::SUCCESS
}

fn demo() -> Result<(), LessonError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let config = BufferConfig::default();
    print_banner(config.capacity, &mut out)?;

    let line = prompt_for_line(&mut stdin.lock(), &mut out)?;
    let count = clamp_count(parse_count(&line), config.capacity);

    let total = run(&config, count, &mut out)?;
    log::debug!("final sum {total}");
    Ok(())
}
