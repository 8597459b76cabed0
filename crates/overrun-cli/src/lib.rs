//! Front-end plumbing shared by the two demo binaries.
//!
//! The binaries differ only in how N is obtained (stdin prompt vs.
//! command-line argument); the logger setup, the banner, and the lesson
//! itself are shared.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::io::{self, BufRead, Write};

/// Initialize `env_logger` with an `info` default, honouring `RUST_LOG`.
///
/// Diagnostics go to stderr; the demo transcript itself is printed to
/// stdout unconditionally.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Print the classroom banner for the interactive variant.
///
/// Explains the refresher formula and tells the student how to trip
/// each of the two planted bugs under Miri.
pub fn print_banner(capacity: usize, out: &mut impl Write) -> io::Result<()> {
    let over = capacity + 1;
    writeln!(out)?;
    writeln!(out, "You will be asked for N, the size of an array.")?;
    writeln!(
        out,
        "The array will be populated with N values: 1, 2, 3, 4, ..., N"
    )?;
    writeln!(
        out,
        "The sum of all the numbers in the array will be computed."
    )?;
    writeln!(
        out,
        "It is used as a refresher for the formula: 1 + 2 + 3 + ... + (N-1) + N = (N*(N+1))/2"
    )?;
    writeln!(out)?;
    writeln!(out, "This program has 2 bugs in it.")?;
    writeln!(
        out,
        "If you give size {capacity} or smaller the Miri report will show one error: the buffer is never freed."
    )?;
    writeln!(
        out,
        "If you give size {over} or larger the 2nd bug will add out-of-bounds errors to the report."
    )?;
    writeln!(
        out,
        "Run it with {capacity} one time and with {over} another time. Run it first without Miri and then under Miri."
    )?;
    writeln!(out)
}

/// Prompt for N and read one raw line from `input`.
///
/// The line is returned unparsed; end-of-input yields an empty string,
/// which later parses to zero.
pub fn prompt_for_line(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<String> {
    write!(out, "Enter N: ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_both_bugs() {
        let mut out = Vec::new();
        print_banner(5, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("This program has 2 bugs in it."));
        assert!(text.contains("size 5 or smaller"));
        assert!(text.contains("size 6 or larger"));
    }

    #[test]
    fn prompt_returns_the_raw_line() {
        let mut input = io::Cursor::new(b"17\n".to_vec());
        let mut out = Vec::new();
        let line = prompt_for_line(&mut input, &mut out).unwrap();
        assert_eq!(line, "17\n");
        assert_eq!(String::from_utf8(out).unwrap(), "Enter N: ");
    }

    #[test]
    fn prompt_at_eof_yields_empty_line() {
        let mut input = io::Cursor::new(Vec::new());
        let mut out = Vec::new();
        let line = prompt_for_line(&mut input, &mut out).unwrap();
        assert_eq!(line, "");
    }
}
