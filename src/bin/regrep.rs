// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/regexp-backtrack)

//! Line filter: `regrep <pattern> < input`.
//!
//! Prints every line of standard input that the pattern matches in full.
//! The pattern is compiled once before any input is read. Exit status is
//! 0 if at least one line matched, 1 if none did and 22 (`EINVAL`) for a
//! malformed pattern or bad arguments.

use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use regexp::{compile, execute_bytes, Program};

/// `EINVAL`
const EXIT_INVALID_INPUT: u8 = 22;

fn print_usage() {
    eprintln!(
        "\
Usage: regrep <pattern>

Reads lines from standard input and prints those matching <pattern>.

Exit status: 0 some line matched, 1 no line matched, 22 invalid pattern

Options:
  -h, --help  Print this help message"
    );
}

/// Strips a trailing `\n`, then a trailing `\r`.
fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Copies matching lines from `input` to `output`. Returns whether any
/// line matched.
fn filter_lines(
    program: &Program,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<bool> {
    let mut line = Vec::new();
    let mut any_matched = false;
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let subject = trim_line_end(&line);
        if execute_bytes(subject, program) {
            any_matched = true;
            output.write_all(subject)?;
            output.write_all(b"\n")?;
        }
    }
    output.flush()?;
    Ok(any_matched)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let pattern = match args.as_slice() {
        [flag] if flag == "-h" || flag == "--help" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        [pattern] => pattern,
        _ => {
            print_usage();
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    };

    let program = match compile(pattern) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match filter_lines(&program, stdin.lock(), BufWriter::new(stdout.lock())) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        // Downstream closed early (e.g. piped into `head`)
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
