// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/regexp-backtrack)

//! Single-shot matcher: `regexp <subject> <pattern>`.
//!
//! Exit status is 0 on a match, 1 on no match and 22 (`EINVAL`) for a
//! malformed pattern or bad arguments.

use std::process::ExitCode;

/// `EINVAL`
const EXIT_INVALID_INPUT: u8 = 22;

fn print_usage() {
    eprintln!(
        "\
Usage: regexp <subject> <pattern>
       regexp --dump <pattern>

Exit status: 0 match, 1 no match, 22 invalid pattern or arguments

Options:
  --dump      Print the compiled program, one instruction per line
  -h, --help  Print this help message"
    );
}

enum Command {
    Match { subject: String, pattern: String },
    Dump { pattern: String },
    Help,
}

fn parse_args(args: &[String]) -> Option<Command> {
    match args {
        [flag] if flag == "-h" || flag == "--help" => Some(Command::Help),
        [flag, pattern] if flag == "--dump" => Some(Command::Dump {
            pattern: pattern.clone(),
        }),
        [subject, pattern] => Some(Command::Match {
            subject: subject.clone(),
            pattern: pattern.clone(),
        }),
        _ => None,
    }
}

fn run_match(subject: &str, pattern: &str) -> ExitCode {
    match regexp::does_match(subject, pattern) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_INVALID_INPUT)
        }
    }
}

fn run_dump(pattern: &str) -> ExitCode {
    match regexp::compile(pattern) {
        Ok(program) => {
            for (idx, inst) in program.instructions.iter().enumerate() {
                let text = inst.to_string();
                println!("{idx:>4}  {text:<24} {inst:?}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_INVALID_INPUT)
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args) {
        Some(Command::Match { subject, pattern }) => run_match(&subject, &pattern),
        Some(Command::Dump { pattern }) => run_dump(&pattern),
        Some(Command::Help) => {
            print_usage();
            ExitCode::SUCCESS
        }
        None => {
            print_usage();
            ExitCode::from(EXIT_INVALID_INPUT)
        }
    }
}
