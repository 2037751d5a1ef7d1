// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/regexp-backtrack)

//! # `regexp`: Small Backtracking Regular-Expression Engine
//!
//! Compiles a pattern into an ordered program of match instructions and runs
//! it against a subject with a greedy-but-yielding backtracking search.
//!
//! ## Components
//!
//! | Component | Entry point | Description |
//! |-----------|-------------|-------------|
//! | Compiler | [`compile`] | Pattern text → [`Program`], or [`PatternSyntaxError`] |
//! | Executor | [`execute`] | Program + subject → whole-subject match |
//! | One-shot | [`does_match`] | Both of the above |
//!
//! Characters are single bytes. Both functions are pure: no state survives a
//! call, so they can be used from any number of threads at once.
//!
//! ```
//! assert!(regexp::does_match("aabc", "a*a+b+c*").unwrap());
//! assert!(!regexp::does_match("aa", "a").unwrap());
//! assert!(regexp::does_match("x", "[").is_err());
//! ```

pub mod common;
pub mod pattern;

pub use common::bounds::{Bounds, UNBOUNDED};
pub use common::byte_set::ByteSet;
pub use pattern::compiler::{compile, ErrorKind, PatternSyntaxError};
pub use pattern::executor::{execute, execute_bytes};
pub use pattern::instruction::{Instruction, Program};

/// Returns true if `pattern` matches the whole of `subject`.
///
/// The pattern is compiled on every call; compile once with [`compile`] and
/// call [`execute`] to match many subjects against one pattern.
///
/// # Errors
///
/// Returns [`PatternSyntaxError`] if the pattern is malformed. A
/// well-formed pattern always yields `Ok(true)` or `Ok(false)`.
pub fn does_match(subject: &str, pattern: &str) -> Result<bool, PatternSyntaxError> {
    let program = compile(pattern)?;
    Ok(execute(subject, &program))
}
