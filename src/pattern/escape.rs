// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/regexp-backtrack)

//! Backslash escapes.
//!
//! ```text
//! \d  \D    digit [0-9] / not a digit
//! \w  \W    word [0-9A-Za-z_] / not a word byte
//! \s  \S    space [ \t\n\r\v\f] / not a space
//! \t \n \r \v \f   control bytes
//! \\ \. \* \+ \? \{ \} \[ \] \( \) \| \^ \$ \- \/ \"   the byte itself
//! ```
//!
//! All definitions are ASCII; bytes above 0x7F are never digits, word bytes
//! or spaces.

use crate::common::byte_set::ByteSet;

/// What an escape sequence stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// A single literal byte.
    Literal(u8),
    /// A predefined class, possibly negated.
    Class {
        /// Members of the positive class.
        set: ByteSet,
        /// True for the upper-case forms (`\D`, `\W`, `\S`).
        negated: bool,
    },
}

/// `[0-9]`
#[must_use]
pub fn digit() -> ByteSet {
    ByteSet::from_range(b'0', b'9')
}

/// `[0-9A-Za-z_]`
#[must_use]
pub fn word() -> ByteSet {
    let mut set = digit();
    set.union_with(&ByteSet::from_range(b'A', b'Z'));
    set.union_with(&ByteSet::from_range(b'a', b'z'));
    set.insert(b'_');
    set
}

/// `[ \t\n\r\v\f]`
#[must_use]
pub fn space() -> ByteSet {
    ByteSet::from_bytes(b" \t\n\r\x0B\x0C")
}

/// Resolves the byte following a backslash. Returns `None` for an
/// unknown escape.
#[must_use]
pub fn resolve(escaped: u8) -> Option<Escape> {
    let class = |set, negated| Some(Escape::Class { set, negated });
    match escaped {
        b'd' => class(digit(), false),
        b'D' => class(digit(), true),
        b'w' => class(word(), false),
        b'W' => class(word(), true),
        b's' => class(space(), false),
        b'S' => class(space(), true),
        b't' => Some(Escape::Literal(b'\t')),
        b'n' => Some(Escape::Literal(b'\n')),
        b'r' => Some(Escape::Literal(b'\r')),
        b'v' => Some(Escape::Literal(0x0B)),
        b'f' => Some(Escape::Literal(0x0C)),
        b'\\' | b'.' | b'*' | b'+' | b'?' | b'{' | b'}' | b'[' | b']' | b'(' | b')' | b'|'
        | b'^' | b'$' | b'-' | b'/' | b'"' => Some(Escape::Literal(escaped)),
        _ => None,
    }
}
