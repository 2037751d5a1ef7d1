// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/regexp-backtrack)

//! Pattern compilation and matching.
//!
//! # Pattern Syntax
//!
//! ```text
//! c         — Match the byte c literally
//! .         — Match any single byte
//! [abc]     — Match one byte from the set
//! [^abc]    — Match one byte not in the set
//! \d \w \s  — Digit, word and space classes (\D \W \S negate)
//! \t \n ... — Control bytes; \. \* \[ ... match the metacharacter itself
//! x*        — Zero or more of the preceding atom
//! x+        — One or more
//! x?        — Zero or one
//! x{m}      — Exactly m
//! x{m,}     — At least m
//! x{,n}     — At most n
//! x{m,n}    — Between m and n inclusive
//! ```
//!
//! A quantifier applies to exactly one atom: a byte, `.`, a bracket class
//! or an escape. Matching is always against the whole subject; there are no
//! anchors, groups or alternation.

pub mod compiler;
pub mod escape;
pub mod executor;
pub mod instruction;
