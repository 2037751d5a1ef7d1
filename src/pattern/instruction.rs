// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/regexp-backtrack)

//! Compiled program representation.
//!
//! A [`Program`] is an ordered sequence of [`Instruction`]s, executed left
//! to right against the subject. Instructions are immutable once the
//! compiler hands the program out.

use std::fmt;

use crate::common::bounds::{Bounds, UNBOUNDED};
use crate::common::byte_set::ByteSet;

/// A single match instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// A run of one or more unquantified characters matched in sequence.
    /// A `.` inside the run matches any subject byte.
    Literal(Vec<u8>),
    /// A single literal byte repeated within `bounds`.
    Char(u8, Bounds),
    /// Any byte, repeated within `bounds`.
    Wildcard(Bounds),
    /// A bracket class. A byte matches iff `set.contains(byte) != negated`.
    Class {
        /// Class members.
        set: ByteSet,
        /// `[^...]`
        negated: bool,
        /// Repeat count of the whole class.
        bounds: Bounds,
    },
}

impl Instruction {
    /// Repeat bounds of a quantifiable instruction; `None` for `Literal`.
    #[must_use]
    pub const fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Literal(_) => None,
            Self::Char(_, bounds) | Self::Wildcard(bounds) | Self::Class { bounds, .. } => {
                Some(*bounds)
            }
        }
    }

    /// Mutable access to the bounds of a quantifiable instruction.
    pub fn bounds_mut(&mut self) -> Option<&mut Bounds> {
        match self {
            Self::Literal(_) => None,
            Self::Char(_, bounds) | Self::Wildcard(bounds) | Self::Class { bounds, .. } => {
                Some(bounds)
            }
        }
    }

    /// Fewest subject bytes this instruction can consume.
    #[must_use]
    pub fn min_len(&self) -> usize {
        match self {
            Self::Literal(text) => text.len(),
            Self::Char(_, bounds) | Self::Wildcard(bounds) | Self::Class { bounds, .. } => {
                bounds.min as usize
            }
        }
    }

    /// Most subject bytes this instruction can consume, `None` if unbounded.
    #[must_use]
    pub fn max_len(&self) -> Option<usize> {
        match self {
            Self::Literal(text) => Some(text.len()),
            Self::Char(_, bounds) | Self::Wildcard(bounds) | Self::Class { bounds, .. } => {
                (!bounds.is_unbounded()).then_some(bounds.max as usize)
            }
        }
    }

    /// True if the instruction can succeed without consuming anything.
    #[must_use]
    pub fn allows_empty(&self) -> bool {
        self.bounds().is_some_and(Bounds::allows_zero)
    }

    /// True for a wildcard with no upper limit (`.*`, `.+`, `.{m,}`).
    #[must_use]
    pub const fn is_unbounded_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard(b) if b.max == UNBOUNDED)
    }

    /// True if `self` and `other` repeat the same atom (bounds ignored).
    #[must_use]
    pub fn same_atom(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Char(a, _), Self::Char(b, _)) => a == b,
            (Self::Wildcard(_), Self::Wildcard(_)) => true,
            (
                Self::Class {
                    set: s1,
                    negated: n1,
                    ..
                },
                Self::Class {
                    set: s2,
                    negated: n2,
                    ..
                },
            ) => s1 == s2 && n1 == n2,
            _ => false,
        }
    }
}

impl fmt::Display for Instruction {
    /// Renders the instruction as equivalent pattern text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => {
                for &b in text {
                    if b == b'.' {
                        f.write_str(".")?;
                    } else {
                        write_escaped(f, b)?;
                    }
                }
                Ok(())
            }
            Self::Char(c, bounds) => {
                write_escaped(f, *c)?;
                write!(f, "{bounds}")
            }
            Self::Wildcard(bounds) => write!(f, ".{bounds}"),
            Self::Class {
                set,
                negated,
                bounds,
            } => {
                f.write_str(if *negated { "[^" } else { "[" })?;
                for b in set.iter() {
                    write_class_member(f, b)?;
                }
                write!(f, "]{bounds}")
            }
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, b: u8) -> fmt::Result {
    match b {
        b'.' | b'*' | b'+' | b'?' | b'{' | b'}' | b'[' | b']' | b'^' | b'$' | b'\\' => {
            write!(f, "\\{}", char::from(b))
        }
        _ => write_control(f, b),
    }
}

fn write_class_member(f: &mut fmt::Formatter<'_>, b: u8) -> fmt::Result {
    match b {
        b'[' | b']' | b'^' | b'*' | b'+' | b'\\' => write!(f, "\\{}", char::from(b)),
        _ => write_control(f, b),
    }
}

fn write_control(f: &mut fmt::Formatter<'_>, b: u8) -> fmt::Result {
    match b {
        b'\t' => f.write_str("\\t"),
        b'\n' => f.write_str("\\n"),
        b'\r' => f.write_str("\\r"),
        0x0B => f.write_str("\\v"),
        0x0C => f.write_str("\\f"),
        _ => write!(f, "{}", char::from(b)),
    }
}

/// A compiled pattern ready for execution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct Program {
    /// Ordered instructions the subject must match.
    pub instructions: Vec<Instruction>,
}

impl Program {
    /// Wraps an instruction sequence.
    #[must_use]
    pub const fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Number of instructions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// True if the program has no instructions (compiled from `""`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Shortest subject the program can match.
    #[must_use]
    pub fn min_len(&self) -> usize {
        self.instructions
            .iter()
            .map(Instruction::min_len)
            .fold(0, usize::saturating_add)
    }

    /// Longest subject the program can match, `None` if unbounded.
    #[must_use]
    pub fn max_len(&self) -> Option<usize> {
        self.instructions
            .iter()
            .try_fold(0usize, |acc, inst| acc.checked_add(inst.max_len()?))
    }

    /// Index of the first instruction from which every remaining
    /// instruction allows zero occurrences. Equals `len()` if the last
    /// instruction requires input (or the program is empty).
    #[must_use]
    pub fn nullable_tail_start(&self) -> usize {
        self.instructions
            .iter()
            .rposition(|inst| !inst.allows_empty())
            .map_or(0, |idx| idx + 1)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for inst in &self.instructions {
            write!(f, "{inst}")?;
        }
        Ok(())
    }
}
