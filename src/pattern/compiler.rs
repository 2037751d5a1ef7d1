// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/regexp-backtrack)

//! Single-pass, mode-driven compiler from pattern text to [`Program`].
//!
//! The pattern is scanned left to right exactly once. One [`Mode`] is active
//! at a time and decides which bytes are legal next:
//!
//! | Mode            | Entered on                 | Left on                    |
//! |-----------------|----------------------------|----------------------------|
//! | `Default`       | start, end of any atom     | `[`, `\`, `{`              |
//! | `InClass`       | `[`                        | `]`                        |
//! | `ClassEscape`   | `\` inside a class         | the next byte              |
//! | `Escape`        | `\` outside a class        | the next byte              |
//! | `OccurrenceMin` | `{` after an atom          | `,` or `}`                 |
//! | `OccurrenceMax` | `,` inside `{..}`          | `}`                        |
//!
//! Unquantified characters accumulate into a pending literal run that is
//! flushed as a single [`Instruction::Literal`]. Quantified atoms go through
//! [`Compiler::push_merged`], which keeps the program free of redundant
//! backtracking states.

use std::fmt;

use crate::common::bounds::{Bounds, UNBOUNDED};
use crate::common::byte_set::ByteSet;
use crate::pattern::escape::{self, Escape};
use crate::pattern::instruction::{Instruction, Program};

/// Which rule a malformed pattern broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// `*`, `+`, `?` or `{` with no atom before it (includes doubled
    /// quantifiers such as `a++`).
    DanglingQuantifier,
    /// `]` or `}` with nothing open.
    StrayCloser,
    /// `[` inside an open class.
    NestedClass,
    /// `[]` or `[^]`.
    EmptyClass,
    /// `^` inside a class anywhere but first.
    MisplacedCaret,
    /// `*` or `+` inside an open class.
    UnexpectedInClass,
    /// End of pattern inside `[...]`.
    UnterminatedClass,
    /// `^` or `$` outside a class.
    UnsupportedAnchor,
    /// `{}`
    EmptyOccurrence,
    /// A byte other than a digit, `,` or `}` inside `{..}`.
    InvalidOccurrence,
    /// End of pattern inside `{..}`.
    UnterminatedOccurrence,
    /// `{m,n}` with `m > n`.
    InvertedBounds,
    /// A count inside `{..}` too large to represent.
    NumberOverflow,
    /// `\` followed by a byte with no escape meaning.
    InvalidEscape,
    /// `\` as the last byte of the pattern.
    TrailingBackslash,
    /// Compiler consistency check failed. Never caused by user input.
    Internal,
}

/// Error returned when a pattern is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PatternSyntaxError {
    /// Rule that was broken.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Byte offset in the pattern where the error occurred.
    pub position: usize,
}

impl PatternSyntaxError {
    /// Creates an error.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for PatternSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pattern syntax error at position {}: {}",
            self.position, self.message
        )
    }
}

impl std::error::Error for PatternSyntaxError {}

/// Compiles a pattern string into a [`Program`].
///
/// Either the whole pattern is valid and a complete program is returned, or
/// an error is returned; nothing is silently truncated.
///
/// # Errors
///
/// Returns [`PatternSyntaxError`] if the pattern is malformed.
///
/// # Examples
///
/// ```
/// use regexp::pattern::compiler::compile;
///
/// let program = compile("a*a+b").unwrap();
/// assert_eq!(program.to_string(), "a+b");
/// assert!(compile("a++").is_err());
/// ```
pub fn compile(pattern: &str) -> Result<Program, PatternSyntaxError> {
    Compiler::new(pattern.as_bytes()).run()
}

/// Active scanning mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Default,
    InClass,
    ClassEscape,
    Escape,
    OccurrenceMin,
    OccurrenceMax,
}

/// Cursor state for one compile call.
struct Compiler<'a> {
    input: &'a [u8],
    /// Scan position.
    pos: usize,
    /// Start of the pending literal run `[run_start, pos)`.
    run_start: usize,
    mode: Mode,
    instructions: Vec<Instruction>,
    /// Position of the `[`, `{` or `\` that opened the current mode.
    open_at: usize,
    class_set: ByteSet,
    class_negated: bool,
    occurrence_min: Option<u32>,
    occurrence_max: Option<u32>,
}

impl<'a> Compiler<'a> {
    const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            run_start: 0,
            mode: Mode::Default,
            instructions: Vec::new(),
            open_at: 0,
            class_set: ByteSet::EMPTY,
            class_negated: false,
            occurrence_min: None,
            occurrence_max: None,
        }
    }

    fn run(mut self) -> Result<Program, PatternSyntaxError> {
        while self.pos < self.input.len() {
            let b = self.input[self.pos];
            match self.mode {
                Mode::Default => self.step_default(b)?,
                Mode::InClass => self.step_class(b)?,
                Mode::ClassEscape => self.step_class_escape(b)?,
                Mode::Escape => self.step_escape(b)?,
                Mode::OccurrenceMin => self.step_occurrence_min(b)?,
                Mode::OccurrenceMax => self.step_occurrence_max(b)?,
            }
            self.pos += 1;
        }
        self.finish()
    }

    fn finish(mut self) -> Result<Program, PatternSyntaxError> {
        match self.mode {
            Mode::Default => {
                self.flush_run(self.input.len());
                Ok(Program::new(self.instructions))
            }
            Mode::InClass => Err(self.error_at(
                ErrorKind::UnterminatedClass,
                "unterminated character class",
                self.open_at,
            )),
            Mode::ClassEscape | Mode::Escape => Err(self.error_at(
                ErrorKind::TrailingBackslash,
                "trailing backslash",
                self.input.len() - 1,
            )),
            Mode::OccurrenceMin | Mode::OccurrenceMax => Err(self.error_at(
                ErrorKind::UnterminatedOccurrence,
                "unterminated occurrence specifier",
                self.open_at,
            )),
        }
    }

    fn step_default(&mut self, b: u8) -> Result<(), PatternSyntaxError> {
        match b {
            b'[' => {
                self.flush_run(self.pos);
                self.open_at = self.pos;
                self.class_set = ByteSet::EMPTY;
                self.class_negated = false;
                self.run_start = self.pos + 1;
                self.mode = Mode::InClass;
            }
            b']' | b'}' => {
                return Err(self.error(
                    ErrorKind::StrayCloser,
                    format!("unmatched '{}'", char::from(b)),
                ));
            }
            b'^' | b'$' => {
                return Err(self.error(
                    ErrorKind::UnsupportedAnchor,
                    format!("anchor '{}' is not supported", char::from(b)),
                ));
            }
            b'\\' => {
                self.flush_run(self.pos);
                self.open_at = self.pos;
                self.mode = Mode::Escape;
            }
            b'*' | b'+' | b'?' | b'{' => self.quantify_previous(b)?,
            _ => {}
        }
        Ok(())
    }

    /// Handles a quantifier in `Default` mode: the byte right before it is
    /// the atom, everything earlier in the run is flushed as a literal.
    fn quantify_previous(&mut self, quantifier: u8) -> Result<(), PatternSyntaxError> {
        if self.run_start == self.pos {
            return Err(self.error(
                ErrorKind::DanglingQuantifier,
                format!("quantifier '{}' has nothing to quantify", char::from(quantifier)),
            ));
        }
        let atom_at = self.pos - 1;
        self.flush_run(atom_at);
        let atom = match self.input[atom_at] {
            b'.' => Instruction::Wildcard(Bounds::ONE),
            c => Instruction::Char(c, Bounds::ONE),
        };
        self.apply_quantifier(quantifier, atom);
        Ok(())
    }

    /// Attaches the quantifier at `pos` to `atom`. For `{` the atom is
    /// pushed tentatively with `{1,1}` and rewritten once `}` is reached.
    fn apply_quantifier(&mut self, quantifier: u8, atom: Instruction) {
        match Bounds::from_quantifier(quantifier) {
            Some(bounds) => {
                self.push_merged(with_bounds(atom, bounds));
                self.mode = Mode::Default;
            }
            None => {
                self.instructions.push(atom);
                self.open_at = self.pos;
                self.occurrence_min = None;
                self.occurrence_max = None;
                self.mode = Mode::OccurrenceMin;
            }
        }
        self.run_start = self.pos + 1;
    }

    /// Completes an atom ending at `pos` (`]` or an escape), consuming one
    /// quantifier of lookahead if present.
    fn finish_atom(&mut self, atom: Instruction) {
        match self.input.get(self.pos + 1).copied() {
            Some(q @ (b'*' | b'+' | b'?' | b'{')) => {
                self.pos += 1;
                self.apply_quantifier(q, atom);
            }
            _ => {
                self.push_merged(atom);
                self.mode = Mode::Default;
                self.run_start = self.pos + 1;
            }
        }
    }

    fn step_class(&mut self, b: u8) -> Result<(), PatternSyntaxError> {
        match b {
            b']' => {
                if self.class_set.is_empty() {
                    let shown = if self.class_negated { "[^]" } else { "[]" };
                    return Err(self.error_at(
                        ErrorKind::EmptyClass,
                        format!("empty character class '{shown}'"),
                        self.open_at,
                    ));
                }
                let atom = Instruction::Class {
                    set: self.class_set,
                    negated: self.class_negated,
                    bounds: Bounds::ONE,
                };
                self.finish_atom(atom);
            }
            b'^' if self.pos == self.open_at + 1 => self.class_negated = true,
            b'^' => {
                return Err(self.error(
                    ErrorKind::MisplacedCaret,
                    "'^' is only allowed first in a character class",
                ));
            }
            b'[' => {
                return Err(self.error(
                    ErrorKind::NestedClass,
                    "unexpected '[' inside character class",
                ));
            }
            b'*' | b'+' => {
                return Err(self.error(
                    ErrorKind::UnexpectedInClass,
                    format!("unexpected '{}' inside character class", char::from(b)),
                ));
            }
            b'\\' => self.mode = Mode::ClassEscape,
            _ => self.class_set.insert(b),
        }
        Ok(())
    }

    fn step_class_escape(&mut self, b: u8) -> Result<(), PatternSyntaxError> {
        match escape::resolve(b) {
            Some(Escape::Literal(c)) => self.class_set.insert(c),
            Some(Escape::Class {
                set,
                negated: false,
            }) => self.class_set.union_with(&set),
            Some(Escape::Class { negated: true, .. }) => {
                return Err(self.error_at(
                    ErrorKind::InvalidEscape,
                    format!(
                        "negated class '\\{}' is not allowed inside brackets",
                        char::from(b)
                    ),
                    self.pos - 1,
                ));
            }
            None => return Err(self.invalid_escape(b)),
        }
        self.mode = Mode::InClass;
        Ok(())
    }

    fn step_escape(&mut self, b: u8) -> Result<(), PatternSyntaxError> {
        let atom = match escape::resolve(b) {
            Some(Escape::Literal(c)) => Instruction::Char(c, Bounds::ONE),
            Some(Escape::Class { set, negated }) => Instruction::Class {
                set,
                negated,
                bounds: Bounds::ONE,
            },
            None => return Err(self.invalid_escape(b)),
        };
        self.finish_atom(atom);
        Ok(())
    }

    fn step_occurrence_min(&mut self, b: u8) -> Result<(), PatternSyntaxError> {
        match b {
            b'0'..=b'9' => self.occurrence_min = Some(self.accumulate(self.occurrence_min, b)?),
            b',' => {
                self.occurrence_max = None;
                self.mode = Mode::OccurrenceMax;
            }
            b'}' => match self.occurrence_min {
                Some(n) => self.close_occurrence(Bounds::exactly(n))?,
                None => {
                    return Err(self.error_at(
                        ErrorKind::EmptyOccurrence,
                        "empty occurrence specifier",
                        self.open_at,
                    ));
                }
            },
            _ => return Err(self.invalid_occurrence(b)),
        }
        Ok(())
    }

    fn step_occurrence_max(&mut self, b: u8) -> Result<(), PatternSyntaxError> {
        match b {
            b'0'..=b'9' => self.occurrence_max = Some(self.accumulate(self.occurrence_max, b)?),
            b'}' => {
                let min = self.occurrence_min.unwrap_or(0);
                let max = self.occurrence_max.unwrap_or(UNBOUNDED);
                let bounds = Bounds::new(min, max).ok_or_else(|| {
                    self.error_at(
                        ErrorKind::InvertedBounds,
                        format!("minimum {min} exceeds maximum {max}"),
                        self.open_at,
                    )
                })?;
                self.close_occurrence(bounds)?;
            }
            _ => return Err(self.invalid_occurrence(b)),
        }
        Ok(())
    }

    /// Appends a decimal digit to an occurrence count.
    fn accumulate(&self, acc: Option<u32>, digit: u8) -> Result<u32, PatternSyntaxError> {
        acc.unwrap_or(0)
            .checked_mul(10)
            .and_then(|n| n.checked_add(u32::from(digit - b'0')))
            .filter(|&n| n < UNBOUNDED)
            .ok_or_else(|| {
                self.error_at(
                    ErrorKind::NumberOverflow,
                    "occurrence count overflow",
                    self.open_at,
                )
            })
    }

    /// Writes the parsed `{..}` bounds into the tentatively pushed atom and
    /// re-pushes it through the merge rules.
    fn close_occurrence(&mut self, bounds: Bounds) -> Result<(), PatternSyntaxError> {
        let open_at = self.open_at;
        let slot = self
            .instructions
            .last_mut()
            .and_then(Instruction::bounds_mut)
            .ok_or_else(|| {
                PatternSyntaxError::new(
                    ErrorKind::Internal,
                    "occurrence specifier closed without a quantifiable atom",
                    open_at,
                )
            })?;
        *slot = bounds;
        if let Some(atom) = self.instructions.pop() {
            self.push_merged(atom);
        }
        self.mode = Mode::Default;
        self.run_start = self.pos + 1;
        Ok(())
    }

    /// Flushes the pending literal run `[run_start, end)`, if non-empty.
    fn flush_run(&mut self, end: usize) {
        if self.run_start < end {
            self.instructions
                .push(Instruction::Literal(self.input[self.run_start..end].to_vec()));
        }
        self.run_start = end;
    }

    /// Pushes a quantified atom, collapsing it into the tail of the program
    /// where that cannot change what the program matches:
    ///
    /// - an unbounded wildcard swallows every trailing instruction that
    ///   allows zero occurrences (`a*.*` is `.*`);
    /// - an atom that allows zero occurrences is absorbed by a preceding
    ///   unbounded wildcard (`.*a?` is `.*`);
    /// - repeats of the same atom add their bounds (`a*a+` is `a+`).
    fn push_merged(&mut self, atom: Instruction) {
        if atom.is_unbounded_wildcard() {
            while self
                .instructions
                .last()
                .is_some_and(Instruction::allows_empty)
            {
                self.instructions.pop();
            }
        }
        if let Some(last) = self.instructions.last_mut() {
            if last.is_unbounded_wildcard() && atom.allows_empty() {
                return;
            }
            if last.same_atom(&atom) {
                let merged = last
                    .bounds()
                    .zip(atom.bounds())
                    .and_then(|(prev, next)| prev.concat(next));
                if let (Some(merged), Some(slot)) = (merged, last.bounds_mut()) {
                    *slot = merged;
                    return;
                }
            }
        }
        self.instructions.push(atom);
    }

    fn invalid_escape(&self, b: u8) -> PatternSyntaxError {
        self.error_at(
            ErrorKind::InvalidEscape,
            format!("invalid escape '\\{}'", b.escape_ascii()),
            self.pos - 1,
        )
    }

    fn invalid_occurrence(&self, b: u8) -> PatternSyntaxError {
        self.error(
            ErrorKind::InvalidOccurrence,
            format!(
                "unexpected '{}' in occurrence specifier, expected digit, ',' or '}}'",
                b.escape_ascii()
            ),
        )
    }

    fn error(&self, kind: ErrorKind, message: impl Into<String>) -> PatternSyntaxError {
        self.error_at(kind, message, self.pos)
    }

    #[allow(clippy::unused_self)]
    fn error_at(
        &self,
        kind: ErrorKind,
        message: impl Into<String>,
        position: usize,
    ) -> PatternSyntaxError {
        PatternSyntaxError::new(kind, message, position)
    }
}

/// Returns `atom` with its bounds replaced.
fn with_bounds(mut atom: Instruction, bounds: Bounds) -> Instruction {
    if let Some(slot) = atom.bounds_mut() {
        *slot = bounds;
    }
    atom
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(text: &str) -> Instruction {
        Instruction::Literal(text.as_bytes().to_vec())
    }

    fn ch(c: u8, bounds: Bounds) -> Instruction {
        Instruction::Char(c, bounds)
    }

    fn any(bounds: Bounds) -> Instruction {
        Instruction::Wildcard(bounds)
    }

    fn class(members: &[u8], negated: bool, bounds: Bounds) -> Instruction {
        Instruction::Class {
            set: ByteSet::from_bytes(members),
            negated,
            bounds,
        }
    }

    fn bounds(min: u32, max: u32) -> Bounds {
        Bounds::new(min, max).unwrap()
    }

    fn steps(pattern: &str) -> Vec<Instruction> {
        compile(pattern).unwrap().instructions
    }

    fn kind(pattern: &str) -> ErrorKind {
        compile(pattern).unwrap_err().kind
    }

    // --- Default mode ---

    #[test]
    fn test_empty_pattern() {
        assert!(compile("").unwrap().is_empty());
    }

    #[test]
    fn test_literal_run() {
        assert_eq!(steps("aa"), vec![lit("aa")]);
    }

    #[test]
    fn test_dot_stays_in_literal_run() {
        assert_eq!(steps("a.c"), vec![lit("a.c")]);
    }

    #[test]
    fn test_quantifier_splits_run() {
        assert_eq!(steps("a.c*"), vec![lit("a."), ch(b'c', Bounds::ZERO_OR_MORE)]);
    }

    #[test]
    fn test_each_quantifier() {
        assert_eq!(steps("a*"), vec![ch(b'a', Bounds::ZERO_OR_MORE)]);
        assert_eq!(steps("a+"), vec![ch(b'a', Bounds::ONE_OR_MORE)]);
        assert_eq!(steps("a?"), vec![ch(b'a', Bounds::ZERO_OR_ONE)]);
        assert_eq!(steps("a{3}"), vec![ch(b'a', Bounds::exactly(3))]);
        assert_eq!(steps("a{3,}"), vec![ch(b'a', bounds(3, UNBOUNDED))]);
        assert_eq!(steps("a{,5}"), vec![ch(b'a', bounds(0, 5))]);
        assert_eq!(steps("a{2,5}"), vec![ch(b'a', bounds(2, 5))]);
        assert_eq!(steps("a{,}"), vec![ch(b'a', Bounds::ZERO_OR_MORE)]);
    }

    #[test]
    fn test_wildcard_quantifiers() {
        assert_eq!(steps(".*"), vec![any(Bounds::ZERO_OR_MORE)]);
        assert_eq!(steps(".+"), vec![any(Bounds::ONE_OR_MORE)]);
        assert_eq!(steps(".?"), vec![any(Bounds::ZERO_OR_ONE)]);
        assert_eq!(steps(".{2,3}"), vec![any(bounds(2, 3))]);
    }

    #[test]
    fn test_literal_after_quantifier() {
        assert_eq!(
            steps("ab*cd"),
            vec![lit("a"), ch(b'b', Bounds::ZERO_OR_MORE), lit("cd")]
        );
    }

    #[test]
    fn test_parentheses_and_bar_are_literal() {
        assert_eq!(steps("(a|b)"), vec![lit("(a|b)")]);
    }

    // --- Merge rules ---

    #[test]
    fn test_same_char_merges() {
        assert_eq!(
            steps("a*a+b+c*"),
            vec![
                ch(b'a', Bounds::ONE_OR_MORE),
                ch(b'b', Bounds::ONE_OR_MORE),
                ch(b'c', Bounds::ZERO_OR_MORE),
            ]
        );
        assert_eq!(steps("a*a*"), vec![ch(b'a', Bounds::ZERO_OR_MORE)]);
        assert_eq!(steps("a?a{2}"), vec![ch(b'a', bounds(2, 3))]);
    }

    #[test]
    fn test_wildcard_star_pops_optional_tail() {
        assert_eq!(
            steps("a*a+b+c*.*.+"),
            vec![
                ch(b'a', Bounds::ONE_OR_MORE),
                ch(b'b', Bounds::ONE_OR_MORE),
                any(Bounds::ONE_OR_MORE),
            ]
        );
        assert_eq!(steps("b*[ab]?.*"), vec![any(Bounds::ZERO_OR_MORE)]);
    }

    #[test]
    fn test_wildcard_star_keeps_required_tail() {
        assert_eq!(
            steps("xa+.*"),
            vec![lit("x"), ch(b'a', Bounds::ONE_OR_MORE), any(Bounds::ZERO_OR_MORE)]
        );
    }

    #[test]
    fn test_bounded_wildcard_does_not_pop() {
        assert_eq!(
            steps("a*.?"),
            vec![ch(b'a', Bounds::ZERO_OR_MORE), any(Bounds::ZERO_OR_ONE)]
        );
    }

    #[test]
    fn test_optional_atom_absorbed_by_wildcard_star() {
        assert_eq!(steps(".*a*"), vec![any(Bounds::ZERO_OR_MORE)]);
        assert_eq!(steps(".+[xy]?"), vec![any(Bounds::ONE_OR_MORE)]);
        assert_eq!(
            steps(".*a+"),
            vec![any(Bounds::ZERO_OR_MORE), ch(b'a', Bounds::ONE_OR_MORE)]
        );
    }

    #[test]
    fn test_wildcards_add_up() {
        assert_eq!(steps(".+.+.+.+"), vec![any(bounds(4, UNBOUNDED))]);
        assert_eq!(steps(".{2}.{3}"), vec![any(Bounds::exactly(5))]);
    }

    #[test]
    fn test_occurrence_wildcard_star_collapses_on_close() {
        assert_eq!(steps("a*.{0,}"), vec![any(Bounds::ZERO_OR_MORE)]);
    }

    #[test]
    fn test_identical_classes_merge() {
        assert_eq!(
            steps("[123]*[321]+"),
            vec![class(b"123", false, Bounds::ONE_OR_MORE)]
        );
        assert_eq!(
            steps("[ab][^ab]"),
            vec![
                class(b"ab", false, Bounds::ONE),
                class(b"ab", true, Bounds::ONE)
            ]
        );
    }

    #[test]
    fn test_merge_skipped_on_overflow() {
        let big = UNBOUNDED - 1;
        let pattern = format!("a{{{big}}}a");
        assert_eq!(
            steps(&pattern),
            vec![ch(b'a', Bounds::exactly(big)), lit("a")]
        );
        let pattern = format!("a{{{big}}}a{{1}}");
        assert_eq!(
            steps(&pattern),
            vec![ch(b'a', Bounds::exactly(big)), ch(b'a', Bounds::ONE)]
        );
    }

    // --- InClass mode ---

    #[test]
    fn test_class() {
        assert_eq!(steps("[abc]"), vec![class(b"abc", false, Bounds::ONE)]);
    }

    #[test]
    fn test_class_deduplicates() {
        assert_eq!(steps("[yxxz]*"), vec![class(b"xyz", false, Bounds::ZERO_OR_MORE)]);
    }

    #[test]
    fn test_negated_class_with_occurrence() {
        assert_eq!(steps("[^abc]{4,5}"), vec![class(b"abc", true, bounds(4, 5))]);
    }

    #[test]
    fn test_class_flushes_pending_run() {
        assert_eq!(
            steps("ab[cd]ef"),
            vec![lit("ab"), class(b"cd", false, Bounds::ONE), lit("ef")]
        );
    }

    #[test]
    fn test_class_members_are_literal() {
        assert_eq!(steps("[.?{}]"), vec![class(b".?{}", false, Bounds::ONE)]);
    }

    #[test]
    fn test_class_escapes() {
        let mut set = escape::digit();
        set.insert(b']');
        set.insert(b'-');
        assert_eq!(
            steps(r"[\d\]\-]"),
            vec![Instruction::Class {
                set,
                negated: false,
                bounds: Bounds::ONE
            }]
        );
    }

    // --- Escape mode ---

    #[test]
    fn test_escaped_metacharacter_is_char() {
        assert_eq!(
            steps(r"a\.b"),
            vec![lit("a"), ch(b'.', Bounds::ONE), lit("b")]
        );
        assert_eq!(steps(r"\*+"), vec![ch(b'*', Bounds::ONE_OR_MORE)]);
        assert_eq!(steps(r"\^\$"), vec![ch(b'^', Bounds::ONE), ch(b'$', Bounds::ONE)]);
    }

    #[test]
    fn test_control_escapes() {
        assert_eq!(steps(r"\t"), vec![ch(b'\t', Bounds::ONE)]);
        assert_eq!(steps(r"\\{2}"), vec![ch(b'\\', Bounds::exactly(2))]);
    }

    #[test]
    fn test_shorthand_escapes() {
        assert_eq!(
            steps(r"\d+"),
            vec![Instruction::Class {
                set: escape::digit(),
                negated: false,
                bounds: Bounds::ONE_OR_MORE
            }]
        );
        assert_eq!(
            steps(r"\S"),
            vec![Instruction::Class {
                set: escape::space(),
                negated: true,
                bounds: Bounds::ONE
            }]
        );
    }

    // --- Errors ---

    #[test]
    fn test_dangling_quantifiers() {
        for pattern in [
            "*", "+", "?", "{2}", "b**", "a++", "a*?", "a{2}*", "[abc]**", "[abc]++", "[abc]*+",
            "[abc]+*", r"\d**",
        ] {
            assert_eq!(kind(pattern), ErrorKind::DanglingQuantifier, "{pattern}");
        }
    }

    #[test]
    fn test_stray_closers() {
        assert_eq!(kind("]"), ErrorKind::StrayCloser);
        assert_eq!(kind("a}"), ErrorKind::StrayCloser);
    }

    #[test]
    fn test_class_errors() {
        assert_eq!(kind("["), ErrorKind::UnterminatedClass);
        assert_eq!(kind("[abc"), ErrorKind::UnterminatedClass);
        assert_eq!(kind("[]"), ErrorKind::EmptyClass);
        assert_eq!(kind("[^]"), ErrorKind::EmptyClass);
        assert_eq!(kind("[a^]"), ErrorKind::MisplacedCaret);
        assert_eq!(kind("[^^]"), ErrorKind::MisplacedCaret);
        assert_eq!(kind("[c["), ErrorKind::NestedClass);
        assert_eq!(kind("[c[d]]"), ErrorKind::NestedClass);
        assert_eq!(kind("[a*]"), ErrorKind::UnexpectedInClass);
        assert_eq!(kind("[b+]"), ErrorKind::UnexpectedInClass);
    }

    #[test]
    fn test_anchor_errors() {
        assert_eq!(kind("^a"), ErrorKind::UnsupportedAnchor);
        assert_eq!(kind("a$"), ErrorKind::UnsupportedAnchor);
    }

    #[test]
    fn test_occurrence_errors() {
        assert_eq!(kind("a{}"), ErrorKind::EmptyOccurrence);
        assert_eq!(kind("a{x}"), ErrorKind::InvalidOccurrence);
        assert_eq!(kind("a{1,x}"), ErrorKind::InvalidOccurrence);
        assert_eq!(kind("a{1 }"), ErrorKind::InvalidOccurrence);
        assert_eq!(kind("a{1"), ErrorKind::UnterminatedOccurrence);
        assert_eq!(kind("a{1,"), ErrorKind::UnterminatedOccurrence);
        assert_eq!(kind("[abc]{6,4}"), ErrorKind::InvertedBounds);
        assert_eq!(kind("a{99999999999}"), ErrorKind::NumberOverflow);
        assert_eq!(kind("a{4294967295}"), ErrorKind::NumberOverflow);
    }

    #[test]
    fn test_escape_errors() {
        assert_eq!(kind(r"\q"), ErrorKind::InvalidEscape);
        assert_eq!(kind(r"[\D]"), ErrorKind::InvalidEscape);
        assert_eq!(kind(r"[\q]"), ErrorKind::InvalidEscape);
        assert_eq!(kind("a\\"), ErrorKind::TrailingBackslash);
        assert_eq!(kind("[a\\"), ErrorKind::TrailingBackslash);
    }

    #[test]
    fn test_error_positions() {
        assert_eq!(compile("ab++").unwrap_err().position, 3);
        assert_eq!(compile("ab[cd").unwrap_err().position, 2);
        assert_eq!(compile("x{5,2}").unwrap_err().position, 1);
        assert_eq!(compile(r"ab\q").unwrap_err().position, 2);
    }

    #[test]
    fn test_error_messages() {
        let err = compile("*").unwrap_err();
        assert!(err.message.contains("nothing to quantify"));
        let err = compile("[]").unwrap_err();
        assert!(err.message.contains("empty character class"));
        let err = compile("a{6,4}").unwrap_err();
        assert!(err.message.contains("minimum 6 exceeds maximum 4"));
    }

    #[test]
    fn test_pattern_error_display() {
        let err = PatternSyntaxError::new(ErrorKind::StrayCloser, "test error", 5);
        assert_eq!(
            err.to_string(),
            "pattern syntax error at position 5: test error"
        );
    }

    #[test]
    fn test_pattern_error_is_std_error() {
        let err = PatternSyntaxError::new(ErrorKind::Internal, "test", 0);
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_close_occurrence_guards_last_instruction() {
        let mut compiler = Compiler::new(b"ab");
        compiler.instructions.push(lit("ab"));
        let err = compiler.close_occurrence(Bounds::ONE).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(compiler.instructions, vec![lit("ab")]);
    }
}
