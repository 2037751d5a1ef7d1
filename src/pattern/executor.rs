// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/regexp-backtrack)

//! Backtracking executor for compiled programs.
//!
//! Matching is whole-subject: the program must consume every byte. The
//! subject may run out before the program does, in which case the match
//! still succeeds if every remaining instruction allows zero occurrences.

use crate::common::bounds::Bounds;
use crate::pattern::instruction::{Instruction, Program};

/// Returns true if `program` matches the whole of `subject`.
///
/// # Examples
///
/// ```
/// use regexp::pattern::compiler::compile;
/// use regexp::pattern::executor::execute;
///
/// let program = compile("[abc]{2}").unwrap();
/// assert!(execute("ab", &program));
/// assert!(!execute("abc", &program));
/// ```
pub fn execute(subject: &str, program: &Program) -> bool {
    execute_bytes(subject.as_bytes(), program)
}

/// Byte-slice form of [`execute`]. Every byte is one character.
///
/// # Algorithm
///
/// First tries the cheap shapes:
///
/// - **Empty program**: matches only the empty subject.
/// - **Single literal**: one windowed comparison.
/// - **Length out of range**: subjects shorter than the program's minimum
///   length, or longer than its finite maximum, cannot match.
///
/// Everything else runs the backtracking search. The search produces the
/// same result as the shapes above; they only skip the state stack.
pub fn execute_bytes(subject: &[u8], program: &Program) -> bool {
    match classify_program(program) {
        ProgramShape::Empty => return subject.is_empty(),
        ProgramShape::SingleLiteral(text) => {
            return subject.len() == text.len() && literal_matches_at(subject, 0, text);
        }
        ProgramShape::Backtracking => {}
    }

    if subject.len() < program.min_len()
        || program.max_len().is_some_and(|max| subject.len() > max)
    {
        return false;
    }

    backtrack(subject, program)
}

/// Program shape classification for fast-path dispatch.
enum ProgramShape<'a> {
    /// No instructions at all (compiled from `""`).
    Empty,
    /// One `Literal` and nothing else.
    SingleLiteral(&'a [u8]),
    /// Needs the full search.
    Backtracking,
}

fn classify_program(program: &Program) -> ProgramShape<'_> {
    match program.instructions.as_slice() {
        [] => ProgramShape::Empty,
        [Instruction::Literal(text)] => ProgramShape::SingleLiteral(text),
        _ => ProgramShape::Backtracking,
    }
}

/// State of one pending alternative.
///
/// Two `usize` cursors with `Copy` semantics; the search stack holds
/// nothing else.
#[derive(Debug, Clone, Copy)]
struct MatchState {
    /// Current position in the subject.
    subject_idx: usize,
    /// Current position in the program.
    step_idx: usize,
}

/// Depth-first search over `(subject_idx, step_idx)` states.
///
/// Uses an explicit LIFO stack instead of recursion, so long subjects
/// cannot overflow the call stack. Alternatives are pushed in reverse
/// preference order: the continuation using the fewest extra repetitions
/// is pushed last and therefore explored first.
fn backtrack(subject: &[u8], program: &Program) -> bool {
    let instructions = program.instructions.as_slice();
    let nullable_tail = program.nullable_tail_start();
    let mut states = Vec::with_capacity(instructions.len() * 2);
    states.push(MatchState {
        subject_idx: 0,
        step_idx: 0,
    });

    while let Some(state) = states.pop() {
        // Subject exhausted: the rest of the program must allow zero occurrences
        if state.subject_idx == subject.len() {
            if state.step_idx >= nullable_tail {
                return true;
            }
            continue;
        }

        // Program exhausted with subject left over: this state dies
        let Some(instruction) = instructions.get(state.step_idx) else {
            continue;
        };

        match instruction {
            Instruction::Literal(text) => {
                if literal_matches_at(subject, state.subject_idx, text) {
                    states.push(MatchState {
                        subject_idx: state.subject_idx + text.len(),
                        step_idx: state.step_idx + 1,
                    });
                }
            }
            Instruction::Char(c, bounds) => {
                push_repetitions(subject, state, *bounds, |b| b == *c, &mut states);
            }
            Instruction::Wildcard(bounds) => {
                push_repetitions(subject, state, *bounds, |_| true, &mut states);
            }
            Instruction::Class {
                set,
                negated,
                bounds,
            } => {
                push_repetitions(
                    subject,
                    state,
                    *bounds,
                    |b| set.contains(b) != *negated,
                    &mut states,
                );
            }
        }
    }

    false
}

/// Pushes one continuation per admissible repetition count of a repeated
/// atom starting at `state.subject_idx`.
///
/// The minimum count must be met by consecutive bytes satisfying
/// `accepts`, otherwise nothing is pushed. Counts from the minimum up to
/// the maximum (or the first rejected byte, or the end of the subject)
/// each yield a continuation at the next instruction.
fn push_repetitions(
    subject: &[u8],
    state: MatchState,
    bounds: Bounds,
    accepts: impl Fn(u8) -> bool,
    states: &mut Vec<MatchState>,
) {
    let start = state.subject_idx;
    let min = bounds.min as usize;
    let max = if bounds.is_unbounded() {
        usize::MAX
    } else {
        bounds.max as usize
    };

    let reach = subject[start..]
        .iter()
        .take(max)
        .take_while(|&&b| accepts(b))
        .count();
    if reach < min {
        return;
    }

    // Longest first so the minimum count sits on top of the stack
    for consumed in (min..=reach).rev() {
        states.push(MatchState {
            subject_idx: start + consumed,
            step_idx: state.step_idx + 1,
        });
    }
}

/// Compares `text` against the subject at `at`. A `.` in `text` matches
/// any subject byte; the subject is always compared literally.
fn literal_matches_at(subject: &[u8], at: usize, text: &[u8]) -> bool {
    subject
        .get(at..at + text.len())
        .is_some_and(|window| window.iter().zip(text).all(|(&s, &p)| p == b'.' || s == p))
}
