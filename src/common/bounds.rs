// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/regexp-backtrack)

//! Occurrence bounds attached to quantifiable atoms.
//!
//! Bounds are inclusive `{min, max}` repeat counts. The maximum may be the
//! [`UNBOUNDED`] sentinel, which is how `*`, `+`, `{m,}` and `{,}` are
//! represented. An unquantified atom carries [`Bounds::ONE`].

use std::fmt;

/// Sentinel maximum meaning "no upper limit".
///
/// Explicit counts parsed from `{m,n}` are always strictly below this value,
/// so the sentinel can never be confused with a written count.
pub const UNBOUNDED: u32 = u32::MAX;

/// Inclusive repeat count `{min, max}` of a single atom.
///
/// Invariant: `min <= max`. The compiler rejects `{m,n}` with `m > n`
/// before a `Bounds` is ever built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Minimum number of repetitions.
    pub min: u32,
    /// Maximum number of repetitions, or [`UNBOUNDED`].
    pub max: u32,
}

impl Bounds {
    /// Exactly one occurrence, the default for an unquantified atom.
    pub const ONE: Self = Self { min: 1, max: 1 };
    /// `*`
    pub const ZERO_OR_MORE: Self = Self {
        min: 0,
        max: UNBOUNDED,
    };
    /// `+`
    pub const ONE_OR_MORE: Self = Self {
        min: 1,
        max: UNBOUNDED,
    };
    /// `?`
    pub const ZERO_OR_ONE: Self = Self { min: 0, max: 1 };

    /// Creates bounds, returning `None` if `min > max`.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Option<Self> {
        if min > max {
            None
        } else {
            Some(Self { min, max })
        }
    }

    /// Exactly `n` occurrences.
    #[must_use]
    pub const fn exactly(n: u32) -> Self {
        Self { min: n, max: n }
    }

    /// Returns the bounds denoted by a single-character quantifier
    /// (`*`, `+` or `?`), or `None` for any other byte.
    #[must_use]
    pub const fn from_quantifier(quantifier: u8) -> Option<Self> {
        match quantifier {
            b'*' => Some(Self::ZERO_OR_MORE),
            b'+' => Some(Self::ONE_OR_MORE),
            b'?' => Some(Self::ZERO_OR_ONE),
            _ => None,
        }
    }

    /// True if the maximum is the [`UNBOUNDED`] sentinel.
    #[must_use]
    #[inline]
    pub const fn is_unbounded(self) -> bool {
        self.max == UNBOUNDED
    }

    /// True if zero occurrences satisfy these bounds.
    #[must_use]
    #[inline]
    pub const fn allows_zero(self) -> bool {
        self.min == 0
    }

    /// Bounds of an atom repeated per `self` immediately followed by the
    /// same atom repeated per `next`.
    ///
    /// `x{a,b}x{c,d}` accepts exactly the strings `x{a+c,b+d}` accepts.
    /// Returns `None` if either sum would reach the sentinel.
    #[must_use]
    pub fn concat(self, next: Self) -> Option<Self> {
        let min = self.min.checked_add(next.min).filter(|&m| m < UNBOUNDED)?;
        let max = if self.is_unbounded() || next.is_unbounded() {
            UNBOUNDED
        } else {
            self.max.checked_add(next.max).filter(|&m| m < UNBOUNDED)?
        };
        Some(Self { min, max })
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Bounds {
    /// Renders the canonical quantifier suffix (empty for `{1,1}`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (1, 1) => Ok(()),
            (0, UNBOUNDED) => f.write_str("*"),
            (1, UNBOUNDED) => f.write_str("+"),
            (0, 1) => f.write_str("?"),
            (min, UNBOUNDED) => write!(f, "{{{min},}}"),
            (min, max) if min == max => write!(f, "{{{min}}}"),
            (0, max) => write!(f, "{{,{max}}}"),
            (min, max) => write!(f, "{{{min},{max}}}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted() {
        assert_eq!(Bounds::new(6, 4), None);
        assert_eq!(Bounds::new(4, 6), Some(Bounds { min: 4, max: 6 }));
        assert_eq!(Bounds::new(3, 3), Some(Bounds::exactly(3)));
    }

    #[test]
    fn test_from_quantifier() {
        assert_eq!(Bounds::from_quantifier(b'*'), Some(Bounds::ZERO_OR_MORE));
        assert_eq!(Bounds::from_quantifier(b'+'), Some(Bounds::ONE_OR_MORE));
        assert_eq!(Bounds::from_quantifier(b'?'), Some(Bounds::ZERO_OR_ONE));
        assert_eq!(Bounds::from_quantifier(b'{'), None);
    }

    #[test]
    fn test_default_is_one() {
        assert_eq!(Bounds::default(), Bounds::ONE);
        assert!(!Bounds::ONE.allows_zero());
        assert!(!Bounds::ONE.is_unbounded());
    }

    #[test]
    fn test_concat_finite() {
        let a = Bounds::new(1, 2).unwrap();
        let b = Bounds::new(0, 3).unwrap();
        assert_eq!(a.concat(b), Some(Bounds { min: 1, max: 5 }));
    }

    #[test]
    fn test_concat_unbounded() {
        assert_eq!(
            Bounds::ZERO_OR_MORE.concat(Bounds::ONE_OR_MORE),
            Some(Bounds::ONE_OR_MORE)
        );
        assert_eq!(
            Bounds::exactly(2).concat(Bounds::ZERO_OR_MORE),
            Some(Bounds { min: 2, max: UNBOUNDED })
        );
    }

    #[test]
    fn test_concat_overflow() {
        let big = Bounds::exactly(UNBOUNDED - 1);
        assert_eq!(big.concat(Bounds::ONE), None);
        assert_eq!(big.concat(Bounds::new(0, 1).unwrap()), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Bounds::ONE.to_string(), "");
        assert_eq!(Bounds::ZERO_OR_MORE.to_string(), "*");
        assert_eq!(Bounds::ONE_OR_MORE.to_string(), "+");
        assert_eq!(Bounds::ZERO_OR_ONE.to_string(), "?");
        assert_eq!(Bounds::exactly(3).to_string(), "{3}");
        assert_eq!(Bounds::new(3, UNBOUNDED).unwrap().to_string(), "{3,}");
        assert_eq!(Bounds::new(0, 5).unwrap().to_string(), "{,5}");
        assert_eq!(Bounds::new(4, 5).unwrap().to_string(), "{4,5}");
    }
}
