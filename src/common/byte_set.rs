// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/regexp-backtrack)

//! Byte membership set used by bracket classes.
//!
//! # Bitmask Representation
//!
//! Class members are stored as a 256-bit bitmask (`[u64; 4]`) rather than a
//! `Vec<u8>`. Characters are single bytes, so every possible member has a
//! fixed bit. Insertion deduplicates for free, membership is a shift and an
//! AND, and the set is `Copy` (32 bytes) so instructions holding it never
//! allocate.

use std::fmt;

/// A set of bytes, deduplicated, with no ordering semantics.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteSet {
    bits: [u64; 4],
}

impl ByteSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: [0; 4] };

    /// Creates a set from a slice of bytes. Duplicates collapse.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::EMPTY;
        set.extend(bytes);
        set
    }

    /// Creates a set holding every byte in `lo..=hi`.
    #[must_use]
    pub fn from_range(lo: u8, hi: u8) -> Self {
        let mut set = Self::EMPTY;
        for b in lo..=hi {
            set.insert(b);
        }
        set
    }

    /// Adds a byte.
    #[inline]
    pub fn insert(&mut self, b: u8) {
        self.bits[usize::from(b >> 6)] |= 1 << (b & 63);
    }

    /// Adds every byte of a slice.
    pub fn extend(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.insert(b);
        }
    }

    /// Adds every member of another set.
    pub fn union_with(&mut self, other: &Self) {
        for (word, theirs) in self.bits.iter_mut().zip(other.bits) {
            *word |= theirs;
        }
    }

    /// Returns true if `b` is a member.
    #[must_use]
    #[inline]
    pub const fn contains(&self, b: u8) -> bool {
        (self.bits[(b >> 6) as usize] >> (b & 63)) & 1 != 0
    }

    /// Returns true if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterates members in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&b| self.contains(b))
    }
}

impl fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|b| char::from(b).escape_default().to_string()))
            .finish()
    }
}
