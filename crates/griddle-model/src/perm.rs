// Copyright (c) 2025 The griddle developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Permutations over byte symbols, in concrete or abstract form.
//!
//! A concrete permutation of length `N` holds the `N` distinct symbols
//! `1..=N`, one per position. An *abstract* permutation replaces some of those
//! symbols with the reserved sentinel [`NONPAT`], meaning "this symbol has
//! been abstracted away and its identity no longer matters". Everything else
//! in this crate (patterns, rankers, tables) operates on this one type; the
//! symbols themselves never exceed a byte because PDB files store one symbol
//! per byte.

/// The reserved sentinel marking an abstracted symbol.
///
/// `0xFF` is never a valid concrete symbol; consequently permutations are
/// limited to [`MAX_LEN`] symbols.
pub const NONPAT: u8 = 0xff;

/// The largest supported permutation length.
///
/// Symbols live in `1..=N` and `0xFF` is reserved for [`NONPAT`], so `N`
/// cannot exceed 254.
pub const MAX_LEN: usize = 254;

/// An ordered sequence of byte symbols, possibly partially abstracted.
///
/// Positions holding [`NONPAT`] are abstracted; all other positions hold a
/// symbol in `1..=N`. Whether a permutation is concrete or abstract is a
/// property of its contents, not of its type: the same value flows through
/// masking, ranking, and expansion.
///
/// # Examples
///
/// ```rust
/// # use griddle_model::perm::{Permutation, NONPAT};
///
/// let goal = Permutation::identity(4);
/// assert_eq!(goal.symbols(), &[1, 2, 3, 4]);
/// assert!(goal.is_concrete());
///
/// let abstracted = Permutation::new(vec![1, NONPAT, NONPAT, 4]);
/// assert!(!abstracted.is_concrete());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    symbols: Vec<u8>,
}

impl Permutation {
    /// Creates a permutation from the given symbols.
    ///
    /// The symbols are taken as-is; use [`Permutation::is_concrete`] and
    /// [`Permutation::has_distinct_symbols`] to validate when the source is
    /// untrusted.
    #[inline]
    pub fn new(symbols: Vec<u8>) -> Self {
        Self { symbols }
    }

    /// Creates the identity permutation `1, 2, ..., n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`MAX_LEN`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use griddle_model::perm::Permutation;
    ///
    /// let perm = Permutation::identity(3);
    /// assert_eq!(perm.symbols(), &[1, 2, 3]);
    /// ```
    pub fn identity(n: usize) -> Self {
        assert!(
            n <= MAX_LEN,
            "called `Permutation::identity` with a length of {} but the maximum is {}",
            n,
            MAX_LEN
        );

        Self {
            symbols: (1..=n as u8).collect(),
        }
    }

    /// Returns the number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the permutation has no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not in `0..len()`.
    #[inline]
    pub fn get(&self, position: usize) -> u8 {
        self.symbols[position]
    }

    /// Returns the underlying symbols.
    #[inline]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Returns a mutable view of the underlying symbols.
    #[inline]
    pub fn symbols_mut(&mut self) -> &mut [u8] {
        &mut self.symbols
    }

    /// Returns `true` if no position is abstracted.
    #[inline]
    pub fn is_concrete(&self) -> bool {
        self.symbols.iter().all(|&s| s != NONPAT)
    }

    /// Returns the largest non-abstracted symbol, or zero if every position
    /// is abstracted.
    #[inline]
    pub fn max_symbol(&self) -> u8 {
        self.symbols
            .iter()
            .copied()
            .filter(|&s| s != NONPAT)
            .max()
            .unwrap_or(0)
    }

    /// Returns `true` if no non-abstracted symbol occurs twice.
    pub fn has_distinct_symbols(&self) -> bool {
        let mut seen = [false; 256];
        for &s in &self.symbols {
            if s == NONPAT {
                continue;
            }
            if seen[s as usize] {
                return false;
            }
            seen[s as usize] = true;
        }
        true
    }
}

impl From<Vec<u8>> for Permutation {
    fn from(symbols: Vec<u8>) -> Self {
        Self::new(symbols)
    }
}

impl From<&[u8]> for Permutation {
    fn from(symbols: &[u8]) -> Self {
        Self::new(symbols.to_vec())
    }
}

impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, &s) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if s == NONPAT {
                write!(f, "*")?;
            } else {
                write!(f, "{}", s)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Permutation({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let perm = Permutation::identity(5);
        assert_eq!(perm.len(), 5);
        assert_eq!(perm.symbols(), &[1, 2, 3, 4, 5]);
        assert!(perm.is_concrete());
        assert!(perm.has_distinct_symbols());
        assert_eq!(perm.max_symbol(), 5);
    }

    #[test]
    fn test_abstract_contents() {
        let perm = Permutation::new(vec![3, NONPAT, 1, NONPAT]);
        assert!(!perm.is_concrete());
        assert_eq!(perm.max_symbol(), 3);
        assert!(perm.has_distinct_symbols());
    }

    #[test]
    fn test_duplicate_detection() {
        let perm = Permutation::new(vec![2, 2, 1]);
        assert!(!perm.has_distinct_symbols());

        // repeated NONPAT is not a duplicate
        let perm = Permutation::new(vec![NONPAT, NONPAT, 1]);
        assert!(perm.has_distinct_symbols());
    }

    #[test]
    fn test_display() {
        let perm = Permutation::new(vec![4, NONPAT, 2]);
        assert_eq!(format!("{}", perm), "4 * 2");
    }

    #[test]
    fn test_empty() {
        let perm = Permutation::new(Vec::new());
        assert!(perm.is_empty());
        assert!(perm.is_concrete());
        assert_eq!(perm.max_symbol(), 0);
    }
}
