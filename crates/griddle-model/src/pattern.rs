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

//! Abstraction patterns.
//!
//! A pattern is a string over `{'-', '*'}` with one character per goal
//! position: `'-'` preserves the symbol that appears at that position of the
//! goal, `'*'` abstracts it away. The number of preserved symbols `k`
//! determines the address space of the induced abstract state space,
//! `N · (N−1) · … · (N−k+1)`.

use fixedbitset::FixedBitSet;

/// The pattern character preserving a goal symbol.
pub const PRESERVED: char = '-';

/// The pattern character abstracting a goal symbol away.
pub const ABSTRACTED: char = '*';

/// The error returned when a pattern string contains a foreign character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    /// The offending character.
    pub character: char,
    /// Its character position in the pattern string.
    pub position: usize,
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Patterns can be defined only with '{}' and '{}', found '{}' at position {}",
            PRESERVED, ABSTRACTED, self.character, self.position
        )
    }
}

impl std::error::Error for PatternError {}

/// An abstraction mask over the positions of a goal permutation.
///
/// # Examples
///
/// ```rust
/// # use griddle_model::pattern::Pattern;
///
/// let pattern: Pattern = "--**".parse().unwrap();
/// assert_eq!(pattern.len(), 4);
/// assert_eq!(pattern.preserved_count(), 2);
/// assert_eq!(pattern.address_space(), 4 * 3);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Pattern {
    text: String,
    preserved: FixedBitSet,
}

impl Pattern {
    /// Parses a pattern from its textual form.
    ///
    /// Every character must be either [`PRESERVED`] or [`ABSTRACTED`].
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let mut preserved = FixedBitSet::with_capacity(text.len());
        for (position, character) in text.chars().enumerate() {
            match character {
                PRESERVED => preserved.insert(position),
                ABSTRACTED => {}
                _ => {
                    return Err(PatternError {
                        character,
                        position,
                    });
                }
            }
        }

        Ok(Self {
            text: text.to_owned(),
            preserved,
        })
    }

    /// Creates the pattern preserving every one of `n` positions.
    pub fn all_preserved(n: usize) -> Self {
        let mut preserved = FixedBitSet::with_capacity(n);
        preserved.insert_range(..);
        Self {
            text: std::iter::repeat(PRESERVED).take(n).collect(),
            preserved,
        }
    }

    /// Returns the number of positions covered by the pattern.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the pattern covers no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `true` if the given position is preserved.
    ///
    /// Positions beyond the pattern length are reported as abstracted.
    #[inline]
    pub fn is_preserved(&self, position: usize) -> bool {
        self.preserved.contains(position)
    }

    /// Returns the number of preserved positions.
    #[inline]
    pub fn preserved_count(&self) -> usize {
        self.preserved.count_ones(..)
    }

    /// Returns the number of distinct partial permutations matching this
    /// pattern, `N · (N−1) · … · (N−k+1)` for `k` preserved positions out of
    /// `N`. The empty product, for `k = 0`, is one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use griddle_model::pattern::Pattern;
    ///
    /// let full: Pattern = "----".parse().unwrap();
    /// assert_eq!(full.address_space(), 24);
    ///
    /// let blind: Pattern = "****".parse().unwrap();
    /// assert_eq!(blind.address_space(), 1);
    /// ```
    pub fn address_space(&self) -> usize {
        let n = self.len();
        let k = self.preserved_count();
        let mut cardinality: usize = 1;
        for i in (n - k + 1..=n).rev() {
            cardinality *= i;
        }
        cardinality
    }

    /// Returns `true` if every position preserved by `other` is preserved by
    /// `self` as well, i.e. the abstract space induced by `self` is a
    /// superset of (or equal to) the one induced by `other`.
    ///
    /// Patterns of different lengths never cover each other.
    pub fn covers(&self, other: &Pattern) -> bool {
        if self.len() != other.len() {
            return false;
        }
        other.preserved.is_subset(&self.preserved)
    }

    /// Returns the textual form of the pattern.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the pattern as the bytes stored in a PDB file header.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pattern({})", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_count() {
        let pattern = Pattern::parse("-*-*--").unwrap();
        assert_eq!(pattern.len(), 6);
        assert_eq!(pattern.preserved_count(), 4);
        assert!(pattern.is_preserved(0));
        assert!(!pattern.is_preserved(1));
        assert!(pattern.is_preserved(5));
    }

    #[test]
    fn test_parse_rejects_foreign_characters() {
        let err = Pattern::parse("--x-").unwrap_err();
        assert_eq!(err.character, 'x');
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_address_space() {
        // N!/(N-k)! for every k over N = 8
        let n: usize = 8;
        for k in 0..=n {
            let text: String = (0..n)
                .map(|i| if i < k { PRESERVED } else { ABSTRACTED })
                .collect();
            let pattern = Pattern::parse(&text).unwrap();

            let mut expected: usize = 1;
            for i in n - k + 1..=n {
                expected *= i;
            }
            assert_eq!(pattern.address_space(), expected, "k = {}", k);
        }
    }

    #[test]
    fn test_address_space_boundaries() {
        assert_eq!(Pattern::parse("****").unwrap().address_space(), 1);
        assert_eq!(Pattern::parse("----").unwrap().address_space(), 24);
        assert_eq!(Pattern::parse("").unwrap().address_space(), 1);
    }

    #[test]
    fn test_covers() {
        let coarse = Pattern::parse("-***").unwrap();
        let fine = Pattern::parse("--**").unwrap();

        // fine preserves a superset of coarse's positions
        assert!(fine.covers(&coarse));
        assert!(!coarse.covers(&fine));

        // every pattern covers itself
        assert!(fine.covers(&fine));

        // length mismatch never covers
        let short = Pattern::parse("--").unwrap();
        assert!(!fine.covers(&short));
    }

    #[test]
    fn test_all_preserved() {
        let pattern = Pattern::all_preserved(5);
        assert_eq!(pattern.as_str(), "-----");
        assert_eq!(pattern.preserved_count(), 5);
    }
}
