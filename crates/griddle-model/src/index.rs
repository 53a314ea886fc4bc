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

//! A strongly typed table index.
//!
//! Ranks returned by the perfect ranking function address exactly one thing:
//! a cell in a PDB table. Wrapping them in `PdbIndex` keeps them from being
//! confused with symbol values, g-values, or plain loop counters, while
//! compiling down to a transparent `usize`.

/// A rank into the address space of a PDB table.
///
/// Produced by ranking a (partial) permutation; valid for exactly the table
/// whose ranker produced it.
///
/// # Examples
///
/// ```rust
/// # use griddle_model::index::PdbIndex;
///
/// let index = PdbIndex::new(17);
/// assert_eq!(index.get(), 17);
/// assert_eq!(format!("{}", index), "PdbIndex(17)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PdbIndex(usize);

impl PdbIndex {
    /// Creates a new index from a raw rank.
    #[inline(always)]
    pub const fn new(rank: usize) -> Self {
        Self(rank)
    }

    /// Returns the raw rank.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }

    /// Returns `true` if this is the first cell of the table.
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for PdbIndex {
    fn from(rank: usize) -> Self {
        Self::new(rank)
    }
}

impl From<PdbIndex> for usize {
    fn from(index: PdbIndex) -> Self {
        index.0
    }
}

impl std::fmt::Debug for PdbIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PdbIndex({})", self.0)
    }
}

impl std::fmt::Display for PdbIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PdbIndex({})", self.0)
    }
}
