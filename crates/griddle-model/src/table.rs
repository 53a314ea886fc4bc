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

//! The packed byte table of a PDB.
//!
//! Because the number of abstract states is known in advance and the ranking
//! function is perfect, the table is a dense, zero-initialised byte vector
//! addressed directly by ranks. A raw value of zero marks a vacant cell; see
//! [`CellValue`](crate::cell::CellValue) for the offset-by-one
//! interpretation of the rest.

use crate::{
    index::PdbIndex,
    pattern::Pattern,
    perm::Permutation,
    ranker::{RankError, Ranker},
};

/// The error raised on out-of-range direct table access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The index falls outside the table's address space.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The size of the address space.
        capacity: usize,
    },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::OutOfBounds { index, capacity } => write!(
                f,
                "Table index out of bounds: the address space is {} but the index is {}",
                capacity, index
            ),
        }
    }
}

impl std::error::Error for TableError {}

/// A dense PDB table keyed by the perfect rank of abstract states.
///
/// The table owns its ranker and exactly one byte buffer sized by the
/// pattern's address space. `insert` blindly overwrites; callers that need
/// first-writer-wins semantics consult [`PdbTable::find`] first, which is
/// what the monotone generation order relies on.
///
/// # Examples
///
/// ```rust
/// # use griddle_model::{pattern::Pattern, perm::Permutation, table::PdbTable};
///
/// let goal = Permutation::identity(4);
/// let pattern: Pattern = "----".parse().unwrap();
/// let mut table = PdbTable::new(&goal, &pattern).unwrap();
///
/// assert_eq!(table.address_space(), 24);
/// assert_eq!(table.find(&goal).unwrap(), None);
///
/// table.insert(&goal, 1).unwrap();
/// assert!(table.find(&goal).unwrap().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct PdbTable {
    ranker: Ranker,
    cells: Vec<u8>,
    occupied: usize,
}

impl PdbTable {
    /// Allocates a zeroed table for the abstract space induced by `pattern`
    /// over `goal`.
    pub fn new(goal: &Permutation, pattern: &Pattern) -> Result<Self, RankError> {
        let ranker = Ranker::new(goal, pattern)?;
        let cells = vec![0u8; ranker.address_space()];
        Ok(Self {
            ranker,
            cells,
            occupied: 0,
        })
    }

    /// Returns the size of the address space, i.e. the number of cells.
    #[inline]
    pub fn address_space(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of insertions performed.
    ///
    /// Writes through [`std::ops::IndexMut`] bypass this counter.
    #[inline]
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Returns the ranker this table is keyed by.
    #[inline]
    pub fn ranker(&self) -> &Ranker {
        &self.ranker
    }

    /// Writes the raw value `g` at the rank of `perm` and returns that rank.
    ///
    /// Collisions are not checked; an earlier value at the same rank is
    /// overwritten.
    pub fn insert(&mut self, perm: &Permutation, g: u8) -> Result<PdbIndex, RankError> {
        let index = self.ranker.rank(perm)?;
        self.cells[index.get()] = g;
        self.occupied += 1;
        Ok(index)
    }

    /// Returns the rank of `perm` if its cell has been written, `None` if
    /// the cell is still vacant.
    pub fn find(&self, perm: &Permutation) -> Result<Option<PdbIndex>, RankError> {
        let index = self.ranker.rank(perm)?;
        if self.cells[index.get()] == 0 {
            Ok(None)
        } else {
            Ok(Some(index))
        }
    }

    /// Returns the raw value at `index`, checking bounds.
    pub fn at(&self, index: PdbIndex) -> Result<u8, TableError> {
        self.cells
            .get(index.get())
            .copied()
            .ok_or(TableError::OutOfBounds {
                index: index.get(),
                capacity: self.cells.len(),
            })
    }

    /// Masks `perm` with this table's pattern.
    #[inline]
    pub fn mask(&self, perm: &Permutation) -> Permutation {
        self.ranker.mask(perm)
    }

    /// Ranks `perm` with this table's ranker.
    #[inline]
    pub fn rank(&self, perm: &Permutation) -> Result<PdbIndex, RankError> {
        self.ranker.rank(perm)
    }

    /// Returns the raw cells, in rank order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }
}

impl std::ops::Index<PdbIndex> for PdbTable {
    type Output = u8;

    #[inline]
    fn index(&self, index: PdbIndex) -> &u8 {
        &self.cells[index.get()]
    }
}

impl std::ops::IndexMut<PdbIndex> for PdbTable {
    #[inline]
    fn index_mut(&mut self, index: PdbIndex) -> &mut u8 {
        &mut self.cells[index.get()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(n: usize, pattern: &str) -> PdbTable {
        let goal = Permutation::identity(n);
        let pattern = Pattern::parse(pattern).unwrap();
        PdbTable::new(&goal, &pattern).unwrap()
    }

    #[test]
    fn test_allocation() {
        let table = table(4, "----");
        assert_eq!(table.address_space(), 24);
        assert_eq!(table.occupied(), 0);
        assert!(table.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_insert_and_find() {
        let mut table = table(4, "----");
        let perm = Permutation::new(vec![4, 3, 2, 1]);

        assert_eq!(table.find(&perm).unwrap(), None);

        let index = table.insert(&perm, 3).unwrap();
        assert_eq!(table.find(&perm).unwrap(), Some(index));
        assert_eq!(table.at(index).unwrap(), 3);
        assert_eq!(table.occupied(), 1);
    }

    #[test]
    fn test_insert_overwrites_blindly() {
        let mut table = table(4, "----");
        let perm = Permutation::identity(4);

        let index = table.insert(&perm, 5).unwrap();
        table.insert(&perm, 9).unwrap();
        assert_eq!(table[index], 9);
        // the counter tracks insertions, not distinct cells
        assert_eq!(table.occupied(), 2);
    }

    #[test]
    fn test_at_out_of_bounds() {
        let table = table(3, "---");
        assert_eq!(
            table.at(PdbIndex::new(6)),
            Err(TableError::OutOfBounds {
                index: 6,
                capacity: 6
            })
        );
    }

    #[test]
    fn test_index_mut_bypasses_occupancy() {
        let mut table = table(3, "---");
        table[PdbIndex::new(2)] = 7;
        assert_eq!(table.at(PdbIndex::new(2)).unwrap(), 7);
        assert_eq!(table.occupied(), 0);
    }
}
