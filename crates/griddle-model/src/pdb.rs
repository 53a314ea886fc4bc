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

//! The PDB aggregate.
//!
//! A [`Pdb`] ties together everything that identifies a pattern database:
//! the combination mode, the explicit goal, the *p-pattern* keying the
//! stored table, the *c-pattern* that was (or will be) traversed during
//! generation, and the table itself. Construction validates the pieces
//! eagerly so that generation and queries never have to.

use crate::{
    cell::CellValue,
    mode::PdbMode,
    pattern::Pattern,
    perm::Permutation,
    ranker::RankError,
    table::PdbTable,
};

/// The error raised when the pieces of a PDB do not fit together.
#[derive(Debug)]
pub enum PdbError {
    /// The goal contains abstracted or repeated symbols; PDBs are defined
    /// with respect to an explicit goal.
    GoalNotConcrete,
    /// The c-pattern length differs from the goal length.
    GoalPatternLengthMismatch {
        /// Length of the goal permutation.
        goal_len: usize,
        /// Length of the offending pattern.
        pattern_len: usize,
    },
    /// The c-pattern abstracts a symbol the p-pattern preserves, so the
    /// search space would not cover the output space and generation would
    /// silently under-populate the table.
    IncompatiblePatterns {
        /// The p-pattern.
        p_pattern: String,
        /// The c-pattern.
        c_pattern: String,
    },
    /// The ranker rejected the goal/pattern combination.
    Rank(RankError),
}

impl std::fmt::Display for PdbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PdbError::GoalNotConcrete => {
                write!(f, "The goal must be a concrete permutation of distinct symbols")
            }
            PdbError::GoalPatternLengthMismatch {
                goal_len,
                pattern_len,
            } => write!(
                f,
                "The goal and the pattern have different sizes ({} and {})",
                goal_len, pattern_len
            ),
            PdbError::IncompatiblePatterns {
                p_pattern,
                c_pattern,
            } => write!(
                f,
                "The c-pattern '{}' must preserve every symbol the p-pattern '{}' preserves",
                c_pattern, p_pattern
            ),
            PdbError::Rank(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PdbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PdbError::Rank(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RankError> for PdbError {
    fn from(e: RankError) -> Self {
        PdbError::Rank(e)
    }
}

/// A pattern database: mode, goal, the two patterns, and the packed table
/// keyed by the p-pattern.
///
/// A freshly constructed `Pdb` has an all-vacant table; the generation
/// engine fills it, or the codec populates it from a file. Afterwards the
/// table is conceptually frozen and served read-only.
pub struct Pdb {
    mode: PdbMode,
    goal: Permutation,
    p_pattern: Pattern,
    c_pattern: Pattern,
    table: PdbTable,
}

impl Pdb {
    /// Creates an empty PDB, validating the goal and both patterns.
    ///
    /// Fails fast when the goal is abstract or repeats a symbol, when
    /// pattern lengths disagree with the goal, or when the c-pattern does
    /// not cover the p-pattern.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use griddle_model::{mode::PdbMode, pattern::Pattern, pdb::Pdb, perm::Permutation};
    ///
    /// let goal = Permutation::identity(4);
    /// let pattern: Pattern = "--**".parse().unwrap();
    /// let pdb = Pdb::new(PdbMode::Max, goal, pattern.clone(), pattern).unwrap();
    /// assert_eq!(pdb.address_space(), 12);
    /// ```
    pub fn new(
        mode: PdbMode,
        goal: Permutation,
        p_pattern: Pattern,
        c_pattern: Pattern,
    ) -> Result<Self, PdbError> {
        if !goal.is_concrete() || !goal.has_distinct_symbols() {
            return Err(PdbError::GoalNotConcrete);
        }
        if c_pattern.len() != goal.len() {
            return Err(PdbError::GoalPatternLengthMismatch {
                goal_len: goal.len(),
                pattern_len: c_pattern.len(),
            });
        }
        if !c_pattern.covers(&p_pattern) {
            return Err(PdbError::IncompatiblePatterns {
                p_pattern: p_pattern.as_str().to_owned(),
                c_pattern: c_pattern.as_str().to_owned(),
            });
        }

        let table = PdbTable::new(&goal, &p_pattern)?;
        Ok(Self {
            mode,
            goal,
            p_pattern,
            c_pattern,
            table,
        })
    }

    /// Returns the combination mode.
    #[inline]
    pub fn mode(&self) -> PdbMode {
        self.mode
    }

    /// Returns the explicit goal permutation.
    #[inline]
    pub fn goal(&self) -> &Permutation {
        &self.goal
    }

    /// Returns the pattern keying the stored table.
    #[inline]
    pub fn p_pattern(&self) -> &Pattern {
        &self.p_pattern
    }

    /// Returns the pattern traversed during generation.
    #[inline]
    pub fn c_pattern(&self) -> &Pattern {
        &self.c_pattern
    }

    /// Returns the table.
    #[inline]
    pub fn table(&self) -> &PdbTable {
        &self.table
    }

    /// Returns the table for writing; used by the generation engine and the
    /// codec while the PDB is being populated.
    #[inline]
    pub fn table_mut(&mut self) -> &mut PdbTable {
        &mut self.table
    }

    /// Returns the size of the table's address space.
    #[inline]
    pub fn address_space(&self) -> usize {
        self.table.address_space()
    }

    /// Returns the *true* cost stored for a permutation, or `None` when its
    /// abstract state was never reached.
    ///
    /// The permutation is masked with the p-pattern before ranking, so both
    /// concrete and already abstracted states can be queried.
    pub fn value(&self, perm: &Permutation) -> Result<Option<u8>, RankError> {
        let masked = self.table.mask(perm);
        let index = self.table.rank(&masked)?;
        Ok(CellValue::from_raw(self.table[index]).cost())
    }
}

impl std::fmt::Debug for Pdb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pdb")
            .field("mode", &self.mode)
            .field("goal", &self.goal)
            .field("p_pattern", &self.p_pattern)
            .field("c_pattern", &self.c_pattern)
            .field("address_space", &self.table.address_space())
            .finish()
    }
}

impl std::fmt::Display for Pdb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pdb(mode: {}, goal: {}, p-pattern: {}, c-pattern: {}, address space: {})",
            self.mode,
            self.goal,
            self.p_pattern,
            self.c_pattern,
            self.table.address_space()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_validates_goal() {
        let pattern = Pattern::parse("---").unwrap();
        let abstract_goal = Permutation::new(vec![1, crate::perm::NONPAT, 3]);
        assert!(matches!(
            Pdb::new(PdbMode::Max, abstract_goal, pattern.clone(), pattern.clone()),
            Err(PdbError::GoalNotConcrete)
        ));

        let repeated = Permutation::new(vec![1, 1, 3]);
        assert!(matches!(
            Pdb::new(PdbMode::Max, repeated, pattern.clone(), pattern),
            Err(PdbError::GoalNotConcrete)
        ));
    }

    #[test]
    fn test_construction_validates_pattern_cover() {
        let goal = Permutation::identity(4);
        let p = Pattern::parse("--**").unwrap();
        let c = Pattern::parse("-***").unwrap();

        // c abstracts symbol 2, which p preserves
        assert!(matches!(
            Pdb::new(PdbMode::Max, goal.clone(), p.clone(), c),
            Err(PdbError::IncompatiblePatterns { .. })
        ));

        // a strictly finer c-pattern is fine
        let c = Pattern::parse("---*").unwrap();
        assert!(Pdb::new(PdbMode::Max, goal, p, c).is_ok());
    }

    #[test]
    fn test_construction_validates_cpattern_length() {
        let goal = Permutation::identity(4);
        let p = Pattern::parse("--**").unwrap();
        let c = Pattern::parse("--*").unwrap();
        assert!(matches!(
            Pdb::new(PdbMode::Max, goal, p, c),
            Err(PdbError::GoalPatternLengthMismatch { .. })
        ));
    }

    #[test]
    fn test_value_reads_through_the_mask() {
        let goal = Permutation::identity(4);
        let pattern = Pattern::parse("----").unwrap();
        let mut pdb = Pdb::new(PdbMode::Max, goal.clone(), pattern.clone(), pattern).unwrap();

        pdb.table_mut().insert(&goal, 1).unwrap();
        assert_eq!(pdb.value(&goal).unwrap(), Some(0));

        let other = Permutation::new(vec![4, 3, 2, 1]);
        assert_eq!(pdb.value(&other).unwrap(), None);
    }
}
