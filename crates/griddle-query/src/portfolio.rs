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

use griddle_model::{
    codec::{self, ReadError},
    mode::PdbMode,
    pdb::Pdb,
    perm::Permutation,
    ranker::RankError,
};
use std::path::{Path, PathBuf};

/// The error raised while loading or querying a portfolio.
#[derive(Debug)]
pub enum QueryError {
    /// A PDB file could not be read.
    Read {
        /// The offending path.
        path: PathBuf,
        /// The codec error.
        source: ReadError,
    },
    /// The loaded PDBs cannot be combined.
    IncompatiblePdbs {
        /// A human-readable explanation.
        reason: String,
    },
    /// The queried permutation does not have the goal's length.
    PermutationShape {
        /// The goal length shared by the loaded PDBs.
        expected: usize,
        /// The length of the queried permutation.
        found: usize,
    },
    /// The portfolio is in ADD mode, whose combination semantics are
    /// reserved and not implemented.
    AddNotImplemented,
    /// A permutation could not be ranked against a loaded PDB.
    Rank(RankError),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::Read { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
            QueryError::IncompatiblePdbs { reason } => {
                write!(f, "Non-compatible PDBs ({})", reason)
            }
            QueryError::PermutationShape { expected, found } => write!(
                f,
                "Non-compatible permutations: the PDB goals have length {} but the \
                 permutation has length {}",
                expected, found
            ),
            QueryError::AddNotImplemented => write!(f, "ADD combination is not implemented yet"),
            QueryError::Rank(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Read { source, .. } => Some(source),
            QueryError::Rank(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RankError> for QueryError {
    fn from(e: RankError) -> Self {
        QueryError::Rank(e)
    }
}

/// An ordered collection of PDBs over one goal, queried as a single
/// heuristic.
///
/// The first file fixes the goal and the mode; every further file must
/// match both. Evaluation masks and ranks the queried permutation once per
/// PDB and reduces the values according to the mode.
///
/// # Examples
///
/// ```no_run
/// # use griddle_query::PdbPortfolio;
/// # use griddle_model::perm::Permutation;
///
/// let portfolio = PdbPortfolio::load(&["left.max", "right.max"]).unwrap();
/// let h = portfolio.evaluate(&Permutation::new(vec![4, 2, 1, 3])).unwrap();
/// println!("h = {}", h);
/// ```
#[derive(Debug)]
pub struct PdbPortfolio {
    pdbs: Vec<Pdb>,
}

impl PdbPortfolio {
    /// Loads every path in order and checks cross-PDB compatibility.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self, QueryError> {
        if paths.is_empty() {
            return Err(QueryError::IncompatiblePdbs {
                reason: "at least one pattern database is required".to_owned(),
            });
        }

        let mut pdbs: Vec<Pdb> = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let pdb = codec::read(path).map_err(|source| QueryError::Read {
                path: path.to_owned(),
                source,
            })?;

            if let Some(first) = pdbs.first() {
                if first.goal().len() != pdb.goal().len() {
                    return Err(QueryError::IncompatiblePdbs {
                        reason: "goals of different size".to_owned(),
                    });
                }
                if first.goal() != pdb.goal() {
                    return Err(QueryError::IncompatiblePdbs {
                        reason: "different goals".to_owned(),
                    });
                }
                if first.mode() != pdb.mode() {
                    return Err(QueryError::IncompatiblePdbs {
                        reason: "different mode".to_owned(),
                    });
                }
            }

            pdbs.push(pdb);
        }

        Ok(Self { pdbs })
    }

    /// Returns the loaded PDBs, in load order.
    #[inline]
    pub fn pdbs(&self) -> &[Pdb] {
        &self.pdbs
    }

    /// Returns the number of loaded PDBs.
    #[inline]
    pub fn len(&self) -> usize {
        self.pdbs.len()
    }

    /// Returns `true` if no PDB is loaded; never the case for a portfolio
    /// built by [`PdbPortfolio::load`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pdbs.is_empty()
    }

    /// Returns the shared combination mode.
    #[inline]
    pub fn mode(&self) -> PdbMode {
        self.pdbs[0].mode()
    }

    /// Returns the shared goal.
    #[inline]
    pub fn goal(&self) -> &Permutation {
        self.pdbs[0].goal()
    }

    /// Returns the true cost each PDB stores for `perm`, in load order.
    ///
    /// A cell that was never reached in some PDB's abstract space reads as
    /// zero, the weakest admissible answer.
    pub fn values(&self, perm: &Permutation) -> Result<Vec<u8>, QueryError> {
        if perm.len() != self.goal().len() {
            return Err(QueryError::PermutationShape {
                expected: self.goal().len(),
                found: perm.len(),
            });
        }

        let mut values = Vec::with_capacity(self.pdbs.len());
        for pdb in &self.pdbs {
            values.push(pdb.value(perm)?.unwrap_or(0));
        }
        Ok(values)
    }

    /// Evaluates the combined heuristic for `perm`.
    ///
    /// MAX portfolios reduce by maximum. ADD is reserved vocabulary and
    /// reports [`QueryError::AddNotImplemented`].
    pub fn evaluate(&self, perm: &Permutation) -> Result<u8, QueryError> {
        let values = self.values(perm)?;
        match self.mode() {
            PdbMode::Max => Ok(values.into_iter().fold(0, u8::max)),
            PdbMode::Add => Err(QueryError::AddNotImplemented),
        }
    }
}
