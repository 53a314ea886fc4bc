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

//! Perfect ranking of (partial) permutations.
//!
//! A `Ranker` is built once from a goal permutation and a pattern and is
//! immutable afterwards. It provides the two operations every PDB needs:
//!
//! * **masking**: substituting [`NONPAT`] for every symbol the pattern
//!   abstracts away, turning a concrete state into an abstract one;
//! * **ranking**: the iterative Myrvold–Ruskey ranking function over the
//!   preserved symbols, a bijection between the abstract states matching the
//!   pattern and `[0, A)` where `A` is the pattern's address space.
//!
//! Preserved symbols are packed into the *tail* of an auxiliary permutation
//! in the order their positions appear in the goal; `omask` records, for
//! every symbol, which tail slot it owns (or that it owns none). Ranking then
//! needs one pass to build the auxiliary permutation and its inverse, and
//! `k` constant-time steps to fold the tail into a rank.

use crate::{
    index::PdbIndex,
    pattern::Pattern,
    perm::{Permutation, NONPAT},
};

/// Sentinel in `omask` for symbols that own no tail slot.
const UNMAPPED: usize = usize::MAX;

/// The error raised when a permutation cannot be ranked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// Goal and pattern were of different lengths at construction.
    GoalPatternLengthMismatch {
        /// Length of the goal permutation.
        goal_len: usize,
        /// Length of the pattern.
        pattern_len: usize,
    },
    /// The supplied permutation does not have the shape this ranker was
    /// built for: either its length differs from the goal's, or the number
    /// of preserved symbols it carries differs from the pattern's. The
    /// latter detects malformed abstract states.
    ShapeMismatch {
        /// The value the ranker expects.
        expected: usize,
        /// The value found in the supplied permutation.
        found: usize,
    },
}

impl std::fmt::Display for RankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankError::GoalPatternLengthMismatch {
                goal_len,
                pattern_len,
            } => write!(
                f,
                "The goal and the pattern have different sizes ({} and {})",
                goal_len, pattern_len
            ),
            RankError::ShapeMismatch { expected, found } => write!(
                f,
                "The permutation does not match the shape used to initialize this ranker \
                 (expected {}, found {})",
                expected, found
            ),
        }
    }
}

impl std::error::Error for RankError {}

/// The Myrvold–Ruskey partial-permutation ranker derived from a goal and a
/// pattern.
///
/// # Examples
///
/// ```rust
/// # use griddle_model::{pattern::Pattern, perm::Permutation, ranker::Ranker};
///
/// let goal = Permutation::identity(4);
/// let pattern: Pattern = "----".parse().unwrap();
/// let ranker = Ranker::new(&goal, &pattern).unwrap();
///
/// let rank = ranker.rank(&goal).unwrap();
/// assert!(rank.get() < 24);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranker {
    /// Length of the permutations to rank.
    n: usize,
    /// Number of preserved symbols.
    nbsymbols: usize,
    /// Symbol to tail slot in the auxiliary permutation, [`UNMAPPED`] for
    /// abstracted symbols. Indexed by symbol value.
    omask: Vec<usize>,
    /// Symbol to its masked form: itself when preserved, [`NONPAT`] when
    /// abstracted. Indexed by symbol value.
    smask: Vec<u8>,
}

impl Ranker {
    /// Builds a ranker for the given goal and pattern.
    ///
    /// The goal must be concrete: the pattern is defined with respect to the
    /// explicit goal symbols, not to an already abstracted state.
    pub fn new(goal: &Permutation, pattern: &Pattern) -> Result<Self, RankError> {
        if goal.len() != pattern.len() {
            return Err(RankError::GoalPatternLengthMismatch {
                goal_len: goal.len(),
                pattern_len: pattern.len(),
            });
        }
        debug_assert!(
            goal.is_concrete(),
            "called `Ranker::new` with an abstract goal permutation"
        );

        let n = goal.len();
        let nbsymbols = pattern.preserved_count();

        // Symbols are positive, so 1 + the largest symbol entries suffice.
        let entries = 1 + goal.max_symbol() as usize;
        let mut omask = vec![UNMAPPED; entries];
        let mut smask = vec![0u8; entries];

        // Preserved symbols are pushed to the back of the auxiliary
        // permutation; slot counts how many have been placed already.
        let mut slot = 0;
        for position in 0..n {
            let symbol = goal.get(position) as usize;
            if pattern.is_preserved(position) {
                omask[symbol] = n - nbsymbols + slot;
                smask[symbol] = goal.get(position);
                slot += 1;
            } else {
                smask[symbol] = NONPAT;
            }
        }

        Ok(Self {
            n,
            nbsymbols,
            omask,
            smask,
        })
    }

    /// Returns the length of the permutations this ranker accepts.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the number of preserved symbols.
    #[inline]
    pub fn nbsymbols(&self) -> usize {
        self.nbsymbols
    }

    /// Returns the size of the address space this ranker maps onto.
    pub fn address_space(&self) -> usize {
        let mut cardinality: usize = 1;
        for i in self.n - self.nbsymbols + 1..=self.n {
            cardinality *= i;
        }
        cardinality
    }

    /// Substitutes [`NONPAT`] for every abstracted symbol of `perm`,
    /// preserving the rest.
    ///
    /// An already abstracted position stays abstracted regardless of the
    /// pattern. Masking is needed only at seams, seeding the search with
    /// the abstract goal and projecting search states into the output
    /// space, never per expansion.
    pub fn mask(&self, perm: &Permutation) -> Permutation {
        let masked = perm
            .symbols()
            .iter()
            .map(|&symbol| {
                if symbol == NONPAT {
                    NONPAT
                } else {
                    // symbols foreign to the goal mask to NONPAT; ranking
                    // such a state reports the shape mismatch
                    self.smask
                        .get(symbol as usize)
                        .copied()
                        .unwrap_or(NONPAT)
                }
            })
            .collect();
        Permutation::new(masked)
    }

    /// Ranks a full or partial permutation into `[0, address_space())`.
    ///
    /// Abstracted positions must hold [`NONPAT`]. The permutation must have
    /// the length this ranker was built for and carry exactly the preserved
    /// symbols of its pattern; anything else is a [`RankError::ShapeMismatch`].
    pub fn rank(&self, perm: &Permutation) -> Result<PdbIndex, RankError> {
        if perm.len() != self.n {
            return Err(RankError::ShapeMismatch {
                expected: self.n,
                found: perm.len(),
            });
        }

        let n = self.n;

        // Build the auxiliary permutation p (preserved symbols packed into
        // the tail, each slot holding the position the symbol occupies in
        // `perm`) and its inverse q.
        let mut p = vec![0usize; n];
        let mut q = vec![0usize; n];
        let mut found = 0;
        for (position, &symbol) in perm.symbols().iter().enumerate() {
            if symbol == NONPAT {
                continue;
            }
            let slot = self
                .omask
                .get(symbol as usize)
                .copied()
                .unwrap_or(UNMAPPED);
            if slot != UNMAPPED {
                p[slot] = position;
                q[position] = slot;
                found += 1;
            }
        }

        if found != self.nbsymbols {
            return Err(RankError::ShapeMismatch {
                expected: self.nbsymbols,
                found,
            });
        }

        // Fold the tail into a rank, Myrvold & Ruskey style: repeatedly
        // swap the last tail element into the slot recorded by the inverse,
        // accumulating the mixed-radix digits.
        let mut rank: usize = 0;
        let mut factor: usize = 1;
        let mut m = n;
        while m > n - self.nbsymbols {
            let s = p[m - 1];
            p.swap(m - 1, q[m - 1]);
            q.swap(s, m - 1);
            rank += s * factor;
            factor *= m;
            m -= 1;
        }

        Ok(PdbIndex::new(rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranker(n: usize, pattern: &str) -> Ranker {
        let goal = Permutation::identity(n);
        let pattern = Pattern::parse(pattern).unwrap();
        Ranker::new(&goal, &pattern).unwrap()
    }

    /// All permutations of `1..=n`, by Heap's algorithm.
    fn permutations(n: usize) -> Vec<Permutation> {
        fn heap(symbols: &mut Vec<u8>, k: usize, out: &mut Vec<Permutation>) {
            if k <= 1 {
                out.push(Permutation::new(symbols.clone()));
                return;
            }
            for i in 0..k {
                heap(symbols, k - 1, out);
                if k % 2 == 0 {
                    symbols.swap(i, k - 1);
                } else {
                    symbols.swap(0, k - 1);
                }
            }
        }

        let mut symbols: Vec<u8> = (1..=n as u8).collect();
        let mut out = Vec::new();
        heap(&mut symbols, n, &mut out);
        out
    }

    #[test]
    fn test_goal_pattern_length_mismatch() {
        let goal = Permutation::identity(4);
        let pattern = Pattern::parse("---").unwrap();
        assert_eq!(
            Ranker::new(&goal, &pattern),
            Err(RankError::GoalPatternLengthMismatch {
                goal_len: 4,
                pattern_len: 3
            })
        );
    }

    #[test]
    fn test_full_pattern_is_a_bijection() {
        let ranker = ranker(5, "-----");
        let mut hit = vec![false; 120];
        for perm in permutations(5) {
            let rank = ranker.rank(&perm).unwrap().get();
            assert!(rank < 120, "rank {} out of range", rank);
            assert!(!hit[rank], "rank {} assigned twice", rank);
            hit[rank] = true;
        }
        assert!(hit.iter().all(|&h| h));
    }

    #[test]
    fn test_ranks_stay_in_range() {
        for text in ["-*-*", "**--", "----", "****", "-***"] {
            let ranker = ranker(4, text);
            let space = ranker.address_space();
            for perm in permutations(4) {
                let masked = ranker.mask(&perm);
                let rank = ranker.rank(&masked).unwrap().get();
                assert!(rank < space, "pattern {}: rank {} >= {}", text, rank, space);
            }
        }
    }

    #[test]
    fn test_blind_pattern_ranks_everything_to_zero() {
        let ranker = ranker(4, "****");
        assert_eq!(ranker.address_space(), 1);
        for perm in permutations(4) {
            let masked = ranker.mask(&perm);
            assert_eq!(ranker.rank(&masked).unwrap().get(), 0);
        }
    }

    #[test]
    fn test_abstract_equivalence() {
        // two permutations share a rank iff the preserved symbols sit at the
        // same positions in both
        let ranker = ranker(4, "--**");
        for a in permutations(4) {
            for b in permutations(4) {
                let same_placement = (0..4).all(|i| {
                    let sa = a.get(i);
                    let sb = b.get(i);
                    let pa = if sa <= 2 { Some(sa) } else { None };
                    let pb = if sb <= 2 { Some(sb) } else { None };
                    pa == pb
                });
                let ra = ranker.rank(&ranker.mask(&a)).unwrap();
                let rb = ranker.rank(&ranker.mask(&b)).unwrap();
                assert_eq!(ra == rb, same_placement, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_mask_preserves_nonpat() {
        let ranker = ranker(4, "-*--");
        let masked = ranker.mask(&Permutation::new(vec![2, NONPAT, 4, 1]));
        assert_eq!(masked.symbols(), &[NONPAT, NONPAT, 4, 1]);
    }

    #[test]
    fn test_rank_rejects_wrong_length() {
        let ranker = ranker(4, "----");
        let short = Permutation::identity(3);
        assert_eq!(
            ranker.rank(&short),
            Err(RankError::ShapeMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_rank_rejects_malformed_abstract_state() {
        let ranker = ranker(4, "--**");
        // symbol 2 is preserved by the pattern but missing here
        let malformed = Permutation::new(vec![1, NONPAT, NONPAT, NONPAT]);
        assert_eq!(
            ranker.rank(&malformed),
            Err(RankError::ShapeMismatch {
                expected: 2,
                found: 1
            })
        );
    }
}
