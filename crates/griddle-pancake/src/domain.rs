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

//! The N-Pancake domain.

use crate::variant::PancakeVariant;
use griddle_engine::domain::{Domain, Predecessors};
use griddle_model::{
    pattern::Pattern,
    perm::{Permutation, NONPAT},
};

/// Computes the default flip cost for a goal and the pattern traversed
/// during generation.
///
/// The default stands in for the radius of an abstracted pancake, so it is
/// the minimum symbol among the abstracted positions: any smaller stand-in
/// could not correspond to one of the abstracted pancakes, any larger one
/// would break admissibility. The fold starts from `u8::MAX`, which makes
/// two boundary cases come out right: with everything abstracted the result
/// is the minimum symbol of the goal, and with nothing abstracted the
/// default is never consulted.
///
/// # Examples
///
/// ```rust
/// # use griddle_model::{pattern::Pattern, perm::Permutation};
/// # use griddle_pancake::default_flip_cost;
///
/// let goal = Permutation::identity(5);
/// let pattern: Pattern = "--*-*".parse().unwrap();
/// assert_eq!(default_flip_cost(&goal, &pattern), 3);
/// ```
pub fn default_flip_cost(goal: &Permutation, pattern: &Pattern) -> u8 {
    let mut cost = u8::MAX;
    for position in 0..goal.len() {
        let symbol = goal.get(position);
        if !pattern.is_preserved(position) && symbol < cost {
            cost = symbol;
        }
    }
    cost
}

/// The N-Pancake domain: permutation states under prefix reversals.
///
/// The cost variant and the default flip cost are immutable configuration,
/// bundled here and threaded by value, so PDBs of different variants can be
/// generated side by side. The default cost is computed by the caller,
/// against the pattern traversed during generation, and passed in; see
/// [`default_flip_cost`].
///
/// # Examples
///
/// ```rust
/// # use griddle_pancake::{Pancake, PancakeVariant};
///
/// let unit = Pancake::unit();
/// assert_eq!(unit.variant(), PancakeVariant::Unit);
///
/// let heavy = Pancake::heavy_cost(3);
/// assert_eq!(heavy.default_cost(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pancake {
    variant: PancakeVariant,
    default_cost: u8,
}

impl Pancake {
    /// Creates the domain with an explicit variant and default cost.
    pub fn new(variant: PancakeVariant, default_cost: u8) -> Self {
        Self {
            variant,
            default_cost,
        }
    }

    /// Creates the unit-cost domain.
    pub fn unit() -> Self {
        Self::new(PancakeVariant::Unit, 1)
    }

    /// Creates the heavy-cost domain with the given default flip cost.
    pub fn heavy_cost(default_cost: u8) -> Self {
        Self::new(PancakeVariant::HeavyCost, default_cost)
    }

    /// Returns the cost variant.
    #[inline]
    pub fn variant(&self) -> PancakeVariant {
        self.variant
    }

    /// Returns the default flip cost.
    #[inline]
    pub fn default_cost(&self) -> u8 {
        self.default_cost
    }

    /// Reverses the positions `[0, k]` of `perm`.
    fn flip(perm: &Permutation, k: usize) -> Permutation {
        let mut flipped = perm.clone();
        flipped.symbols_mut()[..=k].reverse();
        flipped
    }

    /// Returns the cost of `flip(k)` applied to `perm`.
    ///
    /// Under unit costs every flip is one. Under heavy costs the flip costs
    /// the radius of the pancake below the spatula, `perm[k + 1]`; the full
    /// flip rests on the table and costs `N + 1`; an abstracted pancake
    /// below the spatula costs the configured default.
    fn flip_cost(&self, perm: &Permutation, k: usize) -> u8 {
        match self.variant {
            PancakeVariant::Unit => 1,
            PancakeVariant::HeavyCost => {
                let n = perm.len();
                if k == n - 1 {
                    (n + 1) as u8
                } else {
                    let below = perm.get(k + 1);
                    if below == NONPAT {
                        self.default_cost
                    } else {
                        below
                    }
                }
            }
        }
    }
}

impl Domain for Pancake {
    type State = Permutation;

    #[inline]
    fn from_permutation(&self, perm: Permutation) -> Permutation {
        perm
    }

    #[inline]
    fn permutation<'s>(&self, state: &'s Permutation) -> &'s Permutation {
        state
    }

    fn predecessors(&self, state: &Permutation, out: &mut Predecessors<Permutation>) {
        // flips are involutory: the predecessors are the successors
        for k in 1..state.len() {
            out.push((self.flip_cost(state, k), Self::flip(state, k)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn children(domain: &Pancake, perm: &[u8]) -> Vec<(u8, Vec<u8>)> {
        let mut out = Predecessors::new();
        domain.predecessors(&Permutation::new(perm.to_vec()), &mut out);
        out.into_iter()
            .map(|(cost, child)| (cost, child.symbols().to_vec()))
            .collect()
    }

    #[test]
    fn test_flip_reverses_a_prefix() {
        let children = children(&Pancake::unit(), &[1, 2, 3, 4, 5]);
        assert_eq!(children.len(), 4);
        assert_eq!(children[0].1, vec![2, 1, 3, 4, 5]);
        assert_eq!(children[1].1, vec![3, 2, 1, 4, 5]);
        assert_eq!(children[3].1, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_unit_costs() {
        for (cost, _) in children(&Pancake::unit(), &[3, 1, 4, 2]) {
            assert_eq!(cost, 1);
        }
    }

    #[test]
    fn test_heavy_costs_read_below_the_spatula() {
        // flip(k) costs perm[k + 1], except the full flip which costs N + 1
        let children = children(&Pancake::heavy_cost(1), &[2, 1, 5, 4, 3]);
        let costs: Vec<u8> = children.iter().map(|(cost, _)| *cost).collect();
        assert_eq!(costs, vec![5, 4, 3, 6]);
    }

    #[test]
    fn test_heavy_cost_falls_back_on_the_default() {
        let children = children(&Pancake::heavy_cost(7), &[2, 1, NONPAT, 4, NONPAT]);
        let costs: Vec<u8> = children.iter().map(|(cost, _)| *cost).collect();
        // positions 2 and 4 are abstracted; the full flip still costs N + 1
        assert_eq!(costs, vec![7, 4, 7, 6]);
    }

    #[test]
    fn test_heavy_cost_is_flip_symmetric() {
        // the pancake below the spatula is untouched by the flip, so the
        // inverse application costs the same
        let domain = Pancake::heavy_cost(1);
        let perm = Permutation::new(vec![4, 2, 5, 1, 3]);
        for k in 1..perm.len() {
            let flipped = Pancake::flip(&perm, k);
            assert_eq!(domain.flip_cost(&perm, k), domain.flip_cost(&flipped, k));
        }
    }

    #[test]
    fn test_default_flip_cost_takes_the_minimum_abstracted_symbol() {
        let goal = Permutation::identity(8);
        let pattern: Pattern = "---*----".parse().unwrap();
        assert_eq!(default_flip_cost(&goal, &pattern), 4);

        let pattern: Pattern = "-***----".parse().unwrap();
        assert_eq!(default_flip_cost(&goal, &pattern), 2);
    }

    #[test]
    fn test_default_flip_cost_boundaries() {
        let goal = Permutation::new(vec![3, 1, 2]);

        // everything abstracted: the minimum symbol of the goal
        let blind: Pattern = "***".parse().unwrap();
        assert_eq!(default_flip_cost(&goal, &blind), 1);

        // nothing abstracted: the fold start, never consulted
        let full: Pattern = "---".parse().unwrap();
        assert_eq!(default_flip_cost(&goal, &full), u8::MAX);
    }
}

#[cfg(test)]
mod generation_tests {
    //! End-to-end generation scenarios driving the engine with this domain.

    use super::*;
    use griddle_engine::{
        doctor::DoctorError,
        generate::{GenerateError, Generator},
        monitor::NoOpMonitor,
        result::GenerationOutcome,
    };
    use griddle_model::{cell::CellValue, codec, index::PdbIndex, mode::PdbMode};
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn generate(domain: Pancake, n: usize, p_pattern: &str, c_pattern: &str) -> GenerationOutcome {
        let generator = Generator::new(
            domain,
            PdbMode::Max,
            Permutation::identity(n),
            p_pattern.parse().unwrap(),
            c_pattern.parse().unwrap(),
        )
        .unwrap();
        generator.generate(&mut NoOpMonitor).unwrap()
    }

    fn random_permutations(n: usize, count: usize, seed: u64) -> Vec<Permutation> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut symbols: Vec<u8> = (1..=n as u8).collect();
        (0..count)
            .map(|_| {
                symbols.shuffle(&mut rng);
                Permutation::new(symbols.clone())
            })
            .collect()
    }

    #[test]
    fn test_unit_4_pancake_full_pattern() {
        let outcome = generate(Pancake::unit(), 4, "----", "----");
        let pdb = outcome.pdb();

        assert_eq!(pdb.address_space(), 24);
        assert_eq!(outcome.statistics().expansions, 24);
        assert_eq!(outcome.doctor(), Ok(()));

        // exactly one cell holds the abstract goal at true cost zero
        let ones = pdb
            .table()
            .as_bytes()
            .iter()
            .filter(|&&raw| CellValue::from_raw(raw).cost() == Some(0))
            .count();
        assert_eq!(ones, 1);
        assert_eq!(pdb.value(pdb.goal()).unwrap(), Some(0));

        // one flip solves the fully reversed stack
        let reversed = Permutation::new(vec![4, 3, 2, 1]);
        assert_eq!(pdb.value(&reversed).unwrap(), Some(1));
    }

    #[test]
    fn test_unit_8_pancake_partial_pattern_dominance() {
        let full = generate(Pancake::unit(), 8, "--------", "--------");
        let partial = generate(Pancake::unit(), 8, "---*----", "---*----");

        assert_eq!(partial.pdb().address_space(), 40320);
        assert_eq!(full.doctor(), Ok(()));
        assert_eq!(partial.doctor(), Ok(()));

        // the finer abstraction dominates the coarser one everywhere
        for perm in random_permutations(8, 200, 0x5eed) {
            let h_full = full.pdb().value(&perm).unwrap().unwrap();
            let h_partial = partial.pdb().value(&perm).unwrap().unwrap();
            assert!(
                h_full >= h_partial,
                "{}: full {} < partial {}",
                perm,
                h_full,
                h_partial
            );
        }
    }

    #[test]
    fn test_heavy_cost_overflow_aborts_generation() {
        let generator = Generator::new(
            Pancake::heavy_cost(150),
            PdbMode::Max,
            Permutation::identity(8),
            "-*******".parse().unwrap(),
            "-*******".parse().unwrap(),
        )
        .unwrap();

        assert!(matches!(
            generator.generate(&mut NoOpMonitor),
            Err(GenerateError::CostOverflow { .. })
        ));
    }

    #[test]
    fn test_write_read_round_trip() {
        let outcome = generate(Pancake::unit(), 8, "--****--", "--****--");
        assert_eq!(outcome.doctor(), Ok(()));
        let pdb = outcome.pdb();

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before the epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "griddle-pancake-{}-{}.max",
            std::process::id(),
            nanos
        ));

        codec::write(pdb, &path).unwrap();
        let loaded = codec::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.address_space(), pdb.address_space());
        for i in 0..pdb.address_space() {
            let index = PdbIndex::new(i);
            assert_eq!(loaded.table()[index], pdb.table()[index], "cell {}", i);
        }
    }

    #[test]
    fn test_finer_search_pattern_still_fills_the_table() {
        // searching the space of "--******" while storing into "-*******"
        let outcome = generate(Pancake::unit(), 8, "-*******", "--******");
        let pdb = outcome.pdb();

        assert!(pdb
            .table()
            .as_bytes()
            .iter()
            .all(|&raw| CellValue::from_raw(raw).is_occupied()));

        // one state per *searched* cell was expanded, so the doctor's
        // expansion check reports the discrepancy with the output space
        assert_eq!(outcome.statistics().expansions, 8 * 7);
        assert!(matches!(
            outcome.doctor(),
            Err(DoctorError::AddressSpaceMismatch { .. })
        ));

        // costs found through the finer space can never undercut the ones
        // found searching the output space directly
        let direct = generate(Pancake::unit(), 8, "-*******", "-*******");
        for i in 0..pdb.address_space() {
            let index = PdbIndex::new(i);
            assert!(pdb.table()[index] >= direct.pdb().table()[index]);
        }
    }

    #[test]
    fn test_heavy_cost_generation_stays_admissible() {
        let outcome = generate(Pancake::heavy_cost(1), 4, "----", "----");
        assert_eq!(outcome.doctor(), Ok(()));
        let pdb = outcome.pdb();

        // the reversed stack is one full flip away, which costs N + 1
        let reversed = Permutation::new(vec![4, 3, 2, 1]);
        assert_eq!(pdb.value(&reversed).unwrap(), Some(5));
    }

    #[test]
    fn test_incompatible_patterns_fail_fast() {
        let result = Generator::new(
            Pancake::unit(),
            PdbMode::Max,
            Permutation::identity(4),
            "--**".parse().unwrap(),
            "-***".parse().unwrap(),
        );
        assert!(matches!(
            result,
            Err(griddle_model::pdb::PdbError::IncompatiblePatterns { .. })
        ));
    }
}
