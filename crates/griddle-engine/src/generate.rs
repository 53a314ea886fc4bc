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

//! The backward brute-force generator.
//!
//! Generation runs one Dijkstra-flavoured sweep *backwards* from the goal
//! through the abstract space induced by the c-pattern, while recording
//! costs into the table keyed by the p-pattern:
//!
//! 1. Abstract the goal with the c-pattern and seed it at g = 1 (the
//!    offset-by-one of the cell encoding: "seen with true cost 0").
//! 2. Pop the least-g node. Skip it if its c-abstract state is closed;
//!    otherwise close it by writing its g into the c-table.
//! 3. Abstract the state further with the p-pattern; if that output cell is
//!    still vacant, record this g. Nodes pop in non-decreasing g, so the
//!    first writer holds the minimum cost.
//! 4. Expand predecessors, dropping children that are already closed and
//!    failing on byte overflow of the cumulative g.
//!
//! When the c-pattern and the p-pattern coincide the sweep visits every
//! output cell exactly once; when the c-pattern is strictly finer, several
//! searched states project onto each output cell and the first (cheapest)
//! one wins.

use crate::{
    domain::{Domain, Predecessors},
    monitor::GenerationMonitor,
    node::Node,
    open::{BucketQueue, QueueError},
    result::GenerationOutcome,
    stats::GenerationStatistics,
};
use griddle_model::{
    mode::PdbMode,
    pattern::Pattern,
    pdb::{Pdb, PdbError},
    perm::Permutation,
    ranker::RankError,
    table::PdbTable,
};
use std::time::Instant;

/// The error raised when generation cannot complete.
///
/// All of these are fatal to the run; the partially filled table is
/// discarded with the generator.
#[derive(Debug)]
pub enum GenerateError {
    /// A predecessor's cumulative cost left the byte range.
    CostOverflow {
        /// The g-value of the expanded node.
        g: u8,
        /// The operator cost that could not be added.
        delta: u8,
    },
    /// The open list failed.
    Queue(QueueError),
    /// A state could not be masked or ranked.
    Rank(RankError),
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::CostOverflow { g, delta } => write!(
                f,
                "Cost overflow: {} + {} exceeds the byte range of g-values",
                g, delta
            ),
            GenerateError::Queue(e) => write!(f, "{}", e),
            GenerateError::Rank(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Queue(e) => Some(e),
            GenerateError::Rank(e) => Some(e),
            GenerateError::CostOverflow { .. } => None,
        }
    }
}

impl From<QueueError> for GenerateError {
    fn from(e: QueueError) -> Self {
        GenerateError::Queue(e)
    }
}

impl From<RankError> for GenerateError {
    fn from(e: RankError) -> Self {
        GenerateError::Rank(e)
    }
}

/// A single-use PDB generator for one domain instance.
///
/// Construction validates the goal and both patterns and allocates the
/// output table; [`Generator::generate`] consumes the generator and returns
/// the filled PDB together with its statistics.
///
/// # Examples
///
/// ```no_run
/// # use griddle_engine::{generate::Generator, monitor::NoOpMonitor};
/// # use griddle_model::{mode::PdbMode, pattern::Pattern, perm::Permutation};
/// # fn demo<D: griddle_engine::domain::Domain>(domain: D) {
/// let goal = Permutation::identity(8);
/// let pattern: Pattern = "---*----".parse().unwrap();
///
/// let generator =
///     Generator::new(domain, PdbMode::Max, goal, pattern.clone(), pattern).unwrap();
/// let outcome = generator.generate(&mut NoOpMonitor).unwrap();
/// println!("{}", outcome.statistics());
/// # }
/// ```
pub struct Generator<D>
where
    D: Domain,
{
    domain: D,
    pdb: Pdb,
}

impl<D> Generator<D>
where
    D: Domain,
{
    /// Creates a generator for the given goal and patterns.
    ///
    /// Fails fast on an abstract goal, mismatched lengths, or a c-pattern
    /// that does not cover the p-pattern (generation would silently
    /// under-populate the table otherwise).
    pub fn new(
        domain: D,
        mode: PdbMode,
        goal: Permutation,
        p_pattern: Pattern,
        c_pattern: Pattern,
    ) -> Result<Self, PdbError> {
        let pdb = Pdb::new(mode, goal, p_pattern, c_pattern)?;
        Ok(Self { domain, pdb })
    }

    /// Returns the PDB being generated.
    #[inline]
    pub fn pdb(&self) -> &Pdb {
        &self.pdb
    }

    /// Runs the backward sweep to completion and returns the filled PDB.
    pub fn generate<M>(self, monitor: &mut M) -> Result<GenerationOutcome, GenerateError>
    where
        M: GenerationMonitor,
    {
        let Generator { domain, mut pdb } = self;
        let goal = pdb.goal().clone();

        // the closed set is itself a PDB table, keyed by the c-pattern
        let closed = PdbTable::new(&goal, pdb.c_pattern())?;

        monitor.on_start(closed.address_space(), pdb.address_space());

        // every g fits in a byte, so the bucket range is known up front
        let open = BucketQueue::with_buckets(1 + u8::MAX as usize)?;

        let session = GenerationSession {
            domain: &domain,
            output: pdb.table_mut(),
            closed,
            open,
            statistics: GenerationStatistics::new(),
            monitor: &mut *monitor,
        };
        let statistics = session.run(goal)?;

        monitor.on_finish(&statistics);
        Ok(GenerationOutcome::new(pdb, statistics))
    }
}

/// The working state of one generation run.
struct GenerationSession<'a, D, M>
where
    D: Domain,
    M: GenerationMonitor,
{
    domain: &'a D,
    output: &'a mut PdbTable,
    closed: PdbTable,
    open: BucketQueue<D::State>,
    statistics: GenerationStatistics,
    monitor: &'a mut M,
}

impl<'a, D, M> GenerationSession<'a, D, M>
where
    D: Domain,
    M: GenerationMonitor,
{
    fn run(mut self, goal: Permutation) -> Result<GenerationStatistics, GenerateError> {
        let start = Instant::now();

        // seed with the abstract goal at g = 1, the offset-by-one form of
        // "reached at true cost 0"
        let abstract_goal = self.closed.mask(&goal);
        self.open
            .insert(Node::new(self.domain.from_permutation(abstract_goal), 1))?;

        let mut successors: Predecessors<D::State> = Predecessors::new();

        while !self.open.is_empty() {
            let node = self.open.pop_front()?;
            let perm = self.domain.permutation(node.state());

            // abstract search spaces generate masses of duplicates; a state
            // that is closed already had all its children enqueued
            if self.closed.find(perm)?.is_some() {
                continue;
            }
            self.closed.insert(perm, node.g())?;

            // project into the output space; popping in non-decreasing g
            // makes the first writer the minimum
            let projected = self.output.mask(perm);
            if self.output.find(&projected)?.is_none() {
                self.output.insert(&projected, node.g())?;
            }

            self.statistics.expansions += 1;
            self.monitor
                .on_expansion(self.statistics.expansions, node.g(), self.open.len());

            successors.clear();
            self.domain.predecessors(node.state(), &mut successors);
            for (delta, child) in successors.drain(..) {
                if self.closed.find(self.domain.permutation(&child))?.is_some() {
                    continue;
                }

                let g = node
                    .g()
                    .checked_add(delta)
                    .ok_or(GenerateError::CostOverflow {
                        g: node.g(),
                        delta,
                    })?;
                self.open.insert(Node::new(child, g))?;
            }
        }

        self.statistics.elapsed = start.elapsed();
        Ok(self.statistics)
    }
}
