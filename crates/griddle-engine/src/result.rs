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

use crate::{
    doctor::{self, DoctorError},
    stats::GenerationStatistics,
};
use griddle_model::pdb::Pdb;

/// A generated PDB together with the statistics of its generation.
///
/// Doctor verification is deliberately separate from generation: its
/// failures are returned as data so the caller can decide to write the PDB
/// anyway, with a warning, or to discard it.
#[derive(Debug)]
pub struct GenerationOutcome {
    pdb: Pdb,
    statistics: GenerationStatistics,
}

impl GenerationOutcome {
    /// Bundles a generated PDB with its statistics.
    pub fn new(pdb: Pdb, statistics: GenerationStatistics) -> Self {
        Self { pdb, statistics }
    }

    /// Returns the generated PDB.
    #[inline]
    pub fn pdb(&self) -> &Pdb {
        &self.pdb
    }

    /// Returns the statistics of the generation run.
    #[inline]
    pub fn statistics(&self) -> &GenerationStatistics {
        &self.statistics
    }

    /// Runs the post-build self-check on the generated table.
    pub fn doctor(&self) -> Result<(), DoctorError> {
        doctor::doctor(&self.pdb, &self.statistics)
    }

    /// Consumes the outcome, returning the PDB.
    #[inline]
    pub fn into_pdb(self) -> Pdb {
        self.pdb
    }

    /// Consumes the outcome, returning both parts.
    #[inline]
    pub fn into_parts(self) -> (Pdb, GenerationStatistics) {
        (self.pdb, self.statistics)
    }
}

impl std::fmt::Display for GenerationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.pdb, self.statistics)
    }
}
