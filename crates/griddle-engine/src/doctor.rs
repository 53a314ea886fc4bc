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

//! The post-build self-check.
//!
//! There is no formal way to verify a PDB against ground truth, but a
//! correct MAX generation leaves three cheap fingerprints: the sweep
//! expanded exactly one state per output cell, no cell is vacant, and
//! exactly one cell holds the raw value 1, the abstract goal at true cost
//! zero. The check reports the first violation it finds, with enough
//! context to diagnose it, and leaves acting on it to the caller.

use crate::stats::GenerationStatistics;
use griddle_model::{cell::CellValue, mode::PdbMode, pdb::Pdb};

/// A violated generation invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoctorError {
    /// The number of expansions differs from the output address space.
    AddressSpaceMismatch {
        /// The address space of the output pattern.
        expected: usize,
        /// The number of expansions performed.
        found: usize,
    },
    /// A cell was never written.
    ZeroEntry {
        /// The rank of the first vacant cell.
        index: usize,
    },
    /// The number of cells holding the raw value 1 is not exactly one.
    OneCount {
        /// The number of such cells found.
        found: usize,
    },
}

impl std::fmt::Display for DoctorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DoctorError::AddressSpaceMismatch { expected, found } => write!(
                f,
                "Address space: {} expansions for an abstract space of {}",
                found, expected
            ),
            DoctorError::ZeroEntry { index } => {
                write!(f, "Zero entries found: cell {} was never written", index)
            }
            DoctorError::OneCount { found } => write!(
                f,
                "Number of ones: {} cells hold the goal value, expected exactly one",
                found
            ),
        }
    }
}

impl std::error::Error for DoctorError {}

/// Checks a generated PDB for the fingerprints of a complete MAX sweep.
///
/// The expansion count is compared for every mode; the cell scans apply to
/// MAX tables only, since zero is a legitimate stored value under the
/// (reserved) ADD semantics.
pub fn doctor(pdb: &Pdb, statistics: &GenerationStatistics) -> Result<(), DoctorError> {
    let expected = pdb.address_space();
    if statistics.expansions != expected {
        return Err(DoctorError::AddressSpaceMismatch {
            expected,
            found: statistics.expansions,
        });
    }

    if pdb.mode() != PdbMode::Max {
        return Ok(());
    }

    let mut ones = 0;
    for (index, &raw) in pdb.table().as_bytes().iter().enumerate() {
        let cell = CellValue::from_raw(raw);
        if cell.is_vacant() {
            return Err(DoctorError::ZeroEntry { index });
        }
        if cell.cost() == Some(0) {
            ones += 1;
        }
    }

    if ones != 1 {
        return Err(DoctorError::OneCount { found: ones });
    }

    Ok(())
}
