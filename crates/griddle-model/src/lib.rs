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

//! # Griddle Model
//!
//! **The data model for griddle pattern databases.**
//!
//! A pattern database (PDB) is a complete table of minimum path costs from
//! every *abstract* state of a permutation puzzle to a fixed goal. This crate
//! defines everything a PDB is made of, independent of how it is generated:
//!
//! * **`perm`**: permutations over byte symbols, with the `NONPAT` sentinel
//!   marking abstracted positions.
//! * **`pattern`**: the `-`/`*` masks that carve an abstract state space out
//!   of the concrete one, and the size of the address space they induce.
//! * **`ranker`**: the Myrvold–Ruskey perfect ranking of (partial)
//!   permutations, giving every abstract state a dense table index.
//! * **`table`**: the packed byte table addressed by ranks.
//! * **`cell`**: the offset-by-one cell encoding that distinguishes vacant
//!   entries from zero-cost entries in a single byte.
//! * **`pdb`**: the `Pdb` aggregate tying a mode, a goal, two patterns, and a
//!   table together.
//! * **`codec`**: the on-disk binary format, reader and writer.
//!
//! ## Design Philosophy
//!
//! 1. **Validate eagerly.** Goals, patterns, and their compatibility are
//!    checked when a `Pdb` is constructed, never inside the ranking hot path.
//! 2. **One allocation.** A table owns exactly one dense byte buffer sized by
//!    the address space of its pattern; ranks index it directly.
//! 3. **Immutable derivations.** Rankers are built once from a goal and a
//!    pattern and never change afterwards.

pub mod cell;
pub mod codec;
pub mod index;
pub mod mode;
pub mod pattern;
pub mod pdb;
pub mod perm;
pub mod ranker;
pub mod table;
