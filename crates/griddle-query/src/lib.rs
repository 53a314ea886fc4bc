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

//! # Griddle Query
//!
//! **The query facade over one or more PDB files.**
//!
//! Several PDBs built toward the same goal can be combined into a stronger
//! admissible heuristic: under MAX semantics, the largest of their values.
//! This crate loads an ordered list of PDB files, enforces that they agree
//! on goal and mode, and evaluates concrete permutations against all of
//! them in one call. Front-ends that only print metadata can walk the
//! loaded PDBs without querying.
//!
//! See `portfolio` for the `PdbPortfolio` type.

pub mod portfolio;

pub use portfolio::{PdbPortfolio, QueryError};
