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

//! # Griddle Pancake
//!
//! **The N-Pancake reference domain.**
//!
//! A state is a permutation of `1..=N` (a stack of pancakes by radius);
//! the operator `flip(k)` reverses the prefix `[0, k]` for `k` in `1..N`,
//! giving every state `N − 1` neighbours. Flips are involutory, so
//! predecessors and successors coincide and the backward generation sweep
//! can reuse forward expansion.
//!
//! Two cost variants are supported:
//!
//! * **unit**: every flip costs one.
//! * **heavy-cost**: a flip costs the radius of the first pancake *below*
//!   the spatula, the full flip costing `N + 1` (the table is never
//!   abstracted away). When the pancake below the spatula has been
//!   abstracted, a precomputed *default cost* stands in; see
//!   [`domain::default_flip_cost`].

pub mod domain;
pub mod variant;

pub use domain::{default_flip_cost, Pancake};
pub use variant::PancakeVariant;
