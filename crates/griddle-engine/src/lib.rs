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

//! # Griddle Engine
//!
//! **The generation engine for griddle pattern databases.**
//!
//! A PDB is filled by one exhaustive backward breadth-first traversal of an
//! abstract state space: seed the abstracted goal, pop states in
//! non-decreasing g-order, record the first g that reaches each output cell,
//! and expand predecessors until the space is exhausted. This crate provides
//! the pieces of that traversal:
//!
//! * **`domain`**: the contract a problem family implements to plug in,
//!   predecessor expansion plus a permutation view of its states. The
//!   generator is monomorphised over it; there is no virtual dispatch in
//!   the hot loop.
//! * **`node`**: an owned (state, g) pair, alive only inside the traversal.
//! * **`open`**: the bucketed monotone priority queue keyed by integer g.
//! * **`generate`**: the generator itself.
//! * **`doctor`**: the post-build self-check on the generated table.
//! * **`stats`** and **`monitor`**: expansion counts, wall-clock timing, and
//!   pluggable progress reporting.

pub mod doctor;
pub mod domain;
pub mod generate;
pub mod monitor;
pub mod node;
pub mod open;
pub mod result;
pub mod stats;
