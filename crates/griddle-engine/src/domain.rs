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

//! The contract a problem family implements to be searchable.

use griddle_model::perm::Permutation;
use smallvec::SmallVec;

/// The expansion buffer filled by [`Domain::predecessors`].
///
/// Small problem instances expand entirely inline; larger ones spill to the
/// heap transparently. The generator reuses one buffer across the whole
/// traversal.
pub type Predecessors<S> = SmallVec<[(u8, S); 16]>;

/// A problem family whose states are (possibly abstracted) permutations.
///
/// Implementations carry their own immutable configuration, such as a cost
/// variant or a default cost, constructed once per PDB and threaded by
/// value, so two generations with different configurations can coexist.
///
/// The engine requires two capabilities:
///
/// * **predecessor expansion**: every state whose forward application of an
///   operator reaches the given state, with the operator's cost. For
///   involutory operators (pancake flips, sliding tiles) predecessors equal
///   successors. Costs must be positive, fit in a byte, and be derivable
///   from the *abstract* state alone.
/// * **a permutation view**: the engine masks and ranks states through it.
pub trait Domain {
    /// The state type traversed by the generator.
    type State: Clone;

    /// Wraps a (possibly abstracted) permutation into a state.
    fn from_permutation(&self, perm: Permutation) -> Self::State;

    /// Borrows the permutation underlying a state.
    fn permutation<'s>(&self, state: &'s Self::State) -> &'s Permutation;

    /// Pushes every `(cost, predecessor)` of `state` into `out`.
    ///
    /// The buffer is cleared by the caller between expansions.
    fn predecessors(&self, state: &Self::State, out: &mut Predecessors<Self::State>);
}
