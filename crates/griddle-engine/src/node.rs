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

/// A search node: an owned state and its g-value.
///
/// Nodes live only in the open list and die either discarded as duplicates
/// or recorded into the table. The g-value carries the offset-by-one of the
/// cell encoding, so it is always at least one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<S> {
    state: S,
    g: u8,
}

impl<S> Node<S> {
    /// Creates a node from a state and its g-value.
    #[inline]
    pub fn new(state: S, g: u8) -> Self {
        Self { state, g }
    }

    /// Returns the g-value.
    #[inline]
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Borrows the state.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Consumes the node, returning the state.
    #[inline]
    pub fn into_state(self) -> S {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let node = Node::new("state", 3);
        assert_eq!(node.g(), 3);
        assert_eq!(*node.state(), "state");
        assert_eq!(node.into_state(), "state");
    }
}
