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

//! Progress reporting for the generator.
//!
//! Monitors observe the traversal without influencing it. The generator
//! calls the hooks from its hot loop, so implementations throttle their own
//! output; see [`LogMonitor`] for the clock-mask idiom that keeps the
//! common case to a single bitwise test.

pub mod log;
pub mod no_op;

pub use log::LogMonitor;
pub use no_op::NoOpMonitor;

use crate::stats::GenerationStatistics;

/// Observer hooks driven by the generation traversal.
///
/// All hooks default to doing nothing, so implementations override only
/// what they report on.
pub trait GenerationMonitor {
    /// Called once before the traversal, with the sizes of the searched
    /// (c-pattern) and output (p-pattern) address spaces.
    fn on_start(&mut self, search_space: usize, output_space: usize) {
        let _ = (search_space, output_space);
    }

    /// Called after each expansion with the running expansion count, the
    /// g-value just expanded, and the number of nodes on the open list.
    fn on_expansion(&mut self, expansions: usize, g: u8, open: usize) {
        let _ = (expansions, g, open);
    }

    /// Called once after the open list drains.
    fn on_finish(&mut self, statistics: &GenerationStatistics) {
        let _ = statistics;
    }

    /// A short name identifying the monitor.
    fn name(&self) -> &str;
}
