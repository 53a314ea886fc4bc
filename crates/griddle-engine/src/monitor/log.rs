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

use crate::{monitor::GenerationMonitor, stats::GenerationStatistics};
use std::time::{Duration, Instant};

/// A monitor that prints a throttled progress table to stdout.
///
/// Checking the wall clock on every expansion would dominate the loop, so
/// the clock is consulted only when the expansion count masks to zero; a
/// line is printed when, additionally, the configured interval has passed.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: usize,
    search_space: usize,
}

impl LogMonitor {
    /// Creates a monitor printing at most one line per `log_interval`,
    /// checking the clock whenever `expansions & clock_check_mask == 0`.
    pub fn new(log_interval: Duration, clock_check_mask: usize) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            search_space: 0,
        }
    }

    fn print_header(&self) {
        println!(
            "{:<9} | {:<14} | {:<5} | {:<14} | {:<8}",
            "Elapsed", "Expansions", "g", "Open", "Progress"
        );
        println!("{}", "-".repeat(62));
    }

    fn log_line(&mut self, expansions: usize, g: u8, open: usize) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let progress = if self.search_space > 0 {
            format!("{:.1}%", 100.0 * expansions as f64 / self.search_space as f64)
        } else {
            "?".to_string()
        };

        println!(
            "{:<9} | {:<14} | {:<5} | {:<14} | {:<8}",
            format!("{:.1}s", elapsed),
            expansions,
            g,
            open,
            progress
        );

        self.last_log_time = now;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl GenerationMonitor for LogMonitor {
    fn on_start(&mut self, search_space: usize, _output_space: usize) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.search_space = search_space;
        self.print_header();
    }

    fn on_expansion(&mut self, expansions: usize, g: u8, open: usize) {
        if (expansions & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(expansions, g, open);
        }
    }

    fn on_finish(&mut self, statistics: &GenerationStatistics) {
        println!("{}", "-".repeat(62));
        println!("Generation finished: {}", statistics);
    }

    fn name(&self) -> &str {
        "LogMonitor"
    }
}
