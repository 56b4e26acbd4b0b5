//! Trial aggregation and the CSV report.
//!
//! Aggregation is split from the timing loops so the averaging and the
//! serialized format can be exercised with stubbed timings.

use std::io::{self, Write};

/// The benchmark size list: 2^1 through 2^max_power.
pub fn sizes(max_power: u32) -> Vec<usize> {
    (1..=max_power).map(|p| 1usize << p).collect()
}

/// Per-size classical timings summed across complete trial sweeps.
#[derive(Debug)]
pub struct TrialAverages {
    sizes: Vec<usize>,
    totals: Vec<u64>,
    trials: u64,
}

impl TrialAverages {
    pub fn new(sizes: Vec<usize>) -> Self {
        let totals = vec![0; sizes.len()];
        Self {
            sizes,
            totals,
            trials: 0,
        }
    }

    /// Record one complete sweep of per-size timings, in milliseconds.
    ///
    /// # Panics
    ///
    /// Panics unless `timings` covers every configured size, in order.
    pub fn record_trial(&mut self, timings: &[u64]) {
        assert_eq!(
            timings.len(),
            self.sizes.len(),
            "a trial must time every configured size"
        );
        for (total, &ms) in self.totals.iter_mut().zip(timings) {
            *total += ms;
        }
        self.trials += 1;
    }

    /// Per-size averages over the recorded trials, truncated by integer
    /// division.
    ///
    /// # Panics
    ///
    /// Panics if no trial has been recorded.
    pub fn averages(&self) -> Vec<u64> {
        assert!(self.trials > 0, "no trials recorded");
        self.totals.iter().map(|t| t / self.trials).collect()
    }

    /// Write the two-row CSV report: `Name,<sizes...>` then
    /// `Classical,<averages...>`.
    pub fn write_csv<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "Name")?;
        for n in &self.sizes {
            write!(out, ",{n}")?;
        }
        writeln!(out)?;

        write!(out, "Classical")?;
        for avg in self.averages() {
            write!(out, ",{avg}")?;
        }
        writeln!(out)
    }
}
