use std::ops::{Add, AddAssign};

/// Success/failure counters of a crawl subtree
///
/// Counters compose by addition: the stats of a subtree are the outcome of
/// each attempted child link plus the stats of every crawled child subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    pub succeeded: u64,
    pub failed: u64,
}

impl CrawlStats {
    /// Stats of a single successfully crawled page
    pub const SUCCESS: Self = Self {
        succeeded: 1,
        failed: 0,
    };

    /// Stats of a single page that could not be crawled
    pub const FAILURE: Self = Self {
        succeeded: 0,
        failed: 1,
    };

    pub fn new(succeeded: u64, failed: u64) -> Self {
        Self { succeeded, failed }
    }

    /// Total number of page outcomes recorded
    pub fn total(&self) -> u64 {
        self.succeeded + self.failed
    }

    /// Percentage of successful outcomes, 0.0 when nothing was attempted
    pub fn success_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            (self.succeeded as f64 / self.total() as f64) * 100.0
        }
    }
}

impl Add for CrawlStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            succeeded: self.succeeded + other.succeeded,
            failed: self.failed + other.failed,
        }
    }
}

impl AddAssign for CrawlStats {
    fn add_assign(&mut self, other: Self) {
        self.succeeded += other.succeeded;
        self.failed += other.failed;
    }
}
