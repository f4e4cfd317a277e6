//! Request pacing
//!
//! The crawler issues one request at a time. `RequestPacer` enforces a
//! minimum interval between the starts of two successive fetches so a crawl
//! never hits the documentation host faster than the configured rate.

use std::time::Duration;
use tokio::time::Instant;

/// Minimum-interval rate limiter shared by every fetch of a run
#[derive(Debug, Clone)]
pub struct RequestPacer {
    /// Minimum time between the starts of two successive fetches
    min_interval: Duration,

    /// When the previous fetch started
    last_request: Option<Instant>,
}

impl RequestPacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: None,
        }
    }

    /// A pacer that never waits
    pub fn unlimited() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Time left before the next fetch may start
    pub fn remaining_wait(&self, now: Instant) -> Duration {
        match self.last_request {
            Some(last) => self
                .min_interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Waits until the next fetch may start, then records it as started
    ///
    /// The first call never waits. The pause is not cancellable and blocks
    /// the crawl for its whole duration.
    pub async fn wait_turn(&mut self) {
        let wait = self.remaining_wait(Instant::now());
        if !wait.is_zero() {
            tracing::trace!("Pacing: waiting {:?} before next request", wait);
            tokio::time::sleep(wait).await;
        }
        self.last_request = Some(Instant::now());
    }
}
