//! Loop pacing policy: linear backoff with bounded uniform jitter.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use jchat::RetryPolicy;
//!
//! let policy = RetryPolicy::default();
//! let delay = policy.delay_for(2, Duration::from_millis(40));
//! assert_eq!(delay, policy.base_delay * 2 + Duration::from_millis(40));
//! ```

use std::time::Duration;

/// Pacing for the conversation loop. Every provider round trip is delayed by
/// `attempts * base_delay + uniform(0, jitter_bound)`, not only failed ones;
/// `limit` bounds how many recoverable failures the loop tolerates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub limit: u32,
    pub base_delay: Duration,
    pub jitter_bound: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            limit: 3,
            base_delay: Duration::from_millis(200),
            jitter_bound: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn with_jitter_bound(mut self, jitter_bound: Duration) -> Self {
        self.jitter_bound = jitter_bound;
        self
    }

    /// Whether another provider round trip is allowed after `attempts`
    /// recoverable failures.
    pub fn allows_retry(&self, attempts: u32) -> bool {
        attempts < self.limit
    }

    pub fn delay_for(&self, attempts: u32, jitter: Duration) -> Duration {
        self.base_delay * attempts + jitter
    }
}
