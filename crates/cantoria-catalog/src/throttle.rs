//! Request throttling for upstream calls.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Duration, Instant};

/// Minimum-interval throttle for calls to an external service.
///
/// Consecutive acquisitions are spaced at least
/// `1 / requests_per_second` apart. A throttle only delays a request;
/// it never re-issues one.
#[derive(Debug, Clone)]
pub struct Throttle {
    next_slot: Arc<Mutex<Option<Instant>>>,
    interval: Duration,
}

impl Throttle {
    /// Creates a throttle allowing at most `requests_per_second`
    /// requests per second.
    #[must_use]
    pub fn new(requests_per_second: u32) -> Self {
        Self {
            next_slot: Arc::new(Mutex::new(None)),
            interval: Duration::from_millis(1000 / u64::from(requests_per_second.max(1))),
        }
    }

    /// Waits until the next request slot is available.
    pub async fn acquire(&self) {
        let slot = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            let at = match *next {
                Some(at) if at > now => at,
                _ => now,
            };
            *next = Some(at + self.interval);
            at
        };
        sleep_until(slot).await;
    }
}
