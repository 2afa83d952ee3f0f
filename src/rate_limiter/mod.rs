use std::time::Duration;
use tokio::time::sleep;

/// Spaces out requests to the ladder site
pub struct RateLimiter {
    delay: Duration,
    request_count: usize,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            request_count: 0,
        }
    }

    /// No delay before the first request, `delay` before every later one
    pub async fn wait(&mut self) {
        if self.request_count > 0 {
            sleep(self.delay).await;
        }
        self.request_count += 1;
    }
}
