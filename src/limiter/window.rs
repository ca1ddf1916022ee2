//! Rate Window Module
//!
//! Per-identity counter state for the fixed-window rate limiter.

use std::time::{Duration, Instant};

// == Rate Window ==
/// Request count within the current fixed window for one client identity.
#[derive(Debug, Clone)]
pub struct RateWindow {
    /// Requests observed since `window_start`
    pub count: u32,
    /// When the current window began
    pub window_start: Instant,
}

impl RateWindow {
    // == Constructor ==
    /// Creates a fresh window starting now.
    pub fn new() -> Self {
        Self {
            count: 0,
            window_start: Instant::now(),
        }
    }

    // == Is Stale ==
    /// Checks whether the window has outlived `window`.
    ///
    /// A stale window must be reset before it is evaluated or incremented;
    /// a stale entry re-created on next access is behaviorally identical to
    /// one the sweep already removed.
    pub fn is_stale(&self, window: Duration) -> bool {
        self.window_start.elapsed() >= window
    }

    // == Reset ==
    /// Starts a fresh window now, discarding the old count.
    pub fn reset(&mut self) {
        self.count = 0;
        self.window_start = Instant::now();
    }
}

impl Default for RateWindow {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_window_fresh() {
        let window = RateWindow::new();
        assert_eq!(window.count, 0);
        assert!(!window.is_stale(Duration::from_secs(1)));
    }

    #[test]
    fn test_window_goes_stale() {
        let window = RateWindow::new();

        sleep(Duration::from_millis(30));

        assert!(window.is_stale(Duration::from_millis(20)));
        assert!(!window.is_stale(Duration::from_secs(1)));
    }

    #[test]
    fn test_window_reset() {
        let mut window = RateWindow::new();
        window.count = 7;

        sleep(Duration::from_millis(30));
        window.reset();

        assert_eq!(window.count, 0);
        assert!(!window.is_stale(Duration::from_millis(20)));
    }
}
