//! Timers the pipeline driver can sleep on.
//!
//! - [`ManualTimer`] - virtual clock, returns immediately (tests, `--instant`)
//! - [`TokioTimer`] - real delays on the tokio runtime (CLI)
//!
//! The page provides its own browser timer.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::time::Duration;

pub trait Timer {
    /// Resolve after `delay`.
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()>;
}

/// Virtual clock that fast-forwards through every delay.
#[derive(Debug, Default)]
pub struct ManualTimer {
    elapsed: Cell<Duration>,
    delays: RefCell<Vec<Duration>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all delays slept so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    /// Every delay requested, in order.
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.borrow().clone()
    }
}

impl Timer for ManualTimer {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()> {
        self.elapsed.set(self.elapsed.get() + delay);
        self.delays.borrow_mut().push(delay);
        std::future::ready(())
    }
}

/// Real delays on the tokio runtime.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[cfg(feature = "cli")]
impl Timer for TokioTimer {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_timer_accumulates() {
        let timer = ManualTimer::new();
        futures::executor::block_on(async {
            timer.sleep(Duration::from_millis(1500)).await;
            timer.sleep(Duration::from_millis(500)).await;
        });
        assert_eq!(timer.elapsed(), Duration::from_millis(2000));
        assert_eq!(timer.delays().len(), 2);
    }

    #[cfg(feature = "cli")]
    #[tokio::test(start_paused = true)]
    async fn test_tokio_timer_waits() {
        let start = tokio::time::Instant::now();
        TokioTimer.sleep(Duration::from_millis(1500)).await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }
}
