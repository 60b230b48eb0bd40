//! Browser timer for the simulated pipeline.

use std::future::Future;
use std::time::Duration;

use notesynth::Timer;

/// `setTimeout`-backed timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(delay)
    }
}
