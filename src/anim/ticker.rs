//! Cancellable tick source shared by the animation drivers.
//!
//! A [`Ticker`] is a subscription to a fixed-period clock. The subscription
//! ends when its [`CancellationToken`] is cancelled; every pending or future
//! call to [`Ticker::tick`] then returns `false`.

use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Shortest period a ticker accepts. tokio rejects zero-length intervals.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Fixed-period clock bound to a cancellation token
pub struct Ticker {
    interval: Interval,
    token: CancellationToken,
}

impl Ticker {
    /// Subscribe to a clock with the given period.
    ///
    /// The first tick fires one full period after creation, never immediately.
    pub fn new(period: Duration, token: CancellationToken) -> Self {
        let period = period.max(MIN_PERIOD);
        let mut interval = interval_at(Instant::now() + period, period);
        // A stalled event loop should slow the animation down, not replay a burst of frames
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval, token }
    }

    /// Wait for the next tick. Returns `false` once the subscription is cancelled.
    pub async fn tick(&mut self) -> bool {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => false,
            _ = self.interval.tick() => !self.token.is_cancelled(),
        }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

/// Sleep for `duration` unless `token` is cancelled first.
///
/// Returns `true` when the full delay elapsed.
pub async fn sleep_unless_cancelled(duration: Duration, token: &CancellationToken) -> bool {
    tokio::select! {
        biased;
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(duration) => !token.is_cancelled(),
    }
}
