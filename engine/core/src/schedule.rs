//! Tick Pacing
//!
//! The engine never owns a timer. A surface's event loop asks the [`Pacer`]
//! whether a tick is due and, if so, calls `step()` once. The pacer never
//! sleeps; it only compares instants handed to it.
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use sortstep_core::Pacer;
//!
//! let mut pacer = Pacer::new(Duration::from_millis(100));
//! let start = Instant::now();
//! pacer.arm(start);
//!
//! assert!(!pacer.poll(start));
//! assert!(pacer.poll(start + Duration::from_millis(100)));
//! ```

use std::time::{Duration, Instant};

/// Shortest allowed delay between ticks (milliseconds)
pub const MIN_DELAY_MS: u64 = 1;

/// Longest allowed delay between ticks (milliseconds)
pub const MAX_DELAY_MS: u64 = 500;

/// Default delay between ticks (milliseconds)
pub const DEFAULT_DELAY_MS: u64 = 400;

/// Whether `delay_ms` is an accepted tick delay
#[must_use]
pub fn delay_in_range(delay_ms: u64) -> bool {
    (MIN_DELAY_MS..=MAX_DELAY_MS).contains(&delay_ms)
}

/// Periodic tick trigger driven by caller-supplied instants
#[derive(Clone, Debug)]
pub struct Pacer {
    delay: Duration,
    /// When the next tick is due; `None` while no run is scheduled
    next_due: Option<Instant>,
}

impl Pacer {
    /// Create a disarmed pacer; `delay` is clamped to the allowed range
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay: clamp_delay(delay),
            next_due: None,
        }
    }

    /// Current delay between ticks
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the delay; an armed pacer keeps its current due instant
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = clamp_delay(delay);
    }

    /// Schedule the first tick one delay after `now`
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.delay);
    }

    /// Stop scheduling ticks
    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    /// Whether ticks are being scheduled
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// When the next tick is due
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Time left until the next tick (zero if overdue)
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Whether a tick is due at `now`
    ///
    /// Returns `true` at most once per delay. A late poll does not cause a
    /// burst of catch-up ticks; the next tick is scheduled from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.delay);
                true
            }
            _ => false,
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DELAY_MS))
    }
}

fn clamp_delay(delay: Duration) -> Duration {
    delay.clamp(
        Duration::from_millis(MIN_DELAY_MS),
        Duration::from_millis(MAX_DELAY_MS),
    )
}
