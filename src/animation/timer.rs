//! Cancellable periodic timer driven by explicit polling
//!
//! The timer never sleeps or spawns anything. Its owner asks for the next
//! deadline, waits however it likes, and polls with the current instant.
//! Restarting bumps the generation so ticks handed out before the restart
//! can be recognised as stale.

use std::time::{Duration, Instant};

/// One firing of a periodic timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Generation of the timer that fired
    pub generation: u64,
    /// Intervals that elapsed since the previous poll, coalesced into this tick
    pub elapsed_intervals: u32,
}

/// Periodic schedule with cancellation
#[derive(Debug, Clone)]
pub struct PeriodicTimer {
    interval: Duration,
    next_due: Option<Instant>,
    generation: u64,
}

impl PeriodicTimer {
    /// Create a timer that first fires one interval after `now`
    pub fn start(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: Some(now + interval),
            generation: 0,
        }
    }

    /// Create a timer that is not running
    pub const fn stopped(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
            generation: 0,
        }
    }

    /// Stop the timer and invalidate every tick it has issued
    pub const fn cancel(&mut self) {
        self.next_due = None;
        self.generation += 1;
    }

    /// Replace the schedule with a fresh one starting at `now`
    pub fn restart(&mut self, now: Instant) {
        self.cancel();
        self.next_due = Some(now + self.interval);
    }

    /// Whether the timer will fire again
    pub const fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Current generation
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Instant of the next firing, if active
    pub const fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Interval between firings
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Fire if a deadline has passed
    ///
    /// Missed deadlines are coalesced into a single tick, and the schedule
    /// moves to the first deadline after `now` so a slow poller never
    /// receives a burst of ticks.
    pub fn poll(&mut self, now: Instant) -> Option<Tick> {
        let due = self.next_due?;
        if now < due {
            return None;
        }

        let interval_nanos = self.interval.as_nanos();
        let missed = if interval_nanos == 0 {
            1
        } else {
            (now - due).as_nanos() / interval_nanos + 1
        };
        let elapsed_intervals = u32::try_from(missed).unwrap_or(u32::MAX);
        let advance = u32::try_from(missed)
            .ok()
            .and_then(|count| self.interval.checked_mul(count))
            .unwrap_or(now - due + self.interval);
        self.next_due = Some(due + advance.max(self.interval));

        Some(Tick {
            generation: self.generation,
            elapsed_intervals,
        })
    }
}
