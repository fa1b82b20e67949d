//! Simulated surface detection.
//!
//! There is no real plane detection: a surface is "found" once, a fixed delay
//! after the session starts. The detector hands out a [`DetectionTicket`] per
//! start; whatever schedules the callback (a `slint::Timer` in the app, a
//! synthetic clock in tests) presents the ticket back when the delay elapses.
//! Tickets from a cancelled or restarted run are ignored.

use std::time::{Duration, Instant};

/// Default delay before the simulated surface is detected.
pub const DEFAULT_DETECTION_DELAY: Duration = Duration::from_millis(2000);

/// Handle for one scheduled detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionTicket(u64);

#[derive(Debug, Clone, Copy)]
struct Pending {
    ticket: DetectionTicket,
    deadline: Instant,
}

#[derive(Debug)]
pub struct SurfaceDetector {
    delay: Duration,
    generation: u64,
    pending: Option<Pending>,
    detected: bool,
}

impl Default for SurfaceDetector {
    fn default() -> Self {
        Self::new(DEFAULT_DETECTION_DELAY)
    }
}

impl SurfaceDetector {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
            detected: false,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Reset the flag and schedule a new detection, superseding any pending one.
    pub fn start(&mut self, now: Instant) -> DetectionTicket {
        self.generation += 1;
        let ticket = DetectionTicket(self.generation);
        self.detected = false;
        self.pending = Some(Pending {
            ticket,
            deadline: now + self.delay,
        });
        ticket
    }

    /// Drop the pending detection and clear the flag.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("pending surface detection cancelled");
        }
        self.detected = false;
    }

    /// Deliver a scheduled detection. Returns `true` only when this call
    /// flipped the flag; stale or repeated tickets are no-ops.
    pub fn fire(&mut self, ticket: DetectionTicket) -> bool {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                self.detected = true;
                true
            }
            _ => false,
        }
    }

    /// Clock-driven alternative to [`fire`](Self::fire).
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if now >= pending.deadline => self.fire(pending.ticket),
            _ => false,
        }
    }

    pub fn is_detected(&self) -> bool {
        self.detected
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending detection, if any.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|pending| pending.deadline.saturating_duration_since(now))
    }
}
