//! Fixed-rate frame clock
//!
//! The game runs exactly one simulation tick per displayed frame, so the
//! clock only has to say when the next frame is due. A late frame does not
//! trigger catch-up ticks: the schedule slides forward instead.

use std::time::{Duration, Instant};

use crate::consts::FPS;

/// Time between frames at the game's fixed rate
pub fn frame_period() -> Duration {
    Duration::from_secs_f64(1.0 / FPS as f64)
}

/// Deadline-based frame scheduler
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    next_deadline: Instant,
    frames: u64,
}

impl FrameClock {
    /// Clock whose first frame is due immediately
    pub fn new(now: Instant) -> Self {
        Self::with_period(now, frame_period())
    }

    pub fn with_period(now: Instant, period: Duration) -> Self {
        Self {
            period,
            next_deadline: now,
            frames: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the event loop should wake up next
    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    /// Frames handed out so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns true when a frame is due at `now` and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_deadline {
            return false;
        }
        self.frames += 1;
        self.next_deadline += self.period;
        if now >= self.next_deadline {
            // More than a period behind: drop the backlog
            log::trace!("Frame {} late by {:?}, resyncing", self.frames, now - self.next_deadline);
            self.next_deadline = now + self.period;
        }
        true
    }
}
