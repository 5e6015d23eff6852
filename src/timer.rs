//! Per-level countdown.
//!
//! The countdown only counts; the platform owns the interval that drives it
//! (see [`crate::platform::Platform::start_countdown`]).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting; carries the remaining value.
    Running(u32),
    /// Reached zero on this tick. Reported once.
    Expired,
    /// Tick arrived while stopped (stale interval callback).
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    start: u32,
    remaining: u32,
    running: bool,
}

impl Countdown {
    pub fn new(start: u32) -> Self {
        Self {
            start,
            remaining: start,
            running: false,
        }
    }

    pub fn restart(&mut self) {
        self.remaining = self.start;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            TickOutcome::Expired
        } else {
            TickOutcome::Running(self.remaining)
        }
    }
}
