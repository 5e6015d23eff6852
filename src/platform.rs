//! Clock, timers and randomness the controller needs from its host.

use crate::controller::GameEvent;
use crate::rng::RandomSource;

pub trait Platform: RandomSource {
    /// Monotonic milliseconds.
    fn now_ms(&self) -> f64;

    /// Deliver `GameEvent::Tick` every `period_ms`. Replaces any countdown
    /// already running, so at most one is ever active.
    fn start_countdown(&mut self, period_ms: u32);

    fn cancel_countdown(&mut self);

    /// Deliver `event` once after `delay_ms`.
    fn defer(&mut self, delay_ms: u32, event: GameEvent);
}
