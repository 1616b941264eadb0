//! Timer contract between the engine and its host.
//!
//! The engine never blocks and never owns a wall clock. Transitions that
//! need deferred work (pattern reveal sub-steps, memory mismatch re-hide)
//! emit `TimerRequest`s; the host schedules each one against real time and
//! delivers it back through `ChallengeEngine::timer_fired`.
//!
//! Tokens carry the engine's instance generation. `restart` bumps the
//! generation, so every outstanding token goes stale and is ignored on
//! delivery: cancellation is by instance identity, and a late callback can
//! never mutate a replaced state.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::ChallengeEngine;

/// Identity of a scheduled callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken {
    /// Engine instance generation this token belongs to.
    pub instance: u32,
    /// Sequence number within the instance.
    pub seq: u32,
}

/// What a fired timer should do. Opaque to hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum TimerAction {
    /// Advance the pattern reveal sequence by one sub-step.
    RevealAdvance,
    /// Re-hide a mismatched memory pair.
    HideMismatch,
}

/// A deferred callback the host must schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerRequest {
    pub token: TimerToken,
    /// Delay from now, in milliseconds.
    pub delay_ms: u64,
}

/// FIFO timer driver for tests and single-threaded hosts.
///
/// Delivers requests in emission order, absorbing any requests a fired
/// callback emits in turn. Delays are not simulated; `ManualTimers` only
/// preserves ordering, which is all the engine's correctness depends on.
#[derive(Debug, Default)]
pub struct ManualTimers {
    queue: VecDeque<TimerRequest>,
}

impl ManualTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull pending requests out of the engine.
    pub fn absorb(&mut self, engine: &mut ChallengeEngine) {
        self.queue.extend(engine.drain_timer_requests());
    }

    /// Fire the oldest pending timer. Returns false when none are pending.
    pub fn fire_next(&mut self, engine: &mut ChallengeEngine) -> bool {
        self.absorb(engine);
        let Some(request) = self.queue.pop_front() else {
            return false;
        };
        engine.timer_fired(request.token);
        self.absorb(engine);
        true
    }

    /// Fire timers until none remain (e.g. a full reveal sequence).
    pub fn run(&mut self, engine: &mut ChallengeEngine) {
        while self.fire_next(engine) {}
    }

    /// Pending request count.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drop all pending requests without firing them.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
