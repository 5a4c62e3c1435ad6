//! Countdown score clock.
//!
//! The clock does not own a timer. Whoever drives it calls [`ScoreClock::tick`]
//! once per period; the driver in [`crate::driver`] does this from a tokio
//! interval, tests call it directly.

/// Lifecycle of a clock. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Idle,
    Running,
    Stopped,
}

/// What a single tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The clock is still running at this value.
    Running(i64),
    /// The value reached zero or below; the clock has stopped.
    Expired(i64),
}

#[derive(Debug, Clone)]
pub struct ScoreClock {
    value: i64,
    state: ClockState,
}

impl Default for ScoreClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreClock {
    pub fn new() -> Self {
        Self {
            value: 0,
            state: ClockState::Idle,
        }
    }

    /// Idle → Running at `initial`. A clock that already ran cannot be
    /// restarted; sessions create a fresh clock instead.
    pub fn start(&mut self, initial: i64) {
        if self.state != ClockState::Idle {
            tracing::warn!(state = ?self.state, "ignoring start on a used score clock");
            return;
        }
        self.value = initial;
        self.state = ClockState::Running;
    }

    /// Advance one period. Returns `None` unless the clock is running.
    pub fn tick(&mut self) -> Option<Tick> {
        if self.state != ClockState::Running {
            return None;
        }
        self.value = self.value.saturating_sub(1);
        if self.value <= 0 {
            self.state = ClockState::Stopped;
            Some(Tick::Expired(self.value))
        } else {
            Some(Tick::Running(self.value))
        }
    }

    /// Subtract `amount` right away and return the new value.
    ///
    /// Expiry is not evaluated here; a penalty that drives the value to zero
    /// or below is noticed on the next tick.
    pub fn penalize(&mut self, amount: i64) -> Option<i64> {
        if self.state != ClockState::Running {
            return None;
        }
        self.value = self.value.saturating_sub(amount);
        Some(self.value)
    }

    pub fn stop(&mut self) {
        self.state = ClockState::Stopped;
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    pub fn is_expired(&self) -> bool {
        self.state != ClockState::Idle && self.value <= 0
    }
}
