//! Round countdown timer.
//!
//! Counts whole seconds down from the configured duration while a round
//! runs. The timer owns at most one repeating tick task: starting it
//! cancels any prior task first, so repeated start/reset cycles never
//! accumulate duplicate timers.

use serde::{Deserialize, Serialize};

use crate::sched::{Scheduler, TaskHandle, TaskKind};

/// Interval between countdown steps.
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Result of one countdown step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// Seconds left after this step.
    pub remaining_secs: u32,
    /// True exactly once, on the step that reaches zero.
    pub expired: bool,
}

/// Countdown clock for one round.
#[derive(Clone, Debug)]
pub struct RoundTimer {
    duration_secs: u32,
    remaining_secs: u32,
    tick_task: Option<TaskHandle>,
}

impl RoundTimer {
    /// Create a timer with the given duration, not yet ticking.
    #[must_use]
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            tick_task: None,
        }
    }

    /// Set the initial/reset count. Ignored while ticking.
    pub fn configure(&mut self, duration_secs: u32) {
        if self.is_running() {
            return;
        }
        self.duration_secs = duration_secs;
        self.remaining_secs = duration_secs;
    }

    /// Begin ticking.
    ///
    /// Cancels any previously scheduled tick task before scheduling a
    /// new one, so a restart never leaves two timers running.
    pub fn start(&mut self, sched: &mut Scheduler) {
        if let Some(handle) = self.tick_task.take() {
            sched.cancel(handle);
        }
        self.remaining_secs = self.duration_secs;
        self.tick_task = Some(sched.schedule_every(TICK_INTERVAL_MS, TaskKind::TimerTick));
    }

    /// Halt ticking. Safe to call when already stopped.
    pub fn stop(&mut self, sched: &mut Scheduler) {
        if let Some(handle) = self.tick_task.take() {
            sched.cancel(handle);
        }
    }

    /// Forget the tick task without touching the scheduler.
    ///
    /// Used on reset, where the scheduler is cleared wholesale.
    pub fn detach(&mut self) {
        self.tick_task = None;
    }

    /// Is a tick task currently scheduled?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.tick_task.is_some()
    }

    /// Configured round duration in seconds.
    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Seconds remaining in the round.
    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Apply one countdown step.
    ///
    /// Clamps at zero; expiry is reported exactly once, on the step
    /// that reaches zero.
    pub fn tick(&mut self) -> TickOutcome {
        let expired = if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            self.remaining_secs == 0
        } else {
            false
        };

        TickOutcome {
            remaining_secs: self.remaining_secs,
            expired,
        }
    }

    /// Remaining time as zero-padded display components.
    #[must_use]
    pub fn display(&self) -> TimeDisplay {
        TimeDisplay::from_secs(self.remaining_secs)
    }
}

/// Remaining time split into zero-padded `MM:SS` components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDisplay {
    /// Floor-divided minutes.
    pub minutes: u32,
    /// Leftover seconds, 0..60.
    pub seconds: u32,
}

impl TimeDisplay {
    /// Split a non-negative second count into display components.
    #[must_use]
    pub const fn from_secs(secs: u32) -> Self {
        Self {
            minutes: secs / 60,
            seconds: secs % 60,
        }
    }
}

impl std::fmt::Display for TimeDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}
