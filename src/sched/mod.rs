//! Deterministic single-threaded task scheduler.
//!
//! The engine never touches a wall clock. The embedding shell reports
//! elapsed time and the scheduler fires due tasks in order, which makes
//! every timing-dependent behavior (the 1-second tick, the 700 ms
//! mismatch pause) simulatable instant-by-instant in tests.
//!
//! Tasks carry a `TaskHandle` cancellation token. Repeating tasks
//! reschedule themselves when popped; cancelling is idempotent and a
//! cancelled task never fires again.

use crate::core::TileId;

/// Work the session performs when a scheduled task comes due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    /// One countdown step of the round timer.
    TimerTick,
    /// One-shot unflip of two mismatched tiles.
    ///
    /// Tagged with the round generation that scheduled it: a task from
    /// a superseded round is detected and discarded instead of mutating
    /// a freshly reset board.
    MismatchUnflip {
        tiles: [TileId; 2],
        generation: u64,
    },
}

/// Cancellation token for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskHandle(u64);

#[derive(Clone, Debug)]
struct ScheduledTask {
    id: u64,
    due_ms: u64,
    repeat_ms: Option<u64>,
    kind: TaskKind,
}

/// Virtual-time task queue.
///
/// Time only moves when the owner calls `pop_due`/`advance_to`; ties
/// between tasks due at the same instant are broken by schedule order.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of live tasks (repeating tasks count once).
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Schedule a one-shot task `delay_ms` from now.
    pub fn schedule_once(&mut self, delay_ms: u64, kind: TaskKind) -> TaskHandle {
        self.push(self.now_ms + delay_ms, None, kind)
    }

    /// Schedule a repeating task firing every `interval_ms`, first fire
    /// one interval from now.
    pub fn schedule_every(&mut self, interval_ms: u64, kind: TaskKind) -> TaskHandle {
        self.push(self.now_ms + interval_ms, Some(interval_ms), kind)
    }

    fn push(&mut self, due_ms: u64, repeat_ms: Option<u64>, kind: TaskKind) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            due_ms,
            repeat_ms,
            kind,
        });
        TaskHandle(id)
    }

    /// Cancel a task. Idempotent; unknown handles are ignored.
    pub fn cancel(&mut self, handle: TaskHandle) {
        self.tasks.retain(|t| t.id != handle.0);
    }

    /// Drop every scheduled task without advancing time.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Pop the earliest task due at or before `until_ms`.
    ///
    /// Advances the clock to the task's due time. Repeating tasks are
    /// rescheduled one interval later before being returned, so a
    /// cancellation between pops takes effect immediately.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TaskKind> {
        let idx = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.id))
            .map(|(i, _)| i)?;

        let due = self.tasks[idx].due_ms;
        self.now_ms = self.now_ms.max(due);

        if let Some(interval) = self.tasks[idx].repeat_ms {
            let kind = self.tasks[idx].kind;
            self.tasks[idx].due_ms = due + interval;
            Some(kind)
        } else {
            Some(self.tasks.swap_remove(idx).kind)
        }
    }

    /// Move the clock forward to `until_ms` (never backwards).
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}
