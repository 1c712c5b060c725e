//! Deferred controller actions and a deterministic timer queue.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::counter::Tick;
use crate::event::TargetRef;
use crate::geometry::Point;
use crate::traits::Scheduler;

/// A delayed controller callback, captured as plain data at schedule time.
#[derive(Debug, Clone, PartialEq)]
pub enum TimerAction {
    /// Show the info affordance for `target` if nothing moved since `tick`
    ShowLink {
        tick: Tick,
        pointer: Point,
        target: TargetRef,
    },
    /// Hide whatever is shown if nothing moved since `tick`
    CheckHide { tick: Tick },
}

/// Timer queue driven by an externally supplied clock.
///
/// The queue never reads wall-clock time itself. Hosts pass the time since
/// startup to [`TimerQueue::pop_due`]; tests pass virtual time. Actions with
/// equal deadlines are delivered in scheduling order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    /// Latest time observed by the queue; new deadlines are relative to it
    now: Duration,
    /// Tie-breaker for equal deadlines
    next_seq: u64,
    pending: BTreeMap<(Duration, u64), TimerAction>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the queue's notion of the current time.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Removes and returns the earliest action due at or before `now`.
    ///
    /// The queue clock moves to the popped deadline, so actions scheduled
    /// while handling it are relative to when it fired. Once nothing is due
    /// the clock settles on `now`. Time never moves backwards.
    pub fn pop_due(&mut self, now: Duration) -> Option<TimerAction> {
        let key = match self.pending.keys().next() {
            Some(&(deadline, seq)) if deadline <= now => (deadline, seq),
            _ => {
                self.now = self.now.max(now);
                return None;
            }
        };

        self.now = self.now.max(key.0);
        self.pending.remove(&key)
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration, action: TimerAction) {
        let deadline = self.now + delay;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert((deadline, seq), action);
    }
}
