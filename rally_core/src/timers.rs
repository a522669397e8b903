//! Timers driven by the virtual clock
//!
//! The host reports real elapsed time; due timers are popped one at a time in
//! deadline order, with ties broken by scheduling order. Nothing fires unless
//! the clock is advanced, which keeps countdown behaviour testable without
//! real waits.

use std::time::Duration;

/// Handle for cancelling a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// What a timer means to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Countdown display step, every second
    CountdownBeat,
    /// Authoritative end of the countdown
    CountdownEnd,
    /// Show the winner banner after the round is decided
    RevealGameOver,
}

/// A timer that came due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub id: TimerId,
    pub kind: TimerKind,
    pub deadline: Duration,
}

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    kind: TimerKind,
    deadline: Duration,
    period: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    timers: Vec<Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire once, `delay` after `now`
    pub fn schedule_once(&mut self, now: Duration, delay: Duration, kind: TimerKind) -> TimerId {
        self.push(kind, now.saturating_add(delay), None)
    }

    /// Fire every `period` after `now` until cancelled
    pub fn schedule_every(
        &mut self,
        now: Duration,
        period: Duration,
        kind: TimerKind,
    ) -> TimerId {
        // A zero period would fire forever within one advance
        let period = period.max(Duration::from_millis(1));
        self.push(kind, now.saturating_add(period), Some(period))
    }

    fn push(&mut self, kind: TimerKind, deadline: Duration, period: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            kind,
            deadline,
            period,
        });
        id
    }

    /// Returns true if the timer was still pending
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Pop the earliest timer due at or before `now`. Repeating timers are
    /// re-armed for their next period, or dropped once that would overflow.
    pub fn pop_due(&mut self, now: Duration) -> Option<Fired> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= now)
            .min_by_key(|(_, t)| (t.deadline, t.id))
            .map(|(i, _)| i)?;

        let timer = &self.timers[index];
        let fired = Fired {
            id: timer.id,
            kind: timer.kind,
            deadline: timer.deadline,
        };

        match timer.period.and_then(|period| timer.deadline.checked_add(period)) {
            Some(next) => self.timers[index].deadline = next,
            None => {
                self.timers.swap_remove(index);
            }
        }

        Some(fired)
    }
}
