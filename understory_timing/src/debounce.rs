// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quiet-period debouncing.

use crate::queue::{TimerId, TimerQueue};

/// Fires once after a burst of notifications has gone quiet.
///
/// Every [`notify`](Self::notify) pushes the deadline out to
/// `now + quiet_period`; [`poll`](Self::poll) reports `true` exactly once
/// when that deadline passes with no further notifications.
#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet_period: u64,
    timers: TimerQueue<()>,
    pending: Option<TimerId>,
}

impl Debouncer {
    /// Creates an idle debouncer.
    #[must_use]
    pub fn new(quiet_period: u64) -> Self {
        Self {
            quiet_period,
            timers: TimerQueue::new(),
            pending: None,
        }
    }

    /// The quiet period in the caller's time unit.
    #[must_use]
    pub fn quiet_period(&self) -> u64 {
        self.quiet_period
    }

    /// Records activity at `now`, restarting the quiet period.
    pub fn notify(&mut self, now: u64) {
        let deadline = now.saturating_add(self.quiet_period);
        match self.pending {
            Some(id) if self.timers.reschedule(id, deadline) => {}
            _ => self.pending = Some(self.timers.schedule(deadline, ())),
        }
    }

    /// Returns `true` if the quiet period has elapsed since the last
    /// notification. Fires once per burst.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.timers.pop_expired(now) {
            Some((id, ())) if self.pending == Some(id) => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Drops a pending deadline without firing.
    pub fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            self.timers.cancel(id);
        }
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Pending deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending.and_then(|id| self.timers.deadline(id))
    }
}
