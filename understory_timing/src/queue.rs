// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline-ordered timer queue.

use alloc::collections::BTreeMap;

use hashbrown::HashMap;

/// Handle to a scheduled timer.
///
/// Ids are never reused by the queue that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw id value, for logging.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Timers keyed by deadline, each carrying a payload.
///
/// The queue does not read a clock: callers schedule with absolute
/// deadlines and pass the current time to [`pop_expired`](Self::pop_expired).
/// Timers with equal deadlines fire in the order they were scheduled.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: BTreeMap<(u64, TimerId), T>,
    deadlines: HashMap<TimerId, u64>,
    next_id: u64,
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_id: 0,
        }
    }

    /// Schedules `payload` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.insert((deadline, id), payload);
        self.deadlines.insert(id, deadline);
        id
    }

    /// Moves a pending timer to a new deadline. Returns `false` if `id` is
    /// not pending.
    pub fn reschedule(&mut self, id: TimerId, deadline: u64) -> bool {
        let Some(old) = self.deadlines.get_mut(&id) else {
            return false;
        };
        let Some(payload) = self.entries.remove(&(*old, id)) else {
            return false;
        };
        *old = deadline;
        self.entries.insert((deadline, id), payload);
        true
    }

    /// Cancels a pending timer, returning its payload.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let deadline = self.deadlines.remove(&id)?;
        self.entries.remove(&(deadline, id))
    }

    /// Removes and returns the earliest timer whose deadline is at or
    /// before `now`.
    pub fn pop_expired(&mut self, now: u64) -> Option<(TimerId, T)> {
        let entry = self.entries.first_entry()?;
        let (deadline, id) = *entry.key();
        if deadline > now {
            return None;
        }
        let payload = entry.remove();
        self.deadlines.remove(&id);
        Some((id, payload))
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Deadline of a pending timer.
    #[must_use]
    pub fn deadline(&self, id: TimerId) -> Option<u64> {
        self.deadlines.get(&id).copied()
    }

    /// Returns `true` if `id` is still pending.
    #[must_use]
    pub fn contains(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.deadlines.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
