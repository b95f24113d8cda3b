// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `understory_timing`.

use proptest::prelude::*;
use understory_timing::{Debouncer, TimerQueue};

#[test]
fn debounced_save_after_a_drag() {
    // A drag emits changes every 16ms, then stops.
    let mut save = Debouncer::new(100);
    let mut saves = 0;
    let mut now = 0;
    while now <= 480 {
        save.notify(now);
        if save.poll(now) {
            saves += 1;
        }
        now += 16;
    }
    assert_eq!(saves, 0);
    while now < 1_000 {
        if save.poll(now) {
            saves += 1;
        }
        now += 16;
    }
    assert_eq!(saves, 1);
}

#[test]
fn queue_reports_next_deadline_for_host_wakeups() {
    let mut q = TimerQueue::new();
    assert_eq!(q.next_deadline(), None);
    let late = q.schedule(500, "late");
    q.schedule(100, "early");
    assert_eq!(q.next_deadline(), Some(100));
    q.cancel(late);
    assert_eq!(q.pop_expired(100).map(|(_, p)| p), Some("early"));
    assert_eq!(q.next_deadline(), None);
}

proptest! {
    #[test]
    fn pops_in_deadline_then_schedule_order(deadlines in prop::collection::vec(0_u64..50, 0..64)) {
        let mut q = TimerQueue::new();
        for (i, d) in deadlines.iter().enumerate() {
            q.schedule(*d, i);
        }
        let mut expected: Vec<(u64, usize)> =
            deadlines.iter().copied().zip(0..).collect();
        expected.sort();

        let mut popped = Vec::new();
        while let Some((_, i)) = q.pop_expired(u64::MAX) {
            popped.push((deadlines[i], i));
        }
        prop_assert_eq!(popped, expected);
        prop_assert!(q.is_empty());
    }

    #[test]
    fn nothing_fires_early(deadlines in prop::collection::vec(10_u64..1_000, 1..32), now in 0_u64..1_000) {
        let mut q = TimerQueue::new();
        for d in &deadlines {
            q.schedule(*d, *d);
        }
        while let Some((_, d)) = q.pop_expired(now) {
            prop_assert!(d <= now);
        }
        if let Some(next) = q.next_deadline() {
            prop_assert!(next > now);
        }
    }
}
