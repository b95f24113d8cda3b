// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer primitives for UI runtimes.
//!
//! Nothing here reads a clock or spawns work. The host passes its notion of
//! "now" in, and decides how to wake up for [`TimerQueue::next_deadline`].
//!
//! - [`TimerQueue`]: payloads ordered by deadline, cancellable by [`TimerId`].
//! - [`Debouncer`]: a quiet-period timer that fires once a burst of activity
//!   has settled, such as persisting a view after the user stops panning.
//!
//! ## Example
//!
//! ```rust
//! use understory_timing::Debouncer;
//!
//! let mut moved = Debouncer::new(100);
//! moved.notify(0);
//! moved.notify(60);
//! assert!(!moved.poll(120));
//! assert!(moved.poll(160));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod debounce;
mod queue;

pub use debounce::Debouncer;
pub use queue::{TimerId, TimerQueue};
