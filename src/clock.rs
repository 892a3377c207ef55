// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Lamport logical clock.
//!
//! A single counter shared by every caller in the process. Local events
//! `tick`, received messages `merge`, and `peek` reads without advancing.
//!
//! # Invariants
//! - The counter never decreases.
//! - Every `tick`/`merge` returns a value strictly greater than any value
//!   previously returned by this clock.
//! - `tick`/`merge` are linearizable: each is one atomic read-modify-write.

use core::sync::atomic::{AtomicU64, Ordering};

/// Logical timestamp produced by a [`LamportClock`].
pub type LogicalTime = u64;

/// A thread-safe Lamport clock starting at 0.
#[derive(Debug, Default)]
pub struct LamportClock(AtomicU64);

impl LamportClock {
    /// Create a clock starting at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock whose next `tick` returns `start + 1`.
    pub fn starting_at(start: LogicalTime) -> Self {
        Self(AtomicU64::new(start))
    }

    /// Current logical time. Does not advance the clock.
    #[inline]
    pub fn peek(&self) -> LogicalTime {
        self.0.load(Ordering::Acquire)
    }

    /// Advance for a local event and return the new value.
    ///
    /// # Panics
    /// Panics if the counter would exceed `u64::MAX`.
    #[inline]
    pub fn tick(&self) -> LogicalTime {
        self.advance(|current| current)
    }

    /// Advance on receipt of a message stamped `received` by its sender.
    ///
    /// The new value is `max(current, received) + 1`, so the receive event is
    /// ordered after both the local history and the send event.
    ///
    /// # Panics
    /// Panics if the counter would exceed `u64::MAX`.
    pub fn merge(&self, received: LogicalTime) -> LogicalTime {
        self.advance(|current| current.max(received))
    }

    // Single CAS loop so the max and the increment land together.
    fn advance(&self, floor: impl Fn(LogicalTime) -> LogicalTime) -> LogicalTime {
        let bump = |current: LogicalTime| {
            Some(
                floor(current)
                    .checked_add(1)
                    .expect("logical clock overflowed u64"),
            )
        };
        match self.0.fetch_update(Ordering::AcqRel, Ordering::Acquire, bump) {
            Ok(previous) | Err(previous) => floor(previous) + 1,
        }
    }
}
