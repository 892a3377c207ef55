// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Append-only event recorder.
//!
//! Every recording performs exactly one clock operation and appends exactly
//! one [`Event`]. The clock advance, the event construction and the append
//! happen under the log's write lock, so the log read in append order always
//! has strictly increasing logical times, even with concurrent writers.
//!
//! Readers take the read lock just long enough to clone the log; a
//! [`LogSnapshot`] is a frozen copy and never observes later appends.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::clock::{LamportClock, LogicalTime};
use crate::event::Event;

/// Point-in-time copy of the recorder.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogSnapshot {
    #[serde(rename = "current_timestamp")]
    pub current_time: LogicalTime,
    pub events: Vec<Event>,
    #[serde(rename = "event_count")]
    pub count: usize,
}

/// Owns a [`LamportClock`] and the ordered log of events it stamped.
#[derive(Debug, Default)]
pub struct EventRecorder {
    clock: LamportClock,
    log: RwLock<Vec<Event>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a recorder around an existing clock.
    pub fn with_clock(clock: LamportClock) -> Self {
        Self {
            clock,
            log: RwLock::new(Vec::new()),
        }
    }

    /// Record a purely local event: `tick`, then append.
    pub fn record_local(&self, id: impl Into<String>, label: impl Into<String>) -> Event {
        let (id, label) = (id.into(), label.into());
        let mut log = self.log.write();
        let event = Event::new(id, label, self.clock.tick());
        log.push(event.clone());
        event
    }

    /// Record receipt of a message whose sender stamped it `received`:
    /// `merge(received)`, then append.
    ///
    /// The id is derived from the resulting logical time and the label is
    /// marked as processed.
    pub fn record_message(&self, received: LogicalTime, label: &str) -> Event {
        let label = Event::processed_label(label);
        let mut log = self.log.write();
        let logical_time = self.clock.merge(received);
        let event = Event::new(Event::message_id(logical_time), label, logical_time);
        log.push(event.clone());
        event
    }

    /// Current logical time without advancing the clock.
    pub fn peek(&self) -> LogicalTime {
        self.clock.peek()
    }

    /// Frozen copy of the clock value and the whole log, in append order.
    pub fn snapshot(&self) -> LogSnapshot {
        let log = self.log.read();
        // Read under the lock so current_time is never behind the last event.
        let current_time = self.clock.peek();
        let events = log.clone();
        drop(log);

        LogSnapshot {
            current_time,
            count: events.len(),
            events,
        }
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.log.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.read().is_empty()
    }
}
