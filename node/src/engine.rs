// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::sync::Arc;

use lamport_kernel::{Event, EventRecorder, LogSnapshot, LogicalTime};

use crate::config::NodeConfig;
use crate::ids::EventIdGenerator;
use crate::telemetry;

pub const STARTUP_EVENT_ID: &str = "init";
pub const STARTUP_EVENT_LABEL: &str = "Server started";

/// Shared handle given to every request handler. The engine synchronizes
/// internally, so no outer lock is needed.
pub type SharedEngine = Arc<Engine>;

/// HTTP-facing wrapper around the kernel recorder: assigns local ids,
/// adapts wire timestamps, and logs each recording once the recorder
/// has released its lock.
#[derive(Debug, Default)]
pub struct Engine {
    recorder: EventRecorder,
    ids: EventIdGenerator,
}

impl Engine {
    pub fn new(cfg: &NodeConfig) -> Self {
        tracing::debug!("Creating engine for {}", cfg.bind_addr);
        Self::default()
    }

    /// Record a local event under a freshly generated id.
    pub fn record_local(&self, label: String) -> Event {
        let id = self.ids.next_id();
        self.record_local_as(id, label)
    }

    /// Record a local event under a caller-chosen id.
    pub fn record_local_as(&self, id: impl Into<String>, label: impl Into<String>) -> Event {
        let event = self.recorder.record_local(id, label);
        tracing::info!("Event logged: {} (Lamport: {})", event.label, event.logical_time);
        telemetry::record_event("local", event.logical_time);
        event
    }

    /// Record receipt of a message stamped `received` by its sender.
    ///
    /// Wire timestamps are signed. Since the counter is never negative,
    /// `max(counter, received)` equals `max(counter, 0)` for negative
    /// input, so those are clamped to 0.
    pub fn record_message(&self, received: i64, label: &str) -> Event {
        let clamped = LogicalTime::try_from(received).unwrap_or(0);
        let event = self.recorder.record_message(clamped, label);
        tracing::info!(
            "Message processed: {} (Received: {}, New: {})",
            label,
            received,
            event.logical_time
        );
        telemetry::record_event("message", event.logical_time);
        event
    }

    /// Records the `init` event the node logs before serving.
    pub fn record_startup(&self) -> Event {
        self.record_local_as(STARTUP_EVENT_ID, STARTUP_EVENT_LABEL)
    }

    pub fn snapshot(&self) -> LogSnapshot {
        self.recorder.snapshot()
    }

    /// Current logical time.
    pub fn now(&self) -> LogicalTime {
        self.recorder.peek()
    }
}
