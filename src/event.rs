// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Recorded events.
//!
//! An [`Event`] is immutable once built. Ordering between events is decided
//! only by `logical_time`; `wall_time` is for humans correlating logs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::LogicalTime;

/// Prefix of ids derived for message-receipt events.
pub const MESSAGE_ID_PREFIX: &str = "msg-";

/// Prefix prepended to the label of message-receipt events.
pub const PROCESSED_LABEL_PREFIX: &str = "Processed: ";

/// A single entry in the event log.
///
/// Serialized with the field names the HTTP surface has always used:
/// `id`, `message`, `lamport_timestamp`, `wall_time`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    #[serde(rename = "message")]
    pub label: String,
    #[serde(rename = "lamport_timestamp")]
    pub logical_time: LogicalTime,
    pub wall_time: DateTime<Utc>,
}

impl Event {
    /// Build an event stamped with the current wall time.
    pub fn new(id: impl Into<String>, label: impl Into<String>, logical_time: LogicalTime) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            logical_time,
            wall_time: Utc::now(),
        }
    }

    /// Id for the event produced by a merge that yielded `logical_time`.
    ///
    /// Unique because the clock never returns the same value twice.
    pub fn message_id(logical_time: LogicalTime) -> String {
        format!("{MESSAGE_ID_PREFIX}{logical_time}")
    }

    /// Label for a processed message.
    pub fn processed_label(label: &str) -> String {
        format!("{PROCESSED_LABEL_PREFIX}{label}")
    }

    /// True if this event records receipt of a message.
    pub fn is_message(&self) -> bool {
        self.id.starts_with(MESSAGE_ID_PREFIX) && self.label.starts_with(PROCESSED_LABEL_PREFIX)
    }
}
