// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::NodeError;

/// Label used when `POST /event` carries no message.
pub const DEFAULT_LOCAL_LABEL: &str = "Local event";

// Events and listings are served as `lamport_kernel::Event` and
// `lamport_kernel::LogSnapshot` directly; their serde names are the wire names.

#[derive(Deserialize, Debug, Default)]
pub struct CreateEventQuery {
    pub message: Option<String>,
}

impl CreateEventQuery {
    pub fn label(self) -> String {
        self.message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_LOCAL_LABEL.to_string())
    }
}

/// Raw query of `POST /message`. Kept as strings so parse failures produce
/// our own error messages rather than the extractor's.
#[derive(Deserialize, Debug, Default)]
pub struct ReceiveMessageQuery {
    pub timestamp: Option<String>,
    pub message: Option<String>,
}

/// A validated incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub timestamp: i64,
    pub message: String,
}

impl ReceiveMessageQuery {
    pub fn validate(self) -> Result<IncomingMessage, NodeError> {
        let (timestamp, message) = match (self.timestamp, self.message) {
            (Some(t), Some(m)) if !t.is_empty() && !m.is_empty() => (t, m),
            _ => {
                return Err(NodeError::InvalidInput(
                    "Missing timestamp or message parameter".to_string(),
                ))
            }
        };

        let timestamp = timestamp
            .parse::<i64>()
            .map_err(|_| NodeError::InvalidInput("Invalid timestamp".to_string()))?;

        Ok(IncomingMessage { timestamp, message })
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TimeResponse {
    pub lamport_timestamp: u64,
    pub wall_time: DateTime<Utc>,
}
