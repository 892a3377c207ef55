// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::net::SocketAddr;

use crate::errors::NodeError;

pub const BIND_ADDR_VAR: &str = "LAMPORT_BIND_ADDR";
pub const STARTUP_EVENT_VAR: &str = "LAMPORT_STARTUP_EVENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    pub bind_addr: SocketAddr,
    /// Record an `init` event before serving.
    pub record_startup_event: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            record_startup_event: true,
        }
    }
}

impl NodeConfig {
    /// Defaults overridden by `LAMPORT_BIND_ADDR` and `LAMPORT_STARTUP_EVENT`.
    pub fn from_env() -> Result<Self, NodeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, NodeError> {
        let mut cfg = Self::default();

        if let Some(addr) = lookup(BIND_ADDR_VAR) {
            cfg.bind_addr = addr.trim().parse().map_err(|_| {
                NodeError::Config(format!("{BIND_ADDR_VAR} is not a socket address: {addr:?}"))
            })?;
        }

        if let Some(flag) = lookup(STARTUP_EVENT_VAR) {
            cfg.record_startup_event = match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(NodeError::Config(format!(
                        "{STARTUP_EVENT_VAR} must be a boolean, got {flag:?}"
                    )))
                }
            };
        }

        Ok(cfg)
    }
}
