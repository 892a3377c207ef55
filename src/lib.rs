// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! lamport-kernel: a thread-safe Lamport logical clock and the append-only,
//! causally ordered event log it stamps.

pub mod clock;
pub mod event;
pub mod recorder;

pub use clock::{LamportClock, LogicalTime};
pub use event::Event;
pub use recorder::{EventRecorder, LogSnapshot};

#[cfg(test)]
pub mod tests;
