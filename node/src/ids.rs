// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Ids for locally recorded events.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime};

pub const LOCAL_ID_PREFIX: &str = "event-";

/// Unix time in nanoseconds since epoch as u64.
pub fn now_unix_nanos() -> u64 {
    let since = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0));
    since.as_secs() * 1_000_000_000 + u64::from(since.subsec_nanos())
}

/// Issues `event-<n>` ids where `n` is a nanosecond stamp forced strictly
/// above the previously issued one, so ids stay unique when two requests
/// land in the same nanosecond or the system clock steps back.
#[derive(Debug, Default)]
pub struct EventIdGenerator {
    last: AtomicU64,
}

impl EventIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        format!("{LOCAL_ID_PREFIX}{}", self.next_stamp(now_unix_nanos()))
    }

    fn next_stamp(&self, now: u64) -> u64 {
        let pick = |last: u64| now.max(last.saturating_add(1));
        match self.last.fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| Some(pick(last))) {
            Ok(prev) | Err(prev) => pick(prev),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn stamps_follow_wall_clock_when_it_moves_forward() {
        let ids = EventIdGenerator::new();
        assert_eq!(ids.next_stamp(100), 100);
        assert_eq!(ids.next_stamp(250), 250);
    }

    #[test]
    fn stamps_never_repeat_or_go_back() {
        let ids = EventIdGenerator::new();
        assert_eq!(ids.next_stamp(100), 100);
        assert_eq!(ids.next_stamp(100), 101);
        assert_eq!(ids.next_stamp(50), 102);
    }

    #[test]
    fn concurrent_ids_are_unique() {
        let ids = EventIdGenerator::new();
        let all: Vec<String> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| (0..500).map(|_| ids.next_id()).collect::<Vec<_>>()))
                .collect();
            handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
        });

        let unique: HashSet<&String> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
        assert!(all.iter().all(|id| id.starts_with(LOCAL_ID_PREFIX)));
    }
}
