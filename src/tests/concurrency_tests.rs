// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::collections::HashSet;
use std::sync::Barrier;
use std::thread;

use crate::clock::LamportClock;
use crate::recorder::EventRecorder;

const THREADS: usize = 100;
const PER_THREAD: usize = 10;

#[test]
fn test_concurrent_ticks_are_unique() {
    let clock = LamportClock::new();
    let barrier = Barrier::new(THREADS);

    let stamps: Vec<u64> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    (0..PER_THREAD).map(|_| clock.tick()).collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(stamps.len(), THREADS * PER_THREAD);
    assert!(stamps.iter().all(|&t| t > 0));
    let unique: HashSet<u64> = stamps.iter().copied().collect();
    assert_eq!(unique.len(), stamps.len(), "duplicate timestamp issued");
    assert_eq!(clock.peek(), (THREADS * PER_THREAD) as u64);
}

#[test]
fn test_concurrent_ticks_and_merges_are_unique() {
    let clock = LamportClock::new();

    let stamps: Vec<u64> = thread::scope(|s| {
        let handles: Vec<_> = (0..8u64)
            .map(|t| {
                let clock = &clock;
                s.spawn(move || {
                    (0..200u64)
                        .map(|i| {
                            if i % 4 == 0 {
                                clock.merge(t * 100 + i)
                            } else {
                                clock.tick()
                            }
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let unique: HashSet<u64> = stamps.iter().copied().collect();
    assert_eq!(unique.len(), stamps.len());
    assert_eq!(clock.peek(), *stamps.iter().max().unwrap());
}

#[test]
fn test_concurrent_recording_keeps_log_ordered() {
    let recorder = EventRecorder::new();
    let barrier = Barrier::new(16);

    thread::scope(|s| {
        for t in 0..16u64 {
            let (recorder, barrier) = (&recorder, &barrier);
            s.spawn(move || {
                barrier.wait();
                for i in 0..50u64 {
                    if (t + i) % 3 == 0 {
                        recorder.record_message(t * 7 + i, "remote");
                    } else {
                        recorder.record_local(format!("t{t}-{i}"), "local");
                    }
                }
            });
        }
    });

    let snap = recorder.snapshot();
    assert_eq!(snap.count, 16 * 50);
    assert!(snap
        .events
        .windows(2)
        .all(|w| w[0].logical_time < w[1].logical_time));
    assert_eq!(snap.current_time, snap.events.last().unwrap().logical_time);

    let ids: HashSet<&str> = snap.events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), snap.count);
}

#[test]
fn test_snapshot_during_writes_is_consistent() {
    let recorder = EventRecorder::new();

    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..500 {
                recorder.record_local(format!("w-{i}"), "write");
            }
        });
        s.spawn(|| {
            for _ in 0..200 {
                let snap = recorder.snapshot();
                assert_eq!(snap.count, snap.events.len());
                assert!(snap
                    .events
                    .windows(2)
                    .all(|w| w[0].logical_time < w[1].logical_time));
                if let Some(last) = snap.events.last() {
                    assert!(snap.current_time >= last.logical_time);
                }
            }
        });
    });
}
