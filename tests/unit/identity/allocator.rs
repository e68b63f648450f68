use std::collections::BTreeSet;

use super::*;

#[test]
fn ids_start_at_zero_and_increase_by_one() {
    let ids = IdAllocator::new();
    let got: Vec<u64> = (0..5).map(|_| ids.next_id().get()).collect();
    assert_eq!(got, vec![0, 1, 2, 3, 4]);
}

#[test]
fn peek_does_not_consume() {
    let ids = IdAllocator::new();
    assert_eq!(ids.peek().get(), 0);
    assert_eq!(ids.peek().get(), 0);
    assert_eq!(ids.next_id().get(), 0);
    assert_eq!(ids.peek().get(), 1);
}

#[test]
fn allocators_are_independent() {
    let a = IdAllocator::new();
    let b = IdAllocator::default();
    a.next_id();
    a.next_id();
    assert_eq!(b.next_id().get(), 0);
    assert_eq!(a.next_id().get(), 2);
}

#[test]
fn concurrent_allocation_never_duplicates() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 1000;

    let ids = IdAllocator::new();
    let all: Vec<Vec<u64>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    (0..PER_THREAD)
                        .map(|_| ids.next_id().get())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for per_thread in &all {
        assert!(per_thread.windows(2).all(|w| w[0] < w[1]));
    }
    let unique: BTreeSet<u64> = all.into_iter().flatten().collect();
    assert_eq!(unique.len(), THREADS * PER_THREAD);
    assert_eq!(unique.first(), Some(&0));
    assert_eq!(unique.last(), Some(&((THREADS * PER_THREAD) as u64 - 1)));
}

#[test]
fn display_is_plain_decimal() {
    let ids = IdAllocator::new();
    for _ in 0..41 {
        ids.next_id();
    }
    assert_eq!(ids.next_id().to_string(), "41");
}
