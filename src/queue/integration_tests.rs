use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{parse_config, DuplicatePolicy};
use crate::queue::{Entry, HeapMode, HeapPriorityQueue};
use crate::traits::PriorityQueue;

/// Cross-module tests driving the shared queue through random workloads and
/// real threads
#[cfg(test)]
mod tests {
    use super::*;

    fn drain_priorities<V, P>(queue: &HeapPriorityQueue<V, P>) -> Vec<P>
    where
        V: Eq + std::hash::Hash + Clone + std::fmt::Debug,
        P: Ord + Clone,
    {
        let mut out = Vec::new();
        while let Some(entry) = queue.get_and_pop() {
            out.push(entry.priority);
        }
        out
    }

    #[test]
    fn test_batch_of_random_pairs_drains_sorted_min() {
        let mut rng = StdRng::seed_from_u64(7);
        let queue = HeapPriorityQueue::new(HeapMode::MinExtremal);

        let batch: Vec<_> = (0..1000u32)
            .map(|value| Entry::new(value, rng.gen_range(0..10_000i64)))
            .collect();
        queue.batch_put(batch).unwrap();
        queue.check_invariants().unwrap();
        assert_eq!(queue.len(), 1000);

        let drained = drain_priorities(&queue);
        assert_eq!(drained.len(), 1000);
        assert!(drained.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_batch_of_random_pairs_drains_sorted_max() {
        let mut rng = StdRng::seed_from_u64(11);
        let queue = HeapPriorityQueue::new(HeapMode::MaxExtremal);

        // Seed a few entries first so the batch lands on a non-empty heap.
        for value in 0..600u32 {
            queue.put(value, rng.gen_range(0..500u32)).unwrap();
        }
        let batch: Vec<_> = (600..1000u32)
            .map(|value| Entry::new(value, rng.gen_range(0..500u32)))
            .collect();
        queue.batch_put(batch).unwrap();
        queue.check_invariants().unwrap();

        let drained = drain_priorities(&queue);
        assert_eq!(drained.len(), 1000);
        assert!(drained.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_random_operations_preserve_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        let queue = HeapPriorityQueue::new(HeapMode::MinExtremal);
        let mut present: HashSet<u16> = HashSet::new();

        for _ in 0..5000 {
            let value = rng.gen_range(0..200u16);
            let priority = rng.gen_range(-50..50i32);
            let len_before = queue.len();

            match rng.gen_range(0..4) {
                0 => {
                    let result = queue.put(value, priority);
                    assert_eq!(result.is_ok(), present.insert(value));
                }
                1 => {
                    let peeked = queue.get();
                    let popped = queue.get_and_pop();
                    assert_eq!(peeked, popped);
                    match popped {
                        Some(entry) => {
                            assert_eq!(queue.len(), len_before - 1);
                            assert!(present.remove(&entry.value));
                        }
                        None => assert_eq!(len_before, 0),
                    }
                }
                2 => {
                    queue.update(&value, priority);
                    assert_eq!(queue.len(), len_before);
                    if present.contains(&value) {
                        assert_eq!(queue.priority_of(&value), Some(priority));
                    }
                }
                _ => {
                    let batch: Vec<_> = (0..rng.gen_range(0..5))
                        .map(|offset| Entry::new(200 + value * 5 + offset, priority))
                        .collect();
                    let fresh = batch.iter().all(|e| !present.contains(&e.value));
                    let result = queue.batch_put(batch.clone());
                    assert_eq!(result.is_ok(), fresh);
                    if fresh {
                        present.extend(batch.iter().map(|e| e.value));
                    }
                }
            }

            if let Err(violation) = queue.check_invariants() {
                panic!("invariant violated: {}", violation);
            }
            assert_eq!(queue.len(), present.len());
            if let Some(root) = queue.get() {
                let min = queue.snapshot().into_iter().map(|e| e.priority).min();
                assert_eq!(Some(root.priority), min);
            }
        }
    }

    #[test]
    fn test_update_is_idempotent() {
        let once = HeapPriorityQueue::new(HeapMode::MinExtremal);
        let twice = HeapPriorityQueue::new(HeapMode::MinExtremal);
        for (value, priority) in [("a", 4), ("b", 2), ("c", 8), ("d", 6)] {
            once.put(value, priority).unwrap();
            twice.put(value, priority).unwrap();
        }

        once.update(&"c", 1);
        twice.update(&"c", 1);
        assert!(!twice.update(&"c", 1));

        assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn test_pop_on_empty_leaves_state_alone() {
        let queue: HeapPriorityQueue<u8, u8> = HeapPriorityQueue::new(HeapMode::MinExtremal);
        for _ in 0..3 {
            assert_eq!(queue.get_and_pop(), None);
        }
        assert_eq!(queue.len(), 0);
        queue.put(1, 1).unwrap();
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_concurrent_disjoint_puts_drain_to_union() {
        const WORKERS: u32 = 8;
        const PER_WORKER: u32 = 500;

        let queue = Arc::new(HeapPriorityQueue::new(HeapMode::MinExtremal));
        let handles: Vec<_> = (0..WORKERS)
            .map(|worker| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    let mut rng = StdRng::seed_from_u64(worker as u64);
                    for i in 0..PER_WORKER {
                        let value = worker * PER_WORKER + i;
                        queue.put(value, rng.gen_range(0..1000u32)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        queue.check_invariants().unwrap();
        let mut seen = HashSet::new();
        let mut last = 0;
        while let Some(entry) = queue.get_and_pop() {
            assert!(entry.priority >= last);
            last = entry.priority;
            assert!(seen.insert(entry.value), "value {} drained twice", entry.value);
        }
        assert_eq!(seen.len(), (WORKERS * PER_WORKER) as usize);
        assert_eq!(seen, (0..WORKERS * PER_WORKER).collect::<HashSet<_>>());
    }

    #[test]
    fn test_concurrent_batches_and_poppers_lose_nothing() {
        const PRODUCERS: u32 = 4;
        const BATCHES: u32 = 25;
        const BATCH_SIZE: u32 = 40;
        const TOTAL: usize = (PRODUCERS * BATCHES * BATCH_SIZE) as usize;

        let queue = Arc::new(HeapPriorityQueue::new(HeapMode::MaxExtremal));

        let producers: Vec<_> = (0..PRODUCERS)
            .map(|producer| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    for batch in 0..BATCHES {
                        let base = (producer * BATCHES + batch) * BATCH_SIZE;
                        let entries: Vec<_> = (base..base + BATCH_SIZE)
                            .map(|value| Entry::new(value, value % 97))
                            .collect();
                        queue.batch_put(entries).unwrap();
                    }
                })
            })
            .collect();

        let consumers: Vec<_> = (0..2)
            .map(|_| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    let mut taken = Vec::new();
                    for _ in 0..TOTAL {
                        if let Some(entry) = queue.get_and_pop() {
                            taken.push(entry.value);
                        }
                    }
                    taken
                })
            })
            .collect();

        for producer in producers {
            producer.join().unwrap();
        }
        let mut all: Vec<u32> = consumers
            .into_iter()
            .flat_map(|consumer| consumer.join().unwrap())
            .collect();
        while let Some(entry) = queue.get_and_pop() {
            all.push(entry.value);
        }

        all.sort_unstable();
        assert_eq!(all, (0..TOTAL as u32).collect::<Vec<_>>());
    }

    #[test]
    fn test_readers_never_observe_partial_state() {
        let queue = Arc::new(HeapPriorityQueue::new(HeapMode::MinExtremal));

        let writer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for round in 0..200u32 {
                    let entries: Vec<_> = (0..50u32).map(|i| Entry::new(i, (i * round) % 13)).collect();
                    queue.batch_put(entries).unwrap();
                    queue.update(&7, round);
                    queue.clear();
                }
            })
        };

        let readers: Vec<_> = (0..3)
            .map(|_| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    for _ in 0..2000 {
                        queue.check_invariants().unwrap();
                        let len = queue.snapshot().len();
                        assert!(len == 0 || len == 50, "observed partial length {}", len);
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_trait_object_usage() {
        let cfg = parse_config("mode: max_extremal\nduplicates: replace").unwrap();
        let queue: Arc<dyn PriorityQueue<String, u8>> =
            Arc::new(HeapPriorityQueue::<String, u8>::from_config(&cfg).unwrap());

        queue.put("low".to_string(), 1).unwrap();
        queue.put("high".to_string(), 9).unwrap();
        queue.put("low".to_string(), 10).unwrap();

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.get().map(|e| e.value), Some("low".to_string()));
        assert!(queue.update(&"high".to_string(), 11));
        assert_eq!(queue.get_and_pop().map(|e| e.value), Some("high".to_string()));

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(cfg.duplicates, DuplicatePolicy::Replace);
    }
}
