// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context};
use the_heapwood::config::{load_config, QueueConfig};
use the_heapwood::queue::{Entry, HeapMode, HeapPriorityQueue};
use tracing_subscriber::EnvFilter;

/// Get the default producer count based on system capabilities
fn default_producers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

const DEFAULT_PER_PRODUCER: usize = 10_000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 4 || args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: {} [config.yaml] [producers] [entries_per_producer]", args[0]);
        eprintln!("Example: {} configs/max-queue.yaml 8 50000", args[0]);
        std::process::exit(1);
    }

    let cfg = match args.get(1) {
        Some(path) => load_config(path).with_context(|| format!("loading {}", path))?,
        None => QueueConfig::default(),
    };
    let producers = match args.get(2) {
        Some(raw) => raw.parse().with_context(|| format!("invalid producer count '{}'", raw))?,
        None => default_producers(),
    };
    let per_producer = match args.get(3) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid entries per producer '{}'", raw))?,
        None => DEFAULT_PER_PRODUCER,
    };
    if producers == 0 {
        bail!("producer count must be at least 1");
    }

    println!("🚀 Heapwood Concurrent Queue Demo");
    println!("═══════════════════════════════════");
    println!("Mode: {}", cfg.mode);
    println!("Duplicates: {:?}", cfg.duplicates);
    println!("Producers: {} x {} entries", producers, per_producer);
    println!();

    let queue = Arc::new(HeapPriorityQueue::<u64, u64>::from_config(&cfg)?);
    let start = Instant::now();

    let mut handles = Vec::with_capacity(producers);
    for producer in 0..producers {
        let queue = Arc::clone(&queue);
        handles.push(tokio::task::spawn_blocking(move || {
            let base = (producer * per_producer) as u64;
            let entries: Vec<_> = (base..base + per_producer as u64)
                .map(|value| Entry::new(value, scramble(value)))
                .collect();
            queue.batch_put(entries)
        }));
    }
    for handle in handles {
        handle.await.context("producer task panicked")??;
    }
    let filled = start.elapsed();

    tracing::info!(len = queue.len(), elapsed = ?filled, "Queue filled");
    println!("⏱️  Filled {} entries in {:?}", queue.len(), filled);

    let drain_start = Instant::now();
    let drained = queue.drain_sorted();
    let in_order = drained.windows(2).all(|pair| match cfg.mode {
        HeapMode::MinExtremal => pair[0].priority <= pair[1].priority,
        HeapMode::MaxExtremal => pair[0].priority >= pair[1].priority,
    });

    println!("⏱️  Drained {} entries in {:?}", drained.len(), drain_start.elapsed());
    if let (Some(first), Some(last)) = (drained.first(), drained.last()) {
        println!("   First: value={} priority={}", first.value, first.priority);
        println!("   Last:  value={} priority={}", last.value, last.priority);
    }

    if !in_order || drained.len() != producers * per_producer {
        bail!(
            "drain check failed: {} of {} entries, ordered={}",
            drained.len(),
            producers * per_producer,
            in_order
        );
    }

    println!("\n🎉 All entries drained in {} order", cfg.mode);
    Ok(())
}

/// Cheap deterministic priority spread so producers don't insert in order
fn scramble(value: u64) -> u64 {
    value.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 40
}
