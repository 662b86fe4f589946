//! Queue Performance Benchmarks
//!
//! Insert-then-drain throughput per discipline, and the priority queue under
//! both heap layouts.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use qdisc::queue::{HeapLayout, PriorityQueue, QueueDiscipline, FIFO, LIFO};

/// Deterministic pseudo-random values so runs are comparable
fn bench_values(count: usize) -> Vec<u64> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .collect()
}

fn insert_then_drain<D: QueueDiscipline<u64>>(discipline: &D, values: &[u64]) -> u64 {
    let mut queue = None;
    for &value in values {
        queue = Some(discipline.queue_insert(value, queue));
    }
    let mut checksum = 0u64;
    while let Ok(value) = discipline.queue_pop(queue.as_mut()) {
        checksum = checksum.wrapping_add(value);
    }
    checksum
}

/// FIFO pops shift the whole buffer, so keep sizes moderate
fn bench_sequence_queues(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_queues");
    for count in [100usize, 1_000, 5_000] {
        let values = bench_values(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("fifo", count), &values, |b, values| {
            b.iter(|| insert_then_drain(&FIFO, black_box(values)))
        });
        group.bench_with_input(BenchmarkId::new("lifo", count), &values, |b, values| {
            b.iter(|| insert_then_drain(&LIFO, black_box(values)))
        });
    }
    group.finish();
}

fn bench_priority_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_queue");
    for count in [1_000usize, 10_000, 100_000] {
        let values = bench_values(count);
        group.throughput(Throughput::Elements(count as u64));
        for layout in [HeapLayout::Shifted, HeapLayout::Conventional] {
            let pq = PriorityQueue::with_layout(|a: &u64, b: &u64| a > b, layout);
            group.bench_with_input(BenchmarkId::new(layout.as_str(), count), &values, |b, values| {
                b.iter(|| insert_then_drain(&pq, black_box(values)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_sequence_queues, bench_priority_layouts);
criterion_main!(benches);
