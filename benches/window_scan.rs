//! Benchmark suite for the window scanner.
//!
//! Run with: `cargo bench`
//!
//! Measures:
//! - Scan throughput over well-behaved sequences (worst case: no early exit)
//! - Short-circuit latency when the first window already violates
//! - Full-pass throughput including parsing and grouping

use cancellation_monitor::{
    parse_record, CancellationMonitor, MonitorConfig, OrderKind, TradeEvent, WindowScanner,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Build a compliant sequence: one order and one small cancel per second.
fn compliant_sequence(events: usize) -> Vec<TradeEvent> {
    (0..events)
        .map(|i| {
            let ts = (i as i64) * 1_000;
            if i % 2 == 0 {
                TradeEvent::new(ts, "BENCH", OrderKind::NewOrder, 100.0)
            } else {
                TradeEvent::new(ts, "BENCH", OrderKind::CancelOrFill, 10.0)
            }
        })
        .collect()
}

fn bench_scan_compliant(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_compliant");
    for &size in &[1_000usize, 10_000, 100_000] {
        let events = compliant_sequence(size);
        let scanner = WindowScanner::default();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &events, |b, events| {
            b.iter(|| black_box(scanner.scan(black_box(events))))
        });
    }
    group.finish();
}

fn bench_scan_short_circuit(c: &mut Criterion) {
    // Violating window up front, 100k events behind it.
    let mut events = vec![
        TradeEvent::new(0, "BENCH", OrderKind::NewOrder, 100.0),
        TradeEvent::new(500, "BENCH", OrderKind::CancelOrFill, 90.0),
    ];
    events.extend((0..100_000).map(|i| {
        TradeEvent::new(120_000 + (i as i64) * 61_000, "BENCH", OrderKind::NewOrder, 100.0)
    }));

    let scanner = WindowScanner::default();
    c.bench_function("scan_short_circuit", |b| {
        b.iter(|| black_box(scanner.scan(black_box(&events))))
    });
}

fn bench_parse_record(c: &mut Criterion) {
    c.bench_function("parse_record", |b| {
        b.iter(|| black_box(parse_record(black_box("1696118400000,ACME,D,250.5"))))
    });
}

fn bench_full_pass(c: &mut Criterion) {
    // 10 companies, 1000 lines each, pre-rendered CSV lines.
    let lines: Vec<String> = (0..10_000)
        .map(|i| {
            let company = format!("C{}", i % 10);
            let kind = if i % 5 == 0 { "F" } else { "D" };
            format!("{},{},{},{}", (i / 10) * 1_000, company, kind, 100)
        })
        .collect();

    let mut group = c.benchmark_group("full_pass");
    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("ingest_and_report", |b| {
        b.iter(|| {
            let config = MonitorConfig::default().with_log_rejects(false);
            let mut monitor = CancellationMonitor::from_config(config).unwrap();
            for line in &lines {
                monitor.ingest_line(line);
            }
            black_box(monitor.well_behaved_count())
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scan_compliant,
    bench_scan_short_circuit,
    bench_parse_record,
    bench_full_pass
);
criterion_main!(benches);
