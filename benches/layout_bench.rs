// Benchmark for month layout
// Measures week packing and full-month layout as the event count grows

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use month_calendar::services::layout::layout_month;
use month_calendar::{build_week_rows, pack_week, Event};

fn month_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

// Deterministic spread of 1-5 day events over the visible grid
fn generate_events(count: usize) -> Vec<Event> {
    (0..count)
        .map(|i| {
            let start = month_start() + Duration::days((i * 7 % 41) as i64 - 3);
            let length = (i % 5) as i64;
            Event::builder()
                .id(format!("bench-{i}"))
                .title(format!("Bench event {i}"))
                .dates(start, start + Duration::days(length))
                .build()
                .unwrap()
        })
        .collect()
}

fn bench_pack_week(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_week");
    let week = build_week_rows(month_start())[2];

    for count in [10, 100, 1000].iter() {
        let events = generate_events(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &events, |b, events| {
            b.iter(|| pack_week(black_box(&week), black_box(events)));
        });
    }

    group.finish();
}

fn bench_layout_month(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_month");

    for count in [10, 100, 1000].iter() {
        let events = generate_events(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &events, |b, events| {
            b.iter(|| layout_month(black_box(month_start()), 0, black_box(events)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pack_week, bench_layout_month);
criterion_main!(benches);
