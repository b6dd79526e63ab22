//! Performance benchmarks for the Raise Eligibility Engine.
//!
//! - Single raise computation through the library
//! - Single `/raise` request through the router
//! - Roster batches of increasing size
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use raise_engine::api::{AppState, create_router};
use raise_engine::calculation::{compute_raise, compute_roster, summarize_roster, upcoming_raises};
use raise_engine::config::EngineConfig;
use raise_engine::models::{EmployeeRecord, RaiseInput};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
}

/// Creates `count` employee records cycling through every grade.
fn create_records(count: usize) -> Vec<EmployeeRecord> {
    let grades = [("B", "2.46"), ("A0", "2,72"), ("A1", "3.33"), ("A2.2", "4.68"), ("A3", "6.20")];
    (0..count)
        .map(|i| {
            let (grade, coefficient) = grades[i % grades.len()];
            serde_json::from_value(serde_json::json!({
                "name": format!("Employee {:04}", i),
                "role": if i % 10 == 0 { "Hiệu trưởng" } else { "Giáo viên" },
                "coefficient": coefficient,
                "pay_grade": grade,
                "current_effective_date": format!("{:02}/{:02}/2023", i % 28 + 1, i % 12 + 1),
            }))
            .unwrap()
        })
        .collect()
}

/// Benchmark: One raise computation without the HTTP layer.
fn bench_compute_raise(c: &mut Criterion) {
    let input = RaiseInput {
        coefficient: Some("3,33".into()),
        pay_grade: Some("A1".to_string()),
        current_effective_date: NaiveDate::from_ymd_opt(2023, 11, 1),
        retirement_date: NaiveDate::from_ymd_opt(2040, 1, 1),
    };

    c.bench_function("compute_raise", |b| {
        b.iter(|| black_box(compute_raise(black_box(&input), today())))
    });
}

/// Benchmark: One `/raise` request through the router.
fn bench_raise_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(EngineConfig::default()));
    let body = serde_json::json!({
        "employee": {
            "coefficient": 3.33,
            "pay_grade": "A1",
            "current_effective_date": "01/11/2023"
        },
        "today": "01/12/2025"
    })
    .to_string();

    c.bench_function("raise_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/raise")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Roster batches to understand scaling behavior.
fn bench_roster_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("roster");

    for count in [10, 100, 1000].iter() {
        let records = create_records(*count);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("employees", count), &records, |b, records| {
            b.iter(|| {
                let entries = compute_roster(records, today());
                let upcoming = upcoming_raises(&entries, 6).len();
                black_box((summarize_roster(&entries), upcoming))
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_raise,
    bench_raise_request,
    bench_roster_scaling,
);
criterion_main!(benches);
