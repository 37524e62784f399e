//! Performance benchmarks for the Payroll Engine.
//!
//! Each iteration runs a full month against a fresh transaction store, so the
//! idempotency check never short-circuits the computation.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use axum::{body::Body, http::Request};
use chrono::{TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::PayrollSettings;
use payroll_engine::models::{Bonus, BonusKind, Employee, Infraction, RawInstant};
use payroll_engine::payroll::PayrollRunner;
use payroll_engine::store::{
    InMemoryBonusLedger, InMemoryEmployeeDirectory, InMemoryInfractionLedger,
    InMemoryTransactionStore,
};

struct Workforce {
    employees: Arc<InMemoryEmployeeDirectory>,
    infractions: Arc<InMemoryInfractionLedger>,
    bonuses: Arc<InMemoryBonusLedger>,
}

/// Builds `size` employees; every third starts mid-month, every fifth has an
/// infraction and every seventh a percentage bonus.
fn create_workforce(size: usize) -> Workforce {
    let employees = (0..size)
        .map(|i| Employee {
            id: format!("emp_{:05}", i),
            name: format!("Employee {:05}", i),
            base_salary: Decimal::from(150_000 + (i as i64 % 40) * 5_000),
            start_date: if i % 3 == 0 {
                Some(RawInstant::from(format!("2026-04-{:02}", 1 + i % 28)))
            } else {
                Some(RawInstant::from("2023-02-01"))
            },
            active: true,
        })
        .collect();

    let infractions = (0..size)
        .filter(|i| i % 5 == 0)
        .map(|i| Infraction {
            id: format!("inf_{:05}", i),
            employee_id: format!("emp_{:05}", i),
            deduction_percentage: Decimal::from(5),
            date_issued: RawInstant::from("2026-04-10T12:00:00Z"),
        })
        .collect();

    let bonuses = (0..size)
        .filter(|i| i % 7 == 0)
        .map(|i| Bonus {
            id: format!("bonus_{:05}", i),
            employee_id: format!("emp_{:05}", i),
            amount: Decimal::from(10),
            currency_or_kind: BonusKind::Percentage,
            date_issued: RawInstant::from("2026-04-15"),
        })
        .collect();

    Workforce {
        employees: Arc::new(InMemoryEmployeeDirectory::new(employees)),
        infractions: Arc::new(InMemoryInfractionLedger::new(infractions)),
        bonuses: Arc::new(InMemoryBonusLedger::new(bonuses)),
    }
}

fn create_runner(workforce: &Workforce) -> PayrollRunner {
    PayrollRunner::new(
        workforce.employees.clone(),
        workforce.infractions.clone(),
        workforce.bonuses.clone(),
        Arc::new(InMemoryTransactionStore::new()),
        PayrollSettings::default(),
    )
}

/// Benchmark: one run at increasing workforce sizes.
fn bench_run_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let now = Utc.with_ymd_and_hms(2026, 4, 30, 18, 0, 0).unwrap();

    let mut group = c.benchmark_group("payroll_run");

    for size in [10usize, 100, 300, 1000].iter() {
        let workforce = create_workforce(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("employees", size), size, |b, _| {
            b.to_async(&rt).iter(|| async {
                let runner = create_runner(&workforce);
                let result = runner
                    .run_payroll_at(Some(2026), Some(4), now)
                    .await
                    .unwrap();
                black_box(result)
            })
        });
    }

    group.finish();
}

/// Benchmark: a 300-employee run through the HTTP router.
fn bench_http_run(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let workforce = create_workforce(300);
    let body = serde_json::json!({ "year": 2026, "month": 4 }).to_string();

    c.bench_function("http_run_300", |b| {
        b.to_async(&rt).iter(|| async {
            let router = create_router(AppState::new(create_runner(&workforce)));
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll/run")
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

criterion_group!(benches, bench_run_scaling, bench_http_run);
criterion_main!(benches);
