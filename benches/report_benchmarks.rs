//! Performance benchmarks for the attendance report engine.
//!
//! Covers the aggregation pipeline at growing roster sizes, the Excel
//! export, and the JSON endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_report::aggregation::run_report;
use attendance_report::api::{AppState, ReportRequest, create_router};
use attendance_report::config::{ConfigLoader, ReportConfig};
use attendance_report::export::export_report;
use attendance_report::models::{CellValue, WideTable};

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use tower::ServiceExt;

const SHIFT_CODES: [&str; 6] = ["M1", "L", "N2", "", "T1", "L"];

/// Builds a roster of `employees` rows over `days` consecutive dates
/// starting on 2026-01-01.
fn create_table(employees: usize, days: usize) -> WideTable {
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let mut columns: Vec<CellValue> = vec!["Nombre".into(), "RUT".into()];
    columns.extend((0..days).map(|offset| {
        CellValue::from(start + chrono::Duration::days(offset as i64))
    }));

    let rows = (0..employees)
        .map(|index| {
            let mut cells: Vec<CellValue> = vec![
                format!("Colaborador {}", index).into(),
                format!("{}-{}", 10_000_000 + index, index % 10).into(),
            ];
            cells.extend(
                (0..days).map(|day| CellValue::from(SHIFT_CODES[(index + day) % SHIFT_CODES.len()])),
            );
            cells
        })
        .collect();

    WideTable::new(columns, rows)
}

fn config() -> ReportConfig {
    ReportConfig::new(["Nombre", "RUT"], "L")
}

const HOLIDAYS: &str = "01-01-2026, 03-04-2026, 04-04-2026, 01-05-2026, 21-05-2026";

/// Benchmark: one month, 50 employees.
fn bench_month_roster(c: &mut Criterion) {
    let table = create_table(50, 31);
    let config = config();

    c.bench_function("month_50_employees", |b| {
        b.iter(|| black_box(run_report(&table, HOLIDAYS, &config).unwrap()))
    });
}

/// Benchmark: aggregation scaling with roster size.
fn bench_scaling(c: &mut Criterion) {
    let config = config();
    let mut group = c.benchmark_group("roster_scaling");

    for employees in [10usize, 100, 1000].iter() {
        let table = create_table(*employees, 31);
        group.throughput(Throughput::Elements((*employees * 31) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(employees),
            &table,
            |b, table| b.iter(|| black_box(run_report(table, HOLIDAYS, &config).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark: writing the three-sheet workbook.
fn bench_export(c: &mut Criterion) {
    let report = run_report(&create_table(200, 31), HOLIDAYS, &config()).unwrap();

    let mut group = c.benchmark_group("export");
    group.sample_size(20);
    group.bench_function("xlsx_200_employees", |b| {
        b.iter(|| black_box(export_report(&report).unwrap()))
    });
    group.finish();
}

/// Benchmark: `POST /report` through the router.
fn bench_api_report(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let loader = ConfigLoader::from_config(config()).unwrap();
    let router = create_router(AppState::new(loader));
    let request = ReportRequest {
        table: create_table(50, 31),
        holidays: HOLIDAYS.to_string(),
    };
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("api_report_50_employees", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/report")
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

criterion_group!(
    benches,
    bench_month_roster,
    bench_scaling,
    bench_export,
    bench_api_report,
);
criterion_main!(benches);
