//! Performance benchmarks for the ERP calculation core.
//!
//! The calculations run inside the request/response cycle of the web layer,
//! so the hot paths need to stay cheap:
//! - single time-entry pay calculation: well under 1μs
//! - full rollup of a season-sized project (500 entries): < 1ms
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use rust_decimal::Decimal;

use erp_engine::calculation::{calculated_pay, LaborRecord, ProjectLedger};
use erp_engine::config::{PayPolicy, PolicyLoader};
use erp_engine::models::{
    Employee, MaterialPurchase, PaymentMethod, Project, ProjectStatus, TimeEntry,
};

fn load_policy() -> PayPolicy {
    PolicyLoader::load("./config/erp")
        .expect("Failed to load policy")
        .policy()
        .clone()
}

fn make_employee() -> Employee {
    Employee {
        id: "emp_001".to_string(),
        name: "Maria Lopez".to_string(),
        employee_ref: None,
        pay_rate: Decimal::new(2500, 2),
        payment_method: PaymentMethod::Check,
        is_active: true,
        hire_date: None,
    }
}

fn make_entries(count: usize) -> Vec<TimeEntry> {
    let base = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    (0..count)
        .map(|i| TimeEntry {
            id: format!("ts_{i}"),
            employee_id: "emp_001".to_string(),
            project_id: Some("proj_001".to_string()),
            date: base + TimeDelta::days(i as i64 % 180),
            entry_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            exit_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            lunch_duration_minutes: (i as u32 * 7) % 120,
        })
        .collect()
}

fn bench_single_entry_pay(c: &mut Criterion) {
    let policy = load_policy();
    let employee = make_employee();
    let entry = &make_entries(1)[0];

    c.bench_function("single_entry_pay", |b| {
        b.iter(|| calculated_pay(black_box(entry), black_box(&employee), black_box(&policy)))
    });
}

fn bench_project_rollup(c: &mut Criterion) {
    let policy = load_policy();
    let employee = make_employee();
    let project = Project {
        id: "proj_001".to_string(),
        name: "Season of work".to_string(),
        project_ref: None,
        client_name: None,
        location: None,
        contract_value: Some(Decimal::new(25000000, 2)),
        start_date: None,
        end_date: None,
        status: ProjectStatus::InProgress,
    };
    let materials: Vec<MaterialPurchase> = (0i64..50)
        .map(|i| MaterialPurchase {
            id: format!("mat_{i}"),
            project_id: "proj_001".to_string(),
            description: "Material".to_string(),
            supplier: None,
            cost: Decimal::new(10000 + i * 37, 2),
            purchase_date: None,
            category: None,
        })
        .collect();

    let mut group = c.benchmark_group("project_rollup");
    for entry_count in [50usize, 500] {
        let entries = make_entries(entry_count);
        let labor: Vec<LaborRecord<'_>> = entries
            .iter()
            .map(|entry| LaborRecord {
                entry,
                employee: &employee,
            })
            .collect();
        let ledger = ProjectLedger {
            project: &project,
            labor: &labor,
            materials: &materials,
            expenses: &[],
            invoices: &[],
        };

        group.throughput(Throughput::Elements(entry_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(entry_count),
            &ledger,
            |b, ledger| b.iter(|| black_box(ledger).estimated_profit(black_box(&policy))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_single_entry_pay, bench_project_rollup);
criterion_main!(benches);
