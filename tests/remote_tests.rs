use rponto::core::audit::{AuditAction, AuditEntry, AuditLogger};
use rponto::core::espelho::{accept, espelho_file_name, is_accepted, month_punches, render_espelho};
use rponto::core::hash::generate_hash;
use rponto::core::point::register_point;
use rponto::db::pool::DbPool;
use rponto::db::records::{Filter, Order, RecordStore, SqliteRecordStore};
use rponto::errors::{AppError, AppResult};
use rponto::models::punch_type::PunchType;
use rponto::utils::date::YearMonth;
use serde_json::{Value, json};

mod common;
use common::{directory_with_ana, local, memory_kv};

fn store() -> SqliteRecordStore {
    SqliteRecordStore::new(DbPool::in_memory().unwrap())
}

struct BrokenStore;

impl RecordStore for BrokenStore {
    fn insert(&self, _table: &str, _record: Value) -> AppResult<()> {
        Err(AppError::Other("offline".into()))
    }

    fn query(&self, _: &str, _: &[Filter], _: Option<&Order>) -> AppResult<Vec<Value>> {
        Err(AppError::Other("offline".into()))
    }
}

#[test]
fn record_filters_and_order() {
    let s = store();
    s.insert("t", json!({"k": "a", "n": 3})).unwrap();
    s.insert("t", json!({"k": "b", "n": 1})).unwrap();
    s.insert("t", json!({"k": "a", "n": 2})).unwrap();
    s.insert("other", json!({"k": "a", "n": 0})).unwrap();

    let rows = s
        .query("t", &[Filter::eq("k", "a")], Some(&Order::asc("n")))
        .unwrap();
    let ns: Vec<i64> = rows.iter().map(|r| r["n"].as_i64().unwrap()).collect();
    assert_eq!(ns, [2, 3]);

    let rows = s
        .query("t", &[Filter::gte("n", 2), Filter::lt("n", 3)], None)
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["n"], 2);

    let rows = s.query("t", &[], Some(&Order::desc("n"))).unwrap();
    assert_eq!(rows[0]["n"], 3);

    assert!(s.query("t", &[Filter::eq("missing", "x")], None).unwrap().is_empty());
}

#[test]
fn register_point_inserts_hashed_row_without_duplicate_guard() {
    let s = store();
    let now = local(2024, 1, 15, 8, 0);

    let p1 = register_point(&s, "7", PunchType::ClockIn, now).unwrap();
    register_point(&s, "7", PunchType::ClockIn, now).unwrap();

    assert_eq!(p1.hash, generate_hash("7", "clockIn", &p1.timestamp));
    assert!(p1.timestamp.ends_with('Z'));

    let rows = s.query("time_entries", &[], None).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["type"], "clockIn");
    assert_eq!(rows[0]["employee_id"], "7");
}

#[test]
fn audit_entries_are_recorded_and_failures_swallowed() {
    let s = store();
    let logger = AuditLogger::new(&s);

    logger.log(AuditEntry {
        table_name: "employees".to_string(),
        record_id: "1".to_string(),
        action: AuditAction::Update,
        changed_by: "admin".to_string(),
        justification: Some("typo in name".to_string()),
        old_data: Some(json!({"name": "Ana"})),
        new_data: Some(json!({"name": "Ana Souza"})),
        created_at: local(2024, 1, 15, 9, 0),
    });

    let history = logger.history("employees", "1").unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].action, AuditAction::Update);
    assert_eq!(history[0].new_data, Some(json!({"name": "Ana Souza"})));

    let raw = s.query("audit_logs", &[], None).unwrap();
    assert_eq!(raw[0]["action"], "update");

    AuditLogger::new(&BrokenStore).log(history[0].clone());
}

#[test]
fn espelho_lists_only_the_month_in_order() {
    let s = store();
    register_point(&s, "7", PunchType::ClockOut, local(2024, 1, 15, 17, 0)).unwrap();
    register_point(&s, "7", PunchType::ClockIn, local(2024, 1, 15, 8, 0)).unwrap();
    register_point(&s, "7", PunchType::ClockIn, local(2024, 1, 1, 0, 30)).unwrap();
    register_point(&s, "7", PunchType::ClockIn, local(2024, 2, 1, 8, 0)).unwrap();
    register_point(&s, "7", PunchType::ClockIn, local(2023, 12, 31, 23, 30)).unwrap();
    register_point(&s, "8", PunchType::ClockIn, local(2024, 1, 15, 8, 0)).unwrap();

    let jan = YearMonth::parse("2024-01").unwrap();
    let punches = month_punches(&s, "7", jan).unwrap();

    let kinds: Vec<PunchType> = punches.iter().map(|p| p.punch).collect();
    assert_eq!(
        kinds,
        [PunchType::ClockIn, PunchType::ClockIn, PunchType::ClockOut]
    );
    assert!(punches.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

#[test]
fn espelho_acceptance_is_per_month() {
    let s = store();
    let jan = YearMonth::parse("2024-01").unwrap();
    let feb = YearMonth::parse("2024-02").unwrap();

    assert!(!is_accepted(&s, "7", jan).unwrap());
    accept(&s, "7", jan).unwrap();

    assert!(is_accepted(&s, "7", jan).unwrap());
    assert!(!is_accepted(&s, "7", feb).unwrap());
    assert!(!is_accepted(&s, "8", jan).unwrap());

    let rows = s.query("espelho_aceites", &[], None).unwrap();
    assert_eq!(rows[0]["mes_referencia"], "2024-01");
    assert_eq!(rows[0]["aceito"], true);
}

#[test]
fn espelho_pdf() {
    let kv = memory_kv();
    let (_, ana) = directory_with_ana(&kv);
    let s = store();
    register_point(&s, &ana.id, PunchType::ClockIn, local(2024, 1, 15, 8, 0)).unwrap();

    let jan = YearMonth::parse("2024-01").unwrap();
    let punches = month_punches(&s, &ana.id, jan).unwrap();
    let doc = render_espelho(&ana, &punches, jan);

    assert_eq!(doc.file_name, "Espelho_Ponto_2024_01.pdf");
    assert_eq!(espelho_file_name(jan), doc.file_name);
    assert!(doc.bytes.starts_with(b"%PDF"));

    let empty = render_espelho(&ana, &[], jan);
    assert!(empty.bytes.starts_with(b"%PDF"));
}

#[test]
fn broken_store_surfaces_query_errors() {
    let jan = YearMonth::parse("2024-01").unwrap();
    assert!(month_punches(&BrokenStore, "7", jan).is_err());
    assert!(register_point(&BrokenStore, "7", PunchType::ClockIn, local(2024, 1, 1, 8, 0)).is_err());
}
