use rponto::core::entries::TimeEntryStore;
use rponto::core::hash::punch_hash;
use rponto::core::receipt::{EmployerInfo, receipt_file_name, receipt_lines};
use rponto::core::register::PunchRegistrar;
use rponto::db::kv::{KeyValueStore, TIME_ENTRIES_KEY};
use rponto::errors::AppError;
use rponto::models::punch_type::PunchType;
use std::cell::Cell;
use std::rc::Rc;

mod common;
use common::{directory_with_ana, local, memory_kv};

#[test]
fn first_punch_creates_the_daily_record() {
    let kv = memory_kv();
    let (dir, ana) = directory_with_ana(&kv);
    let mut store = TimeEntryStore::load(kv.clone()).unwrap();
    let employer = EmployerInfo::default();

    let now = local(2024, 1, 5, 8, 5);
    let reg = PunchRegistrar::new(&dir, &mut store, &employer)
        .register(&ana.id, PunchType::ClockIn, now)
        .unwrap();

    assert_eq!(reg.time_of_day, "08:05");
    assert_eq!(reg.entry.clock_in.as_deref(), Some("08:05"));
    assert_eq!(reg.entry.lunch_start, None);
    assert_eq!(reg.entry.date.to_string(), "2024-01-05");
    assert_eq!(reg.entry.created_at, now);
    assert_eq!(
        reg.entry.hash.as_deref(),
        Some(punch_hash(&ana.id, PunchType::ClockIn, &now).as_str())
    );

    let receipt = reg.receipt.expect("receipt for a known employee");
    assert!(receipt.bytes.starts_with(b"%PDF"));
    assert_eq!(
        receipt.file_name,
        format!("Comprovante_Ana_Souza_{}.pdf", now.timestamp_millis())
    );

    assert_eq!(store.all().len(), 1);
}

#[test]
fn later_punches_update_the_same_record() {
    let kv = memory_kv();
    let (dir, ana) = directory_with_ana(&kv);
    let mut store = TimeEntryStore::load(kv.clone()).unwrap();
    let employer = EmployerInfo::default();
    let mut reg = PunchRegistrar::new(&dir, &mut store, &employer);

    let first = reg
        .register(&ana.id, PunchType::ClockIn, local(2024, 1, 5, 8, 0))
        .unwrap();
    let second = reg
        .register(&ana.id, PunchType::LunchStart, local(2024, 1, 5, 12, 0))
        .unwrap();

    assert_eq!(first.entry.id, second.entry.id);
    assert_eq!(second.entry.clock_in.as_deref(), Some("08:00"));
    assert_eq!(second.entry.lunch_start.as_deref(), Some("12:00"));
    assert_ne!(first.entry.hash, second.entry.hash);
    assert_eq!(second.entry.created_at, local(2024, 1, 5, 8, 0));

    assert_eq!(store.all().len(), 1);
}

#[test]
fn duplicate_punch_is_rejected_without_side_effects() {
    let kv = memory_kv();
    let (dir, ana) = directory_with_ana(&kv);
    let mut store = TimeEntryStore::load(kv.clone()).unwrap();
    let employer = EmployerInfo::default();

    PunchRegistrar::new(&dir, &mut store, &employer)
        .register(&ana.id, PunchType::ClockIn, local(2024, 1, 5, 8, 0))
        .unwrap();
    let stored = kv.get(TIME_ENTRIES_KEY).unwrap();

    let err = PunchRegistrar::new(&dir, &mut store, &employer)
        .register(&ana.id, PunchType::ClockIn, local(2024, 1, 5, 9, 0))
        .unwrap_err();

    assert!(matches!(err, AppError::DuplicatePunch { ref punch, .. } if punch == "Entrada"));
    assert_eq!(store.all()[0].clock_in.as_deref(), Some("08:00"));
    assert_eq!(kv.get(TIME_ENTRIES_KEY).unwrap(), stored);
}

#[test]
fn each_day_gets_its_own_record() {
    let kv = memory_kv();
    let (dir, ana) = directory_with_ana(&kv);
    let mut store = TimeEntryStore::load(kv.clone()).unwrap();
    let employer = EmployerInfo::default();
    let mut reg = PunchRegistrar::new(&dir, &mut store, &employer);

    reg.register(&ana.id, PunchType::ClockIn, local(2024, 1, 5, 8, 0))
        .unwrap();
    reg.register(&ana.id, PunchType::ClockIn, local(2024, 1, 6, 8, 0))
        .unwrap();

    assert_eq!(store.all().len(), 2);
    assert_ne!(store.all()[0].id, store.all()[1].id);
    assert_eq!(store.count_on(local(2024, 1, 6, 0, 0).date_naive()), 1);
}

#[test]
fn unknown_employee_punch_is_stored_without_receipt() {
    let kv = memory_kv();
    let (dir, _) = directory_with_ana(&kv);
    let mut store = TimeEntryStore::load(kv.clone()).unwrap();
    let employer = EmployerInfo::default();

    let reg = PunchRegistrar::new(&dir, &mut store, &employer)
        .register("ghost", PunchType::ClockIn, local(2024, 1, 5, 8, 0))
        .unwrap();

    assert!(reg.receipt.is_none());
    assert_eq!(store.entries_for("ghost").len(), 1);
}

#[test]
fn storage_failure_is_reported_and_memory_unchanged() {
    let kv = memory_kv();
    let (dir, ana) = directory_with_ana(&kv);
    let mut store = TimeEntryStore::load(kv.clone()).unwrap();
    let employer = EmployerInfo::default();

    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    store.subscribe(move |_| counter.set(counter.get() + 1));

    kv.reject_writes(true);
    let res = PunchRegistrar::new(&dir, &mut store, &employer).register(
        &ana.id,
        PunchType::ClockIn,
        local(2024, 1, 5, 8, 0),
    );

    assert!(res.is_err());
    assert!(store.all().is_empty());
    assert_eq!(calls.get(), 0);
}

#[test]
fn records_survive_a_reload() {
    let kv = memory_kv();
    let (dir, ana) = directory_with_ana(&kv);
    let mut store = TimeEntryStore::load(kv.clone()).unwrap();
    let employer = EmployerInfo::default();

    PunchRegistrar::new(&dir, &mut store, &employer)
        .register(&ana.id, PunchType::ClockIn, local(2024, 1, 5, 8, 0))
        .unwrap();

    let reloaded = TimeEntryStore::load(kv.clone()).unwrap();
    assert_eq!(reloaded.all(), store.all());

    let day = local(2024, 1, 5, 0, 0).date_naive();
    assert!(reloaded.today_entry_for(&ana.id, day).is_some());
    assert_eq!(reloaded.entries_in_range(&ana.id, day, day).len(), 1);
    assert_eq!(reloaded.all_entries_in_range(day, day).len(), 1);
    assert!(reloaded.all_entries_in_range(day.succ_opt().unwrap(), day.succ_opt().unwrap()).is_empty());
}

#[test]
fn records_without_hash_still_load() {
    let kv = memory_kv();
    kv.set(
        TIME_ENTRIES_KEY,
        r#"[{"id":"1","employeeId":"9","date":"2024-01-05","clockIn":"08:00","createdAt":"2024-01-05T11:00:00.000Z"}]"#,
    )
    .unwrap();

    let store = TimeEntryStore::load(kv.clone()).unwrap();
    assert_eq!(store.all().len(), 1);
    assert!(store.all()[0].hash.is_none());
}

#[test]
fn receipt_carries_employer_employee_and_hash() {
    let kv = memory_kv();
    let (dir, ana) = directory_with_ana(&kv);
    let mut store = TimeEntryStore::load(kv.clone()).unwrap();
    let employer = EmployerInfo {
        name: "ACME Ltda".to_string(),
        cnpj: "12.345.678/0001-90".to_string(),
        address: "Rua A, 1".to_string(),
    };

    let now = local(2024, 1, 5, 17, 30);
    let reg = PunchRegistrar::new(&dir, &mut store, &employer)
        .register(&ana.id, PunchType::ClockOut, now)
        .unwrap();

    let lines = receipt_lines(&employer, &ana, &reg.entry, PunchType::ClockOut, "17:30");
    assert_eq!(lines[0], "Empregador: ACME Ltda");
    assert!(lines.contains(&"CPF: 111.222.333-44".to_string()));
    assert!(lines.contains(&"Data e Hora: 05/01/2024 17:30".to_string()));
    assert!(lines.contains(&"Tipo de Registro: Saída".to_string()));
    assert!(lines.contains(&format!("NSR: {}", reg.entry.id)));
    assert!(lines.iter().any(|l| l.starts_with("Hash (SHA-256): ") && l.len() == 16 + 64));

    assert!(receipt_file_name(&ana, &now).starts_with("Comprovante_Ana_Souza_"));
}
