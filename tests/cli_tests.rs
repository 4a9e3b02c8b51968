use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_with_employee, rpo, run_ok, setup_test_db};

fn files_in(dir: &std::path::Path) -> Vec<String> {
    fs::read_dir(dir)
        .map(|rd| {
            rd.filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn init_creates_schema() {
    let db = setup_test_db("cli_init");

    run_ok(&db, &["init"]).stdout(contains("Database initialized"));
    run_ok(&db, &["log", "--print"]).stdout(contains("migration_applied").and(contains("init")));
}

#[test]
fn admin_manages_employees() {
    let db = setup_test_db("cli_employees");
    init_with_employee(&db);

    run_ok(&db, &["whoami"]).stdout(contains("admin"));
    run_ok(&db, &["employee", "list"])
        .stdout(contains("Ana Souza").and(contains("1001")).and(contains("Ativo")));

    rpo()
        .args(["--db", &db, "--test", "employee", "add", "--name", "Outra", "--ra", "1001"])
        .args(["--cpf", "1", "--username", "outra", "--password", "x"])
        .assert()
        .failure()
        .stderr(contains("já está em uso"));

    run_ok(&db, &["employee", "update", "1001", "--name", "Ana Lima"]);
    run_ok(&db, &["employee", "toggle", "1001"]).stdout(contains("desativado"));
    run_ok(&db, &["employee", "list", "--active"]).stdout(contains("No employees to show"));
    run_ok(&db, &["employee", "list"]).stdout(contains("Ana Lima").and(contains("Inativo")));

    // inactive employees cannot log in
    rpo()
        .args(["--db", &db, "--test", "login", "ana", "--password", "senha1"])
        .assert()
        .failure()
        .stderr(contains("inválidos"));
}

#[test]
fn commands_require_the_right_session() {
    let db = setup_test_db("cli_sessions");
    init_with_employee(&db);

    run_ok(&db, &["logout"]);
    rpo()
        .args(["--db", &db, "--test", "today"])
        .assert()
        .failure()
        .stderr(contains("No active session"));

    run_ok(&db, &["login", "ana", "--password", "senha1"]).stdout(contains("Ana Souza"));
    rpo()
        .args(["--db", &db, "--test", "employee", "list"])
        .assert()
        .failure()
        .stderr(contains("not an administrator"));
    rpo()
        .args(["--db", &db, "--test", "stats"])
        .assert()
        .failure();
}

#[test]
fn full_day_of_punches_then_reports() {
    let db = setup_test_db("cli_punch_day");
    let out = tempfile::tempdir().unwrap();
    let out_dir = out.path().to_string_lossy().to_string();
    init_with_employee(&db);

    run_ok(&db, &["login", "ana", "--password", "senha1"]);

    for (punch, at) in [
        ("clock-in", "2024-01-15T08:00"),
        ("lunch-start", "2024-01-15T12:00"),
        ("lunch-end", "2024-01-15T13:00"),
        ("clock-out", "2024-01-15T17:00"),
    ] {
        run_ok(&db, &["--out", &out_dir, "punch", punch, "--at", at]).stdout(contains("registrada"));
    }

    let receipts = files_in(out.path());
    assert_eq!(receipts.len(), 4);
    assert!(receipts.iter().all(|f| f.starts_with("Comprovante_Ana_Souza_")));

    // same punch twice on one day
    rpo()
        .args(["--db", &db, "--test", "--out", &out_dir])
        .args(["punch", "clock-in", "--at", "2024-01-15T09:00"])
        .assert()
        .failure()
        .stderr(contains("already registered"));

    run_ok(&db, &["history", "--period", "2024-01"])
        .stdout(contains("15/01/2024").and(contains("8h 0m")));

    // admin side
    run_ok(&db, &["login", "admin", "--password", "admin123"]);
    run_ok(&db, &["report", "--period", "2024-01"])
        .stdout(contains("Ana Souza").and(contains("8h 0m")));
    run_ok(&db, &["report", "--period", "2024-02"]).stdout(contains("Nenhum registro"));

    run_ok(&db, &["--out", &out_dir, "export", "csv", "--period", "2024-01"]);
    let csv = fs::read_to_string(out.path().join("relatorio_pontos_2024-01-01_2024-01-31.csv")).unwrap();
    assert_eq!(
        csv.lines().nth(1),
        Some("Ana Souza,1001,15/01/2024,08:00,12:00,13:00,17:00,8h 0m")
    );

    run_ok(&db, &["--out", &out_dir, "export", "afd", "--period", "2024-01"]);
    let afd = fs::read_to_string(out.path().join("AFD_2024-01-01_2024-01-31.txt")).unwrap();
    assert_eq!(afd.lines().count(), 1);
    assert!(afd.contains("20240115080000"));

    run_ok(&db, &["log", "--print"]).stdout(contains("punch").and(contains("export")));
}

#[test]
fn espelho_accept_and_pdf() {
    let db = setup_test_db("cli_espelho");
    let out = tempfile::tempdir().unwrap();
    let out_dir = out.path().to_string_lossy().to_string();
    init_with_employee(&db);

    run_ok(&db, &["login", "ana", "--password", "senha1"]);
    run_ok(&db, &["--out", &out_dir, "punch", "clock-in", "--no-receipt", "--at", "2024-01-15T08:00"]);
    assert!(files_in(out.path()).is_empty());

    run_ok(&db, &["espelho", "--month", "2024-01"])
        .stdout(contains("Entrada").and(contains("Aceite pendente")));

    run_ok(&db, &["--out", &out_dir, "espelho", "--month", "2024-01", "--accept", "--pdf"])
        .stdout(contains("Ponto aceito."));
    let pdf = fs::read(out.path().join("Espelho_Ponto_2024_01.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));

    run_ok(&db, &["espelho", "--month", "2024-01", "--accept"]).stdout(contains("já aceito"));

    run_ok(&db, &["login", "admin", "--password", "admin123"]);
    run_ok(&db, &["espelho", "--month", "2024-01", "--employee", "1001"])
        .stdout(contains("Ponto aceito."));
}

#[test]
fn punch_time_override_needs_test_mode() {
    let db = setup_test_db("cli_at_guard");

    rpo()
        .args(["--db", &db, "punch", "clock-in", "--at", "2024-01-15T08:00"])
        .assert()
        .failure()
        .stderr(contains("test mode"));

    rpo()
        .args(["--db", &db, "--test", "punch", "coffee"])
        .assert()
        .failure()
        .stderr(contains("Invalid punch type"));
}

#[test]
fn import_dump_then_stats() {
    let db = setup_test_db("cli_import");
    let tmp = tempfile::tempdir().unwrap();
    let dump = tmp.path().join("dump.json");
    fs::write(
        &dump,
        r#"{"employees":[{"id":"1","name":"Ana","ra":"100","username":"ana","password":"x","createdAt":"2024-01-01T10:00:00.000Z"}],"timeEntries":[]}"#,
    )
    .unwrap();
    let dump = dump.to_string_lossy().to_string();

    run_ok(&db, &["init"]);
    run_ok(&db, &["login", "admin", "--password", "admin123"]);
    run_ok(&db, &["import", &dump]).stdout(contains("Imported 1 employees"));

    rpo()
        .args(["--db", &db, "--test", "import", &dump])
        .assert()
        .failure()
        .stderr(contains("--force"));
    run_ok(&db, &["import", &dump, "--force"]);

    run_ok(&db, &["stats"]).stdout(contains("Funcionários ativos : 1"));
    run_ok(&db, &["login", "ana", "--password", "x"]);
}
