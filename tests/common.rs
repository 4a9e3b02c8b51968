#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use rponto::core::directory::Directory;
use rponto::db::kv::MemoryKv;
use rponto::models::employee::{Employee, NewEmployee};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

pub fn rpo() -> Command {
    cargo_bin_cmd!("rponto")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rponto.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// `--db <db> --test` followed by `args`.
pub fn run_ok(db: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    rpo()
        .args(["--db", db, "--test"])
        .args(args)
        .assert()
        .success()
}

/// Initialize the DB, log in as admin and register one employee
/// (RA 1001, user `ana` / `senha1`).
pub fn init_with_employee(db: &str) {
    run_ok(db, &["init"]);
    run_ok(db, &["login", "admin", "--password", "admin123"]);
    run_ok(
        db,
        &[
            "employee",
            "add",
            "--name",
            "Ana Souza",
            "--ra",
            "1001",
            "--cpf",
            "123.456.789-00",
            "--username",
            "ana",
            "--password",
            "senha1",
        ],
    );
}

pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("unambiguous local time")
}

pub fn memory_kv() -> Rc<MemoryKv> {
    Rc::new(MemoryKv::new())
}

pub fn new_employee(name: &str, ra: &str, username: &str) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        ra: ra.to_string(),
        cpf: "111.222.333-44".to_string(),
        username: username.to_string(),
        password: "secret".to_string(),
    }
}

/// Directory over `kv` holding Ana Souza (RA 1001).
pub fn directory_with_ana(kv: &Rc<MemoryKv>) -> (Directory, Employee) {
    let mut dir = Directory::load(kv.clone()).expect("load directory");
    let ana = dir
        .add(new_employee("Ana Souza", "1001", "ana"), local(2024, 1, 2, 9, 0))
        .expect("add employee");
    (dir, ana)
}
