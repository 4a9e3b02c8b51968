use crate::cli::commands::resolve_employee;
use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::audit::{AuditAction, AuditEntry, AuditLogger};
use crate::core::context::AppContext;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, EmployeePatch, NewEmployee};
use crate::ui::messages::{info, success, warning};
use crate::utils::table::Table;
use chrono::Local;
use serde_json::Value;

const EMPLOYEES_TABLE: &str = "employees";

/// Employee snapshot for the audit trail, without the password.
fn audit_json(emp: &Employee) -> Option<Value> {
    let mut v = serde_json::to_value(emp).ok()?;
    if let Some(obj) = v.as_object_mut() {
        obj.remove("password");
    }
    Some(v)
}

fn audit(
    ctx: &AppContext,
    changed_by: &str,
    action: AuditAction,
    record_id: &str,
    old: Option<&Employee>,
    new: Option<&Employee>,
) {
    AuditLogger::new(&ctx.records).log(AuditEntry {
        table_name: EMPLOYEES_TABLE.to_string(),
        record_id: record_id.to_string(),
        action,
        changed_by: changed_by.to_string(),
        justification: None,
        old_data: old.and_then(audit_json),
        new_data: new.and_then(audit_json),
        created_at: Local::now(),
    });
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Employee { action } = cmd else {
        return Ok(());
    };

    let mut ctx = AppContext::open(cfg)?;
    let admin = ctx.auth.require_admin()?;

    match action {
        EmployeeAction::Add {
            name,
            ra,
            cpf,
            username,
            password,
        } => {
            let data = NewEmployee {
                name: name.clone(),
                ra: ra.clone(),
                cpf: cpf.clone(),
                username: username.clone(),
                password: password.clone(),
            };

            let emp = ctx.directory.add(data, Local::now())?;
            audit(&ctx, &admin.username, AuditAction::Insert, &emp.id, None, Some(&emp));
            ttlog_quiet(
                &ctx.pool.conn,
                "employee_add",
                &emp.id,
                &format!("Employee '{}' (RA {}) added", emp.name, emp.ra),
            );
            success(format!("Funcionário {} cadastrado (id {})", emp.name, emp.id));
        }

        EmployeeAction::List { active } => {
            let mut table = Table::new(&["ID", "Nome", "RA", "CPF", "Usuário", "Status"]);
            for e in ctx.directory.list().iter().filter(|e| !*active || e.is_active()) {
                table.add_row(vec![
                    e.id.clone(),
                    e.name.clone(),
                    e.ra.clone(),
                    e.cpf.clone(),
                    e.username.clone(),
                    e.status_label().to_string(),
                ]);
            }

            if table.is_empty() {
                info("No employees to show.");
            } else {
                print!("{}", table.render());
            }
        }

        EmployeeAction::Update {
            employee,
            name,
            ra,
            cpf,
            username,
            password,
        } => {
            let patch = EmployeePatch {
                name: name.clone(),
                ra: ra.clone(),
                cpf: cpf.clone(),
                username: username.clone(),
                password: password.clone(),
            };
            if patch.is_empty() {
                warning("Nothing to update.");
                return Ok(());
            }

            let before = resolve_employee(&ctx.directory, employee)?.clone();
            let after = ctx
                .directory
                .update(&before.id, &patch)?
                .ok_or_else(|| AppError::EmployeeNotFound(employee.clone()))?;

            audit(
                &ctx,
                &admin.username,
                AuditAction::Update,
                &after.id,
                Some(&before),
                Some(&after),
            );
            ttlog_quiet(
                &ctx.pool.conn,
                "employee_update",
                &after.id,
                &format!("Employee '{}' updated", after.name),
            );
            success(format!("Funcionário {} atualizado", after.name));
        }

        EmployeeAction::Toggle { employee } => {
            let before = resolve_employee(&ctx.directory, employee)?.clone();
            let inactive = ctx
                .directory
                .toggle_active(&before.id)?
                .ok_or_else(|| AppError::EmployeeNotFound(employee.clone()))?;

            let after = Employee {
                inactive,
                ..before.clone()
            };
            audit(
                &ctx,
                &admin.username,
                AuditAction::Update,
                &before.id,
                Some(&before),
                Some(&after),
            );

            let state = if inactive { "desativado" } else { "reativado" };
            ttlog_quiet(
                &ctx.pool.conn,
                "employee_toggle",
                &before.id,
                &format!("Employee '{}' {}", before.name, state),
            );
            success(format!("Funcionário {} {}", before.name, state));
        }
    }

    Ok(())
}
