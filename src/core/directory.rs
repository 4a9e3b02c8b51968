//! Employee directory: the in-memory employee collection backed by the
//! key-value store under [`EMPLOYEES_KEY`].

use crate::core::credential::{CredentialVerifier, PlaintextVerifier};
use crate::core::observe::Listeners;
use crate::db::kv::{EMPLOYEES_KEY, KeyValueStore};
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, EmployeePatch, NewEmployee};
use crate::utils::id::fresh_id;
use chrono::{DateTime, Local};
use serde_json::Value;
use std::rc::Rc;

pub struct Directory {
    kv: Rc<dyn KeyValueStore>,
    employees: Vec<Employee>,
    verifier: Box<dyn CredentialVerifier>,
    listeners: Listeners<Employee>,
}

impl Directory {
    /// Load the persisted collection.
    ///
    /// Records written before the `cpf` or `inactive` fields existed are
    /// backfilled (`"N/A"`, active); when that happens the migrated collection
    /// is written back once. A failed write-back does not prevent loading;
    /// the next successful commit stores the backfilled records anyway.
    pub fn load(kv: Rc<dyn KeyValueStore>) -> AppResult<Self> {
        let employees = match kv.get(EMPLOYEES_KEY)? {
            None => Vec::new(),
            Some(raw) => {
                let values: Vec<Value> = serde_json::from_str(&raw)?;
                let needs_backfill = values
                    .iter()
                    .any(|v| v.get("cpf").is_none() || v.get("inactive").is_none());

                let employees = values
                    .into_iter()
                    .map(serde_json::from_value)
                    .collect::<Result<Vec<Employee>, _>>()?;

                if needs_backfill {
                    let json = serde_json::to_string(&employees)?;
                    match kv.set(EMPLOYEES_KEY, &json) {
                        Ok(()) => tracing::info!(
                            count = employees.len(),
                            "backfilled legacy fields on stored employees"
                        ),
                        Err(e) => tracing::warn!(
                            error = %e,
                            "could not write back backfilled employees; keeping them in memory"
                        ),
                    }
                }

                employees
            }
        };

        Ok(Self {
            kv,
            employees,
            verifier: Box::new(PlaintextVerifier),
            listeners: Listeners::default(),
        })
    }

    /// Replace the password verifier (plain text by default).
    pub fn with_verifier<V>(mut self, verifier: V) -> Self
    where
        V: CredentialVerifier + 'static,
    {
        self.verifier = Box::new(verifier);
        self
    }

    /// All employees, in insertion order.
    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn find_by_ra(&self, ra: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.ra == ra)
    }

    /// Active employee matching both username and password.
    pub fn find_by_credentials(&self, username: &str, password: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| {
            e.is_active() && e.username == username && self.verifier.verify(&e.password, password)
        })
    }

    pub fn active_count(&self) -> usize {
        self.employees.iter().filter(|e| e.is_active()).count()
    }

    pub fn subscribe<F>(&mut self, f: F)
    where
        F: Fn(&[Employee]) + 'static,
    {
        self.listeners.subscribe(f);
    }

    /// Create a new employee.
    ///
    /// Every field is required; `ra` and `username` must not be used by any
    /// other employee, active or not.
    pub fn add(&mut self, data: NewEmployee, now: DateTime<Local>) -> AppResult<Employee> {
        let required = [
            &data.name,
            &data.ra,
            &data.cpf,
            &data.username,
            &data.password,
        ];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(AppError::Validation(
                "Todos os campos são obrigatórios".into(),
            ));
        }

        if self.employees.iter().any(|e| e.ra == data.ra) {
            return Err(AppError::Validation(format!("RA {} já está em uso", data.ra)));
        }

        if self.employees.iter().any(|e| e.username == data.username) {
            return Err(AppError::Validation(format!(
                "Nome de usuário '{}' já está em uso",
                data.username
            )));
        }

        let id = fresh_id(|candidate| self.employees.iter().any(|e| e.id == candidate));

        let employee = Employee {
            id,
            name: data.name,
            ra: data.ra,
            cpf: data.cpf,
            username: data.username,
            password: self.verifier.prepare(&data.password),
            created_at: now,
            inactive: false,
        };

        let mut next = self.employees.clone();
        next.push(employee.clone());
        self.commit(next)?;

        Ok(employee)
    }

    /// Apply a partial update. Uniqueness is only checked at creation time.
    ///
    /// Returns `None` (and persists nothing) when `id` is unknown.
    pub fn update(&mut self, id: &str, patch: &EmployeePatch) -> AppResult<Option<Employee>> {
        let Some(pos) = self.employees.iter().position(|e| e.id == id) else {
            return Ok(None);
        };

        let mut next = self.employees.clone();
        patch.apply_to(&mut next[pos]);
        if let Some(pw) = &patch.password {
            next[pos].password = self.verifier.prepare(pw);
        }

        let updated = next[pos].clone();
        self.commit(next)?;
        Ok(Some(updated))
    }

    /// Flip the `inactive` flag (soft delete / reactivation).
    ///
    /// Returns the new `inactive` value, or `None` when `id` is unknown; in
    /// that case nothing is persisted.
    pub fn toggle_active(&mut self, id: &str) -> AppResult<Option<bool>> {
        let Some(pos) = self.employees.iter().position(|e| e.id == id) else {
            return Ok(None);
        };

        let mut next = self.employees.clone();
        next[pos].inactive = !next[pos].inactive;
        let inactive = next[pos].inactive;

        self.commit(next)?;
        Ok(Some(inactive))
    }

    /// Replace the whole collection (bulk import).
    pub fn replace_all(&mut self, employees: Vec<Employee>) -> AppResult<()> {
        self.commit(employees)
    }

    /// Persist first, then swap: a failed write leaves memory untouched.
    fn commit(&mut self, next: Vec<Employee>) -> AppResult<()> {
        let json = serde_json::to_string(&next)?;
        if let Err(e) = self.kv.set(EMPLOYEES_KEY, &json) {
            tracing::error!(error = %e, "failed to persist employee collection");
            return Err(e);
        }

        self.employees = next;
        self.listeners.notify(&self.employees);
        Ok(())
    }
}
