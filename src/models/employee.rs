use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Placeholder written into records stored before the `cpf` field existed.
pub const MISSING_CPF: &str = "N/A";

fn missing_cpf() -> String {
    MISSING_CPF.to_string()
}

/// Employee record, serialized with the same camelCase keys used by the
/// browser build (`ra`, `cpf`, `createdAt`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    /// Registration number ("RA"), unique across the directory.
    pub ra: String,
    #[serde(default = "missing_cpf")]
    pub cpf: String,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Local>,
    #[serde(default)]
    pub inactive: bool,
}

impl Employee {
    pub fn is_active(&self) -> bool {
        !self.inactive
    }

    pub fn status_label(&self) -> &'static str {
        if self.inactive { "Inativo" } else { "Ativo" }
    }
}

/// Data supplied by the admin when creating an employee.
#[derive(Debug, Clone, Default)]
pub struct NewEmployee {
    pub name: String,
    pub ra: String,
    pub cpf: String,
    pub username: String,
    pub password: String,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub ra: Option<String>,
    pub cpf: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.ra.is_none()
            && self.cpf.is_none()
            && self.username.is_none()
            && self.password.is_none()
    }

    pub(crate) fn apply_to(&self, emp: &mut Employee) {
        if let Some(v) = &self.name {
            emp.name = v.clone();
        }
        if let Some(v) = &self.ra {
            emp.ra = v.clone();
        }
        if let Some(v) = &self.cpf {
            emp.cpf = v.clone();
        }
        if let Some(v) = &self.username {
            emp.username = v.clone();
        }
        if let Some(v) = &self.password {
            emp.password = v.clone();
        }
    }
}
