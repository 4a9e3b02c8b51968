use super::employee::Employee;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

/// Logged-in user, persisted under the `currentUser` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

impl User {
    pub fn admin(username: &str) -> Self {
        Self {
            id: "admin".to_string(),
            username: username.to_string(),
            role: Role::Admin,
            employee_id: None,
        }
    }

    pub fn for_employee(emp: &Employee) -> Self {
        Self {
            id: emp.id.clone(),
            username: emp.username.clone(),
            role: Role::Employee,
            employee_id: Some(emp.id.clone()),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
