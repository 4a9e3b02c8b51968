//! Session handling: fixed admin credential plus employee login.
//!
//! The logged-in user is persisted under [`CURRENT_USER_KEY`] so consecutive
//! CLI invocations share one session.

use crate::config::Config;
use crate::core::directory::Directory;
use crate::db::kv::{CURRENT_USER_KEY, KeyValueStore};
use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct AdminCredential {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredential {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}

impl From<&Config> for AdminCredential {
    fn from(cfg: &Config) -> Self {
        Self {
            username: cfg.admin_username.clone(),
            password: cfg.admin_password.clone(),
        }
    }
}

pub struct Auth {
    kv: Rc<dyn KeyValueStore>,
    admin: AdminCredential,
}

impl Auth {
    pub fn new(kv: Rc<dyn KeyValueStore>, admin: AdminCredential) -> Self {
        Self { kv, admin }
    }

    /// Admin credential first, then active employees. `Ok(None)` means the
    /// credentials were rejected; nothing is persisted in that case.
    pub fn login(
        &self,
        directory: &Directory,
        username: &str,
        password: &str,
    ) -> AppResult<Option<User>> {
        let user = if username == self.admin.username && password == self.admin.password {
            Some(User::admin(username))
        } else {
            directory
                .find_by_credentials(username, password)
                .map(User::for_employee)
        };

        match &user {
            Some(u) => {
                self.kv.set(CURRENT_USER_KEY, &serde_json::to_string(u)?)?;
                tracing::info!(username, role = ?u.role, "login");
            }
            None => tracing::info!(username, "login rejected"),
        }

        Ok(user)
    }

    pub fn logout(&self) -> AppResult<()> {
        self.kv.remove(CURRENT_USER_KEY)
    }

    /// Persisted session, if any.
    pub fn current(&self) -> AppResult<Option<User>> {
        match self.kv.get(CURRENT_USER_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn require_user(&self) -> AppResult<User> {
        self.current()?.ok_or(AppError::NotAuthenticated)
    }

    pub fn require_admin(&self) -> AppResult<User> {
        let user = self.require_user()?;
        if !user.is_admin() {
            return Err(AppError::Forbidden(format!(
                "'{}' is not an administrator",
                user.username
            )));
        }
        Ok(user)
    }

    /// Session of an employee; returns the user and its employee id.
    pub fn require_employee(&self) -> AppResult<(User, String)> {
        let user = self.require_user()?;
        match user.employee_id.clone() {
            Some(id) if !user.is_admin() => Ok((user, id)),
            _ => Err(AppError::Forbidden(
                "this operation requires an employee session".into(),
            )),
        }
    }
}
