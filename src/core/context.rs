//! Everything a command needs, opened once per process.

use crate::config::Config;
use crate::core::auth::{AdminCredential, Auth};
use crate::core::directory::Directory;
use crate::core::entries::TimeEntryStore;
use crate::core::receipt::EmployerInfo;
use crate::db::kv::{KeyValueStore, SqliteKv};
use crate::db::pool::DbPool;
use crate::db::records::SqliteRecordStore;
use crate::errors::AppResult;
use std::rc::Rc;

pub struct AppContext {
    pub pool: DbPool,
    pub records: SqliteRecordStore,
    pub directory: Directory,
    pub entries: TimeEntryStore,
    pub auth: Auth,
    pub employer: EmployerInfo,
}

impl AppContext {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = DbPool::new(&cfg.database)?;
        Self::from_pool(pool, cfg)
    }

    pub fn from_pool(pool: DbPool, cfg: &Config) -> AppResult<Self> {
        let kv: Rc<dyn KeyValueStore> = Rc::new(SqliteKv::new(pool.clone()));

        let directory = Directory::load(Rc::clone(&kv))?;
        let entries = TimeEntryStore::load(Rc::clone(&kv))?;
        let auth = Auth::new(kv, AdminCredential::from(cfg));

        Ok(Self {
            records: SqliteRecordStore::new(pool.clone()),
            pool,
            directory,
            entries,
            auth,
            employer: EmployerInfo::from(cfg),
        })
    }
}
