//! One module per subcommand; each exposes `handle`.

pub mod add;
pub mod config;
pub mod init;
pub mod list;
pub mod log;
pub mod reset;
pub mod show;

use crate::config::Config;
use crate::core::controller::SessionController;
use crate::core::sensor::FixedSensor;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::{SessionStore, SqliteSubstrate};
use rusqlite::Connection;

pub type App = SessionController<SqliteSubstrate>;

/// Open the configured database and build the controller on top of it.
pub fn open_app(cfg: &Config) -> AppResult<App> {
    let pool = DbPool::open_migrated(&cfg.database)?;
    let store = SessionStore::new(SqliteSubstrate::new(pool), cfg.store_key.clone());
    Ok(SessionController::new(store, cfg.controller_settings()))
}

pub fn sensor(cfg: &Config) -> FixedSensor {
    FixedSensor::new(cfg.home)
}

/// Connection behind the controller's store, for audit logging.
pub fn conn(app: &App) -> &Connection {
    &app.store().substrate().pool().conn
}
