//! SQLite database: connection wrapper, schema migrations and audit log.

pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;

pub use migrate::run_pending_migrations;
