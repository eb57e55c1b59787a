use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::path::ensure_parent_dir;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and configuration file (skipped in test mode)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rmaplog…");

    if !cli.test {
        let path = cfg.save()?;
        println!("📄 Config file : {}", path.display());
    }

    let db_path = cfg.database.clone();
    ensure_parent_dir(Path::new(&db_path))?;
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::open_migrated(&db_path)?;
    println!("✅ Database initialized at {}", &db_path);

    audit_or_warn(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 rmaplog initialization completed!");
    Ok(())
}
