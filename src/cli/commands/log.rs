use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_entries;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::{pad_right, truncate};
use ansi_term::Colour;

const OP_MAX_WIDTH: usize = 60;

/// ANSI colour for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "reset" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::open_migrated(&cfg.database)?;
        let entries = load_entries(&pool.conn)?;

        let rows: Vec<(i64, String, String, String, String)> = entries
            .into_iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    truncate(&format!("{} ({})", e.operation, e.target), OP_MAX_WIDTH)
                };
                (e.id, date, e.operation, op_target, e.message)
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows.iter().map(|r| r.3.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in rows {
            let padded = pad_right(&op_target, op_w);
            let colored = match padded.strip_prefix(operation.as_str()) {
                Some(rest) => format!("{}{}", color_for_operation(&operation).paint(operation.as_str()), rest),
                None => padded,
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {} => {}",
                id,
                date,
                colored,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }
    }

    Ok(())
}
