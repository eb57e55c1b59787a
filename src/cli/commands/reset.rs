use super::{conn, open_app, sensor};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::events::{dispatch, AppEvent};
use crate::db::log::audit_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::terminal::{Echo, TerminalUi};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { force } = cmd {
        let mut app = open_app(cfg)?;
        let mut sensor = sensor(cfg);
        let mut ui = TerminalUi::stdout(Echo::NONE);

        dispatch(&mut app, &mut ui, &mut sensor, AppEvent::Startup)?;
        let discarded = app.sessions().len();

        if !*force
            && !ask_confirmation(&format!(
                "Delete ALL {discarded} recorded session(s)? This action is irreversible."
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        dispatch(&mut app, &mut ui, &mut sensor, AppEvent::ResetRequested)?;

        audit_or_warn(
            conn(&app),
            "reset",
            &cfg.store_key,
            &format!("Deleted {discarded} session(s)"),
        );
        success(format!(
            "All sessions have been deleted ({} remaining).",
            app.sessions().len()
        ));
    }

    Ok(())
}
