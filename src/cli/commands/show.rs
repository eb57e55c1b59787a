use super::{open_app, sensor};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::controller::MapState;
use crate::core::events::{dispatch, AppEvent, EventOutcome};
use crate::errors::AppResult;
use crate::models::session::SessionId;
use crate::ui::messages::info;
use crate::ui::terminal::{Echo, TerminalUi};

/// Activate a list entry: the map moves to that session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let mut app = open_app(cfg)?;
        let mut sensor = sensor(cfg);
        let mut ui = TerminalUi::stdout(Echo::NONE);

        dispatch(&mut app, &mut ui, &mut sensor, AppEvent::Startup)?;
        ui.set_echo(Echo::ALL);

        let id = SessionId::new(id.trim());
        let outcome = dispatch(
            &mut app,
            &mut ui,
            &mut sensor,
            AppEvent::ListEntryActivated(id.clone()),
        )?;

        match (outcome, app.map_state()) {
            (EventOutcome::Recentered(true), _) => {
                if let Some(record) = app.find(&id) {
                    info(record.label());
                }
            }
            (_, MapState::Uninitialized) => {
                info("Map unavailable: set `home` in the configuration or pass --here lat,lng.");
            }
            _ => info(format!("No session with id {id}.")),
        }
    }

    Ok(())
}
