use super::{open_app, sensor};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::controller::MapState;
use crate::core::events::{dispatch, AppEvent};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::ui::terminal::{Echo, TerminalUi};

/// Start the application and show what it renders: the list, then the map.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let mut app = open_app(cfg)?;
        let mut sensor = sensor(cfg);
        let mut ui = TerminalUi::stdout(Echo {
            map: false,
            list: true,
        });

        header("Sessions");
        dispatch(&mut app, &mut ui, &mut sensor, AppEvent::Startup)?;

        if app.sessions().is_empty() {
            info("No sessions recorded yet.");
        }

        println!();
        match app.map_state() {
            MapState::Ready { home } => {
                header(format!("Map around {home} (zoom {})", cfg.map_zoom));
                print!("{}", ui.marker_table().render());
            }
            MapState::Uninitialized => {
                info("Map unavailable: set `home` in the configuration or pass --here lat,lng.");
            }
        }
    }

    Ok(())
}
