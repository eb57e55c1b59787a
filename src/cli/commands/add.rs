use super::{conn, open_app, sensor};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::controller::SubmitOutcome;
use crate::core::events::{dispatch, AppEvent, EventOutcome};
use crate::core::validation::RawForm;
use crate::db::log::audit_or_warn;
use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::models::variant::SessionVariant;
use crate::ui::messages::success;
use crate::ui::terminal::{Echo, TerminalUi};

/// Record a session: pick the location, then submit the form.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        kind,
        lat,
        lng,
        distance,
        duration,
        cadence,
        elevation,
    } = cmd
    {
        let location = Location::new(*lat, *lng);
        if !location.is_valid() {
            return Err(AppError::InvalidLocation(format!(
                "{lat},{lng} is outside the valid latitude/longitude range"
            )));
        }

        let mut app = open_app(cfg)?;
        let mut sensor = sensor(cfg);
        let mut ui = TerminalUi::stdout(Echo::NONE);

        dispatch(&mut app, &mut ui, &mut sensor, AppEvent::Startup)?;
        ui.set_echo(Echo::ALL);

        dispatch(&mut app, &mut ui, &mut sensor, AppEvent::LocationPicked(location))?;
        if let Some(wanted) = SessionVariant::from_form_value(kind)
            && wanted != app.selected_variant()
        {
            dispatch(&mut app, &mut ui, &mut sensor, AppEvent::VariantToggled)?;
        }

        let raw = RawForm {
            variant: kind.clone(),
            distance: distance.clone(),
            duration: duration.clone(),
            cadence: cadence.clone().unwrap_or_default(),
            elevation: elevation.clone().unwrap_or_default(),
        };

        match dispatch(&mut app, &mut ui, &mut sensor, AppEvent::FormSubmitted(raw))? {
            EventOutcome::Submitted(SubmitOutcome::Saved(id)) => {
                let label = app
                    .find(&id)
                    .map(|s| s.label().to_string())
                    .unwrap_or_default();
                audit_or_warn(
                    conn(&app),
                    "add",
                    id.as_str(),
                    &format!("{label} at {location}"),
                );
                success(format!("Session {id} recorded."));
            }
            EventOutcome::Submitted(SubmitOutcome::NotSaved(id)) => {
                return Err(AppError::Persistence(format!(
                    "session {id} was recorded but not saved"
                )));
            }
            EventOutcome::Submitted(SubmitOutcome::Rejected) => {
                return Err(AppError::Validation("no session recorded".into()));
            }
            other => {
                return Err(AppError::Other(format!("unexpected submit result: {other:?}")));
            }
        }
    }

    Ok(())
}
