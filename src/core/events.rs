//! Named events and the single dispatcher that routes them to handlers.

use super::controller::{SessionController, SubmitOutcome};
use super::ports::{LocationSensor, Ui};
use super::validation::RawForm;
use crate::errors::AppResult;
use crate::models::location::Location;
use crate::models::session::SessionId;
use crate::store::KeyValueSubstrate;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Startup,
    LocationPicked(Location),
    VariantToggled,
    FormSubmitted(RawForm),
    ListEntryActivated(SessionId),
    ResetRequested,
}

/// What a handler reported back, when it has anything to report.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Done,
    Submitted(SubmitOutcome),
    Recentered(bool),
}

/// Central event dispatcher. Handlers run one at a time, to completion.
pub fn dispatch<S, U, L>(
    app: &mut SessionController<S>,
    ui: &mut U,
    sensor: &mut L,
    event: AppEvent,
) -> AppResult<EventOutcome>
where
    S: KeyValueSubstrate,
    U: Ui,
    L: LocationSensor,
{
    tracing::trace!(?event, "dispatching");
    match event {
        AppEvent::Startup => app.on_startup(ui, sensor),
        AppEvent::LocationPicked(location) => app.on_location_picked(ui, location),
        AppEvent::VariantToggled => app.on_variant_toggled(ui),
        AppEvent::FormSubmitted(raw) => {
            return Ok(EventOutcome::Submitted(app.on_form_submitted(ui, &raw)));
        }
        AppEvent::ListEntryActivated(id) => {
            return Ok(EventOutcome::Recentered(app.on_list_entry_activated(ui, &id)));
        }
        AppEvent::ResetRequested => app.on_reset_requested(ui, sensor)?,
    }

    Ok(EventOutcome::Done)
}
