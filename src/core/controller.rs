//! Application state and the handlers that react to user events.

use super::ports::{LocationSensor, Ui};
use super::render::{entry_for, home_marker, marker_for, Notice};
use super::validation::{validate, RawForm, ValidForm};
use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::models::session::{SessionId, SessionRecord};
use crate::models::variant::SessionVariant;
use crate::store::{KeyValueSubstrate, SessionStore};
use chrono::{DateTime, FixedOffset, Local};
use std::time::Duration;

pub const DEFAULT_MAP_ZOOM: u8 = 13;
pub const DEFAULT_FORM_REENABLE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    pub map_zoom: u8,
    /// How long the hidden form stays non-interactive after a submit.
    pub form_reenable_delay: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            map_zoom: DEFAULT_MAP_ZOOM,
            form_reenable_delay: DEFAULT_FORM_REENABLE_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    Closed,
    /// Waiting for the user to fill in a session at `location`.
    Open { location: Location },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapState {
    Uninitialized,
    Ready { home: Location },
}

/// Result of a form submission, for callers that report or audit it.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Recorded and written to the store.
    Saved(SessionId),
    /// Recorded in memory only; the store write failed.
    NotSaved(SessionId),
    /// Input failed validation; nothing recorded.
    Rejected,
    /// No location had been picked; the submit was dropped.
    Ignored,
}

type Clock = Box<dyn Fn() -> DateTime<FixedOffset>>;

pub struct SessionController<S: KeyValueSubstrate> {
    store: SessionStore<S>,
    sessions: Vec<SessionRecord>,
    form: FormState,
    selected_variant: SessionVariant,
    map: MapState,
    settings: ControllerSettings,
    clock: Clock,
}

impl<S: KeyValueSubstrate> SessionController<S> {
    pub fn new(store: SessionStore<S>, settings: ControllerSettings) -> Self {
        Self {
            store,
            sessions: Vec::new(),
            form: FormState::Closed,
            selected_variant: SessionVariant::Cadence,
            map: MapState::Uninitialized,
            settings,
            clock: Box::new(|| Local::now().fixed_offset()),
        }
    }

    /// Replace the wall clock used to stamp new sessions.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<FixedOffset> + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    pub fn find(&self, id: &SessionId) -> Option<&SessionRecord> {
        self.sessions.iter().find(|s| s.id() == id)
    }

    pub fn form_state(&self) -> FormState {
        self.form
    }

    pub fn selected_variant(&self) -> SessionVariant {
        self.selected_variant
    }

    pub fn map_state(&self) -> MapState {
        self.map
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub fn into_store(self) -> SessionStore<S> {
        self.store
    }

    // ---------------------------------------------------------------
    // Startup
    // ---------------------------------------------------------------

    /// Load the stored list, render it, then try to bring up the map.
    pub fn on_startup<U: Ui, L: LocationSensor>(&mut self, ui: &mut U, sensor: &mut L) {
        self.sessions = self.store.load();
        tracing::info!(count = self.sessions.len(), "sessions loaded");

        for record in &self.sessions {
            render_list_entry(ui, record);
        }
        ui.set_reset_visible(!self.sessions.is_empty());

        match sensor.current_position() {
            Ok(home) => self.on_map_loaded(ui, home),
            Err(e) => {
                tracing::info!(error = %e, "map not initialised");
                self.map = MapState::Uninitialized;
            }
        }
    }

    fn on_map_loaded<U: Ui>(&mut self, ui: &mut U, home: Location) {
        self.map = MapState::Ready { home };
        ui.set_view(home, self.settings.map_zoom);
        ui.place_marker(&home_marker(home));

        for record in &self.sessions {
            render_marker(ui, record);
        }
    }

    // ---------------------------------------------------------------
    // Form state machine
    // ---------------------------------------------------------------

    /// Open the form for `location`. Picking again while open only moves the pending location.
    pub fn on_location_picked<U: Ui>(&mut self, ui: &mut U, location: Location) {
        let was_open = matches!(self.form, FormState::Open { .. });
        self.form = FormState::Open { location };

        if !was_open {
            ui.show_variant_field(self.selected_variant);
            ui.show();
        }
        ui.focus_distance();
        tracing::debug!(%location, "form opened");
    }

    /// Swap which variant-specific input is visible. Only meaningful while open.
    pub fn on_variant_toggled<U: Ui>(&mut self, ui: &mut U) {
        if let FormState::Open { .. } = self.form {
            self.selected_variant = self.selected_variant.toggled();
            ui.show_variant_field(self.selected_variant);
        }
    }

    pub fn on_form_submitted<U: Ui>(&mut self, ui: &mut U, raw: &RawForm) -> SubmitOutcome {
        let FormState::Open { location } = self.form else {
            tracing::warn!("form submitted without a picked location, ignoring");
            return SubmitOutcome::Ignored;
        };

        let valid = match validate(raw) {
            Ok(valid) => valid,
            Err(e) => {
                let reason = match e {
                    AppError::Validation(reason) => reason,
                    other => other.to_string(),
                };
                self.close_form(ui);
                ui.notify(&Notice::InvalidInput(reason));
                return SubmitOutcome::Rejected;
            }
        };

        let now = (self.clock)();
        let id = SessionId::generate(&now, &self.sessions);
        let record = match valid {
            ValidForm::Cadence {
                distance_km,
                duration_min,
                cadence_spm,
            } => SessionRecord::timed_cadence(
                id.clone(),
                now,
                location,
                distance_km,
                duration_min,
                cadence_spm,
            ),
            ValidForm::Elevation {
                distance_km,
                duration_min,
                elevation_gain_m,
            } => SessionRecord::timed_elevation(
                id.clone(),
                now,
                location,
                distance_km,
                duration_min,
                elevation_gain_m,
            ),
        };
        self.selected_variant = record.variant();

        self.sessions.push(record);
        ui.set_reset_visible(true);

        if let Some(record) = self.sessions.last() {
            if let MapState::Ready { .. } = self.map {
                render_marker(ui, record);
            }
            render_list_entry(ui, record);
        }

        let outcome = match self.store.save(&self.sessions) {
            Ok(()) => SubmitOutcome::Saved(id),
            Err(e) => {
                tracing::warn!(error = %e, "session kept in memory only");
                ui.notify(&Notice::NotSaved(e.to_string()));
                SubmitOutcome::NotSaved(id)
            }
        };

        self.close_form(ui);
        outcome
    }

    fn close_form<U: Ui>(&mut self, ui: &mut U) {
        self.form = FormState::Closed;
        ui.hide_and_clear(self.settings.form_reenable_delay);
    }

    // ---------------------------------------------------------------
    // List and reset
    // ---------------------------------------------------------------

    /// Recenter the map on the session with `id`. Returns whether the map moved.
    pub fn on_list_entry_activated<U: Ui>(&mut self, ui: &mut U, id: &SessionId) -> bool {
        let MapState::Ready { .. } = self.map else {
            return false;
        };
        let Some(record) = self.find(id) else {
            tracing::debug!(%id, "no session with this id");
            return false;
        };

        ui.set_view(record.location(), self.settings.map_zoom);
        true
    }

    /// Delete everything stored, then start over as if freshly launched.
    pub fn on_reset_requested<U: Ui, L: LocationSensor>(
        &mut self,
        ui: &mut U,
        sensor: &mut L,
    ) -> AppResult<()> {
        self.store.reset()?;
        tracing::info!(discarded = self.sessions.len(), "all sessions reset");

        ui.clear_markers();
        ui.clear_entries();
        ui.hide_and_clear(Duration::ZERO);
        self.sessions.clear();
        self.form = FormState::Closed;
        self.selected_variant = SessionVariant::Cadence;
        self.map = MapState::Uninitialized;

        self.on_startup(ui, sensor);
        Ok(())
    }
}

/// Draw the map marker of one session. Touches nothing but the map.
pub fn render_marker<U: Ui>(ui: &mut U, record: &SessionRecord) {
    ui.place_marker(&marker_for(record));
}

/// Draw the list entry of one session. Touches nothing but the list.
pub fn render_list_entry<U: Ui>(ui: &mut U, record: &SessionRecord) {
    ui.render_entry(&entry_for(record));
}
