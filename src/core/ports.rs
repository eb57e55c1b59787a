//! Boundaries between the controller and the host environment.
//!
//! The controller never draws anything itself: it hands ready-made
//! [`MarkerSpec`]s, [`ListEntry`]s and [`Notice`]s to these traits.

use super::render::{ListEntry, MarkerSpec, Notice};
use crate::errors::AppResult;
use crate::models::location::Location;
use crate::models::variant::SessionVariant;
use std::time::Duration;

/// One-shot "where am I" query.
pub trait LocationSensor {
    fn current_position(&mut self) -> AppResult<Location>;
}

pub trait MapWidget {
    fn set_view(&mut self, center: Location, zoom: u8);
    fn place_marker(&mut self, marker: &MarkerSpec);
    fn clear_markers(&mut self);
}

pub trait FormWidget {
    fn show(&mut self);
    fn focus_distance(&mut self);
    /// Make the input of `variant` visible and hide the other one.
    fn show_variant_field(&mut self, variant: SessionVariant);
    /// Empty every input and hide the form; it becomes usable again after `reenable_after`.
    fn hide_and_clear(&mut self, reenable_after: Duration);
}

pub trait SessionListWidget {
    fn render_entry(&mut self, entry: &ListEntry);
    fn clear_entries(&mut self);
    fn set_reset_visible(&mut self, visible: bool);
}

pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

/// Everything the controller renders to.
pub trait Ui: MapWidget + FormWidget + SessionListWidget + Notifier {}

impl<T: MapWidget + FormWidget + SessionListWidget + Notifier> Ui for T {}
