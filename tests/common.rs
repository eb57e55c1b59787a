#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, FixedOffset, TimeZone};
use rmaplog::core::controller::{ControllerSettings, SessionController};
use rmaplog::core::ports::{FormWidget, MapWidget, Notifier, SessionListWidget};
use rmaplog::core::render::{ListEntry, MarkerSpec, Notice};
use rmaplog::core::validation::RawForm;
use rmaplog::models::location::Location;
use rmaplog::models::variant::SessionVariant;
use rmaplog::store::{MemorySubstrate, SessionStore};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

// ---------------------------------------------------------------
// CLI helpers
// ---------------------------------------------------------------

/// The binary, with its config dir pointed at a per-test temp folder.
pub fn rmap(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rmaplog");
    cmd.env("RMAPLOG_CONFIG_DIR", config_dir(name));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn config_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rmaplog_conf", name));
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rmaplog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_dir_all(config_dir(name)).ok();
    db_path
}

/// Init the DB through the CLI (test mode: no config file written)
pub fn init_db(name: &str, db_path: &str) {
    rmap(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

// ---------------------------------------------------------------
// Library helpers
// ---------------------------------------------------------------

/// 14 April 2026, 09:30 at UTC+1.
pub fn april_14() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(3600)
        .unwrap()
        .with_ymd_and_hms(2026, 4, 14, 9, 30, 0)
        .unwrap()
}

pub fn memory_app() -> SessionController<MemorySubstrate> {
    app_with(MemorySubstrate::new())
}

pub fn app_with(substrate: MemorySubstrate) -> SessionController<MemorySubstrate> {
    SessionController::new(
        SessionStore::with_default_key(substrate),
        ControllerSettings::default(),
    )
    .with_clock(april_14)
}

pub fn running_form(distance: &str, duration: &str, cadence: &str) -> RawForm {
    RawForm {
        variant: "running".into(),
        distance: distance.into(),
        duration: duration.into(),
        cadence: cadence.into(),
        elevation: String::new(),
    }
}

pub fn cycling_form(distance: &str, duration: &str, elevation: &str) -> RawForm {
    RawForm {
        variant: "cycling".into(),
        distance: distance.into(),
        duration: duration.into(),
        cadence: String::new(),
        elevation: elevation.into(),
    }
}

pub fn home() -> Location {
    Location::new(45.4642, 9.19)
}

/// Everything the controller asked the UI to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetView(Location, u8),
    Marker(MarkerSpec),
    ClearMarkers,
    ShowForm,
    FocusDistance,
    VariantField(SessionVariant),
    HideForm(Duration),
    Entry(ListEntry),
    ClearEntries,
    ResetVisible(bool),
    Notice(Notice),
}

#[derive(Debug, Default)]
pub struct RecordingUi {
    pub calls: Vec<Call>,
}

impl RecordingUi {
    pub fn session_markers(&self) -> Vec<&MarkerSpec> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Marker(m) if m.session_id.is_some() => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn entries(&self) -> Vec<&ListEntry> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Entry(e) => Some(e),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<&Notice> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Notice(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    pub fn views(&self) -> Vec<(Location, u8)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::SetView(l, z) => Some((*l, *z)),
                _ => None,
            })
            .collect()
    }

    pub fn last_reset_visibility(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::ResetVisible(v) => Some(*v),
            _ => None,
        })
    }
}

impl MapWidget for RecordingUi {
    fn set_view(&mut self, center: Location, zoom: u8) {
        self.calls.push(Call::SetView(center, zoom));
    }
    fn place_marker(&mut self, marker: &MarkerSpec) {
        self.calls.push(Call::Marker(marker.clone()));
    }
    fn clear_markers(&mut self) {
        self.calls.push(Call::ClearMarkers);
    }
}

impl FormWidget for RecordingUi {
    fn show(&mut self) {
        self.calls.push(Call::ShowForm);
    }
    fn focus_distance(&mut self) {
        self.calls.push(Call::FocusDistance);
    }
    fn show_variant_field(&mut self, variant: SessionVariant) {
        self.calls.push(Call::VariantField(variant));
    }
    fn hide_and_clear(&mut self, reenable_after: Duration) {
        self.calls.push(Call::HideForm(reenable_after));
    }
}

impl SessionListWidget for RecordingUi {
    fn render_entry(&mut self, entry: &ListEntry) {
        self.calls.push(Call::Entry(entry.clone()));
    }
    fn clear_entries(&mut self) {
        self.calls.push(Call::ClearEntries);
    }
    fn set_reset_visible(&mut self, visible: bool) {
        self.calls.push(Call::ResetVisible(visible));
    }
}

impl Notifier for RecordingUi {
    fn notify(&mut self, notice: &Notice) {
        self.calls.push(Call::Notice(notice.clone()));
    }
}
