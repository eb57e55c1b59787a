//! Pure view models built from sessions: map markers, list entries, notices.

use crate::models::location::Location;
use crate::models::session::{SessionId, SessionKind, SessionRecord};
use crate::models::variant::SessionVariant;
use std::fmt;

pub const HOME_POPUP: &str = "You are here";

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    /// `None` for the "you are here" marker.
    pub session_id: Option<SessionId>,
    pub location: Location,
    pub popup: String,
    pub popup_class: Option<String>,
    /// Session popups stay open when another one opens or the map is clicked.
    pub keep_open: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub session_id: SessionId,
    pub variant: SessionVariant,
    pub title: String,
    pub details: Vec<Detail>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The form was rejected; nothing was recorded.
    InvalidInput(String),
    /// The session exists in memory but could not be written to the store.
    NotSaved(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::InvalidInput(reason) => {
                write!(f, "The input should be positive number ({reason})")
            }
            Notice::NotSaved(reason) => {
                write!(f, "Session recorded but not saved: {reason}")
            }
        }
    }
}

pub fn home_marker(location: Location) -> MarkerSpec {
    MarkerSpec {
        session_id: None,
        location,
        popup: HOME_POPUP.to_string(),
        popup_class: None,
        keep_open: false,
    }
}

pub fn marker_for(record: &SessionRecord) -> MarkerSpec {
    let variant = record.variant();
    MarkerSpec {
        session_id: Some(record.id().clone()),
        location: record.location(),
        popup: format!("{} {}", variant.icon(), record.label()),
        popup_class: Some(variant.popup_class()),
        keep_open: true,
    }
}

pub fn entry_for(record: &SessionRecord) -> ListEntry {
    let variant = record.variant();
    let mut details = vec![
        Detail {
            icon: variant.icon(),
            value: record.distance_km().to_string(),
            unit: "km",
        },
        Detail {
            icon: "⏱",
            value: record.duration_min().to_string(),
            unit: "min",
        },
    ];

    match *record.kind() {
        SessionKind::Cadence {
            cadence_spm,
            pace_min_per_km,
        } => {
            details.push(Detail {
                icon: "⚡️",
                value: format!("{pace_min_per_km:.1}"),
                unit: "min/km",
            });
            details.push(Detail {
                icon: "🦶🏼",
                value: cadence_spm.to_string(),
                unit: "spm",
            });
        }
        SessionKind::Elevation {
            elevation_gain_m,
            speed_km_per_h,
        } => {
            details.push(Detail {
                icon: "⚡️",
                value: format!("{speed_km_per_h:.1}"),
                unit: "km/h",
            });
            details.push(Detail {
                icon: "⛰",
                value: elevation_gain_m.to_string(),
                unit: "m",
            });
        }
    }

    ListEntry {
        session_id: record.id().clone(),
        variant,
        title: record.label().to_string(),
        details,
    }
}
