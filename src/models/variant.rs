use serde::{Deserialize, Serialize};

/// The two mutually exclusive kinds of session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionVariant {
    /// Timed-cadence session, shown as running.
    Cadence,
    /// Timed-elevation session, shown as cycling.
    Elevation,
}

impl SessionVariant {
    /// Name used in labels, popups and the form selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            SessionVariant::Cadence => "running",
            SessionVariant::Elevation => "cycling",
        }
    }

    /// Convert enum → stored discriminant
    pub fn to_tag(&self) -> &'static str {
        match self {
            SessionVariant::Cadence => "cadence",
            SessionVariant::Elevation => "elevation",
        }
    }

    /// Convert stored discriminant → enum
    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "cadence" => Some(SessionVariant::Cadence),
            "elevation" => Some(SessionVariant::Elevation),
            _ => None,
        }
    }

    /// Helper: convert the form selector value (display name or tag, any case)
    pub fn from_form_value(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "running" | "cadence" => Some(SessionVariant::Cadence),
            "cycling" | "elevation" => Some(SessionVariant::Elevation),
            _ => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SessionVariant::Cadence => "🏃‍♂️",
            SessionVariant::Elevation => "🚴‍♀️",
        }
    }

    /// Style class attached to the map popup of this variant.
    pub fn popup_class(&self) -> String {
        format!("{}-popup", self.display_name())
    }

    /// The other variant; used by the form's variant toggle.
    pub fn toggled(&self) -> Self {
        match self {
            SessionVariant::Cadence => SessionVariant::Elevation,
            SessionVariant::Elevation => SessionVariant::Cadence,
        }
    }
}
