use super::{location::Location, variant::SessionVariant};
use chrono::{DateTime, FixedOffset};
use std::fmt;

/// Ids are the last 10 digits of the creation time in milliseconds.
const ID_MODULUS: i64 = 10_000_000_000;

/// Opaque session identifier, unique within a session list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive a fresh id from the creation time, skipping ids already in `taken`.
    pub fn generate(now: &DateTime<FixedOffset>, taken: &[SessionRecord]) -> Self {
        let mut n = now.timestamp_millis().rem_euclid(ID_MODULUS);
        loop {
            let candidate = SessionId(format!("{n:010}"));
            if !taken.iter().any(|s| s.id() == &candidate) {
                return candidate;
            }
            n = (n + 1) % ID_MODULUS;
        }
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fields shared by both session variants.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionCommon {
    pub id: SessionId,
    pub created_at: DateTime<FixedOffset>,
    pub location: Location,
    pub distance_km: f64,
    pub duration_min: f64,
    pub label: String,
}

/// Variant-specific inputs and their derived metric.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionKind {
    Cadence {
        cadence_spm: f64,
        pace_min_per_km: f64,
    },
    Elevation {
        elevation_gain_m: f64,
        speed_km_per_h: f64,
    },
}

impl SessionKind {
    pub fn variant(&self) -> SessionVariant {
        match self {
            SessionKind::Cadence { .. } => SessionVariant::Cadence,
            SessionKind::Elevation { .. } => SessionVariant::Elevation,
        }
    }
}

/// One recorded exercise session.
///
/// Built once, never mutated: all fields are private and the derived
/// values (`label`, pace or speed) are computed in the constructors.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    common: SessionCommon,
    kind: SessionKind,
}

impl SessionRecord {
    /// Running session. Inputs are trusted: validation happens before this call.
    pub fn timed_cadence(
        id: SessionId,
        created_at: DateTime<FixedOffset>,
        location: Location,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Self {
        let kind = SessionKind::Cadence {
            cadence_spm,
            pace_min_per_km: pace(distance_km, duration_min),
        };
        Self::build(id, created_at, location, distance_km, duration_min, kind)
    }

    /// Cycling session. Elevation gain may be zero or negative.
    pub fn timed_elevation(
        id: SessionId,
        created_at: DateTime<FixedOffset>,
        location: Location,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        let kind = SessionKind::Elevation {
            elevation_gain_m,
            speed_km_per_h: speed(distance_km, duration_min),
        };
        Self::build(id, created_at, location, distance_km, duration_min, kind)
    }

    fn build(
        id: SessionId,
        created_at: DateTime<FixedOffset>,
        location: Location,
        distance_km: f64,
        duration_min: f64,
        kind: SessionKind,
    ) -> Self {
        let label = describe(kind.variant(), &created_at);
        Self {
            common: SessionCommon {
                id,
                created_at,
                location,
                distance_km,
                duration_min,
                label,
            },
            kind,
        }
    }

    /// Reassemble a record whose derived fields were stored alongside it.
    pub(crate) fn from_parts(common: SessionCommon, kind: SessionKind) -> Self {
        Self { common, kind }
    }

    pub fn id(&self) -> &SessionId {
        &self.common.id
    }

    pub fn created_at(&self) -> &DateTime<FixedOffset> {
        &self.common.created_at
    }

    pub fn location(&self) -> Location {
        self.common.location
    }

    pub fn distance_km(&self) -> f64 {
        self.common.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.common.duration_min
    }

    pub fn label(&self) -> &str {
        &self.common.label
    }

    pub fn variant(&self) -> SessionVariant {
        self.kind.variant()
    }

    pub fn common(&self) -> &SessionCommon {
        &self.common
    }

    pub fn kind(&self) -> &SessionKind {
        &self.kind
    }

    /// Minutes per kilometre; only running sessions have a pace.
    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.kind {
            SessionKind::Cadence { pace_min_per_km, .. } => Some(pace_min_per_km),
            SessionKind::Elevation { .. } => None,
        }
    }

    /// Kilometres per hour; only cycling sessions have a speed.
    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self.kind {
            SessionKind::Elevation { speed_km_per_h, .. } => Some(speed_km_per_h),
            SessionKind::Cadence { .. } => None,
        }
    }

    pub fn cadence_spm(&self) -> Option<f64> {
        match self.kind {
            SessionKind::Cadence { cadence_spm, .. } => Some(cadence_spm),
            SessionKind::Elevation { .. } => None,
        }
    }

    pub fn elevation_gain_m(&self) -> Option<f64> {
        match self.kind {
            SessionKind::Elevation {
                elevation_gain_m, ..
            } => Some(elevation_gain_m),
            SessionKind::Cadence { .. } => None,
        }
    }
}

pub fn pace(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

pub fn speed(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}

/// Human-readable label, e.g. `Running on April 14`.
pub fn describe(variant: SessionVariant, date: &DateTime<FixedOffset>) -> String {
    let name = variant.display_name();
    let mut chars = name.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    format!("{} on {}", capitalized, date.format("%B %-d"))
}
