use super::substrate::KeyValueSubstrate;
use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::models::session::{SessionCommon, SessionId, SessionKind, SessionRecord};
use crate::models::variant::SessionVariant;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_STORE_KEY: &str = "workouts";

/// Flat on-disk shape of one session, tagged by `variant`.
///
/// Derived values are stored too, so loading never recomputes them.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSession {
    id: String,
    created_at: DateTime<FixedOffset>,
    location: Location,
    distance_km: f64,
    duration_min: f64,
    label: String,
    variant: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cadence_spm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pace_min_per_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    elevation_gain_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    speed_km_per_h: Option<f64>,
}

impl From<&SessionRecord> for StoredSession {
    fn from(record: &SessionRecord) -> Self {
        let common = record.common();
        let mut stored = StoredSession {
            id: common.id.as_str().to_string(),
            created_at: common.created_at,
            location: common.location,
            distance_km: common.distance_km,
            duration_min: common.duration_min,
            label: common.label.clone(),
            variant: record.variant().to_tag().to_string(),
            cadence_spm: None,
            pace_min_per_km: None,
            elevation_gain_m: None,
            speed_km_per_h: None,
        };

        match *record.kind() {
            SessionKind::Cadence {
                cadence_spm,
                pace_min_per_km,
            } => {
                stored.cadence_spm = Some(cadence_spm);
                stored.pace_min_per_km = Some(pace_min_per_km);
            }
            SessionKind::Elevation {
                elevation_gain_m,
                speed_km_per_h,
            } => {
                stored.elevation_gain_m = Some(elevation_gain_m);
                stored.speed_km_per_h = Some(speed_km_per_h);
            }
        }

        stored
    }
}

impl TryFrom<StoredSession> for SessionRecord {
    type Error = AppError;

    fn try_from(stored: StoredSession) -> AppResult<Self> {
        let variant = SessionVariant::from_tag(&stored.variant).ok_or_else(|| {
            AppError::Reconstruction(format!(
                "session {}: unknown variant '{}'",
                stored.id, stored.variant
            ))
        })?;

        if !(stored.distance_km.is_finite() && stored.distance_km > 0.0)
            || !(stored.duration_min.is_finite() && stored.duration_min > 0.0)
        {
            return Err(AppError::Reconstruction(format!(
                "session {}: distance and duration must be positive",
                stored.id
            )));
        }

        let missing = |field: &str| {
            AppError::Reconstruction(format!(
                "session {}: {} session without '{field}'",
                stored.id,
                variant.to_tag()
            ))
        };
        let foreign = |field: &str| {
            AppError::Reconstruction(format!(
                "session {}: {} session carries '{field}'",
                stored.id,
                variant.to_tag()
            ))
        };

        let kind = match variant {
            SessionVariant::Cadence => {
                if stored.elevation_gain_m.is_some() {
                    return Err(foreign("elevationGainM"));
                }
                if stored.speed_km_per_h.is_some() {
                    return Err(foreign("speedKmPerH"));
                }
                SessionKind::Cadence {
                    cadence_spm: stored.cadence_spm.ok_or_else(|| missing("cadenceSpm"))?,
                    pace_min_per_km: stored
                        .pace_min_per_km
                        .ok_or_else(|| missing("paceMinPerKm"))?,
                }
            }
            SessionVariant::Elevation => {
                if stored.cadence_spm.is_some() {
                    return Err(foreign("cadenceSpm"));
                }
                if stored.pace_min_per_km.is_some() {
                    return Err(foreign("paceMinPerKm"));
                }
                SessionKind::Elevation {
                    elevation_gain_m: stored
                        .elevation_gain_m
                        .ok_or_else(|| missing("elevationGainM"))?,
                    speed_km_per_h: stored
                        .speed_km_per_h
                        .ok_or_else(|| missing("speedKmPerH"))?,
                }
            }
        };

        let common = SessionCommon {
            id: SessionId::new(stored.id),
            created_at: stored.created_at,
            location: stored.location,
            distance_km: stored.distance_km,
            duration_min: stored.duration_min,
            label: stored.label,
        };

        Ok(SessionRecord::from_parts(common, kind))
    }
}

impl StoredSession {
    /// JSON has no NaN or infinity: serde_json would write `null`, which never reads back.
    fn ensure_finite(&self) -> AppResult<()> {
        let fields = [
            ("location.lat", Some(self.location.lat)),
            ("location.lng", Some(self.location.lng)),
            ("distanceKm", Some(self.distance_km)),
            ("durationMin", Some(self.duration_min)),
            ("cadenceSpm", self.cadence_spm),
            ("paceMinPerKm", self.pace_min_per_km),
            ("elevationGainM", self.elevation_gain_m),
            ("speedKmPerH", self.speed_km_per_h),
        ];

        match fields
            .iter()
            .find(|(_, value)| value.is_some_and(|v| !v.is_finite()))
        {
            Some((field, _)) => Err(AppError::Persistence(format!(
                "session {}: '{field}' is not a finite number",
                self.id
            ))),
            None => Ok(()),
        }
    }
}

/// Encode the whole list as one JSON array. Fails rather than write a value that cannot be decoded.
pub fn encode(sessions: &[SessionRecord]) -> AppResult<String> {
    let stored: Vec<StoredSession> = sessions.iter().map(StoredSession::from).collect();
    for entry in &stored {
        entry.ensure_finite()?;
    }
    Ok(serde_json::to_string(&stored)?)
}

/// Decode a blob written by [`encode`], restoring each record's variant.
pub fn decode(blob: &str) -> AppResult<Vec<SessionRecord>> {
    let stored: Vec<StoredSession> = serde_json::from_str(blob)
        .map_err(|e| AppError::Reconstruction(format!("malformed session list: {e}")))?;

    let mut seen = HashSet::new();
    let mut sessions = Vec::with_capacity(stored.len());
    for entry in stored {
        if !seen.insert(entry.id.clone()) {
            return Err(AppError::Reconstruction(format!(
                "duplicate session id {}",
                entry.id
            )));
        }
        sessions.push(SessionRecord::try_from(entry)?);
    }

    Ok(sessions)
}

/// Whole-list persistence of sessions under a single key.
pub struct SessionStore<S: KeyValueSubstrate> {
    substrate: S,
    key: String,
}

impl<S: KeyValueSubstrate> SessionStore<S> {
    pub fn new(substrate: S, key: impl Into<String>) -> Self {
        Self {
            substrate,
            key: key.into(),
        }
    }

    pub fn with_default_key(substrate: S) -> Self {
        Self::new(substrate, DEFAULT_STORE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn substrate(&self) -> &S {
        &self.substrate
    }

    pub fn into_substrate(self) -> S {
        self.substrate
    }

    /// Overwrite the stored list with `sessions`.
    pub fn save(&mut self, sessions: &[SessionRecord]) -> AppResult<()> {
        let blob = encode(sessions).map_err(|e| match e {
            AppError::Persistence(_) => e,
            other => AppError::Persistence(other.to_string()),
        })?;
        self.substrate
            .set(&self.key, &blob)
            .map_err(|e| AppError::Persistence(e.to_string()))?;
        tracing::debug!(key = %self.key, count = sessions.len(), "sessions saved");
        Ok(())
    }

    /// Read the stored list. Missing or unreadable data yields an empty list.
    pub fn load(&self) -> Vec<SessionRecord> {
        let blob = match self.substrate.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::debug!(key = %self.key, error = %e, "store unreadable, starting empty");
                return Vec::new();
            }
        };

        match decode(&blob) {
            Ok(sessions) => sessions,
            Err(e) => {
                tracing::debug!(key = %self.key, error = %e, "discarding stored sessions");
                Vec::new()
            }
        }
    }

    /// Delete the stored list. Deleting an absent key is a no-op.
    pub fn reset(&mut self) -> AppResult<()> {
        self.substrate.delete(&self.key)?;
        tracing::debug!(key = %self.key, "session store reset");
        Ok(())
    }
}
