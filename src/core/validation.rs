//! Coercion and validation of the raw strings submitted by the form.

use crate::errors::{AppError, AppResult};
use crate::models::session::{pace, speed};
use crate::models::variant::SessionVariant;

/// Field values exactly as the form widget reports them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawForm {
    pub variant: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

/// Numbers that passed validation, ready to build a session from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidForm {
    Cadence {
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    },
    Elevation {
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    },
}

/// Numeric coercion of a text input: blank is 0, anything unparsable is NaN.
pub fn coerce(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn finite(name: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::Validation(format!("{name} must be a number")))
    }
}

fn positive(name: &str, value: f64) -> AppResult<f64> {
    let value = finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::Validation(format!("{name} must be greater than 0")))
    }
}

/// The pace or speed derived from `distance` and `duration` must be finite too.
fn derived(name: &str, value: f64) -> AppResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{name} out of range for this distance and duration"
        )))
    }
}

/// Distance, duration and cadence must be finite and positive.
/// Elevation gain only has to be finite: descents are legitimate.
pub fn validate(form: &RawForm) -> AppResult<ValidForm> {
    let variant = SessionVariant::from_form_value(&form.variant).ok_or_else(|| {
        AppError::Validation(format!("unknown session type '{}'", form.variant))
    })?;

    let distance_km = positive("distance", coerce(&form.distance))?;
    let duration_min = positive("duration", coerce(&form.duration))?;

    match variant {
        SessionVariant::Cadence => {
            derived("pace", pace(distance_km, duration_min))?;
            Ok(ValidForm::Cadence {
                distance_km,
                duration_min,
                cadence_spm: positive("cadence", coerce(&form.cadence))?,
            })
        }
        SessionVariant::Elevation => {
            derived("speed", speed(distance_km, duration_min))?;
            Ok(ValidForm::Elevation {
                distance_km,
                duration_min,
                elevation_gain_m: finite("elevation gain", coerce(&form.elevation))?,
            })
        }
    }
}
