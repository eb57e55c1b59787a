use chrono::{FixedOffset, TimeZone};
use rmaplog::models::location::Location;
use rmaplog::models::session::{describe, SessionId, SessionRecord};
use rmaplog::models::variant::SessionVariant;

mod common;
use common::april_14;

fn loc() -> Location {
    Location::new(10.0, 20.0)
}

#[test]
fn test_pace_is_duration_over_distance() {
    let grid = [
        (5.0, 25.0, 150.0),
        (0.3, 7.0, 170.0),
        (42.195, 185.5, 180.0),
        (1e-3, 1e-2, 1.0),
        (12.7, 61.3, 160.0),
    ];
    for (distance, duration, cadence) in grid {
        let s = SessionRecord::timed_cadence(
            SessionId::new("1"),
            april_14(),
            loc(),
            distance,
            duration,
            cadence,
        );
        assert_eq!(s.pace_min_per_km(), Some(duration / distance));
        assert_eq!(s.speed_km_per_h(), None);
        assert_eq!(s.cadence_spm(), Some(cadence));
    }
}

#[test]
fn test_speed_is_distance_over_hours() {
    let grid = [
        (20.0, 60.0, 300.0),
        (7.5, 33.3, -50.0),
        (100.0, 245.0, 0.0),
        (0.1, 0.7, 12.5),
    ];
    for (distance, duration, elevation) in grid {
        let s = SessionRecord::timed_elevation(
            SessionId::new("1"),
            april_14(),
            loc(),
            distance,
            duration,
            elevation,
        );
        assert_eq!(s.speed_km_per_h(), Some(distance / (duration / 60.0)));
        assert_eq!(s.pace_min_per_km(), None);
        assert_eq!(s.elevation_gain_m(), Some(elevation));
    }
}

#[test]
fn test_labels_use_variant_month_and_day() {
    let running = SessionRecord::timed_cadence(
        SessionId::new("1"),
        april_14(),
        loc(),
        5.0,
        25.0,
        150.0,
    );
    assert_eq!(running.label(), "Running on April 14");

    let cycling = SessionRecord::timed_elevation(
        SessionId::new("2"),
        april_14(),
        loc(),
        20.0,
        60.0,
        -50.0,
    );
    assert_eq!(cycling.label(), "Cycling on April 14");
}

#[test]
fn test_describe_covers_every_month() {
    let tz = FixedOffset::west_opt(5 * 3600).unwrap();
    let expected = [
        "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ];
    for (i, month) in expected.iter().enumerate() {
        let date = tz
            .with_ymd_and_hms(2025, i as u32 + 1, 3, 23, 59, 0)
            .unwrap();
        assert_eq!(
            describe(SessionVariant::Cadence, &date),
            format!("Running on {month} 3")
        );
    }
}

#[test]
fn test_label_uses_the_recorded_offset_day() {
    // 23:30 on Dec 31 at UTC-5 is already Jan 1 in UTC.
    let late = FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2025, 12, 31, 23, 30, 0)
        .unwrap();
    assert_eq!(
        describe(SessionVariant::Elevation, &late),
        "Cycling on December 31"
    );
}

#[test]
fn test_generated_ids_are_ten_digits_and_skip_taken_ones() {
    let now = april_14();
    let first = SessionId::generate(&now, &[]);
    assert_eq!(first.as_str().len(), 10);
    assert!(first.as_str().chars().all(|c| c.is_ascii_digit()));

    let taken = vec![SessionRecord::timed_cadence(
        first.clone(),
        now,
        loc(),
        1.0,
        1.0,
        1.0,
    )];
    let second = SessionId::generate(&now, &taken);
    assert_ne!(first, second);
    assert_eq!(second.as_str().len(), 10);
}

#[test]
fn test_variant_names_tags_and_form_values() {
    assert_eq!(SessionVariant::Cadence.display_name(), "running");
    assert_eq!(SessionVariant::Elevation.display_name(), "cycling");
    assert_eq!(SessionVariant::from_tag("cadence"), Some(SessionVariant::Cadence));
    assert_eq!(SessionVariant::from_tag("running"), None);
    assert_eq!(
        SessionVariant::from_form_value(" Cycling "),
        Some(SessionVariant::Elevation)
    );
    assert_eq!(SessionVariant::from_form_value("swimming"), None);
    assert_eq!(SessionVariant::Cadence.popup_class(), "running-popup");
    assert_eq!(SessionVariant::Cadence.toggled(), SessionVariant::Elevation);
}

#[test]
fn test_location_parsing() {
    assert_eq!(Location::parse("10.5, -20.25").unwrap(), Location::new(10.5, -20.25));
    assert!(Location::parse("10.5").is_err());
    assert!(Location::parse("abc,1").is_err());
    assert!(Location::parse("91,0").is_err());
    assert!(Location::parse("0,181").is_err());
}
