use chrono::{Duration, FixedOffset, TimeZone};
use rmaplog::db::pool::DbPool;
use rmaplog::errors::AppError;
use rmaplog::models::location::Location;
use rmaplog::models::session::{SessionId, SessionRecord};
use rmaplog::models::variant::SessionVariant;
use rmaplog::store::codec::{decode, encode, DEFAULT_STORE_KEY};
use rmaplog::store::{KeyValueSubstrate, MemorySubstrate, SessionStore, SqliteSubstrate};

mod common;
use common::april_14;

fn sample_list() -> Vec<SessionRecord> {
    let t0 = april_14();
    let tz = FixedOffset::west_opt(7 * 3600).unwrap();
    vec![
        SessionRecord::timed_cadence(
            SessionId::new("1776155400"),
            t0,
            Location::new(10.0, 20.0),
            5.0,
            25.0,
            150.0,
        ),
        SessionRecord::timed_elevation(
            SessionId::new("1776159000"),
            t0 + Duration::hours(1),
            Location::new(-33.8688, 151.2093),
            27.3,
            71.9,
            -50.0,
        ),
        SessionRecord::timed_cadence(
            SessionId::new("0000000042"),
            tz.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap(),
            Location::new(0.1, -0.1),
            0.7,
            3.3,
            181.0,
        ),
        SessionRecord::timed_elevation(
            SessionId::new("0000000043"),
            t0,
            Location::new(89.9, -179.9),
            3.0,
            9.0,
            0.0,
        ),
    ]
}

#[test]
fn test_round_trip_restores_every_field_and_variant() {
    let list = sample_list();
    let mut store = SessionStore::with_default_key(MemorySubstrate::new());
    store.save(&list).unwrap();

    let loaded = store.load();
    assert_eq!(loaded, list);

    let variants: Vec<SessionVariant> = loaded.iter().map(|s| s.variant()).collect();
    assert_eq!(
        variants,
        vec![
            SessionVariant::Cadence,
            SessionVariant::Elevation,
            SessionVariant::Cadence,
            SessionVariant::Elevation
        ]
    );
    assert_eq!(loaded[0].elevation_gain_m(), None);
    assert_eq!(loaded[1].cadence_spm(), None);
    assert_eq!(loaded[1].speed_km_per_h(), list[1].speed_km_per_h());
}

#[test]
fn test_round_trip_of_empty_list() {
    let mut store = SessionStore::with_default_key(MemorySubstrate::new());
    store.save(&[]).unwrap();
    assert_eq!(store.substrate().get(DEFAULT_STORE_KEY).unwrap().as_deref(), Some("[]"));
    assert!(store.load().is_empty());
}

#[test]
fn test_encoded_records_are_tagged_and_carry_derived_fields() {
    let blob = encode(&sample_list()[..2]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&blob).unwrap();
    let arr = json.as_array().unwrap();

    assert_eq!(arr[0]["variant"], "cadence");
    assert_eq!(arr[0]["paceMinPerKm"], 5.0);
    assert_eq!(arr[0]["label"], "Running on April 14");
    assert!(arr[0].get("elevationGainM").is_none());
    assert_eq!(arr[0]["location"]["lat"], 10.0);

    assert_eq!(arr[1]["variant"], "elevation");
    assert_eq!(arr[1]["elevationGainM"], -50.0);
    assert!(arr[1].get("cadenceSpm").is_none());
    assert!(arr[1]["createdAt"].is_string());
}

#[test]
fn test_stored_label_is_kept_verbatim() {
    let blob = r#"[{"variant":"cadence","label":"Morning jog","id":"7","durationMin":30,
        "distanceKm":6,"cadenceSpm":160,"paceMinPerKm":5,
        "location":{"lng":2.0,"lat":1.0},"createdAt":"2026-04-14T09:30:00+01:00"}]"#;
    let sessions = decode(blob).unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].label(), "Morning jog");
    assert_eq!(sessions[0].location(), Location::new(1.0, 2.0));
    assert_eq!(sessions[0].pace_min_per_km(), Some(5.0));
}

#[test]
fn test_missing_key_loads_empty() {
    let store = SessionStore::with_default_key(MemorySubstrate::new());
    assert!(store.load().is_empty());
}

#[test]
fn test_unparsable_blob_loads_empty() {
    let mut substrate = MemorySubstrate::new();
    substrate.set(DEFAULT_STORE_KEY, "{not json").unwrap();
    let store = SessionStore::with_default_key(substrate);
    assert!(store.load().is_empty());
}

#[test]
fn test_unknown_variant_tag_is_a_reconstruction_error() {
    let blob = r#"[{"id":"1","createdAt":"2026-04-14T09:30:00+01:00","location":{"lat":1,"lng":2},
        "distanceKm":5,"durationMin":25,"label":"Swimming on April 14","variant":"swimming"}]"#;
    assert!(matches!(decode(blob), Err(AppError::Reconstruction(_))));
}

#[test]
fn test_untagged_record_is_not_guessed() {
    let blob = r#"[{"id":"1","createdAt":"2026-04-14T09:30:00+01:00","location":{"lat":1,"lng":2},
        "distanceKm":5,"durationMin":25,"label":"Running on April 14",
        "cadenceSpm":150,"paceMinPerKm":5}]"#;
    assert!(matches!(decode(blob), Err(AppError::Reconstruction(_))));
}

#[test]
fn test_variant_fields_must_match_tag() {
    let missing = r#"[{"id":"1","createdAt":"2026-04-14T09:30:00+01:00","location":{"lat":1,"lng":2},
        "distanceKm":5,"durationMin":25,"label":"x","variant":"elevation","speedKmPerH":12}]"#;
    assert!(matches!(decode(missing), Err(AppError::Reconstruction(_))));

    let mixed = r#"[{"id":"1","createdAt":"2026-04-14T09:30:00+01:00","location":{"lat":1,"lng":2},
        "distanceKm":5,"durationMin":25,"label":"x","variant":"cadence",
        "cadenceSpm":150,"paceMinPerKm":5,"elevationGainM":10}]"#;
    assert!(matches!(decode(mixed), Err(AppError::Reconstruction(_))));
}

#[test]
fn test_non_positive_distance_is_rejected_on_load() {
    let blob = r#"[{"id":"1","createdAt":"2026-04-14T09:30:00+01:00","location":{"lat":1,"lng":2},
        "distanceKm":0,"durationMin":25,"label":"x","variant":"cadence",
        "cadenceSpm":150,"paceMinPerKm":5}]"#;
    assert!(matches!(decode(blob), Err(AppError::Reconstruction(_))));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let mut list = sample_list();
    list.truncate(1);
    list.push(list[0].clone());
    let blob = encode(&list).unwrap();
    assert!(matches!(decode(&blob), Err(AppError::Reconstruction(_))));
}

#[test]
fn test_one_bad_record_discards_the_whole_list_on_load() {
    let good = encode(&sample_list()[..1]).unwrap();
    let bad = good.replace("\"cadence\"", "\"hiking\"");
    let mut substrate = MemorySubstrate::new();
    substrate.set(DEFAULT_STORE_KEY, &bad).unwrap();
    let store = SessionStore::with_default_key(substrate);
    assert!(store.load().is_empty());
}

#[test]
fn test_save_overwrites_previous_value() {
    let list = sample_list();
    let mut store = SessionStore::with_default_key(MemorySubstrate::new());
    store.save(&list).unwrap();
    store.save(&list[..1]).unwrap();
    assert_eq!(store.load(), list[..1].to_vec());
    assert_eq!(store.substrate().len(), 1);
}

#[test]
fn test_quota_exceeded_is_a_persistence_error() {
    let mut store = SessionStore::with_default_key(MemorySubstrate::with_quota(64));
    let err = store.save(&sample_list()).unwrap_err();
    assert!(matches!(err, AppError::Persistence(_)));
    assert!(!store.substrate().contains_key(DEFAULT_STORE_KEY));
}

#[test]
fn test_non_finite_values_are_never_written() {
    let overflowing = SessionRecord::timed_cadence(
        SessionId::new("0000000099"),
        april_14(),
        Location::new(1.0, 1.0),
        1e-10,
        1e300,
        150.0,
    );
    assert_eq!(overflowing.pace_min_per_km(), Some(f64::INFINITY));
    assert!(matches!(
        encode(std::slice::from_ref(&overflowing)),
        Err(AppError::Persistence(_))
    ));

    let list = sample_list();
    let mut store = SessionStore::with_default_key(MemorySubstrate::new());
    store.save(&list).unwrap();

    let mut grown = list.clone();
    grown.push(overflowing);
    let err = store.save(&grown).unwrap_err();

    assert!(matches!(err, AppError::Persistence(_)));
    assert_eq!(store.load(), list);
}

#[test]
fn test_reset_is_idempotent() {
    let mut store = SessionStore::with_default_key(MemorySubstrate::new());
    store.save(&sample_list()).unwrap();
    store.reset().unwrap();
    assert!(!store.substrate().contains_key(DEFAULT_STORE_KEY));
    store.reset().unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn test_custom_key_is_used() {
    let mut store = SessionStore::new(MemorySubstrate::new(), "other");
    store.save(&sample_list()).unwrap();
    assert!(store.substrate().contains_key("other"));
    assert!(!store.substrate().contains_key(DEFAULT_STORE_KEY));
}

#[test]
fn test_sqlite_substrate_round_trip() {
    let pool = DbPool::in_memory().unwrap();
    let mut store = SessionStore::with_default_key(SqliteSubstrate::new(pool));
    let list = sample_list();

    store.save(&list).unwrap();
    assert_eq!(store.load(), list);

    store.save(&list[2..]).unwrap();
    assert_eq!(store.load(), list[2..].to_vec());

    let count: i64 = store
        .substrate()
        .pool()
        .conn
        .query_row("SELECT COUNT(*) FROM kv_store", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);

    store.reset().unwrap();
    assert_eq!(store.substrate().get(DEFAULT_STORE_KEY).unwrap(), None);
    store.reset().unwrap();
}

#[test]
fn test_migrations_run_once() {
    let pool = DbPool::in_memory().unwrap();
    rmaplog::db::run_pending_migrations(&pool.conn).unwrap();
    let applied: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(applied, 1);
}
