use chrono::{Local, TimeZone, Utc};
use rponto::core::hash::{generate_hash, punch_hash};
use rponto::models::punch_type::PunchType;
use rponto::utils::time::punch_timestamp;

#[test]
fn hash_is_sha256_of_joined_fields() {
    assert_eq!(
        generate_hash("1", "clockIn", "2024-01-05T11:05:00.000Z"),
        "b034caa22390498d30cac21404ab46e628a3d2ffce2212846970336876cf8d8c"
    );
}

#[test]
fn hash_is_deterministic_and_input_sensitive() {
    let a = generate_hash("7", "clockOut", "2024-03-01T20:00:00.000Z");
    let b = generate_hash("7", "clockOut", "2024-03-01T20:00:00.000Z");
    assert_eq!(a, b);
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

    assert_ne!(a, generate_hash("8", "clockOut", "2024-03-01T20:00:00.000Z"));
    assert_ne!(a, generate_hash("7", "clockIn", "2024-03-01T20:00:00.000Z"));
    assert_ne!(a, generate_hash("7", "clockOut", "2024-03-01T20:00:00.001Z"));
}

#[test]
fn punch_timestamp_is_utc_with_millis() {
    let now = Utc
        .with_ymd_and_hms(2024, 1, 5, 11, 5, 0)
        .unwrap()
        .with_timezone(&Local);
    assert_eq!(punch_timestamp(&now), "2024-01-05T11:05:00.000Z");

    assert_eq!(
        punch_hash("1", PunchType::ClockIn, &now),
        "b034caa22390498d30cac21404ab46e628a3d2ffce2212846970336876cf8d8c"
    );
}

#[test]
fn punch_type_parsing_accepts_cli_and_wire_names() {
    assert_eq!(PunchType::parse("clock-in"), Some(PunchType::ClockIn));
    assert_eq!(PunchType::parse("lunchStart"), Some(PunchType::LunchStart));
    assert_eq!(PunchType::parse("lunch_end"), Some(PunchType::LunchEnd));
    assert_eq!(PunchType::parse("OUT"), Some(PunchType::ClockOut));
    assert_eq!(PunchType::parse("break"), None);

    assert_eq!(PunchType::LunchEnd.label(), "Volta do Almoço");
    assert_eq!(PunchType::ClockIn.to_string(), "clockIn");
}
