//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

fn stop(position: f64, color: &str) -> StopConfig {
    StopConfig {
        position,
        color: color.into(),
        selected: false,
    }
}

#[test]
fn default_config_validates() {
    let config = GradiaConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn accepts_angles_and_keywords() {
    for direction in [
        "90deg",
        "-45deg",
        "0.25turn",
        "1.57rad",
        "100grad",
        "left",
        "to right",
        "to top left",
        "center",
        "circle at center",
        "ellipse 50% 50% at 10px 20px",
    ] {
        assert!(is_valid_direction(direction), "{direction} should be valid");
    }
}

#[test]
fn rejects_malformed_directions() {
    for direction in ["90", "12px", "#fff", "rgba(0,0,0,1)", "Left!"] {
        assert!(!is_valid_direction(direction), "{direction} should be invalid");
    }
}

#[test]
fn catches_empty_direction() {
    let mut config = GradiaConfig::default();
    config.gradient.direction = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gradient.direction must not be empty"));
}

#[test]
fn catches_bad_direction() {
    let mut config = GradiaConfig::default();
    config.gradient.direction = "sideways!".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gradient.direction"));
}

#[test]
fn catches_inverted_track() {
    let mut config = GradiaConfig::default();
    config.track.min = 80.0;
    config.track.max = 20.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("track.min = 80 must be below track.max = 20"));
}

#[test]
fn catches_non_finite_track() {
    let mut config = GradiaConfig::default();
    config.track.max = f64::INFINITY;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("track.max"));
}

#[test]
fn catches_bad_stops() {
    let mut config = GradiaConfig::default();
    config.stops.push(stop(f64::NAN, "red"));
    config.stops.push(stop(50.0, ""));
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("stops[0].position"));
    assert!(err.contains("stops[1].color"));
}

#[test]
fn out_of_track_stops_are_allowed() {
    let mut config = GradiaConfig::default();
    config.stops.push(stop(-10.0, "red"));
    config.stops.push(stop(140.0, "blue"));
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_multiple_selected_stops() {
    let mut config = GradiaConfig::default();
    config.stops.push(StopConfig {
        selected: true,
        ..stop(0.0, "red")
    });
    config.stops.push(StopConfig {
        selected: true,
        ..stop(100.0, "blue")
    });
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("2 stops are selected"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = GradiaConfig::default();
    config.gradient.direction = String::new();
    config.track.min = 200.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gradient.direction"));
    assert!(err.contains("track.min"));
    assert!(err.contains("; "));
}
