//! Integration tests for the `exoloss` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("exoloss"))
}

#[test]
fn help_describes_the_tool() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mass loss"));
}

#[test]
fn systems_lists_catalog() {
    cli()
        .arg("systems")
        .assert()
        .success()
        .stdout(predicate::str::contains("kepler-7/b"))
        .stdout(predicate::str::contains("sun/earth"));
}

#[test]
fn estimate_known_system_as_json() {
    let output = cli()
        .args(["estimate", "--system", "Kepler-7/b", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(report["lifetime"]["total_g"].as_f64().unwrap() > 0.0);
    assert_eq!(report["system"]["eccentricity"].as_f64(), Some(0.026));
    assert!(!report["series"].as_array().unwrap().is_empty());
}

#[test]
fn estimate_from_flags_prints_report() {
    cli()
        .args([
            "estimate",
            "--star-radius", "1",
            "--star-mass", "1",
            "--star-age", "4.5",
            "--planet-radius", "1",
            "--planet-mass", "1",
            "--semi-major-axis", "1",
            "--age-step", "0.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lifetime mass loss"))
        .stdout(predicate::str::contains("wind speed at orbit"));
}

#[test]
fn unknown_system_fails() {
    cli()
        .args(["estimate", "--system", "Nowhere/b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nowhere"));
}

#[test]
fn invalid_parameter_is_reported() {
    cli()
        .args([
            "estimate",
            "--star-radius", "1",
            "--star-mass", "1",
            "--star-age", "0",
            "--planet-radius", "1",
            "--planet-mass", "1",
            "--semi-major-axis", "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stellar age"));
}

#[test]
fn config_file_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exoloss.toml");
    fs::write(&path, "[escape]\nefficiency = 0.1\n").unwrap();

    cli()
        .args(["estimate", "--system", "Sun/Earth", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("photoevaporation efficiency"));
}

#[test]
fn wind_profile_from_temperature() {
    let output = cli()
        .args([
            "wind-profile",
            "--temperature", "1.5e6",
            "--start", "0.1",
            "--end", "1.0",
            "--points", "20",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let profile: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(profile["samples"].as_array().unwrap().len(), 20);
}

#[test]
fn wind_profile_needs_a_temperature_source() {
    cli()
        .arg("wind-profile")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--temperature"));
}

#[test]
fn wind_profile_rejects_negative_temperature() {
    cli()
        .args(["wind-profile", "--temperature=-5", "--points", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid coronal temperature"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn wind_profile_rejects_negative_stellar_mass() {
    cli()
        .args(["wind-profile", "--temperature", "1e6", "--star-mass=-1", "--points", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid stellar mass"));
}

#[test]
fn density_profile_table() {
    cli()
        .args(["density-profile", "--points", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance [AU]"));
}
