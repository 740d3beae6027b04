//! End-to-end tests for the `fleetdesk` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Returns a `fleetdesk` command rooted in a scratch data directory.
fn fleetdesk_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fleetdesk").unwrap();
    cmd.env("FLEETDESK_DATA_DIR", dir.path())
        .env_remove("FLEETDESK_LOG");
    cmd
}

/// Initializes storage with one customer owning a Golf and a sold X5.
fn seeded() -> TempDir {
    let dir = TempDir::new().unwrap();

    fleetdesk_cmd(&dir).arg("init").assert().success();

    fleetdesk_cmd(&dir)
        .args([
            "customer", "add", "Anna", "Schmidt",
            "--email", "anna@example.de",
            "--phone", "030 1234",
            "--street", "Hauptstr. 1",
            "--zip", "10115",
            "--city", "Berlin",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created customer #1: Anna Schmidt"));

    fleetdesk_cmd(&dir)
        .args([
            "vehicle", "add", "VW", "Golf",
            "--customer", "1",
            "--color", "Blau",
            "--registered", "2019-04-01",
            "--features", "ABS,Klima",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created vehicle: #1 VW Golf (Verfügbar)"));

    fleetdesk_cmd(&dir)
        .args(["vehicle", "add", "BMW", "X5", "--customer", "1", "--status", "Verkauft"])
        .assert()
        .success();

    dir
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    fleetdesk_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vehicle"))
        .stdout(predicate::str::contains("customer"));
}

#[test]
fn test_init_creates_data_files() {
    let dir = TempDir::new().unwrap();
    fleetdesk_cmd(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("data").join("vehicles.json").exists());
    assert!(dir.path().join("data").join("customers.json").exists());
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn test_vehicle_list_filters_by_make() {
    let dir = seeded();

    fleetdesk_cmd(&dir)
        .args(["vehicle", "list", "--make", "bm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("X5"))
        .stdout(predicate::str::contains("Golf").not())
        .stdout(predicate::str::contains("Showing 1 of 2 vehicles"));
}

#[test]
fn test_vehicle_list_non_numeric_id_matches_nothing() {
    let dir = seeded();

    fleetdesk_cmd(&dir)
        .args(["vehicle", "list", "--id", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No vehicles match the filter (2 total)."));
}

#[test]
fn test_vehicle_list_blank_status_matches_all() {
    let dir = seeded();

    fleetdesk_cmd(&dir)
        .args(["vehicle", "list", "--status", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Golf"))
        .stdout(predicate::str::contains("X5"))
        .stdout(predicate::str::contains("Showing 2 of 2 vehicles"));
}

#[test]
fn test_vehicle_list_rejects_unknown_status() {
    let dir = seeded();

    fleetdesk_cmd(&dir)
        .args(["vehicle", "list", "--status", "Verschrottet"])
        .assert()
        .failure();
}

#[test]
fn test_export_csv_to_stdout() {
    let dir = seeded();

    fleetdesk_cmd(&dir)
        .args(["vehicle", "export", "--format", "csv", "--stdout", "--status", "Verfügbar"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "id;customerId;make;model;initialRegistration;color;status;equipmentFeatures",
        ))
        .stdout(predicate::str::contains(
            "1;1;\"VW\";\"Golf\";2019-04-01;\"Blau\";\"Verfügbar\";\"ABS, Klima\"",
        ))
        .stdout(predicate::str::contains("X5").not());
}

#[test]
fn test_export_xml_to_stdout() {
    let dir = seeded();

    fleetdesk_cmd(&dir)
        .args(["vehicle", "export", "--format", "xml", "--stdout", "--make", "bmw"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml"))
        .stdout(predicate::str::ends_with("</vehicles>"))
        .stdout(predicate::str::contains("<make>BMW</make>"))
        .stdout(predicate::str::contains("<status>Verkauft</status>"));
}

#[test]
fn test_export_json_file_and_reimport() {
    let dir = seeded();
    let out = TempDir::new().unwrap();

    fleetdesk_cmd(&dir)
        .args(["vehicle", "export", "--format", "json", "--output-dir"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 vehicles to:"));

    let exported = out.path().join("vehicles-export.json");
    let contents = fs::read_to_string(&exported).unwrap();
    assert!(contents.contains("\"customerId\": 1"));

    fleetdesk_cmd(&dir)
        .args(["vehicle", "import"])
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 vehicles (0 new, 2 updated)"));
}

#[test]
fn test_vehicle_add_accepts_blank_registration() {
    let dir = seeded();

    fleetdesk_cmd(&dir)
        .args(["vehicle", "add", "Audi", "A4", "--customer", "1", "--registered", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created vehicle: #3 Audi A4"));
}

#[test]
fn test_vehicle_add_requires_existing_customer() {
    let dir = seeded();

    fleetdesk_cmd(&dir)
        .args(["vehicle", "add", "Audi", "A4", "--customer", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Customer not found: 99"));
}

#[test]
fn test_delete_requires_force() {
    let dir = seeded();

    fleetdesk_cmd(&dir)
        .args(["vehicle", "delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm deletion"));

    fleetdesk_cmd(&dir)
        .args(["vehicle", "delete", "2", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted vehicle: #2 BMW X5 (Verkauft)"));

    fleetdesk_cmd(&dir)
        .args(["vehicle", "show", "2"])
        .assert()
        .failure();
}

#[test]
fn test_customer_with_vehicles_cannot_be_deleted() {
    let dir = seeded();

    fleetdesk_cmd(&dir)
        .args(["customer", "delete", "1", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("still owns 2 vehicle(s)"));
}
