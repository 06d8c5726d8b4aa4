//! Integration tests for the inventory commands: init, room, customer,
//! book and bookings.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("calendar"))
        .stdout(predicate::str::contains("transition"))
        .stdout(predicate::str::contains("override"));
}

#[test]
fn test_version() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("innkeep "));
}

#[test]
fn test_init_creates_database_and_config() {
    let env = TestEnv::new();
    env.command()
        .args(["init", "--with-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created database"))
        .stdout(predicate::str::contains("Created default configuration file"));

    assert!(env.data_dir.join("innkeep.db").exists());
    assert!(env.data_dir.join("config.yaml").exists());
}

#[test]
fn test_init_refuses_existing_database() {
    let env = TestEnv::new();
    env.command().arg("init").assert().success();

    env.command()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--overwrite"));

    env.command()
        .args(["init", "--overwrite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recreated database"));
}

#[test]
fn test_init_dry_run_changes_nothing() {
    let env = TestEnv::new();
    env.command()
        .args(["init", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry-run mode"));

    assert!(!env.data_dir.exists());
}

#[test]
fn test_room_add_and_list() {
    let env = TestEnv::new();
    env.command()
        .args([
            "room", "add", "R101", "--type", "Deluxe Suite", "--capacity", "4", "--price",
            "250.5", "--amenity", "wifi", "--amenity", "balcony",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added room R101 (Deluxe Suite, id 1)"));

    env.command()
        .args(["room", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1\tR101\tDeluxe Suite\t4\t250.50\tbalcony,wifi\tyes",
        ));
}

#[test]
fn test_room_list_empty() {
    let env = TestEnv::new();
    env.command()
        .args(["room", "list"])
        .assert()
        .success()
        .stdout("No rooms.\n");
}

#[test]
fn test_duplicate_room_number_is_a_conflict() {
    let env = TestEnv::new();
    env.add_room("R101", "Standard Room");

    env.command()
        .args(["room", "add", "R101", "--type", "Standard Room"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("conflict"));
}

#[test]
fn test_room_deactivate_hides_room_from_default_list() {
    let env = TestEnv::new();
    env.add_room("R101", "Standard Room");
    env.add_room("R102", "Standard Room");

    env.command()
        .args(["room", "deactivate", "R102"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deactivated room R102"));

    let listed = env.run(&["room", "list"]);
    assert!(listed.contains("R101"));
    assert!(!listed.contains("R102"));

    let all = env.run(&["room", "list", "--all"]);
    assert!(all.contains("R102\tStandard Room\t2\t0.00\t-\tno"));

    env.command()
        .args(["room", "deactivate", "R102"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already inactive"));
}

#[test]
fn test_room_list_json() {
    let env = TestEnv::new();
    env.add_room("R101", "Standard Room");

    let output = env.run(&["--format", "json", "room", "list"]);
    let rooms: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(rooms.as_array().unwrap().len(), 1);
    assert_eq!(rooms[0]["room_number"], "R101");
}

#[test]
fn test_customer_add_and_show() {
    let env = TestEnv::new();
    env.command()
        .args(["customer", "add", "Ada Guest", "--email", "ada@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer 1: Ada Guest"))
        .stdout(predicate::str::contains("email: ada@example.com"));

    let output = env.run(&["--format", "json", "customer", "show", "1"]);
    let customer: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(customer["name"], "Ada Guest");
    assert_eq!(customer["phone"], serde_json::Value::Null);

    env.command()
        .args(["customer", "show", "42"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("customer 42"));
}

#[test]
fn test_book_and_list_bookings() {
    let (env, customer) = TestEnv::with_resort();
    let customer = customer.to_string();

    env.command()
        .args([
            "book",
            "--customer",
            &customer,
            "--type",
            "Standard Room",
            "--check-in",
            "2024-06-01",
            "--check-out",
            "2024-06-04",
            "--guests",
            "2",
            "--total",
            "360",
            "--advance",
            "100.00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created booking 1 for Standard Room from 2024-06-01 to 2024-06-04 (3 nights, balance 260.00)",
        ));

    env.command()
        .arg("bookings")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1\t1\tStandard Room\t2024-06-01\t2024-06-04\t2\t360.00\t100.00\tconfirmed",
        ));

    env.command()
        .args(["bookings", "--status", "cancelled"])
        .assert()
        .success()
        .stdout("No bookings.\n");
}

#[test]
fn test_book_requires_room_of_type() {
    let (env, customer) = TestEnv::with_resort();

    env.command()
        .args([
            "book",
            "--customer",
            &customer.to_string(),
            "--type",
            "Villa",
            "--check-in",
            "2024-06-01",
            "--check-out",
            "2024-06-02",
        ])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("room_type"));
}

#[test]
fn test_book_rejects_empty_stay() {
    let (env, customer) = TestEnv::with_resort();

    env.command()
        .args([
            "book",
            "--customer",
            &customer.to_string(),
            "--type",
            "Standard Room",
            "--check-in",
            "2024-06-02",
            "--check-out",
            "2024-06-02",
        ])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("check_out"));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("innkeep"));
}
