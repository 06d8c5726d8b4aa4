//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Fixtures for rooms, customers and bookings

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test.
const HOST_ENV: [&str; 10] = [
    "INNKEEP_DATA_DIR",
    "INNKEEP_BUSY_TIMEOUT",
    "INNKEEP_LOG_MODE",
    "INNKEEP_MAX_RANGE_DAYS",
    "INNKEEP_ENFORCE_CHECK_IN_WINDOW",
    "INNKEEP_SESSION_TTL_MINUTES",
    "INNKEEP_DISABLE_AUTOINIT",
    "INNKEEP_MAXIMUM_LOCK_WAIT_SECONDS",
    "INNKEEP_OUTPUT_FORMAT",
    "INNKEEP_STAFF",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the innkeep data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; innkeep creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("innkeep-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// A command with no global flags, run inside the temporary directory
    /// with host `INNKEEP_*` variables removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("innkeep").expect("Failed to find innkeep binary");
        cmd.current_dir(&self.temp_path);
        for var in HOST_ENV {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command with `--data-dir` and `--staff` pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .arg("--staff")
            .arg("front-desk");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Run a command and return its stdout, asserting success.
    pub fn run(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run innkeep");
        assert!(
            output.status.success(),
            "innkeep {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Add a room of the given type.
    pub fn add_room(&self, number: &str, room_type: &str) {
        self.run(&["room", "add", number, "--type", room_type]);
    }

    /// Register a customer and return the new id.
    pub fn add_customer(&self, name: &str) -> i64 {
        // "Customer 1: Ada Guest"
        let stdout = self.run(&["customer", "add", name]);
        stdout
            .split_whitespace()
            .nth(1)
            .and_then(|id| id.trim_end_matches(':').parse().ok())
            .unwrap_or_else(|| panic!("unexpected customer output: {stdout}"))
    }

    /// Book a stay and return the new booking id.
    pub fn book(&self, customer: i64, room_type: &str, check_in: &str, check_out: &str) -> i64 {
        // "Created booking 1 for ..."
        let customer = customer.to_string();
        let stdout = self.run(&[
            "book",
            "--customer",
            &customer,
            "--type",
            room_type,
            "--check-in",
            check_in,
            "--check-out",
            check_out,
        ]);
        stdout
            .split_whitespace()
            .nth(2)
            .and_then(|id| id.parse().ok())
            .unwrap_or_else(|| panic!("unexpected booking output: {stdout}"))
    }

    /// A resort with room R101 (Standard Room) and one customer.
    pub fn with_resort() -> (Self, i64) {
        let env = Self::new();
        env.add_room("R101", "Standard Room");
        let customer = env.add_customer("Ada Guest");
        (env, customer)
    }

    /// Write a project configuration file in the working directory.
    pub fn write_project_config(&self, content: &str) {
        std::fs::write(self.temp_path.join("innkeep.yaml"), content)
            .expect("Failed to write config");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
