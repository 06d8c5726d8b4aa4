//! Build script for innkeep-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("innkeep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resort room availability and booking status")
        .long_about(
            "Command-line tool for resolving resort room availability from bookings and staff overrides",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("INNKEEP_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("INNKEEP_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("staff")
                .long("staff")
                .help("Staff member performing changes")
                .value_name("NAME")
                .global(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format for query results")
                .value_parser(["table", "json"])
                .global(true),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Initialize the data directory and database")
                .long_about("Set up the innkeep database and, optionally, a configuration file"),
            Command::new("room")
                .about("Manage rooms")
                .long_about("Add, list and deactivate rooms in the inventory"),
            Command::new("customer")
                .about("Manage customers")
                .long_about("Register customers and show their contact details"),
            Command::new("book")
                .about("Record a booking")
                .long_about("Record a confirmed booking of a room type for a stay"),
            Command::new("bookings")
                .about("List bookings")
                .long_about("List bookings, optionally filtered by status"),
            Command::new("status")
                .about("Show a room's effective status on a date")
                .long_about(
                    "Resolve a room's status from overrides and bookings, showing which one decided it",
                ),
            Command::new("calendar")
                .about("Show a room's status over a range of dates")
                .long_about("Resolve a room's status for every date of an inclusive range"),
            Command::new("transition")
                .about("Move a booking to a new status")
                .long_about("Check a booking in or out, or cancel it"),
            Command::new("override")
                .about("Set or clear availability overrides")
                .long_about("Pin a room's status on given dates, or return them to inference"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("innkeep.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
