//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BookCommand, BookingsCommand, CalendarCommand, CompletionsCommand, CustomerCommand, InitCommand,
    OverrideCommand, RoomCommand, StatusCommand, TransitionCommand,
};
use clap::{Parser, Subcommand};
use innkeep::output::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for resort room availability and booking status.
#[derive(Parser)]
#[command(name = "innkeep")]
#[command(version, about = "Resort room availability and booking status", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "INNKEEP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "INNKEEP_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true)]
    pub disable_autoinit: bool,

    /// Staff member performing changes
    #[arg(long, value_name = "NAME", global = true)]
    pub staff: Option<String>,

    /// Output format for query results
    #[arg(long, value_enum, global = true, ignore_case = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Manage rooms
    Room(RoomCommand),

    /// Manage customers
    Customer(CustomerCommand),

    /// Record a booking
    Book(BookCommand),

    /// List bookings
    Bookings(BookingsCommand),

    /// Show a room's effective status on a date
    Status(StatusCommand),

    /// Show a room's status over a range of dates
    Calendar(CalendarCommand),

    /// Move a booking to a new status
    Transition(TransitionCommand),

    /// Set or clear availability overrides
    Override(OverrideCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
