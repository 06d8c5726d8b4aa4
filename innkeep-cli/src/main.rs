//! Main entry point for the innkeep CLI.
//!
//! This is the command-line interface for resort room availability:
//! - `room`, `customer`, `book`: Maintain the inventory and bookings
//! - `status`, `calendar`: Resolve a room's effective status
//! - `transition`: Move a booking through its lifecycle
//! - `override`: Pin or clear a room's status on given dates

use clap::Parser;
use innkeep_cli::cli::{Cli, Command};
use innkeep_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library log records to stderr at the requested verbosity
    innkeep::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
        staff: cli.staff,
        format: cli.format,
    };

    let result = match cli.command {
        Command::Init(cmd) => cmd.execute(&global),
        Command::Room(cmd) => cmd.execute(&global),
        Command::Customer(cmd) => cmd.execute(&global),
        Command::Book(cmd) => cmd.execute(&global),
        Command::Bookings(cmd) => cmd.execute(&global),
        Command::Status(cmd) => cmd.execute(&global),
        Command::Calendar(cmd) => cmd.execute(&global),
        Command::Transition(cmd) => cmd.execute(&global),
        Command::Override(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
