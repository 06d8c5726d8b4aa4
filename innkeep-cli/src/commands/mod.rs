//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Create the data directory and database
//! - `room`: Add, list and deactivate rooms
//! - `customer`: Register and show customers
//! - `book` / `bookings`: Record and list bookings
//! - `status`: Effective status of a room on a date
//! - `calendar`: Effective status over a date range
//! - `transition`: Move a booking to a new status
//! - `override`: Set or clear availability overrides
//! - `completions`: Generate shell completion scripts

pub mod book;
pub mod calendar;
pub mod completions;
pub mod customer;
pub mod init;
pub mod override_cmd;
pub mod room;
pub mod status;
pub mod transition;

pub use book::{BookCommand, BookingsCommand};
pub use calendar::CalendarCommand;
pub use completions::CompletionsCommand;
pub use customer::CustomerCommand;
pub use init::InitCommand;
pub use override_cmd::OverrideCommand;
pub use room::RoomCommand;
pub use status::StatusCommand;
pub use transition::TransitionCommand;
