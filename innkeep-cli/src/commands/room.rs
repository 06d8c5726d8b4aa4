//! Room commands: add, list and deactivate.

use crate::error::CliError;
use crate::utils::{find_room, load_configuration, open_database, parse_amount, GlobalOptions};
use clap::{Args, Subcommand};
use innkeep::{Database, Room, RoomType};
use std::io::Write;

/// Manage rooms.
#[derive(Args)]
pub struct RoomCommand {
    #[command(subcommand)]
    pub action: RoomAction,
}

/// Room subcommands.
#[derive(Subcommand)]
pub enum RoomAction {
    /// Add a room
    Add(RoomAddArgs),

    /// List rooms
    List(RoomListArgs),

    /// Take a room out of the inventory
    Deactivate(RoomDeactivateArgs),
}

/// Arguments for `room add`.
#[derive(Args)]
pub struct RoomAddArgs {
    /// Room number, unique across the resort
    #[arg(value_name = "NUMBER")]
    pub number: String,

    /// Room type label, matched against booking room types
    #[arg(long = "type", value_name = "TYPE")]
    pub room_type: String,

    /// Maximum number of guests
    #[arg(long, default_value_t = 2)]
    pub capacity: u32,

    /// Nightly base price, e.g. 120.50
    #[arg(long, value_name = "AMOUNT", default_value = "0")]
    pub price: String,

    /// Amenity label (repeatable)
    #[arg(long = "amenity", value_name = "LABEL")]
    pub amenities: Vec<String>,
}

/// Arguments for `room list`.
#[derive(Args)]
pub struct RoomListArgs {
    /// Include deactivated rooms
    #[arg(long)]
    pub all: bool,
}

/// Arguments for `room deactivate`.
#[derive(Args)]
pub struct RoomDeactivateArgs {
    /// Room number
    #[arg(value_name = "NUMBER")]
    pub number: String,
}

impl RoomCommand {
    /// Execute the room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        match self.action {
            RoomAction::Add(args) => {
                let room_type = RoomType::new(&args.room_type).map_err(innkeep::Error::from)?;
                let room = Room::builder(args.number, room_type)
                    .capacity(args.capacity)
                    .base_price(parse_amount(&args.price)?)
                    .amenities(args.amenities)
                    .build()
                    .map_err(innkeep::Error::from)?;
                let room = db.create_room(&room)?;

                if !global.quiet {
                    println!(
                        "Added room {} ({}, id {})",
                        room.room_number(),
                        room.room_type(),
                        room.id()
                    );
                }
            }
            RoomAction::List(args) => {
                let rooms = Database::list_rooms(db.connection(), args.all)?;
                let output = config.output_format().create_formatter().format_rooms(&rooms)?;

                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{output}")?;
            }
            RoomAction::Deactivate(args) => {
                let room = find_room(&db, &args.number)?;
                let changed = db.deactivate_room(room.id())?;

                if !global.quiet {
                    if changed {
                        println!("Deactivated room {}", room.room_number());
                    } else {
                        println!("Room {} is already inactive", room.room_number());
                    }
                }
            }
        }

        Ok(())
    }
}
