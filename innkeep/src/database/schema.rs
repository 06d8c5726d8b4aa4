//! Database schema definitions and SQL constants.
//!
//! Dates are stored as ISO-8601 `TEXT` (`YYYY-MM-DD`) so range predicates
//! compare lexically. Timestamps are Unix epoch seconds. Money is stored in
//! minor units.

/// Current schema version, stored in the metadata table.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Key-value table for schema version and other database metadata.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// Rooms. `amenities` holds a JSON array of labels. Rooms are deactivated,
/// never deleted.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        room_number TEXT NOT NULL UNIQUE CHECK (length(trim(room_number)) > 0),
        room_type TEXT NOT NULL CHECK (length(trim(room_type)) > 0),
        capacity INTEGER NOT NULL CHECK (capacity > 0),
        base_price INTEGER NOT NULL CHECK (base_price >= 0),
        amenities TEXT NOT NULL DEFAULT '[]',
        is_active INTEGER NOT NULL DEFAULT 1
    )";

/// Customers referenced by bookings.
pub const CREATE_CUSTOMERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS customers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL CHECK (length(trim(name)) > 0),
        email TEXT,
        phone TEXT
    )";

/// Bookings of a room type for a half-open stay `[check_in, check_out)`.
pub const CREATE_BOOKINGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS bookings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_id INTEGER NOT NULL REFERENCES customers(id),
        room_type TEXT NOT NULL,
        check_in TEXT NOT NULL,
        check_out TEXT NOT NULL,
        guests INTEGER NOT NULL CHECK (guests > 0),
        total_amount INTEGER NOT NULL CHECK (total_amount >= 0),
        advance_paid INTEGER NOT NULL DEFAULT 0
            CHECK (advance_paid >= 0 AND advance_paid <= total_amount),
        status TEXT NOT NULL DEFAULT 'confirmed'
            CHECK (status IN ('confirmed', 'checked_in', 'checked_out', 'cancelled')),
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL,
        CHECK (check_in < check_out)
    )";

/// Explicit availability statements, one per room and date.
pub const CREATE_ROOM_AVAILABILITY_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS room_availability (
        room_id INTEGER NOT NULL REFERENCES rooms(id),
        date TEXT NOT NULL,
        status TEXT NOT NULL
            CHECK (status IN ('available', 'occupied', 'maintenance', 'blocked')),
        notes TEXT,
        updated_by TEXT,
        updated_at INTEGER NOT NULL,
        PRIMARY KEY (room_id, date)
    )";

/// Serves the active-bookings window query.
pub const CREATE_BOOKINGS_WINDOW_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_bookings_window
    ON bookings(room_type, status, check_in, check_out)";

/// Serves room listings by type.
pub const CREATE_ROOMS_TYPE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_rooms_type ON rooms(room_type)";

/// Reads the schema version.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// Writes the schema version.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// Inserts or replaces the override for `(room_id, date)`.
///
/// Used by both single and batch upserts.
pub const UPSERT_OVERRIDE: &str = r"
    INSERT INTO room_availability (room_id, date, status, notes, updated_by, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    ON CONFLICT (room_id, date) DO UPDATE SET
        status = excluded.status,
        notes = excluded.notes,
        updated_by = excluded.updated_by,
        updated_at = excluded.updated_at
";

/// Removes the override for `(room_id, date)`.
pub const DELETE_OVERRIDE: &str = "DELETE FROM room_availability WHERE room_id = ? AND date = ?";
