//! Output formatter implementations.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::NaiveDate;
use serde_json::json;

use crate::availability::Resolution;
use crate::booking::Booking;
use crate::room::Room;
use crate::Result;

use super::OutputFormatter;

const ROOM_HEADERS: [&str; 7] = [
    "id",
    "number",
    "type",
    "capacity",
    "price",
    "amenities",
    "active",
];

const BOOKING_HEADERS: [&str; 9] = [
    "id",
    "customer",
    "type",
    "check_in",
    "check_out",
    "guests",
    "total",
    "paid",
    "status",
];

const CALENDAR_HEADERS: [&str; 4] = ["date", "status", "source", "booking"];

/// Renders an amount in cents with two decimals.
///
/// # Examples
///
/// ```
/// use innkeep::output::format_amount;
///
/// assert_eq!(format_amount(12_050), "120.50");
/// assert_eq!(format_amount(-5), "-0.05");
/// ```
#[must_use]
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

fn header_line(headers: &[&str]) -> String {
    headers
        .iter()
        .map(|h| h.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t")
}

fn booking_cell(resolution: &Resolution) -> String {
    resolution
        .booking
        .as_ref()
        .map_or_else(|| "-".to_string(), |b| b.id().to_string())
}

fn resolution_json(resolution: &Resolution) -> serde_json::Value {
    json!({
        "date": resolution.date,
        "status": resolution.status,
        "source": resolution.source,
        "booking_id": resolution.booking.as_ref().map(Booking::id),
        "notes": resolution.notes,
        "warnings": resolution
            .warnings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
    })
}

/// Tab-separated tables with an uppercase header row.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_rooms(&self, rooms: &[Room]) -> Result<String> {
        if rooms.is_empty() {
            return Ok("No rooms.".to_string());
        }

        let mut lines = vec![header_line(&ROOM_HEADERS)];
        for room in rooms {
            let amenities = if room.amenities().is_empty() {
                "-".to_string()
            } else {
                room.amenities()
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(",")
            };
            lines.push(format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                room.id(),
                room.room_number(),
                room.room_type(),
                room.capacity(),
                format_amount(room.base_price()),
                amenities,
                if room.is_active() { "yes" } else { "no" },
            ));
        }
        Ok(lines.join("\n"))
    }

    fn format_bookings(&self, bookings: &[Booking]) -> Result<String> {
        if bookings.is_empty() {
            return Ok("No bookings.".to_string());
        }

        let mut lines = vec![header_line(&BOOKING_HEADERS)];
        for booking in bookings {
            lines.push(format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                booking.id(),
                booking.customer_id(),
                booking.room_type(),
                booking.check_in(),
                booking.check_out(),
                booking.guests(),
                format_amount(booking.total_amount()),
                format_amount(booking.advance_paid()),
                booking.status(),
            ));
        }
        Ok(lines.join("\n"))
    }

    fn format_resolution(&self, room: &Room, resolution: &Resolution) -> Result<String> {
        let mut out = format!(
            "{} on {}: {} ({})",
            room.room_number(),
            resolution.date,
            resolution.status,
            resolution.source
        );
        if let Some(booking) = &resolution.booking {
            let _ = write!(
                out,
                "\n  booking {} ({} to {}, {} guests, {})",
                booking.id(),
                booking.check_in(),
                booking.check_out(),
                booking.guests(),
                booking.status()
            );
        }
        if let Some(notes) = &resolution.notes {
            let _ = write!(out, "\n  notes: {notes}");
        }
        for warning in &resolution.warnings {
            let _ = write!(out, "\n  warning: {warning}");
        }
        Ok(out)
    }

    fn format_calendar(
        &self,
        room: &Room,
        calendar: &BTreeMap<NaiveDate, Resolution>,
    ) -> Result<String> {
        let mut lines = vec![
            format!("Room {} ({})", room.room_number(), room.room_type()),
            header_line(&CALENDAR_HEADERS),
        ];
        let mut warnings = Vec::new();
        for (date, resolution) in calendar {
            lines.push(format!(
                "{date}\t{}\t{}\t{}",
                resolution.status,
                resolution.source,
                booking_cell(resolution),
            ));
            warnings.extend(
                resolution
                    .warnings
                    .iter()
                    .map(|w| format!("warning: {date}: {w}")),
            );
        }
        lines.extend(warnings);
        Ok(lines.join("\n"))
    }
}

/// Pretty-printed JSON.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_rooms(&self, rooms: &[Room]) -> Result<String> {
        Ok(serde_json::to_string_pretty(rooms)?)
    }

    fn format_bookings(&self, bookings: &[Booking]) -> Result<String> {
        Ok(serde_json::to_string_pretty(bookings)?)
    }

    fn format_resolution(&self, room: &Room, resolution: &Resolution) -> Result<String> {
        let mut value = resolution_json(resolution);
        value["room_id"] = json!(room.id());
        value["room_number"] = json!(room.room_number());
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_calendar(
        &self,
        room: &Room,
        calendar: &BTreeMap<NaiveDate, Resolution>,
    ) -> Result<String> {
        let days: Vec<_> = calendar.values().map(resolution_json).collect();
        let value = json!({
            "room_id": room.id(),
            "room_number": room.room_number(),
            "room_type": room.room_type(),
            "days": days,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }
}
