//! Property-based tests for the availability resolver.

use super::{AvailabilityOverride, AvailabilityResolver, DateRange, RoomStatus};
use crate::booking::{Booking, BookingId, BookingStatus};
use crate::customer::CustomerId;
use crate::room::{Room, RoomId, RoomType};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn room() -> Room {
    Room::builder("R101", RoomType::new("Standard Room").unwrap())
        .id(RoomId::from(1))
        .capacity(3)
        .build()
        .unwrap()
}

fn status_strategy() -> impl Strategy<Value = BookingStatus> {
    prop::sample::select(BookingStatus::ALL.to_vec())
}

fn room_status_strategy() -> impl Strategy<Value = RoomStatus> {
    prop::sample::select(RoomStatus::ALL.to_vec())
}

// Bookings in a 40-day window, split between the room's type and another.
fn bookings_strategy() -> impl Strategy<Value = Vec<Booking>> {
    prop::collection::vec(
        (0i64..40, 1i64..8, status_strategy(), any::<bool>(), 1u32..5),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (offset, nights, status, same_type, guests))| {
                let label = if same_type { "Standard Room" } else { "Suite" };
                let check_in = base_date() + Duration::days(offset);
                Booking::builder(
                    CustomerId::from(1),
                    RoomType::new(label).unwrap(),
                    check_in,
                    check_in + Duration::days(nights),
                )
                .id(BookingId::from(i64::try_from(i).unwrap() + 1))
                .guests(guests)
                .status(status)
                .build()
                .unwrap()
            })
            .collect()
    })
}

// At most one override per date, as the store guarantees.
fn overrides_strategy() -> impl Strategy<Value = Vec<AvailabilityOverride>> {
    prop::collection::btree_map(0i64..40, room_status_strategy(), 0..8).prop_map(|map| {
        map.into_iter()
            .map(|(offset, status)| {
                AvailabilityOverride::new(RoomId::from(1), base_date() + Duration::days(offset), status)
            })
            .collect()
    })
}

fn day_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..50).prop_map(|offset| base_date() + Duration::days(offset))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // An override for the date decides the status, whatever the bookings say.
    #[test]
    fn override_always_wins(
        bookings in bookings_strategy(),
        overrides in overrides_strategy(),
        date in day_strategy(),
    ) {
        let room = room();
        let resolver = AvailabilityResolver::new(&room, &overrides, &bookings);

        if let Some(entry) = overrides.iter().find(|o| o.date() == date) {
            prop_assert_eq!(resolver.effective_status(date), entry.status());
        }
    }

    // Without an override, the status is occupied exactly when an active
    // booking of the same type covers the date.
    #[test]
    fn inference_matches_covering_bookings(
        bookings in bookings_strategy(),
        date in day_strategy(),
    ) {
        let room = room();
        let resolver = AvailabilityResolver::new(&room, &[], &bookings);

        let covered = bookings.iter().any(|b| {
            b.room_type() == room.room_type() && b.occupies(date)
        });
        let expected = if covered { RoomStatus::Occupied } else { RoomStatus::Available };
        prop_assert_eq!(resolver.effective_status(date), expected);
        prop_assert_eq!(resolver.matching_booking(date).is_some(), covered);
    }

    // Cancelling every booking leaves only overrides in effect.
    #[test]
    fn cancelling_releases_every_date(
        bookings in bookings_strategy(),
        overrides in overrides_strategy(),
    ) {
        let room = room();
        let cancelled: Vec<Booking> = bookings
            .into_iter()
            .map(|b| {
                let at = b.updated_at();
                b.with_status(BookingStatus::Cancelled, at)
            })
            .collect();
        let resolver = AvailabilityResolver::new(&room, &overrides, &cancelled);

        let range = DateRange::new(base_date(), base_date() + Duration::days(49)).unwrap();
        for (date, status) in resolver.effective_status_range(&range) {
            let expected = overrides
                .iter()
                .find(|o| o.date() == date)
                .map_or(RoomStatus::Available, AvailabilityOverride::status);
            prop_assert_eq!(status, expected);
        }
    }

    // The surfaced booking does not depend on input order.
    #[test]
    fn matching_booking_is_order_independent(
        bookings in bookings_strategy(),
        date in day_strategy(),
    ) {
        let room = room();
        let mut reversed = bookings.clone();
        reversed.reverse();

        let forward = AvailabilityResolver::new(&room, &[], &bookings);
        let backward = AvailabilityResolver::new(&room, &[], &reversed);

        prop_assert_eq!(
            forward.matching_booking(date).map(Booking::id),
            backward.matching_booking(date).map(Booking::id)
        );
    }

    // Range resolution yields one entry per date, each agreeing with the
    // single-date query.
    #[test]
    fn range_agrees_with_single_dates(
        bookings in bookings_strategy(),
        overrides in overrides_strategy(),
        start in 0i64..40,
        len in 0i64..15,
    ) {
        let room = room();
        let resolver = AvailabilityResolver::new(&room, &overrides, &bookings);
        let first = base_date() + Duration::days(start);
        let range = DateRange::new(first, first + Duration::days(len)).unwrap();

        let statuses = resolver.effective_status_range(&range);
        prop_assert_eq!(i64::try_from(statuses.len()).unwrap(), range.len_days());
        for (date, status) in statuses {
            prop_assert_eq!(status, resolver.effective_status(date));
            prop_assert_eq!(status, resolver.resolve(date).status);
        }
    }
}
