//! Property-based tests for operations module.
//!
//! These tests focus on the plan-execute pattern and transition invariants.

use super::plan::PlanAction;
use super::set_override::{OverrideOptions, OverridePlan};
use super::transition::{TransitionOptions, TransitionPlan};
use crate::availability::{DateRange, RoomStatus};
use crate::booking::{Booking, BookingId, BookingStatus};
use crate::customer::CustomerId;
use crate::error::Error;
use crate::room::{Room, RoomId, RoomType};
use crate::store::MockAvailabilityStore;
use chrono::NaiveDate;
use proptest::prelude::*;

fn status_strategy() -> impl Strategy<Value = BookingStatus> {
    prop::sample::select(BookingStatus::ALL.to_vec())
}

fn room_status_strategy() -> impl Strategy<Value = RoomStatus> {
    prop::sample::select(RoomStatus::ALL.to_vec())
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn standard() -> RoomType {
    RoomType::new("Standard Room").unwrap()
}

fn store_with_booking(status: BookingStatus, nights: u64) -> MockAvailabilityStore {
    let booking = Booking::builder(
        CustomerId::from(1),
        standard(),
        base_date(),
        base_date() + chrono::Days::new(nights),
    )
    .id(BookingId::from(1))
    .status(status)
    .build()
    .unwrap();

    let mut store = MockAvailabilityStore::new();
    let for_lookup = booking.clone();
    store
        .expect_get_booking()
        .returning(move |_| Ok(Some(for_lookup.clone())));
    store.expect_get_room().returning(|id| {
        Ok(Some(Room::builder("R101", standard()).id(id).build().unwrap()))
    });
    store.expect_list_overrides().returning(|_, _| Ok(Vec::new()));
    store.expect_list_active_bookings().returning(move |_, _| {
        Ok(if booking.status().occupies() {
            vec![booking.clone()]
        } else {
            Vec::new()
        })
    });
    store
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A transition plan exists exactly when the table allows the move, and
    // its single action records the status it was planned against.
    #[test]
    fn transition_plans_follow_table(
        from in status_strategy(),
        to in status_strategy(),
        offset in 0u64..10,
    ) {
        let store = store_with_booking(from, 3);
        let today = base_date() + chrono::Days::new(offset);
        let result = TransitionPlan::new(TransitionOptions::new(BookingId::from(1), to, today))
            .build_plan(&store);

        if from.can_transition_to(to) {
            let plan = result.unwrap();
            prop_assert_eq!(
                plan.actions,
                vec![PlanAction::UpdateBookingStatus { booking_id: BookingId::from(1), from, to }]
            );
        } else {
            let is_invalid = matches!(result, Err(Error::InvalidTransition { .. }));
            prop_assert!(is_invalid);
        }
    }

    // Terminal states never move.
    #[test]
    fn terminal_states_reject_everything(to in status_strategy()) {
        for from in [BookingStatus::CheckedOut, BookingStatus::Cancelled] {
            let store = store_with_booking(from, 2);
            let result = TransitionPlan::new(TransitionOptions::new(BookingId::from(1), to, base_date()))
                .build_plan(&store);
            prop_assert!(result.is_err());
        }
    }

    // Enforcing the window only ever turns a warning into an error.
    #[test]
    fn enforcing_window_is_stricter(offset in 0u64..10, nights in 1u64..5) {
        let today = base_date() + chrono::Days::new(offset);
        let options = TransitionOptions::new(BookingId::from(1), BookingStatus::CheckedIn, today);

        let relaxed = TransitionPlan::new(options.clone())
            .build_plan(&store_with_booking(BookingStatus::Confirmed, nights))
            .unwrap();
        let strict = TransitionPlan::new(options.with_enforce_check_in_window(true))
            .build_plan(&store_with_booking(BookingStatus::Confirmed, nights));

        if offset < nights {
            prop_assert!(relaxed.warnings.is_empty());
            prop_assert!(strict.is_ok());
        } else {
            prop_assert_eq!(relaxed.warnings.len(), 1);
            let outside = matches!(strict, Err(Error::CheckInOutsideStay { .. }));
            prop_assert!(outside);
        }
    }

    // An override range yields one upsert per date, in date order, and a
    // warning only on dates where it disagrees with the booking.
    #[test]
    fn override_range_covers_each_date(
        status in room_status_strategy(),
        len in 1u64..20,
        nights in 1u64..10,
    ) {
        let store = store_with_booking(BookingStatus::Confirmed, nights);
        let dates = DateRange::new(base_date(), base_date() + chrono::Days::new(len - 1)).unwrap();
        let plan = OverridePlan::new(
            OverrideOptions::new(RoomId::from(1), base_date(), status).with_dates(dates),
        )
        .build_plan(&store)
        .unwrap();

        let written: Vec<NaiveDate> = plan
            .actions
            .iter()
            .filter_map(|a| match a {
                PlanAction::UpsertOverride(entry) => Some(entry.date()),
                _ => None,
            })
            .collect();
        prop_assert_eq!(written, dates.days().collect::<Vec<_>>());

        let covered = len.min(nights);
        let expected_warnings = if status == RoomStatus::Occupied { len - covered } else { covered };
        prop_assert_eq!(plan.warnings.len() as u64, expected_warnings);
    }
}
