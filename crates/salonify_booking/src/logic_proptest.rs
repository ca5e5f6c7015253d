#[cfg(test)]
mod tests {
    use crate::logic::{calculate_time_slots, slot_label, FIRST_SLOT_HOUR, LAST_SLOT_HOUR};
    use crate::models::{Appointment, AppointmentStatus};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use chrono_tz::Tz;
    use proptest::prelude::*;

    // Appointments spread over three days around the target day
    fn create_appointments(offsets_minutes: &[i64], staff_picks: &[u8]) -> Vec<Appointment> {
        let base = Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap();
        offsets_minutes
            .iter()
            .zip(staff_picks.iter().cycle())
            .enumerate()
            .map(|(i, (offset, pick))| Appointment {
                id: i as u64 + 1,
                user_id: 1,
                service_type: "masaj".to_string(),
                appointment_date: base + Duration::minutes(*offset),
                staff_id: match pick % 3 {
                    0 => None,
                    n => Some(format!("staff-{}", n)),
                },
                notes: None,
                status: AppointmentStatus::Pending,
                created_at: base,
            })
            .collect()
    }

    proptest! {
        #[test]
        fn test_always_eleven_ordered_slots(
            offsets in prop::collection::vec(0..(3 * 24 * 60i64), 0..40),
            picks in prop::collection::vec(any::<u8>(), 1..5),
        ) {
            let appts = create_appointments(&offsets, &picks);
            let target = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
            let slots = calculate_time_slots(&appts, target, None, Tz::UTC);

            prop_assert_eq!(slots.len(), (LAST_SLOT_HOUR - FIRST_SLOT_HOUR + 1) as usize);
            for (slot, hour) in slots.iter().zip(FIRST_SLOT_HOUR..=LAST_SLOT_HOUR) {
                prop_assert_eq!(&slot.time, &slot_label(hour));
            }
        }

        #[test]
        fn test_unavailable_iff_booked_in_that_hour(
            offsets in prop::collection::vec(0..(3 * 24 * 60i64), 0..40),
            picks in prop::collection::vec(any::<u8>(), 1..5),
            staff in prop::option::of(1..3u8),
        ) {
            let appts = create_appointments(&offsets, &picks);
            let target = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
            let staff_id = staff.map(|n| format!("staff-{}", n));
            let slots = calculate_time_slots(&appts, target, staff_id.as_deref(), Tz::UTC);

            for (slot, hour) in slots.iter().zip(FIRST_SLOT_HOUR..=LAST_SLOT_HOUR) {
                let booked = appts.iter().any(|a| {
                    a.appointment_date.date_naive() == target
                        && chrono::Timelike::hour(&a.appointment_date) == hour
                        && (staff_id.is_none() || a.staff_id == staff_id)
                });
                prop_assert_eq!(slot.available, !booked);
            }
        }

        #[test]
        fn test_staff_filter_never_removes_availability(
            offsets in prop::collection::vec(0..(3 * 24 * 60i64), 0..40),
            picks in prop::collection::vec(any::<u8>(), 1..5),
            staff in 1..3u8,
        ) {
            let appts = create_appointments(&offsets, &picks);
            let target = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
            let staff_id = format!("staff-{}", staff);

            let all = calculate_time_slots(&appts, target, None, Tz::UTC);
            let filtered = calculate_time_slots(&appts, target, Some(&staff_id), Tz::UTC);

            for (a, f) in all.iter().zip(filtered.iter()) {
                // free for everyone implies free for one person
                prop_assert!(!a.available || f.available);
            }
        }
    }
}
