#[cfg(test)]
mod tests {
    use crate::logic::{calculate_calendar_slots, CalendarSettings};
    use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};
    use chrono_tz::Tz;
    use proptest::prelude::*;

    // Helper function to create a list of busy periods
    fn create_busy_periods(
        base_time: DateTime<Utc>,
        offsets_minutes: &[(i64, i64)],
    ) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
        let mut busy_periods: Vec<_> = offsets_minutes
            .iter()
            .map(|(offset, length)| {
                let start = base_time + Duration::minutes(*offset);
                (start, start + Duration::minutes((*length).max(1)))
            })
            .collect();
        busy_periods.sort_by_key(|k| k.0);
        busy_periods
    }

    fn zone(index: usize) -> Tz {
        [Tz::UTC, Tz::Europe__Istanbul, Tz::Europe__Zurich, Tz::America__New_York][index % 4]
    }

    proptest! {
        #[test]
        fn test_slots_within_working_hours_and_window(
            now_offset_minutes in 0..(365 * 24 * 60i64),
            lookahead_days in 1..15i64,
            work_start_hour in 0..12u32,
            work_end_hour in 13..24u32,
            zone_index in 0..4usize,
        ) {
            let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
                + Duration::minutes(now_offset_minutes);
            let settings = CalendarSettings {
                time_zone: zone(zone_index),
                lookahead_days,
                work_start_hour,
                work_end_hour,
                ..CalendarSettings::default()
            };

            let slots = calculate_calendar_slots(now, &[], &settings);
            let window_end = now + Duration::days(lookahead_days);

            let mut previous: Option<DateTime<Utc>> = None;
            for slot in &slots {
                let start = DateTime::parse_from_rfc3339(&slot.start).unwrap().with_timezone(&Utc);
                prop_assert!(start >= now);
                prop_assert!(start < window_end);
                prop_assert_eq!(start.minute(), 0);

                let local_hour = start.with_timezone(&settings.time_zone).hour();
                prop_assert!(local_hour >= work_start_hour && local_hour < work_end_hour);

                if let Some(prev) = previous {
                    prop_assert!(start > prev);
                }
                previous = Some(start);
                prop_assert!(slot.available);
            }
        }

        #[test]
        fn test_unavailable_iff_overlapping(
            busy in prop::collection::vec((0..(3 * 24 * 60i64), 1..240i64), 0..10),
        ) {
            let now = Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap();
            let busy_periods = create_busy_periods(now, &busy);
            let settings = CalendarSettings {
                lookahead_days: 3,
                ..CalendarSettings::default()
            };

            for slot in calculate_calendar_slots(now, &busy_periods, &settings) {
                let start = DateTime::parse_from_rfc3339(&slot.start).unwrap().with_timezone(&Utc);
                let end = start + Duration::hours(1);
                let overlaps = busy_periods.iter().any(|(bs, be)| start < *be && end > *bs);
                prop_assert_eq!(slot.available, !overlaps);
            }
        }
    }
}
