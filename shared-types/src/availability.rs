//! Bookable half-hour slots for a reservation date.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of half-hour ticks offered per day (08:00 through 18:00).
pub const SLOTS_PER_DAY: usize = 21;
/// Half-hour tick index of 08:00 counted from midnight.
const FIRST_TICK: u32 = 16;

pub const OPENING_HOUR: u32 = 8;
pub const CLOSING_HOUR: u32 = 18;
/// From this hour on, half-past slots are no longer bookable.
pub const LAST_BOOKING_HOUR: u32 = 16;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime {
    pub hour: u32,
    pub minute: u32,
}

impl SlotTime {
    /// Parses the `HH:MM` form produced by `Display`.
    pub fn parse(value: &str) -> Option<Self> {
        let (hour, minute) = value.trim().split_once(':')?;
        let hour = hour.parse::<u32>().ok()?;
        let minute = minute.parse::<u32>().ok()?;
        if hour < 24 && (minute == 0 || minute == 30) {
            Some(SlotTime { hour, minute })
        } else {
            None
        }
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSlot {
    pub time: SlotTime,
    pub disabled: bool,
}

/// Produces the full daily schedule for `date`, flagging slots that cannot be
/// booked at `now`. Slots are never dropped, only disabled.
///
/// The same-day cutoff compares hours only: at 14:45 the 14:00 and 14:30
/// slots are still enabled.
///
/// 17:00 stays enabled: only half-past slots from 16:30 are cut, and the
/// closing hour removes 18:00 onwards.
pub fn compute_time_slots(date: NaiveDate, now: NaiveDateTime) -> Vec<TimeSlot> {
    let is_today = date == now.date();
    let current_hour = now.hour();

    (0..SLOTS_PER_DAY as u32)
        .map(|i| {
            let tick = i + FIRST_TICK;
            let time = SlotTime {
                hour: tick / 2,
                minute: if tick % 2 == 0 { 0 } else { 30 },
            };

            let disabled = (is_today && time.hour < current_hour)
                || !(OPENING_HOUR..CLOSING_HOUR).contains(&time.hour)
                || (time.hour >= LAST_BOOKING_HOUR && time.minute == 30);

            TimeSlot { time, disabled }
        })
        .collect()
}

/// True when `time` is one of the enabled slots for `date` at `now`.
pub fn is_bookable(date: NaiveDate, time: SlotTime, now: NaiveDateTime) -> bool {
    compute_time_slots(date, now)
        .iter()
        .any(|slot| slot.time == time && !slot.disabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
        date.and_hms_opt(hour, minute, 0).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
    }

    fn labels(slots: &[TimeSlot], disabled: bool) -> Vec<String> {
        slots
            .iter()
            .filter(|s| s.disabled == disabled)
            .map(|s| s.time.to_string())
            .collect()
    }

    #[test]
    fn schedule_runs_from_eight_to_six_in_half_hours() {
        let slots = compute_time_slots(today(), at(today(), 9, 0));
        let times: Vec<String> = slots.iter().map(|s| s.time.to_string()).collect();

        assert_eq!(slots.len(), SLOTS_PER_DAY);
        assert_eq!(times.first().map(String::as_str), Some("08:00"));
        assert_eq!(times[1], "08:30");
        assert_eq!(times.last().map(String::as_str), Some("18:00"));
        assert!(slots.windows(2).all(|w| w[0].time < w[1].time));
    }

    #[test]
    fn future_date_only_closes_the_late_slots() {
        let tomorrow = today().succ_opt().unwrap();
        let slots = compute_time_slots(tomorrow, at(today(), 23, 59));

        assert_eq!(labels(&slots, true), vec!["16:30", "17:30", "18:00"]);
        assert_eq!(labels(&slots, false).len(), SLOTS_PER_DAY - 3);
    }

    #[test]
    fn same_day_cutoff_uses_the_current_hour() {
        let slots = compute_time_slots(today(), at(today(), 14, 10));

        let disabled = labels(&slots, true);
        let enabled = labels(&slots, false);

        assert_eq!(
            enabled,
            vec!["14:00", "14:30", "15:00", "15:30", "16:00", "17:00"]
        );
        assert_eq!(disabled.first().map(String::as_str), Some("08:00"));
        assert!(disabled.contains(&"13:30".to_string()));
        assert!(disabled.contains(&"16:30".to_string()));
        assert_eq!(disabled.len(), SLOTS_PER_DAY - enabled.len());
    }

    #[test]
    fn minutes_inside_the_current_hour_are_ignored() {
        let slots = compute_time_slots(today(), at(today(), 14, 45));
        let fourteen = slots
            .iter()
            .find(|s| s.time == SlotTime { hour: 14, minute: 0 })
            .unwrap();

        assert!(!fourteen.disabled);
    }

    #[test]
    fn past_date_is_treated_like_any_other_day() {
        let yesterday = today().pred_opt().unwrap();
        let slots = compute_time_slots(yesterday, at(today(), 12, 0));

        assert_eq!(labels(&slots, false).len(), 18);
    }

    #[test]
    fn evening_visit_disables_everything_today() {
        let slots = compute_time_slots(today(), at(today(), 19, 0));
        assert!(slots.iter().all(|s| s.disabled));
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let now = at(today(), 10, 30);
        assert_eq!(compute_time_slots(today(), now), compute_time_slots(today(), now));
    }

    #[rstest]
    #[case("08:00", Some(SlotTime { hour: 8, minute: 0 }))]
    #[case("16:30", Some(SlotTime { hour: 16, minute: 30 }))]
    #[case("9:30", Some(SlotTime { hour: 9, minute: 30 }))]
    #[case("10:15", None)]
    #[case("25:00", None)]
    #[case("", None)]
    fn parses_slot_labels(#[case] input: &str, #[case] expected: Option<SlotTime>) {
        assert_eq!(SlotTime::parse(input), expected);
    }

    #[rstest]
    #[case(SlotTime { hour: 16, minute: 0 }, true)]
    #[case(SlotTime { hour: 16, minute: 30 }, false)]
    #[case(SlotTime { hour: 17, minute: 0 }, true)]
    #[case(SlotTime { hour: 17, minute: 30 }, false)]
    #[case(SlotTime { hour: 10, minute: 15 }, false)]
    fn bookable_matches_enabled_slots(#[case] time: SlotTime, #[case] expected: bool) {
        let tomorrow = today().succ_opt().unwrap();
        assert_eq!(is_bookable(tomorrow, time, at(today(), 9, 0)), expected);
    }
}
