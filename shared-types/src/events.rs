//! Café events and the month grid used by the events calendar.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Number of events shown in the featured list under the calendar.
pub const FEATURED_EVENT_LIMIT: usize = 3;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDateTime,
    /// Display-only time range, e.g. "18:30 - 20:00".
    pub time: String,
    pub image: Option<String>,
    pub ticket_link: Option<String>,
}

/// Events falling on `day`, ignoring time of day. Input order is preserved.
pub fn events_on_day(events: &[Event], day: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|event| event.date.date() == day).collect()
}

/// Events dated at or after `now`, soonest first, truncated to `limit`.
pub fn upcoming_events(events: &[Event], now: NaiveDateTime, limit: usize) -> Vec<&Event> {
    let mut upcoming: Vec<&Event> = events.iter().filter(|event| event.date >= now).collect();
    upcoming.sort_by_key(|event| event.date);
    upcoming.truncate(limit);
    upcoming
}

#[derive(Clone, Debug, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub event_count: usize,
}

/// Sunday-first calendar layout for one month.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Blank cells before the 1st (0 = month starts on Sunday).
    pub leading_blanks: usize,
    pub days: Vec<DayCell>,
    /// Blank cells after the last day to complete the final week.
    pub trailing_blanks: usize,
}

impl MonthGrid {
    /// Builds the grid for the month containing `anchor`.
    pub fn build(anchor: NaiveDate, today: NaiveDate, events: &[Event]) -> Self {
        let first = first_of_month(anchor);
        let last = last_of_month(anchor);

        let days = first
            .iter_days()
            .take_while(|date| *date <= last)
            .map(|date| DayCell {
                date,
                is_today: date == today,
                event_count: events_on_day(events, date).len(),
            })
            .collect();

        MonthGrid {
            year: first.year(),
            month: first.month(),
            leading_blanks: first.weekday().num_days_from_sunday() as usize,
            days,
            trailing_blanks: 6 - last.weekday().num_days_from_sunday() as usize,
        }
    }

    /// "October 2026".
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Moves `date` to the first day of the month `delta` months away.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(date);
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    };
    shifted.unwrap_or(first)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: &str, when: NaiveDateTime) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            description: String::new(),
            date: when,
            time: "18:30 - 20:00".to_string(),
            image: None,
            ticket_link: None,
        }
    }

    fn sample() -> Vec<Event> {
        vec![
            event("a", date(2026, 10, 25).and_hms_opt(18, 30, 0).unwrap()),
            event("b", date(2026, 10, 2).and_hms_opt(10, 0, 0).unwrap()),
            event("c", date(2026, 10, 25).and_hms_opt(9, 0, 0).unwrap()),
            event("d", date(2026, 11, 8).and_hms_opt(19, 0, 0).unwrap()),
            event("e", date(2026, 10, 21).and_hms_opt(12, 0, 0).unwrap()),
        ]
    }

    fn ids(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn events_on_day_ignores_time_of_day() {
        let events = sample();
        assert_eq!(ids(&events_on_day(&events, date(2026, 10, 25))), vec!["a", "c"]);
    }

    #[test]
    fn events_on_day_is_empty_for_a_quiet_day() {
        let events = sample();
        assert!(events_on_day(&events, date(2026, 10, 26)).is_empty());
    }

    #[test]
    fn upcoming_events_are_sorted_and_capped() {
        let events = sample();
        let now = date(2026, 10, 18).and_hms_opt(9, 0, 0).unwrap();

        let upcoming = upcoming_events(&events, now, FEATURED_EVENT_LIMIT);
        assert_eq!(ids(&upcoming), vec!["e", "c", "a"]);
    }

    #[test]
    fn upcoming_events_skip_the_past() {
        let events = sample();
        let now = date(2026, 10, 25).and_hms_opt(12, 0, 0).unwrap();

        let upcoming = upcoming_events(&events, now, 10);
        assert_eq!(ids(&upcoming), vec!["a", "d"]);
        assert!(upcoming.iter().all(|e| e.date >= now));
    }

    #[test]
    fn event_starting_exactly_now_is_upcoming() {
        let events = sample();
        let now = date(2026, 11, 8).and_hms_opt(19, 0, 0).unwrap();
        assert_eq!(ids(&upcoming_events(&events, now, 3)), vec!["d"]);
    }

    #[test]
    fn bucketing_is_idempotent() {
        let events = sample();
        let now = date(2026, 10, 1).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(upcoming_events(&events, now, 3), upcoming_events(&events, now, 3));
        assert_eq!(
            events_on_day(&events, date(2026, 10, 25)),
            events_on_day(&events, date(2026, 10, 25))
        );
    }

    #[test]
    fn month_grid_counts_events_per_day() {
        let events = sample();
        let grid = MonthGrid::build(date(2026, 10, 18), date(2026, 10, 18), &events);

        assert_eq!(grid.title(), "October 2026");
        assert_eq!(grid.days.len(), 31);
        // 1 October 2026 is a Thursday, 31 October a Saturday.
        assert_eq!(grid.leading_blanks, 4);
        assert_eq!(grid.trailing_blanks, 0);
        assert_eq!(grid.days[24].event_count, 2);
        assert_eq!(grid.days[7].event_count, 0);
        assert!(grid.days[17].is_today);
        assert_eq!(grid.days.iter().filter(|d| d.is_today).count(), 1);
        // November's event is not counted in October.
        assert_eq!(grid.days.iter().map(|d| d.event_count).sum::<usize>(), 4);
    }

    #[test]
    fn grid_always_fills_whole_weeks() {
        for month in 1..=12 {
            let grid = MonthGrid::build(date(2027, month, 15), date(2026, 1, 1), &[]);
            let cells = grid.leading_blanks + grid.days.len() + grid.trailing_blanks;
            assert_eq!(cells % 7, 0, "month {}", month);
        }
    }

    #[rstest]
    #[case(date(2026, 10, 18), 1, date(2026, 11, 1))]
    #[case(date(2026, 12, 31), 1, date(2027, 1, 1))]
    #[case(date(2026, 1, 31), -1, date(2025, 12, 1))]
    #[case(date(2026, 3, 31), -1, date(2026, 2, 1))]
    #[case(date(2026, 5, 5), 0, date(2026, 5, 1))]
    fn shifts_whole_months(#[case] from: NaiveDate, #[case] delta: i32, #[case] expected: NaiveDate) {
        assert_eq!(shift_month(from, delta), expected);
    }

    #[rstest]
    #[case(date(2024, 2, 10), date(2024, 2, 29))]
    #[case(date(2026, 2, 10), date(2026, 2, 28))]
    #[case(date(2026, 12, 1), date(2026, 12, 31))]
    fn finds_last_day_of_month(#[case] from: NaiveDate, #[case] expected: NaiveDate) {
        assert_eq!(last_of_month(from), expected);
    }
}
