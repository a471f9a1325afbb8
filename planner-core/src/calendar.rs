//! Date-range selection for trip dates.
//!
//! The calendar prompt reports one tapped day at a time; [`DateRangeSelector`]
//! folds each tap into the previous selection and derives the set of days to
//! highlight plus a localized summary label. The selector holds no state of
//! its own: the selection value lives in whichever flow is collecting dates.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::{LocaleLookup, TextKey};

/// One tappable calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// ISO date, `YYYY-MM-DD`.
    pub date_string: String,
    pub year: i32,
    /// Month, `1..=12`.
    pub month: u32,
    /// Day of month, `1..=31`.
    pub day: u32,
    /// Seconds since epoch at midnight UTC (day granularity).
    pub timestamp: i64,
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        CalendarDay {
            date_string: date.format("%Y-%m-%d").to_string(),
            year: date.year(),
            month: date.month(),
            day: date.day(),
            timestamp: date.and_time(NaiveTime::MIN).and_utc().timestamp(),
        }
    }
}

impl CalendarDay {
    /// The day as a chrono date.
    pub fn date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .expect("calendar day always holds a valid date")
    }

    /// Midnight UTC of this day, the instant sent to the trip server.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.date().and_time(NaiveTime::MIN).and_utc()
    }
}

/// Marker attached to each highlighted day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMarking {
    pub selected: bool,
}

/// Days to highlight, keyed by ISO date.
pub type MarkedDates = BTreeMap<String, DayMarking>;

/// The selection owned by the calling flow.
///
/// Invariant: `ends_at` is only ever set together with `starts_at`, and the
/// start never sorts after the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatesSelected {
    pub starts_at: Option<CalendarDay>,
    pub ends_at: Option<CalendarDay>,
    pub dates: MarkedDates,
    pub label: String,
}

impl DatesSelected {
    /// Both endpoints picked.
    pub fn is_complete(&self) -> bool {
        self.starts_at.is_some() && self.ends_at.is_some()
    }
}

/// Stateless date-range selection service.
///
/// Each call is a pure function of the previous selection and the tapped
/// day; only the connector words and month names come from the injected
/// locale lookup.
pub struct DateRangeSelector<'a, L: LocaleLookup> {
    i18n: &'a L,
}

impl<'a, L: LocaleLookup> DateRangeSelector<'a, L> {
    pub fn new(i18n: &'a L) -> Self {
        DateRangeSelector { i18n }
    }

    /// Fold one tapped day into the previous selection.
    ///
    /// A tap on an empty or already-complete selection starts a new range.
    /// A tap on or before a lone start swaps the endpoints, so the range
    /// always runs from the earlier day to the later one.
    pub fn select_day(&self, current: &DatesSelected, selected_day: CalendarDay) -> DatesSelected {
        let starts_at = match current.starts_at.as_ref() {
            None => return self.single_day(selected_day),
            Some(day) => day,
        };

        // A tap after a completed range starts over, it never extends.
        if current.ends_at.is_some() {
            return self.single_day(selected_day);
        }

        if selected_day.timestamp <= starts_at.timestamp {
            self.complete_range(selected_day, starts_at.clone())
        } else {
            self.complete_range(starts_at.clone(), selected_day)
        }
    }

    fn single_day(&self, day: CalendarDay) -> DatesSelected {
        DatesSelected {
            dates: self.interval_dates(&day, &day),
            label: String::new(),
            starts_at: Some(day),
            ends_at: None,
        }
    }

    fn complete_range(&self, starts_at: CalendarDay, ends_at: CalendarDay) -> DatesSelected {
        DatesSelected {
            dates: self.interval_dates(&starts_at, &ends_at),
            label: self.range_label(&starts_at, &ends_at),
            starts_at: Some(starts_at),
            ends_at: Some(ends_at),
        }
    }

    /// Every day from `starts_at` to `ends_at` inclusive, marked selected.
    pub fn interval_dates(&self, starts_at: &CalendarDay, ends_at: &CalendarDay) -> MarkedDates {
        let end = ends_at.date();

        starts_at
            .date()
            .iter_days()
            .take_while(|day| *day <= end)
            .map(|day| {
                let key = day.format("%Y-%m-%d").to_string();
                (key, DayMarking { selected: true })
            })
            .collect()
    }

    /// Localized summary, e.g. `12 until 18 of March`.
    ///
    /// The month name is always the start date's, even when the range ends
    /// in a different month.
    pub fn range_label(&self, starts_at: &CalendarDay, ends_at: &CalendarDay) -> String {
        format!(
            "{} {} {} {} {}",
            starts_at.day,
            self.i18n.lookup(TextKey::Until),
            ends_at.day,
            self.i18n.lookup(TextKey::Of),
            self.i18n.month_name(starts_at.month),
        )
    }
}
