//! Terminal rendering for planner types.
//!
//! Extension traits and helpers that add colored output on top of the
//! planner-core types using owo_colors.

use chrono::Datelike;
use owo_colors::OwoColorize;

use planner_core::calendar::DatesSelected;
use planner_core::i18n::{LocaleLookup, TextKey, Translations};
use planner_core::trip::{Participant, Trip, TripLink};

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Participant {
    fn render(&self) -> String {
        let name = self.name.as_deref().unwrap_or("—");

        if self.is_confirmed {
            format!("{} {} {}", "✓".green(), name, self.email.dimmed())
        } else {
            format!("{} {} {}", "·".yellow(), name, self.email.dimmed())
        }
    }
}

impl Render for TripLink {
    fn render(&self) -> String {
        format!("{} {}", self.title, self.url.dimmed())
    }
}

/// Destination is cut off past this many characters in the header line.
const MAX_DESTINATION_LEN: usize = 14;

/// One-line trip summary, e.g. `Florianópolis, 12 until 18 of Mar.`
pub fn trip_header(trip: &Trip, i18n: &Translations) -> String {
    let destination = if trip.destination.chars().count() > MAX_DESTINATION_LEN {
        let head: String = trip.destination.chars().take(MAX_DESTINATION_LEN).collect();
        format!("{head}...")
    } else {
        trip.destination.clone()
    };

    format!(
        "{}, {} {} {} {} {}.",
        destination,
        trip.starts_at.day(),
        i18n.lookup(TextKey::Until),
        trip.ends_at.day(),
        i18n.lookup(TextKey::Of),
        i18n.month_abbrev(trip.starts_at.month()),
    )
}

/// One-line view of the current date selection: the covered span, the day
/// count and (once complete) the localized label.
pub fn marked_range(selection: &DatesSelected) -> String {
    let count = selection.dates.len();
    let mut parts: Vec<String> = Vec::new();

    match (selection.dates.keys().next(), selection.dates.keys().last()) {
        (Some(first), Some(last)) if count > 1 => parts.push(format!("{first} .. {last}")),
        (Some(first), _) => parts.push(first.clone()),
        _ => {}
    }

    let unit = if count == 1 { "day" } else { "days" };
    parts.push(format!("({count} {unit})").dimmed().to_string());

    if !selection.label.is_empty() {
        parts.push(selection.label.bold().to_string());
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use planner_core::calendar::{CalendarDay, DateRangeSelector};
    use planner_core::i18n::Locale;

    fn trip(destination: &str) -> Trip {
        Trip {
            id: "t1".into(),
            destination: destination.into(),
            starts_at: Utc.with_ymd_and_hms(2024, 3, 12, 0, 0, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2024, 3, 18, 0, 0, 0).unwrap(),
            is_confirmed: true,
        }
    }

    #[test]
    fn header_keeps_short_destinations() {
        let i18n = Translations::new(Locale::En);
        assert_eq!(trip_header(&trip("Lisboa"), &i18n), "Lisboa, 12 until 18 of Mar.");
    }

    #[test]
    fn header_truncates_long_destinations() {
        let i18n = Translations::new(Locale::Pt);
        let header = trip_header(&trip("São Miguel das Missões"), &i18n);
        assert_eq!(header, "São Miguel das..., 12 até 18 de mar.");
    }

    #[test]
    fn marked_range_shows_span_and_count() {
        let i18n = Translations::new(Locale::En);
        let selector = DateRangeSelector::new(&i18n);

        let start = CalendarDay::from(chrono::NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
        let end = CalendarDay::from(chrono::NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());

        let selection = selector.select_day(&DatesSelected::default(), start);
        let line = marked_range(&selection);
        assert!(line.contains("2024-03-12"));
        assert!(line.contains("(1 day)"));

        let selection = selector.select_day(&selection, end);
        let line = marked_range(&selection);
        assert!(line.contains("2024-03-12 .. 2024-03-18"));
        assert!(line.contains("(7 days)"));
        assert!(line.contains("12 until 18 of March"));
    }
}
