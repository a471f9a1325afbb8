//! Interactive date prompts.
//!
//! This is the calendar of the terminal front-end: it owns which days can
//! be tapped (minimum/maximum bounds) and feeds each entered day to the
//! selection logic one tap at a time, echoing the highlighted range back
//! after every tap.

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Confirm, Input};
use owo_colors::OwoColorize;

use planner_core::calendar::{CalendarDay, DateRangeSelector, DatesSelected};
use planner_core::i18n::{LocaleLookup, TextKey, Translations};

use crate::render;

/// Parse a day typed by the user.
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", input.trim()))
}

/// Parse a day argument and enforce the selectable bounds.
pub fn parse_day_within(input: &str, min: NaiveDate, max: NaiveDate) -> Result<NaiveDate> {
    parse_day(input).and_then(|day| check_bounds(day, min, max))
}

fn check_bounds(day: NaiveDate, min: NaiveDate, max: NaiveDate) -> Result<NaiveDate> {
    if day < min || day > max {
        anyhow::bail!("'{}' is outside the selectable days {} .. {}", day, min, max);
    }
    Ok(day)
}

/// Build a complete range from two argument dates, still one tap at a time
/// so out-of-order arguments behave exactly like out-of-order taps.
pub fn range_from_args(
    selector: &DateRangeSelector<'_, Translations>,
    start: &str,
    end: &str,
    min: NaiveDate,
) -> Result<DatesSelected> {
    let start = parse_day(start)?;
    let end = parse_day(end)?;

    for day in [start, end] {
        if day < min {
            anyhow::bail!("'{}' is before the first selectable day {}", day, min);
        }
    }

    let selection = selector.select_day(&DatesSelected::default(), CalendarDay::from(start));
    Ok(selector.select_day(&selection, CalendarDay::from(end)))
}

/// Prompt for trip days until the range is complete and confirmed.
///
/// Days before `min` are rejected here, not by the selector.
pub fn pick_date_range(
    selector: &DateRangeSelector<'_, Translations>,
    i18n: &Translations,
    min: NaiveDate,
) -> Result<DatesSelected> {
    println!("  {}", i18n.lookup(TextKey::SelectDatesInfo).dimmed());

    let mut selection = DatesSelected::default();

    loop {
        let input: String = Input::new()
            .with_prompt(format!("  {}", i18n.lookup(TextKey::WhenQuestion)))
            .interact_text()?;

        let day = match parse_day(&input) {
            Ok(day) => day,
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
                continue;
            }
        };

        if day < min {
            let message = format!("'{}' is before the first selectable day {}", day, min);
            eprintln!("  {}", message.red());
            continue;
        }

        selection = selector.select_day(&selection, CalendarDay::from(day));
        println!("  {}", render::marked_range(&selection));

        if selection.is_complete() {
            let keep = Confirm::new()
                .with_prompt(format!("  {}?", i18n.lookup(TextKey::Confirm)))
                .default(true)
                .interact()?;

            if keep {
                return Ok(selection);
            }
            // The next tap starts a fresh range.
        }
    }
}

/// Prompt for a single day between `min` and `max` inclusive.
pub fn pick_single_day(i18n: &Translations, min: NaiveDate, max: NaiveDate) -> Result<NaiveDate> {
    loop {
        let input: String = Input::new()
            .with_prompt(format!("  {}", i18n.lookup(TextKey::SelectDate)))
            .interact_text()?;

        match parse_day(&input).and_then(|day| check_bounds(day, min, max)) {
            Ok(day) => return Ok(day),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}
