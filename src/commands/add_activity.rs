//! Register one activity on a trip day.

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Input;
use owo_colors::OwoColorize;

use planner_core::i18n::Translations;
use planner_core::planner::Planner;

use crate::client::{Client, CreateActivityRequest};
use crate::picker;
use crate::utils::tui;

pub async fn run(
    trip_id: &str,
    title: Option<String>,
    date: Option<String>,
    hour: Option<u32>,
) -> Result<()> {
    let planner = Planner::load()?;
    let i18n = Translations::new(planner.locale());
    let client = Client::new(planner.server_url());

    // Activity days are restricted to the trip's own range.
    let spinner = tui::create_spinner("Loading trip");
    let trip = client.get_trip(trip_id).await;
    spinner.finish_and_clear();
    let trip = trip?;

    let min = trip.starts_at.date_naive();
    let max = trip.ends_at.date_naive();

    // --- Title ---
    let title = match title {
        Some(input) => {
            let trimmed = input.trim().to_string();
            if trimmed.is_empty() {
                anyhow::bail!("Fill in all the activity fields");
            }
            trimmed
        }
        None => prompt_title()?,
    };

    // --- Date ---
    let date = match date {
        Some(input) => picker::parse_day_within(&input, min, max)?,
        None => picker::pick_single_day(&i18n, min, max)?,
    };

    // --- Hour ---
    let hour = match hour {
        Some(hour) if hour <= 23 => hour,
        Some(hour) => anyhow::bail!("Invalid hour '{}'. Expected 0-23", hour),
        None => prompt_hour()?,
    };

    let occurs_at = occurs_at(date, hour);

    // --- Create ---
    let spinner = tui::create_spinner("Saving activity");
    let created = client
        .create_activity(trip_id, CreateActivityRequest {
            title: title.clone(),
            occurs_at,
        })
        .await;
    spinner.finish_and_clear();
    created?;

    println!(
        "{}",
        format!("  Created: {} ({} {:02}:00)", title, date, hour).green()
    );

    Ok(())
}

fn prompt_title() -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("  What activity?")
            .interact_text()?;

        let trimmed = input.trim().to_string();
        if !trimmed.is_empty() {
            return Ok(trimmed);
        }
        eprintln!("  {}", "Fill in all the activity fields".red());
    }
}

fn prompt_hour() -> Result<u32> {
    loop {
        let input: String = Input::new()
            .with_prompt("  What time? (0-23)")
            .interact_text()?;

        match input.trim().parse::<u32>() {
            Ok(hour) if hour <= 23 => return Ok(hour),
            _ => eprintln!("  {}", format!("Invalid hour '{}'. Expected 0-23", input.trim()).red()),
        }
    }
}

/// The scheduled instant: `hour` o'clock UTC on the chosen day.
fn occurs_at(date: NaiveDate, hour: u32) -> chrono::DateTime<chrono::Utc> {
    date.and_hms_opt(hour, 0, 0)
        .expect("hour is validated to 0-23")
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn occurs_at_lands_on_the_chosen_hour() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();

        let instant = occurs_at(date, 9);
        assert_eq!(instant.date_naive(), date);
        assert_eq!(instant.hour(), 9);

        assert_eq!(occurs_at(date, 0).hour(), 0);
        assert_eq!(occurs_at(date, 23).hour(), 23);
    }
}
