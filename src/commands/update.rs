//! Change a trip's destination and dates.

use anyhow::Result;
use chrono::Local;
use dialoguer::Input;
use owo_colors::OwoColorize;

use planner_core::calendar::DateRangeSelector;
use planner_core::i18n::{LocaleLookup, TextKey, Translations};
use planner_core::planner::Planner;

use crate::client::{Client, UpdateTripRequest};
use crate::picker;
use crate::utils::tui;

pub async fn run(
    trip_id: &str,
    destination: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    let planner = Planner::load()?;
    let i18n = Translations::new(planner.locale());
    let selector = DateRangeSelector::new(&i18n);
    let client = Client::new(planner.server_url());

    let spinner = tui::create_spinner("Loading trip");
    let trip = client.get_trip(trip_id).await;
    spinner.finish_and_clear();
    let trip = trip?;

    println!("  {}", i18n.lookup(TextKey::UpdateLocalDate).dimmed());

    // --- Destination ---
    let destination = match destination {
        Some(input) if !input.trim().is_empty() => input.trim().to_string(),
        Some(_) | None => Input::new()
            .with_prompt(format!("  {}", i18n.lookup(TextKey::ToWhereQuestion)))
            .default(trip.destination.clone())
            .interact_text()?,
    };

    // --- Dates ---
    let today = Local::now().date_naive();
    let dates = match (start, end) {
        (Some(start), Some(end)) => picker::range_from_args(&selector, &start, &end, today)?,
        _ => picker::pick_date_range(&selector, &i18n, today)?,
    };

    let (Some(starts_at), Some(ends_at)) = (dates.starts_at.clone(), dates.ends_at.clone()) else {
        anyhow::bail!("{}", i18n.lookup(TextKey::InputAllInfoToContinue));
    };

    // --- Update ---
    let spinner = tui::create_spinner("Updating trip");
    let updated = client
        .update_trip(
            trip_id,
            UpdateTripRequest {
                destination: destination.clone(),
                starts_at: starts_at.to_utc(),
                ends_at: ends_at.to_utc(),
            },
        )
        .await;
    spinner.finish_and_clear();
    updated?;

    println!(
        "{}",
        format!("  Updated: {} ({})", destination, dates.label).green()
    );

    Ok(())
}
