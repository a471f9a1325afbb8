use anyhow::Result;
use chrono::{Datelike, Utc};
use owo_colors::OwoColorize;

use planner_core::i18n::Translations;
use planner_core::planner::Planner;

use crate::client::Client;
use crate::utils::tui;

pub async fn run(trip_id: &str) -> Result<()> {
    let planner = Planner::load()?;
    let i18n = Translations::new(planner.locale());
    let client = Client::new(planner.server_url());

    let spinner = tui::create_spinner("Loading activities");
    let days = client.activities(trip_id).await;
    spinner.finish_and_clear();
    let days = days?;

    if days.iter().all(|day| day.activities.is_empty()) {
        println!("{}", "No activities yet".dimmed());
        return Ok(());
    }

    let now = Utc::now();

    for day in &days {
        println!(
            "{} {}",
            format!("Day {}", day.date.day()).bold(),
            i18n.weekday_name(day.date.weekday()).dimmed()
        );

        if day.activities.is_empty() {
            println!("  {}", "—".dimmed());
        }

        for activity in &day.activities {
            let hour = activity.occurs_at.format("%H:%Mh").to_string();

            if activity.is_past(now) {
                println!("  {} {} {}", "✓".green(), hour.dimmed(), activity.title.dimmed());
            } else {
                println!("    {} {}", hour.dimmed(), activity.title);
            }
        }

        println!();
    }

    Ok(())
}
