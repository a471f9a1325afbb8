use anyhow::Result;
use owo_colors::OwoColorize;

use planner_core::i18n::{LocaleLookup, TextKey, Translations};
use planner_core::planner::Planner;

use crate::client::Client;
use crate::render;
use crate::utils::tui;

pub async fn run(trip_id: &str) -> Result<()> {
    let planner = Planner::load()?;
    let i18n = Translations::new(planner.locale());
    let client = Client::new(planner.server_url());

    let spinner = tui::create_spinner("Loading trip");
    let trip = client.get_trip(trip_id).await;
    spinner.finish_and_clear();
    let trip = trip?;

    println!("{}", i18n.lookup(TextKey::TripDetails).bold());
    println!("  {}", render::trip_header(&trip, &i18n));

    if trip.is_confirmed {
        println!("  {}", "confirmed".green());
    } else {
        println!("  {}", "not confirmed yet".yellow());
    }
    println!("  {}", format!("id: {}", trip.id).dimmed());

    Ok(())
}
