use anyhow::Result;
use owo_colors::OwoColorize;

use planner_core::planner::Planner;

use crate::client::Client;
use crate::render::Render;
use crate::utils::tui;

pub async fn run(trip_id: &str) -> Result<()> {
    let planner = Planner::load()?;
    let client = Client::new(planner.server_url());

    let spinner = tui::create_spinner("Loading details");
    let links = client.links(trip_id).await;
    spinner.finish_and_clear();
    let links = links?;

    let spinner = tui::create_spinner("Loading guests");
    let participants = client.participants(trip_id).await;
    spinner.finish_and_clear();
    let participants = participants?;

    println!("{}", "Important links".bold());
    if links.is_empty() {
        println!("  {}", "No link added".dimmed());
    }
    for link in &links {
        println!("  {}", link.render());
    }

    println!();
    println!("{}", "Guests".bold());
    if participants.is_empty() {
        println!("  {}", "No guest invited".dimmed());
    }
    for participant in &participants {
        println!("  {}", participant.render());
    }

    Ok(())
}
