//! Save one important link on a trip.

use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

use planner_core::planner::Planner;

use crate::client::{Client, CreateLinkRequest};
use crate::utils::{tui, validate};

pub async fn run(trip_id: &str, title: Option<String>, url: Option<String>) -> Result<()> {
    let planner = Planner::load()?;
    let client = Client::new(planner.server_url());

    // --- Title ---
    let title = match title {
        Some(input) => {
            let trimmed = input.trim().to_string();
            if trimmed.is_empty() {
                anyhow::bail!("Give the link a title");
            }
            trimmed
        }
        None => prompt_title()?,
    };

    // --- URL ---
    let url = match url {
        Some(input) => {
            let trimmed = input.trim().to_string();
            if !validate::url(&trimmed) {
                anyhow::bail!("Invalid link: '{}'", trimmed);
            }
            trimmed
        }
        None => prompt_url()?,
    };

    // --- Create ---
    let spinner = tui::create_spinner("Saving link");
    let created = client
        .create_link(trip_id, CreateLinkRequest {
            title: title.clone(),
            url,
        })
        .await;
    spinner.finish_and_clear();
    created?;

    println!("{}", format!("  Saved: {}", title).green());

    Ok(())
}

fn prompt_title() -> Result<String> {
    loop {
        let input: String = Input::new().with_prompt("  Link title").interact_text()?;

        let trimmed = input.trim().to_string();
        if !trimmed.is_empty() {
            return Ok(trimmed);
        }
        eprintln!("  {}", "Give the link a title".red());
    }
}

fn prompt_url() -> Result<String> {
    loop {
        let input: String = Input::new().with_prompt("  URL").interact_text()?;

        let trimmed = input.trim().to_string();
        if validate::url(&trimmed) {
            return Ok(trimmed);
        }
        eprintln!("  {}", format!("Invalid link: '{}'", trimmed).red());
    }
}
