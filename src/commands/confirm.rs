//! Confirm attendance on a trip you were invited to.

use anyhow::Result;
use chrono::Datelike;
use dialoguer::Input;
use owo_colors::OwoColorize;

use planner_core::i18n::{LocaleLookup, TextKey, Translations};
use planner_core::planner::Planner;

use crate::client::{Client, ConfirmParticipantRequest};
use crate::utils::{tui, validate};

pub async fn run(
    participant_id: &str,
    trip_id: &str,
    name: Option<String>,
    email: Option<String>,
) -> Result<()> {
    let mut planner = Planner::load()?;
    let i18n = Translations::new(planner.locale());
    let client = Client::new(planner.server_url());

    let spinner = tui::create_spinner("Loading trip");
    let trip = client.get_trip(trip_id).await;
    spinner.finish_and_clear();
    let trip = trip?;

    // The invite wording uses the end month's name.
    println!(
        "  You were invited to {} ({} {} {} {} {})",
        trip.destination.bold(),
        trip.starts_at.day(),
        i18n.lookup(TextKey::Until),
        trip.ends_at.day(),
        i18n.lookup(TextKey::Of),
        i18n.month_name(trip.ends_at.month()),
    );

    // --- Name ---
    let name = match name {
        Some(input) => {
            let trimmed = input.trim().to_string();
            if trimmed.is_empty() {
                anyhow::bail!("Fill in your name and e-mail to confirm the trip");
            }
            trimmed
        }
        None => prompt_name()?,
    };

    // --- E-mail ---
    let email = match email {
        Some(input) => {
            let trimmed = input.trim().to_string();
            if !validate::email(&trimmed) {
                anyhow::bail!("Invalid e-mail: '{}'", trimmed);
            }
            trimmed
        }
        None => prompt_email()?,
    };

    // --- Confirm ---
    let spinner = tui::create_spinner("Confirming attendance");
    let confirmed = client
        .confirm_participant(participant_id, ConfirmParticipantRequest { name, email })
        .await;
    spinner.finish_and_clear();
    confirmed?;

    planner.set_current_trip(trip_id)?;

    println!("{}", "  Attendance confirmed!".green());
    println!("{}", "  Trip stored. Try: planner status".dimmed());

    Ok(())
}

fn prompt_name() -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Your full name")
            .interact_text()?;

        let trimmed = input.trim().to_string();
        if !trimmed.is_empty() {
            return Ok(trimmed);
        }
        eprintln!("  {}", "Fill in your name and e-mail to confirm the trip".red());
    }
}

fn prompt_email() -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Confirmation e-mail")
            .interact_text()?;

        let trimmed = input.trim().to_string();
        if validate::email(&trimmed) {
            return Ok(trimmed);
        }
        eprintln!("  {}", format!("Invalid e-mail: '{}'", trimmed).red());
    }
}
