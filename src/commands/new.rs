//! Create-trip flow: destination, dates, guests, confirm.

use anyhow::Result;
use chrono::Local;
use dialoguer::{Confirm, Input};
use owo_colors::OwoColorize;

use planner_core::calendar::{DateRangeSelector, DatesSelected};
use planner_core::i18n::{LocaleLookup, TextKey, Translations};
use planner_core::planner::Planner;

use crate::client::{Client, CreateTripRequest};
use crate::picker;
use crate::utils::{tui, validate};

const MIN_DESTINATION_LEN: usize = 4;

pub async fn run(
    destination: Option<String>,
    start: Option<String>,
    end: Option<String>,
    invite: Vec<String>,
) -> Result<()> {
    let mut planner = Planner::load()?;
    let i18n = Translations::new(planner.locale());
    let selector = DateRangeSelector::new(&i18n);

    let interactive = destination.is_none() || start.is_none() || end.is_none();

    if interactive {
        println!("  {}", i18n.lookup(TextKey::InviteFriendsPlanTrip).dimmed());
    }

    // --- Destination ---
    let destination = match destination {
        Some(input) => {
            let trimmed = input.trim().to_string();
            if trimmed.chars().count() < MIN_DESTINATION_LEN {
                anyhow::bail!(
                    "{} {}",
                    i18n.lookup(TextKey::Destination),
                    i18n.lookup(TextKey::ErrorAtLeast4Char)
                );
            }
            trimmed
        }
        None => prompt_destination(&i18n)?,
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

    // --- Guests ---
    let mut emails: Vec<String> = Vec::new();
    for email in invite {
        add_guest(&mut emails, &email)?;
    }
    if interactive {
        prompt_guests(&mut emails, &i18n)?;
    }

    // --- Confirm ---
    if interactive {
        println!();
        println!("  {} {}", destination.bold(), dates.label.dimmed());
        let terms = format!(
            "{} {}",
            i18n.lookup(TextKey::AcceptPrivacyAndPolicyTerms),
            i18n.lookup(TextKey::UseTermsAndPrivacyPolicy)
        );
        println!("  {}", terms.dimmed());

        let confirmed = Confirm::new()
            .with_prompt(format!("  {}?", i18n.lookup(TextKey::ConfirmTrip)))
            .default(true)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    // --- Create ---
    let client = Client::new(planner.server_url());

    let spinner = tui::create_spinner("Creating trip");
    let created = client
        .create_trip(CreateTripRequest {
            destination: destination.clone(),
            starts_at: starts_at.to_utc(),
            ends_at: ends_at.to_utc(),
            emails_to_invite: emails.clone(),
        })
        .await;
    spinner.finish_and_clear();
    let trip_id = created?;

    planner.set_current_trip(&trip_id)?;

    println!(
        "{}",
        format!("  Created: {} ({})", destination, dates.label).green()
    );
    if !emails.is_empty() {
        println!("  {} guest(s) invited", emails.len());
    }
    println!("{}", "  Trip stored. Try: planner status".dimmed());

    Ok(())
}

/// Prompt for the destination with retry until it is long enough.
fn prompt_destination(i18n: &Translations) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt(format!("  {}", i18n.lookup(TextKey::ToWhereQuestion)))
            .interact_text()?;

        let trimmed = input.trim().to_string();
        if trimmed.chars().count() >= MIN_DESTINATION_LEN {
            return Ok(trimmed);
        }

        let message = format!(
            "{} {}",
            i18n.lookup(TextKey::Destination),
            i18n.lookup(TextKey::ErrorAtLeast4Char)
        );
        eprintln!("  {}", message.red());
    }
}

/// Validate and de-duplicate one guest e-mail.
fn add_guest(emails: &mut Vec<String>, input: &str) -> Result<()> {
    let email = input.trim().to_lowercase();

    if !validate::email(&email) {
        anyhow::bail!("Invalid e-mail: '{}'", input.trim());
    }
    if emails.contains(&email) {
        anyhow::bail!("E-mail already added: '{}'", email);
    }

    emails.push(email);
    Ok(())
}

/// Prompt for guest e-mails until an empty answer; invalid entries retry.
fn prompt_guests(emails: &mut Vec<String>, i18n: &Translations) -> Result<()> {
    println!("  {}", i18n.lookup(TextKey::WhoIsGoingQuestion).dimmed());

    loop {
        let input: String = Input::new()
            .with_prompt("  Guest e-mail (empty to continue)")
            .default(String::new())
            .show_default(false)
            .interact_text()?;

        if input.trim().is_empty() {
            return Ok(());
        }

        match add_guest(emails, &input) {
            Ok(()) => println!("  {} guest(s) so far", emails.len()),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- add_guest ---

    #[test]
    fn add_guest_lowercases_and_appends() {
        let mut emails = Vec::new();
        add_guest(&mut emails, " Ana@Example.COM ").unwrap();
        assert_eq!(emails, vec!["ana@example.com"]);
    }

    #[test]
    fn add_guest_rejects_invalid_addresses() {
        let mut emails = Vec::new();
        assert!(add_guest(&mut emails, "not-an-email").is_err());
        assert!(emails.is_empty());
    }

    #[test]
    fn add_guest_rejects_duplicates() {
        let mut emails = Vec::new();
        add_guest(&mut emails, "ana@example.com").unwrap();
        assert!(add_guest(&mut emails, "ANA@example.com").is_err());
        assert_eq!(emails.len(), 1);
    }
}
