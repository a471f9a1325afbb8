use anyhow::Result;
use owo_colors::OwoColorize;

use planner_core::planner::Planner;

pub fn run() -> Result<()> {
    let mut planner = Planner::load()?;

    if planner.current_trip().is_none() {
        println!("{}", "No trip stored".dimmed());
        return Ok(());
    }

    planner.clear_current_trip()?;
    println!("{}", "Stored trip forgotten".dimmed());

    Ok(())
}
