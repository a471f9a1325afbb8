mod client;
mod commands;
mod picker;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use planner_core::planner::Planner;

#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Plan trips with friends: pick dates, invite guests and keep activities and links in one place")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new trip
    New {
        /// Where the trip goes (prompted when omitted)
        #[arg(short, long)]
        destination: Option<String>,

        /// First trip day (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// Last trip day (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,

        /// Guest e-mail to invite (repeatable)
        #[arg(short, long = "invite")]
        invite: Vec<String>,
    },
    /// Show the trip summary
    Status {
        /// Operate on this trip instead of the stored one
        #[arg(short, long)]
        trip: Option<String>,
    },
    /// Change destination and dates
    Update {
        /// New destination (prompted when omitted)
        #[arg(short, long)]
        destination: Option<String>,

        /// New first trip day (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// New last trip day (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,

        /// Operate on this trip instead of the stored one
        #[arg(short, long)]
        trip: Option<String>,
    },
    /// List activities day by day
    Activities {
        /// Operate on this trip instead of the stored one
        #[arg(short, long)]
        trip: Option<String>,
    },
    /// Register a new activity
    AddActivity {
        /// What the activity is (prompted when omitted)
        title: Option<String>,

        /// Day it happens (YYYY-MM-DD, within the trip dates)
        #[arg(long)]
        date: Option<String>,

        /// Hour it happens (0-23)
        #[arg(long)]
        hour: Option<u32>,

        /// Operate on this trip instead of the stored one
        #[arg(short, long)]
        trip: Option<String>,
    },
    /// Show important links and guests
    Details {
        /// Operate on this trip instead of the stored one
        #[arg(short, long)]
        trip: Option<String>,
    },
    /// Save an important link
    AddLink {
        /// Link title (prompted when omitted)
        title: Option<String>,

        /// Link URL (prompted when omitted)
        url: Option<String>,

        /// Operate on this trip instead of the stored one
        #[arg(short, long)]
        trip: Option<String>,
    },
    /// Confirm attendance on a trip you were invited to
    Confirm {
        /// Your participant id from the invite
        participant: String,

        /// The trip id from the invite
        #[arg(short, long)]
        trip: String,

        /// Your full name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Your e-mail (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
    },
    /// Forget the stored trip
    Forget,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New {
            destination,
            start,
            end,
            invite,
        } => commands::new::run(destination, start, end, invite).await,
        Commands::Status { trip } => {
            let trip = resolve_trip(trip.as_deref())?;
            commands::status::run(&trip).await
        }
        Commands::Update {
            destination,
            start,
            end,
            trip,
        } => {
            let trip = resolve_trip(trip.as_deref())?;
            commands::update::run(&trip, destination, start, end).await
        }
        Commands::Activities { trip } => {
            let trip = resolve_trip(trip.as_deref())?;
            commands::activities::run(&trip).await
        }
        Commands::AddActivity {
            title,
            date,
            hour,
            trip,
        } => {
            let trip = resolve_trip(trip.as_deref())?;
            commands::add_activity::run(&trip, title, date, hour).await
        }
        Commands::Details { trip } => {
            let trip = resolve_trip(trip.as_deref())?;
            commands::details::run(&trip).await
        }
        Commands::AddLink { title, url, trip } => {
            let trip = resolve_trip(trip.as_deref())?;
            commands::add_link::run(&trip, title, url).await
        }
        Commands::Confirm {
            participant,
            trip,
            name,
            email,
        } => commands::confirm::run(&participant, &trip, name, email).await,
        Commands::Forget => commands::forget::run(),
    }
}

/// The trip a command operates on: the `--trip` flag, else the stored one.
fn resolve_trip(flag: Option<&str>) -> Result<String> {
    if let Some(id) = flag {
        return Ok(id.to_string());
    }

    let planner = Planner::load()?;
    match planner.current_trip() {
        Some(id) => Ok(id.to_string()),
        None => anyhow::bail!(
            "No trip selected.\n\n\
            Create one with:\n  \
            planner new\n\n\
            or point a command at a trip:\n  \
            planner status --trip <id>"
        ),
    }
}
