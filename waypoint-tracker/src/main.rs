//! waypoint - local-first travel tracker CLI
//!
//! Opens the local stores under the resolved root folder, hydrates them from
//! waypoint-api (unless `--offline`), then runs one subcommand.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use waypoint_common::config::{self, TomlConfig};
use waypoint_common::models::TravelStatus;
use waypoint_common::{reference, time};
use waypoint_tracker::store::FileStorage;
use waypoint_tracker::{HttpRemote, Session};

#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(about = "Track visited countries, events and travel companions")]
#[command(version)]
struct Cli {
    /// waypoint-api base URL (overrides config file)
    #[arg(long, env = "WAYPOINT_API_URL")]
    api_url: Option<String>,

    /// Root folder holding local state
    #[arg(short, long)]
    root_folder: Option<PathBuf>,

    /// Clear local members state before hydrating
    #[arg(long)]
    reset_members: bool,

    /// Skip hydration and remote pushes
    #[arg(long)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hydrate every domain and report what happened
    Sync,
    /// Visited totals and per-continent progress
    Stats,
    /// Unlocked achievements
    Achievements,
    /// Trips grouped by year, most recent first
    Timeline,
    /// Set a country's travel status
    Mark {
        /// Country id (ISO 3166 alpha-2, e.g. FR)
        country: String,
        /// visited, bucket-list, lived or none
        status: TravelStatus,
    },
    /// Upcoming and past events
    Events {
        /// Reference time for upcoming/past (RFC 3339, defaults to now)
        #[arg(long, value_parser = parse_timestamp)]
        at: Option<DateTime<Utc>>,
    },
    /// Members and their relationships
    Members,
}

fn parse_timestamp(s: &str) -> std::result::Result<DateTime<Utc>, String> {
    time::parse_wire(s).ok_or_else(|| format!("not an RFC 3339 timestamp: {}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let toml_config = TomlConfig::load_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waypoint=warn,waypoint_tracker=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting waypoint v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let root_folder = config::resolve_root_folder(cli.root_folder.as_deref(), &toml_config);
    let state_dir = config::local_state_dir(&root_folder);
    info!("Local state: {}", state_dir.display());

    let storage = Arc::new(
        FileStorage::open(&state_dir)
            .with_context(|| format!("Failed to open local state in {}", state_dir.display()))?,
    );
    let api_url = cli.api_url.clone().unwrap_or_else(|| toml_config.api_base_url());
    let remote = Arc::new(HttpRemote::new(&api_url).context("Failed to build HTTP client")?);
    let session = Session::open(storage, remote.clone()).context("Failed to load local state")?;

    if cli.reset_members {
        session.reset_members().await.context("Failed to reset members")?;
    }

    if let Command::Sync = cli.command {
        if cli.offline {
            bail!("sync needs the remote service; drop --offline");
        }
        let report = session.hydrate().await;
        println!("travel:  {}", report.travel);
        println!("events:  {}", report.events);
        println!("members: {}", report.members);
        return Ok(());
    }

    if !cli.offline {
        // Failures are logged and local state is kept
        session.hydrate().await;
    }

    match cli.command {
        Command::Sync => {}
        Command::Stats => print_stats(&session).await,
        Command::Achievements => print_achievements(&session).await,
        Command::Timeline => print_timeline(&session).await,
        Command::Mark { country, status } => {
            let country_id = country.trim().to_ascii_uppercase();
            let Some(country) = reference::country(&country_id) else {
                bail!("Unknown country id: {}", country_id);
            };

            session.newly_unlocked().await;
            session
                .travel()
                .write()
                .await
                .set_status(&country_id, status)
                .context("Failed to save travel state")?;
            println!("{} {} -> {}", country.flag, country.name, status);

            for achievement in session.newly_unlocked().await {
                println!("Achievement unlocked: {} ({})", achievement.name, achievement.description);
            }

            if !cli.offline {
                let snapshot = session.travel().read().await.snapshot().clone();
                if let Err(e) = remote.push_travel(&snapshot).await {
                    warn!("Could not push travel state: {}", e);
                }
            }
        }
        Command::Events { at } => print_events(&session, at.unwrap_or_else(time::now)).await,
        Command::Members => print_members(&session).await,
    }

    Ok(())
}

async fn print_stats(session: &Session) {
    let stats = session.travel().read().await.stats();
    println!(
        "Visited {}/{} countries ({}%), lived in {}, bucket list {}",
        stats.visited, stats.total, stats.percentage, stats.lived, stats.bucket_list
    );
    for continent in reference::CONTINENTS {
        if let Some(progress) = stats.continent(continent.id) {
            println!(
                "  {:<14} {:>3}/{:<3} {:>3}%",
                continent.name, progress.visited, progress.total, progress.percentage
            );
        }
    }
}

async fn print_achievements(session: &Session) {
    let unlocked = session.travel().read().await.unlocked_achievements();
    println!("{}/{} achievements", unlocked.len(), reference::ACHIEVEMENTS.len());
    for achievement in unlocked {
        println!("  {} - {}", achievement.name, achievement.description);
    }
}

async fn print_timeline(session: &Session) {
    let timeline = session.travel().read().await.timeline();
    if timeline.is_empty() {
        println!("No trips yet");
        return;
    }
    for group in timeline {
        match group.year {
            Some(year) => println!("{}", year),
            None => println!("Undated"),
        }
        for entry in group.entries {
            let date = entry.date.map(|d| d.to_string()).unwrap_or_default();
            let favorite = if entry.favorite { " *" } else { "" };
            println!("  {:<10} {} {}{}", date, entry.flag, entry.name, favorite);
        }
    }
}

async fn print_events(session: &Session, now: DateTime<Utc>) {
    let (upcoming, past) = session.events().read().await.partition(now);
    println!("Upcoming ({})", upcoming.len());
    for event in &upcoming {
        println!("  {}  {} ({}, {})", time::to_wire(&event.start_date), event.title, event.city, event.country);
    }
    println!("Past ({})", past.len());
    for event in &past {
        println!("  {}  {} ({}, {})", time::to_wire(&event.start_date), event.title, event.city, event.country);
    }
}

async fn print_members(session: &Session) {
    let store = session.members().read().await;
    for member in store.members() {
        let links = store.relationships_of(&member.id).len();
        let place = member.city.as_deref().unwrap_or("-");
        println!("  {:<30} {:<20} {} relationships", member.full_name(), place, links);
    }
    println!("{} members, {} relationships", store.members().len(), store.relationships().len());
}
