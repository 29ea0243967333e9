//! # Time Zone Meeting Scheduler Main Entry Point
//!
//! Initializes logging, loads configuration, and runs the interactive
//! scheduling session on stdin/stdout.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tz_meeting_scheduler::cli;
use tz_meeting_scheduler::config::Config;
use tz_meeting_scheduler::utils::logging::log_system_event;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tz_meeting_scheduler=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!(
        "Starting Time Zone Meeting Scheduler v{}",
        env!("CARGO_PKG_VERSION")
    );
    info!(
        "Configuration loaded - Organizer zone: {}, Default participant zone: {}",
        config.organizer_zone, config.participant_zone
    );

    cli::run(&config)?;

    log_system_event("shutdown", None);
    Ok(())
}
