mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;

use std::time::Instant;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() {
    let started_at = Instant::now();

    dotenvy::dotenv().ok();
    startup::setup_tracing();

    if let Err(e) = run(started_at).await {
        match e {
            AppError::ConfigErr(_) => eprintln!("❌ ERROR: {}", e),
            _ => tracing::error!("Discord bot error: {}", e),
        }

        std::process::exit(1);
    }
}

async fn run(started_at: Instant) -> Result<(), AppError> {
    let config = Config::from_env()?;

    tracing::info!("Starting global ban bot");

    bot::start::start_bot(config, started_at).await
}
