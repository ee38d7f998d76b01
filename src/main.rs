use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use checkin_agent::{
    checkin::CheckinClient,
    cli::{Cli, outcome_line},
    config::Config,
    models::CheckInResponse,
    notifier::{MandrillNotifier, notify_outcome},
    request::parse_endpoint,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_filter())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Some(endpoint) = cli.endpoint.as_deref() {
        config.endpoint = parse_endpoint(endpoint)?;
    }

    let traveler = cli.traveler()?;
    let client = CheckinClient::new(config.clone())?;

    let response = client
        .check_in(&traveler)
        .await
        .context("Check-in request failed")?;

    println!("{}", outcome_line(&response));

    if let Some(recipient) = cli.recipient() {
        send_notification(&config, recipient, &response).await;
    }

    Ok(())
}

/// Notification failures are logged; the check-in result stands either way.
async fn send_notification(config: &Config, recipient: &str, response: &CheckInResponse) {
    let Some(mandrill) = config.mandrill.clone() else {
        warn!("MANDRILL_KEY not set, skipping email to {}", recipient);
        return;
    };

    let http_client = match reqwest::Client::builder().timeout(config.timeout).build() {
        Ok(client) => client,
        Err(e) => {
            warn!("Failed to create email client: {}", e);
            return;
        }
    };

    let notifier = MandrillNotifier::new(mandrill, http_client);
    match notify_outcome(&notifier, recipient, response).await {
        Ok(()) => info!("Sent check-in outcome to {}", recipient),
        Err(e) => warn!("Failed to email {}: {}", recipient, e),
    }
}
