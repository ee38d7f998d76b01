use clap::Parser;

use crate::error::CheckinError;
use crate::models::{CheckInResponse, Traveler};

#[derive(Debug, Parser)]
#[command(
    name = "checkin-agent",
    version,
    about = "Check in for a flight through the airline's mobile check-in service"
)]
pub struct Cli {
    /// First name on the reservation
    #[arg(long, alias = "firstName")]
    pub first_name: Option<String>,

    /// Last name on the reservation
    #[arg(long, alias = "lastName")]
    pub last_name: Option<String>,

    /// Confirmation number (record locator)
    #[arg(long, alias = "confirmationNumber")]
    pub confirmation_number: Option<String>,

    /// Email address to receive the outcome
    #[arg(long)]
    pub email: Option<String>,

    /// Override the check-in endpoint (also CHECKIN_ENDPOINT)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn traveler(&self) -> Result<Traveler, CheckinError> {
        Traveler::new(
            self.first_name.clone().unwrap_or_default(),
            self.last_name.clone().unwrap_or_default(),
            self.confirmation_number.clone().unwrap_or_default(),
        )
    }

    /// Recipient for the outcome email, if one was given.
    pub fn recipient(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn,checkin_agent=info",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Line printed on stdout for a decoded response.
pub fn outcome_line(response: &CheckInResponse) -> String {
    if !response.error_message.is_empty() {
        response.error_message.clone()
    } else if !response.check_in_url.is_empty() {
        format!("Checked in: {}", response.check_in_url)
    } else {
        format!(
            "No message from the check-in service (opstatus: {})",
            response.operation_status
        )
    }
}
