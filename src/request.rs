use reqwest::{Client, Request, Url};

use crate::error::CheckinError;
use crate::models::Traveler;

/// Default mobile check-in servlet.
pub const DEFAULT_ENDPOINT: &str = "http://mobile.southwest.com/middleware/MWServlet";

// Client identifiers the mobile app sends; the server whitelists these exact values.
pub const PLATFORM: &str = "android";
pub const SERVICE_ID: &str = "flightcheckin_new";
pub const APP_ID: &str = "swa";
pub const APP_VERSION: &str = "2.4.1";
pub const PLATFORM_VERSION: &str = "5.0.GA_v201403042054";
pub const CHANNEL: &str = "rc";

/// One check-in request, ready to be turned into an HTTP POST.
#[derive(Debug, Clone)]
pub struct CheckInRequest {
    pub traveler: Traveler,
    pub endpoint: Url,
}

impl CheckInRequest {
    pub fn new(traveler: Traveler, endpoint: Url) -> Self {
        Self { traveler, endpoint }
    }

    /// Form fields in the order they go on the wire.
    pub fn form_fields(&self) -> [(&'static str, &str); 9] {
        [
            ("platform", PLATFORM),
            ("firstName", self.traveler.first_name.as_str()),
            ("lastName", self.traveler.last_name.as_str()),
            ("recordLocator", self.traveler.confirmation_number.as_str()),
            ("serviceID", SERVICE_ID),
            ("appID", APP_ID),
            ("appver", APP_VERSION),
            ("platformver", PLATFORM_VERSION),
            ("channel", CHANNEL),
        ]
    }

    /// Build the form-encoded POST without sending it.
    ///
    /// `RequestBuilder::form` sets `Content-Type: application/x-www-form-urlencoded`.
    pub fn build(&self, client: &Client) -> Result<Request, CheckinError> {
        let request = client
            .post(self.endpoint.clone())
            .form(&self.form_fields())
            .build()?;

        Ok(request)
    }
}

/// Parse an endpoint override.
pub fn parse_endpoint(raw: &str) -> Result<Url, CheckinError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| CheckinError::InvalidEndpoint(format!("{raw}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(CheckinError::InvalidEndpoint(format!(
            "{raw}: unsupported scheme {scheme}"
        ))),
    }
}
