use reqwest::Client;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::CheckinError;
use crate::models::{CheckInResponse, Traveler};
use crate::request::CheckInRequest;
use crate::response::decode_response;
use crate::transport::{ReqwestTransport, Transport};

/// Runs the check-in exchange against the configured endpoint.
///
/// Each call to [`CheckinClient::check_in`] sends exactly one request. There is no
/// retry: a repeated check-in against a live reservation is not safe to automate.
pub struct CheckinClient {
    config: Config,
    http_client: Client,
    transport: Box<dyn Transport>,
}

impl CheckinClient {
    pub fn new(config: Config) -> Result<Self, CheckinError> {
        let http_client = Client::builder().timeout(config.timeout).build()?;
        let transport = Box::new(ReqwestTransport::new(http_client.clone()));

        Ok(Self {
            config,
            http_client,
            transport,
        })
    }

    pub fn with_transport(
        config: Config,
        transport: Box<dyn Transport>,
    ) -> Result<Self, CheckinError> {
        let http_client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            config,
            http_client,
            transport,
        })
    }

    /// Check in `traveler` and decode whatever the airline answers.
    ///
    /// A business-level refusal is returned as `Ok`; callers inspect
    /// `operation_status` and `error_message`.
    pub async fn check_in(&self, traveler: &Traveler) -> Result<CheckInResponse, CheckinError> {
        let request = CheckInRequest::new(traveler.clone(), self.config.endpoint.clone())
            .build(&self.http_client)?;

        info!(endpoint = %self.config.endpoint, "Submitting check-in");
        debug!(confirmation_number = %traveler.confirmation_number, "Check-in traveler");

        let raw = self.transport.execute(request).await?;

        info!(status = %raw.status, "Check-in endpoint responded");
        debug!(body = %String::from_utf8_lossy(&raw.body), "Check-in response body");

        decode_response(&raw.body)
    }
}
