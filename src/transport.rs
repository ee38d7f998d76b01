use reqwest::{Client as HttpClient, Request, StatusCode};
use tracing::debug;

use crate::error::CheckinError;

/// Status line and body of one HTTP exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Executes a built request exactly once.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<RawResponse, CheckinError>;
}

pub struct ReqwestTransport {
    http_client: HttpClient,
}

impl ReqwestTransport {
    pub fn new(http_client: HttpClient) -> Self {
        Self { http_client }
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<RawResponse, CheckinError> {
        debug!(method = %request.method(), url = %request.url(), "Sending request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }
}
