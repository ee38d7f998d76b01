use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::MandrillConfig;
use crate::error::NotificationError;
use crate::models::CheckInResponse;

pub const OUTCOME_SUBJECT: &str = "All Set!";
const HEADER_HTML: &str = "<h1>Howdy and welcome!</h1>";

/// Delivers an HTML message to one recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), NotificationError>;
}

/// Email the check-in outcome message to `recipient`.
pub async fn notify_outcome(
    notifier: &dyn Notifier,
    recipient: &str,
    response: &CheckInResponse,
) -> Result<(), NotificationError> {
    let body = format!("<div>{}</div>", escape_html(&response.error_message));
    notifier.send(recipient, OUTCOME_SUBJECT, &body).await
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Mandrill transactional email: renders the stored template, then sends it.
pub struct MandrillNotifier {
    config: MandrillConfig,
    http_client: Client,
}

#[derive(Debug, Serialize)]
struct TemplateVar<'a> {
    name: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct RenderRequest<'a> {
    key: &'a str,
    template_name: &'a str,
    template_content: Vec<TemplateVar<'a>>,
}

#[derive(Debug, Deserialize)]
struct RenderResponse {
    #[serde(default)]
    html: Option<String>,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    key: &'a str,
    message: Message<'a>,
    #[serde(rename = "async")]
    send_async: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    html: &'a str,
    subject: &'a str,
    from_email: &'a str,
    from_name: &'a str,
    to: Vec<Recipient<'a>>,
}

#[derive(Debug, Serialize)]
struct Recipient<'a> {
    email: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendResult {
    #[serde(default)]
    email: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    reject_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiError {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl MandrillNotifier {
    pub fn new(config: MandrillConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    async fn call<B, R>(&self, path: &str, body: &B) -> Result<R, NotificationError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.config.base_url, path);

        let response = self.http_client.post(&url).json(body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            let error: ApiError = serde_json::from_str(&text).unwrap_or_default();
            let message = match (error.name, error.message) {
                (Some(name), Some(message)) => format!("{name}: {message}"),
                (None, Some(message)) => message,
                _ => text,
            };
            return Err(NotificationError::Provider { status, message });
        }

        Ok(response.json().await?)
    }

    async fn render(&self, html_body: &str) -> Result<String, NotificationError> {
        let request = RenderRequest {
            key: &self.config.api_key,
            template_name: &self.config.template,
            template_content: vec![
                TemplateVar {
                    name: "header",
                    content: HEADER_HTML,
                },
                TemplateVar {
                    name: "main",
                    content: html_body,
                },
            ],
        };

        let rendered: RenderResponse = self.call("templates/render.json", &request).await?;
        rendered
            .html
            .filter(|html| !html.is_empty())
            .ok_or(NotificationError::MissingHtml)
    }
}

#[async_trait]
impl Notifier for MandrillNotifier {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), NotificationError> {
        let html = self.render(html_body).await?;

        let request = SendRequest {
            key: &self.config.api_key,
            message: Message {
                html: &html,
                subject,
                from_email: &self.config.from_email,
                from_name: &self.config.from_name,
                to: vec![Recipient {
                    email: recipient,
                    kind: "to",
                }],
            },
            send_async: false,
        };

        let results: Vec<SendResult> = self.call("messages/send.json", &request).await?;

        for result in results {
            if result.status == "rejected" || result.status == "invalid" {
                return Err(NotificationError::Rejected {
                    recipient: result.email,
                    status: result.status,
                    reason: result.reject_reason.unwrap_or_default(),
                });
            }
            info!(recipient = %result.email, status = %result.status, "Notification accepted");
        }

        Ok(())
    }
}
