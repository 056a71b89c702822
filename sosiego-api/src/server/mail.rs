//! Delivery of contact messages through an EmailJS-compatible relay.

use async_trait::async_trait;
use serde::Serialize;
use sosiego_common::contact::ContactPayload;
use thiserror::Error;
use tracing::debug;

pub const SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(Debug, Error)]
pub enum SendError {
    #[error("Reaching the mail relay failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Mail relay rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Sends one contact message. Only success or failure is observable.
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(&self, payload: &ContactPayload) -> Result<(), SendError>;
}

/// Account identifiers of the EmailJS service.
#[derive(Clone, Eq, PartialEq)]
pub struct EmailJsKeys {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a ContactPayload,
}

pub struct EmailJsRelay {
    client: reqwest::Client,
    send_url: String,
    keys: EmailJsKeys,
}

impl EmailJsRelay {
    pub fn new(endpoint: &str, keys: EmailJsKeys) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("sosiego/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            send_url: format!("{}{SEND_PATH}", endpoint.trim_end_matches('/')),
            keys,
        })
    }
}

#[async_trait]
impl MailRelay for EmailJsRelay {
    async fn send(&self, payload: &ContactPayload) -> Result<(), SendError> {
        let request = SendRequest {
            service_id: &self.keys.service_id,
            template_id: &self.keys.template_id,
            user_id: &self.keys.public_key,
            access_token: self.keys.private_key.as_deref(),
            template_params: payload,
        };

        let response = self
            .client
            .post(&self.send_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SendError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(%status, "Mail relay accepted the message");
        Ok(())
    }
}
