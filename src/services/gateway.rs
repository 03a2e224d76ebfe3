//! Remote data gateway for the spreadsheet web endpoint.
//!
//! Every read is `GET <endpoint>?action=<name>`, every write is a `POST` whose
//! JSON body names the operation in its `action` field. The gateway owns the
//! transport only and never hands a transport error to its caller: reads fold
//! failures into [`FetchOutcome::Error`], writes into
//! [`WriteOutcome::connection_failed`].
//!
//! Writes are JSON-confirmed: the body is sent as `text/plain` because the Apps
//! Script runtime rejects `application/json` preflighted requests, and the
//! response must decode as `{success, message, ...}`. There is no
//! fire-and-forget mode, so a write is never reported as successful without a
//! confirmation from the backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode, Url};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    config::GatewayConfig,
    models::{Action, FetchOutcome, WriteOutcome},
};

const WRITE_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

/// Transport-level failures; internal to the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid endpoint URL: {0}")]
    Endpoint(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend answered HTTP {0}")]
    Status(StatusCode),

    #[error("undecodable response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Port to the backend. Implementations must not fail: failures are part of
/// the returned outcome.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataGateway: Send + Sync {
    /// Issue the read identified by `action`
    async fn fetch_data(&self, action: Action) -> FetchOutcome;

    /// Issue a write; `payload` already carries its `action` field
    async fn send_data(&self, payload: Map<String, Value>) -> WriteOutcome;
}

/// reqwest-backed gateway to a Google Apps Script web app
#[derive(Clone)]
pub struct AppsScriptGateway {
    client: Client,
    endpoint: Url,
}

impl AppsScriptGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| GatewayError::Endpoint(format!("{}: {}", config.endpoint, e)))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn try_fetch(&self, action: Action) -> Result<Value, GatewayError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("action", action.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn try_send(&self, payload: &Map<String, Value>) -> Result<WriteOutcome, GatewayError> {
        let body = serde_json::to_string(payload)?;
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, WRITE_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl DataGateway for AppsScriptGateway {
    async fn fetch_data(&self, action: Action) -> FetchOutcome {
        tracing::debug!("Fetching {}", action);
        match self.try_fetch(action).await {
            Ok(body) => FetchOutcome::from_body(body),
            Err(e) => {
                tracing::error!("Fetching {} failed: {}", action, e);
                FetchOutcome::connection_failed()
            }
        }
    }

    async fn send_data(&self, payload: Map<String, Value>) -> WriteOutcome {
        let action = payload
            .get("action")
            .and_then(Value::as_str)
            .unwrap_or("?")
            .to_string();
        tracing::debug!("Sending {}", action);
        match self.try_send(&payload).await {
            Ok(outcome) => {
                if !outcome.success {
                    tracing::warn!(
                        "Backend rejected {}: {}",
                        action,
                        outcome.message().unwrap_or("no message")
                    );
                }
                outcome
            }
            Err(e) => {
                tracing::error!("Sending {} failed: {}", action, e);
                WriteOutcome::connection_failed()
            }
        }
    }
}
