//! Uniform result shapes produced by the data gateway

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::{book::Book, cell, stats::LibraryStats};

/// Message shown for any read that could not reach the backend
pub const CONNECTION_FAILED: &str = "Gagal koneksi ke server data.";

/// Result of a read. Transport failures never escape as errors; they become
/// [`FetchOutcome::Error`].
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Data(Value),
    Error { message: String },
}

/// Why a fetched response cannot be shown as a listing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("{0}")]
    Unavailable(String),

    #[error("response carries no record list")]
    Malformed,
}

impl FetchOutcome {
    pub fn connection_failed() -> Self {
        FetchOutcome::Error {
            message: CONNECTION_FAILED.to_string(),
        }
    }

    /// Classify a decoded body; the backend may itself answer `{error: true}`.
    pub fn from_body(body: Value) -> Self {
        if body.get("error").and_then(Value::as_bool) == Some(true) {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(CONNECTION_FAILED)
                .to_string();
            return FetchOutcome::Error { message };
        }
        FetchOutcome::Data(body)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FetchOutcome::Error { .. })
    }

    /// Records under `data`. A missing or non-array `data`, or a row that does
    /// not decode, is reported as [`ListingError::Malformed`].
    pub fn books(&self) -> Result<Vec<Book>, ListingError> {
        match self {
            FetchOutcome::Error { message } => Err(ListingError::Unavailable(message.clone())),
            FetchOutcome::Data(body) => match body.get("data") {
                Some(Value::Array(rows)) => rows
                    .iter()
                    .map(Book::deserialize)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| {
                        tracing::warn!("Undecodable book row: {}", e);
                        ListingError::Malformed
                    }),
                _ => Err(ListingError::Malformed),
            },
        }
    }

    /// Counters from the top level of a `getStats` response
    pub fn stats(&self) -> Result<LibraryStats, ListingError> {
        match self {
            FetchOutcome::Error { message } => Err(ListingError::Unavailable(message.clone())),
            FetchOutcome::Data(body @ Value::Object(_)) => {
                LibraryStats::deserialize(body).map_err(|_| ListingError::Malformed)
            }
            FetchOutcome::Data(_) => Err(ListingError::Malformed),
        }
    }
}

/// Result of a write: `{success, message, denda?, ...}`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct WriteOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Late fee computed by the backend for returns
    #[serde(default, deserialize_with = "cell::amount")]
    pub denda: Option<Decimal>,
    /// Set by the gateway when the request never got a readable answer
    #[serde(skip)]
    pub connection_failed: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WriteOutcome {
    pub fn connection_failed() -> Self {
        Self {
            connection_failed: true,
            ..Self::default()
        }
    }

    /// Backend message when it sent a non-blank one
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}
