//! Pustaka library portal
//!
//! A server-rendered client for a small library application whose data lives
//! behind a single spreadsheet web endpoint: catalog browsing, borrowing,
//! returns and admin book management.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
