//! Data models for the Pustaka portal

pub mod action;
pub mod book;
pub mod cell;
pub mod form;
pub mod outcome;
pub mod stats;
pub mod status;

// Re-export commonly used types
pub use action::Action;
pub use book::{Book, BookStatus};
pub use form::FormFields;
pub use outcome::{FetchOutcome, ListingError, WriteOutcome, CONNECTION_FAILED};
pub use stats::LibraryStats;
pub use status::{StatusLog, StatusPanel, StatusSink, StatusTone};
