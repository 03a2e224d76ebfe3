//! Status region state reflected back to the user after an action

use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Warning,
    Danger,
}

impl StatusTone {
    /// Bootstrap alert class
    pub fn alert_class(&self) -> &'static str {
        match self {
            StatusTone::Info => "alert-info",
            StatusTone::Success => "alert-success",
            StatusTone::Warning => "alert-warning",
            StatusTone::Danger => "alert-danger",
        }
    }
}

/// Content of a status region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPanel {
    pub tone: StatusTone,
    pub heading: Option<String>,
    pub message: String,
    /// Fee reported by a successful return
    pub fee: Option<Decimal>,
}

impl StatusPanel {
    pub fn new(tone: StatusTone, message: impl Into<String>) -> Self {
        Self {
            tone,
            heading: None,
            message: message.into(),
            fee: None,
        }
    }

    pub fn headed(tone: StatusTone, heading: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
            ..Self::new(tone, message)
        }
    }

    pub fn with_fee(mut self, fee: Decimal) -> Self {
        self.fee = Some(fee);
        self
    }
}

/// Receiver of status transitions emitted while a form is processed
pub trait StatusSink: Send {
    fn show(&mut self, panel: StatusPanel);
}

/// Sink that keeps every transition; the last one is what the page shows.
#[derive(Debug, Default, Clone)]
pub struct StatusLog {
    panels: Vec<StatusPanel>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&StatusPanel> {
        self.panels.last()
    }

    pub fn history(&self) -> &[StatusPanel] {
        &self.panels
    }
}

impl StatusSink for StatusLog {
    fn show(&mut self, panel: StatusPanel) {
        tracing::debug!(tone = ?panel.tone, "status: {}", panel.message);
        self.panels.push(panel);
    }
}
