//! Status regions: message boxes, the return fee notification, error panels

use crate::models::StatusPanel;

use super::{format_rupiah, html_escape};

/// Single-line message box (`borrowMessage`, `adminMessage`). Hidden when
/// there is nothing to show.
pub fn message_box(id: &str, panel: Option<&StatusPanel>) -> String {
    match panel {
        None => format!(r#"<div id="{id}" class="alert d-none" role="alert"></div>"#),
        Some(panel) => format!(
            r#"<div id="{id}" class="alert {class}" role="alert">{message}</div>"#,
            class = panel.tone.alert_class(),
            message = html_escape(&panel.message),
        ),
    }
}

/// Return notification with heading and body; a fee line is appended for
/// successful returns.
pub fn fee_notification(panel: Option<&StatusPanel>) -> String {
    let Some(panel) = panel else {
        return r#"<div id="feeNotification" class="alert" role="alert" style="display: none;"><h5></h5><p></p></div>"#
            .to_string();
    };

    let body = match panel.fee {
        Some(fee) => format!(
            "{}. Total Denda: <b>{}</b>.",
            html_escape(panel.message.trim_end().trim_end_matches('.')),
            format_rupiah(fee)
        ),
        None => html_escape(&panel.message),
    };

    format!(
        r#"<div id="feeNotification" class="alert {class}" role="alert" style="display: block;"><h5>{heading}</h5><p>{body}</p></div>"#,
        class = panel.tone.alert_class(),
        heading = html_escape(panel.heading.as_deref().unwrap_or_default()),
        body = body,
    )
}

/// Inline error panel spanning a grid row
pub fn error_panel(message: &str) -> String {
    format!(
        r#"<div class="col-12"><div class="alert alert-danger" role="alert">{}</div></div>"#,
        html_escape(message)
    )
}
