//! Landing page

use axum::{extract::State, response::Html};

use crate::{
    models::Action,
    render::{self, stats::render_stats, Nav},
    AppState,
};

/// Landing page with the four library counters
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let stats = state
        .services
        .gateway
        .fetch_data(Action::GetStats)
        .await
        .stats();

    if let Err(e) = &stats {
        tracing::error!("Stats unavailable: {}", e);
    }

    Html(render::page(
        "Beranda",
        Nav::Home,
        &render_stats(stats.as_ref()),
    ))
}
