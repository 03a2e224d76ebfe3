//! Return page

use axum::{extract::State, response::Html, Form};

use crate::{
    models::{Book, FormFields, ListingError, StatusLog, StatusPanel},
    render::{self, forms::render_return_form, Nav},
    services::forms::RETURN_MEMBER_FIELD,
    AppState,
};

use super::books::load_catalog;

pub async fn return_page(State(state): State<AppState>) -> Html<String> {
    let books = load_catalog(&state).await.map(|(books, _)| books);
    Html(return_content(books, "", None))
}

pub async fn submit_return(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Html<String> {
    let fields = FormFields::from_pairs(pairs);
    let mut status = StatusLog::new();
    let submission = state.services.forms.submit_return(&fields, &mut status).await;

    // Stock changed after a successful return; otherwise the cached list is
    // good enough to redraw the checkboxes.
    let books = match state.services.cache.catalog().await {
        Some(snapshot) if !submission.refresh_listing => Ok(snapshot.books),
        _ => load_catalog(&state).await.map(|(books, _)| books),
    };

    let member = if submission.reset_form {
        ""
    } else {
        fields.get(RETURN_MEMBER_FIELD).unwrap_or_default()
    };

    Html(return_content(books, member, status.current()))
}

fn return_content(
    books: Result<Vec<Book>, ListingError>,
    member: &str,
    panel: Option<&StatusPanel>,
) -> String {
    render::page(
        "Pengembalian Buku",
        Nav::Return,
        &render_return_form(books.as_deref(), member, panel),
    )
}
