//! Borrow page

use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};
use serde::Deserialize;

use crate::{
    models::{FormFields, StatusLog},
    render::{self, forms::render_borrow_form, Nav},
    AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct BorrowQuery {
    /// Code pre-filled from a catalog card
    pub kode: Option<String>,
}

pub async fn borrow_page(Query(query): Query<BorrowQuery>) -> Html<String> {
    let mut values = FormFields::default();
    if let Some(code) = query.kode.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        values.set("kodeBuku", code);
    }

    Html(render::page(
        "Peminjaman Buku",
        Nav::Borrow,
        &render_borrow_form(&values, None),
    ))
}

pub async fn submit_borrow(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Html<String> {
    let fields = FormFields::from_pairs(pairs);
    let mut status = StatusLog::new();
    let submission = state.services.forms.submit_borrow(&fields, &mut status).await;

    let values = if submission.reset_form {
        FormFields::default()
    } else {
        fields
    };

    Html(render::page(
        "Peminjaman Buku",
        Nav::Borrow,
        &render_borrow_form(&values, status.current()),
    ))
}
