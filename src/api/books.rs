//! Catalog pages

use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    models::{Action, Book, ListingError},
    render::{
        self,
        catalog::{render_catalog, render_filter_form},
        html_escape, Nav,
    },
    services::filter::{categories, filter_books},
    AppState,
};

/// Filter parameters of the catalog form
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Free text matched against title and author
    #[serde(default)]
    pub q: String,
    /// Exact category, empty for all
    #[serde(default)]
    pub kategori: String,
}

/// Fetch `getBooks` and keep the list for later filtering
pub(crate) async fn load_catalog(state: &AppState) -> Result<(Vec<Book>, DateTime<Utc>), ListingError> {
    let listing = state
        .services
        .gateway
        .fetch_data(Action::GetBooks)
        .await
        .books();

    match listing {
        Ok(books) => {
            let snapshot = state.services.cache.store_catalog(books).await;
            tracing::debug!("Cached {} catalog records", snapshot.books.len());
            Ok((snapshot.books, snapshot.fetched_at))
        }
        Err(e) => {
            tracing::error!("Catalog unavailable: {}", e);
            Err(e)
        }
    }
}

/// Catalog page: fetches the list, then applies any filter parameters
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Html<String> {
    let content = match load_catalog(&state).await {
        Ok((books, fetched_at)) => catalog_content(Ok(books.as_slice()), &query, Some(fetched_at)),
        Err(e) => catalog_content(Err(&e), &query, None),
    };
    Html(render::page("Daftar Buku", Nav::Books, &content))
}

/// Filter submission: runs against the cached list without re-fetching.
/// Falls back to a full load when nothing has been fetched yet.
pub async fn search_books(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Html<String> {
    match state.services.cache.catalog().await {
        Some(snapshot) => {
            let content = catalog_content(
                Ok(snapshot.books.as_slice()),
                &query,
                Some(snapshot.fetched_at),
            );
            Html(render::page("Daftar Buku", Nav::Books, &content))
        }
        None => list_books(State(state), Query(query)).await,
    }
}

fn catalog_content(
    listing: Result<&[Book], &ListingError>,
    query: &CatalogQuery,
    fetched_at: Option<DateTime<Utc>>,
) -> String {
    let (form, grid) = match listing {
        Ok(books) => {
            let shown = filter_books(books, &query.q, &query.kategori);
            (
                render_filter_form(&query.q, &query.kategori, &categories(books)),
                render_catalog(Ok(shown.as_slice()), !books.is_empty()),
            )
        }
        Err(e) => (
            render_filter_form(&query.q, &query.kategori, &[]),
            render_catalog(Err(e), false),
        ),
    };

    let freshness = fetched_at
        .map(|at| {
            format!(
                r#"<p class="text-muted small" id="catalogFetchedAt">Data per {} UTC</p>"#,
                html_escape(&at.format("%d-%m-%Y %H:%M:%S").to_string())
            )
        })
        .unwrap_or_default();

    format!("{form}{freshness}{grid}")
}
