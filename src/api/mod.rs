//! Page handlers and the per-page composition root

pub mod admin;
pub mod books;
pub mod borrow;
pub mod health;
pub mod home;
pub mod returns;

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{services::session, AppState};

/// Admin session flag read from the request cookies.
///
/// Extraction never fails: a missing or unexpected cookie reads as logged out.
pub struct AdminSession(pub bool);

#[async_trait]
impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(AdminSession(session::check_login(&jar)))
    }
}

/// Build the router. Each route declares the components its page uses.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Landing page: stats
        .route("/", get(home::home))
        // Catalog: fetch + filter, or filter the cached list only
        .route("/books", get(books::list_books))
        .route("/books/search", get(books::search_books))
        // Write forms
        .route("/borrow", get(borrow::borrow_page).post(borrow::submit_borrow))
        .route("/return", get(returns::return_page).post(returns::submit_return))
        // Admin
        .route("/admin", get(admin::admin_page))
        .route("/admin/login", post(admin::login))
        .route("/admin/logout", post(admin::logout))
        .route("/admin/books", post(admin::save_book))
        .route("/admin/books/:kode/edit", get(admin::edit_book))
        .route("/admin/books/:kode/delete", post(admin::delete_book))
        // Health
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
