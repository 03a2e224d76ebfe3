//! Admin pages: login gate, book table and book writes.
//!
//! The session flag only hides the dashboard; the backend does not check it.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Action, Book, FormFields, ListingError, StatusLog, StatusPanel},
    render::{
        self,
        admin::{render_admin_table, render_login_panel, render_logout_button, render_logout_confirm},
        forms::{book_fields, render_book_form},
        Nav,
    },
    services::session,
    AppState,
};

use super::AdminSession;

const TITLE: &str = "Admin Perpustakaan";

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogoutForm {
    #[serde(default)]
    pub confirm: Option<String>,
}

/// Dashboard when the flag is set, login panel otherwise
pub async fn admin_page(
    State(state): State<AppState>,
    AdminSession(logged_in): AdminSession,
) -> Html<String> {
    if !logged_in {
        return Html(login_page(None));
    }
    Html(dashboard(&state, &FormFields::default(), None, true).await)
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    match session::login(
        state.services.auth.as_ref(),
        jar,
        &form.username,
        &form.password,
    ) {
        Ok(jar) => {
            let page = dashboard(&state, &FormFields::default(), None, true).await;
            (jar, Html(page)).into_response()
        }
        Err(message) => Html(login_page(Some(message))).into_response(),
    }
}

/// Clears the flag once `confirm=true` is submitted; asks first otherwise.
pub async fn logout(jar: CookieJar, Form(form): Form<LogoutForm>) -> Response {
    let confirmed = form.confirm.as_deref() == Some("true");
    match session::logout(jar, confirmed) {
        Some(jar) => (jar, Redirect::to("/admin")).into_response(),
        None => Html(render::page(TITLE, Nav::Admin, &render_logout_confirm())).into_response(),
    }
}

/// Add or edit, depending on the hidden editing target
pub async fn save_book(
    State(state): State<AppState>,
    AdminSession(logged_in): AdminSession,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    if !logged_in {
        return Redirect::to("/admin").into_response();
    }

    let fields = FormFields::from_pairs(pairs);
    let mut status = StatusLog::new();
    let submission = state.services.forms.submit_book(&fields, &mut status).await;

    let values = if submission.reset_form {
        FormFields::default()
    } else {
        fields
    };
    Html(dashboard(&state, &values, status.current(), submission.refresh_listing).await)
        .into_response()
}

/// Dashboard with the form pre-filled for `kode`, code locked
pub async fn edit_book(
    State(state): State<AppState>,
    AdminSession(logged_in): AdminSession,
    Path(code): Path<String>,
) -> AppResult<Response> {
    if !logged_in {
        return Ok(Redirect::to("/admin").into_response());
    }

    let book = match state.services.cache.admin_book(&code).await {
        Some(book) => Some(book),
        None => load_admin(&state)
            .await
            .ok()
            .and_then(|books| books.into_iter().find(|b| b.code == code)),
    };
    let book = book.ok_or_else(|| AppError::NotFound(format!("Buku {} tidak ditemukan.", code)))?;

    Ok(Html(dashboard(&state, &book_fields(&book), None, false).await).into_response())
}

pub async fn delete_book(
    State(state): State<AppState>,
    AdminSession(logged_in): AdminSession,
    Path(code): Path<String>,
) -> Response {
    if !logged_in {
        return Redirect::to("/admin").into_response();
    }

    let mut status = StatusLog::new();
    let submission = state.services.forms.submit_delete(&code, &mut status).await;

    Html(
        dashboard(
            &state,
            &FormFields::default(),
            status.current(),
            submission.refresh_listing,
        )
        .await,
    )
    .into_response()
}

fn login_page(error: Option<&str>) -> String {
    render::page(TITLE, Nav::Admin, &render_login_panel(error))
}

/// Fetch `getBooksAdmin` and keep it for edit lookups
async fn load_admin(state: &AppState) -> Result<Vec<Book>, ListingError> {
    let listing = state
        .services
        .gateway
        .fetch_data(Action::GetBooksAdmin)
        .await
        .books();

    match listing {
        Ok(books) => Ok(state.services.cache.store_admin(books).await.books),
        Err(e) => {
            tracing::error!("Admin listing unavailable: {}", e);
            Err(e)
        }
    }
}

/// Render the dashboard; `refresh` forces a re-fetch, otherwise the cached
/// admin list is reused when there is one.
async fn dashboard(
    state: &AppState,
    values: &FormFields,
    panel: Option<&StatusPanel>,
    refresh: bool,
) -> String {
    let listing = match state.services.cache.admin().await {
        Some(snapshot) if !refresh => Ok(snapshot.books),
        _ => load_admin(state).await,
    };

    let content = format!(
        "{}{}{}",
        render_logout_button(),
        render_book_form(values, panel),
        render_admin_table(listing.as_deref()),
    );
    render::page(TITLE, Nav::Admin, &content)
}
