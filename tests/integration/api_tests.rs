//! Portal integration tests
//!
//! Pages are driven in-process through the router against a stub gateway that
//! records every call.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        Request, StatusCode,
    },
    response::Response,
    Router,
};
use serde_json::{json, Map, Value};
use tower::ServiceExt;

use pustaka_portal::{
    api,
    config::AppConfig,
    models::{Action, FetchOutcome, WriteOutcome},
    services::{auth::PlaceholderCredentials, gateway::DataGateway, Services},
    AppState,
};

const BASE_URL: &str = "http://localhost:8080";
const ADMIN_COOKIE: &str = "isAdminLoggedIn=true";

/// Gateway double: canned read bodies per action, one canned write reply.
/// A read without a canned body behaves like an unreachable backend.
#[derive(Default)]
struct StubGateway {
    reads: Mutex<HashMap<Action, Value>>,
    write_reply: Mutex<Option<Value>>,
    reads_seen: Mutex<Vec<Action>>,
    writes_seen: Mutex<Vec<Map<String, Value>>>,
}

impl StubGateway {
    fn with_read(self, action: Action, body: Value) -> Self {
        self.reads.lock().unwrap().insert(action, body);
        self
    }

    fn with_write_reply(self, body: Value) -> Self {
        *self.write_reply.lock().unwrap() = Some(body);
        self
    }

    fn read_count(&self, action: Action) -> usize {
        self.reads_seen
            .lock()
            .unwrap()
            .iter()
            .filter(|a| **a == action)
            .count()
    }

    fn writes(&self) -> Vec<Map<String, Value>> {
        self.writes_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataGateway for StubGateway {
    async fn fetch_data(&self, action: Action) -> FetchOutcome {
        self.reads_seen.lock().unwrap().push(action);
        match self.reads.lock().unwrap().get(&action) {
            Some(body) => FetchOutcome::from_body(body.clone()),
            None => FetchOutcome::connection_failed(),
        }
    }

    async fn send_data(&self, payload: Map<String, Value>) -> WriteOutcome {
        self.writes_seen.lock().unwrap().push(payload);
        match self.write_reply.lock().unwrap().clone() {
            Some(body) => serde_json::from_value(body).expect("Invalid canned write reply"),
            None => WriteOutcome::connection_failed(),
        }
    }
}

fn catalog_body() -> Value {
    json!({
        "data": [
            {"Kode": "B-001", "Judul": "Laskar Pelangi", "Pengarang": "Andrea Hirata",
             "Kategori": "Novel", "Stok": 2, "Status": "Tersedia"},
            {"Kode": "B-002", "Judul": "Bumi Manusia", "Pengarang": "Pramoedya Ananta Toer",
             "Kategori": "Novel", "Stok": 0, "Status": "Dipinjam"},
            {"Kode": "B-003", "Judul": "Sejarah Indonesia Modern", "Pengarang": "M.C. Ricklefs",
             "Kategori": "Sejarah", "Stok": 1, "Status": "Tersedia"}
        ]
    })
}

fn app(stub: Arc<StubGateway>) -> Router {
    let config = AppConfig::default();
    let services = Services::with_gateway(
        stub,
        Arc::new(PlaceholderCredentials::new(&config.admin)),
    );
    api::router(AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    })
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone()
        .oneshot(request)
        .await
        .expect("Failed to send request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Invalid request")
}

fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("Invalid request")
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

fn set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[tokio::test]
async fn test_health_check() {
    let app = app(Arc::new(StubGateway::default()));

    let response = send(&app, get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_text(response).await).expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_unreachable_backend() {
    let app = app(Arc::new(StubGateway::default()));

    let response = send(&app, get("/ready")).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_home_shows_stats() {
    let stub = Arc::new(StubGateway::default().with_read(
        Action::GetStats,
        json!({"totalBuku": 10, "bukuTersedia": 7, "bukuDipinjam": 3, "totalAnggota": 5}),
    ));
    let app = app(stub);

    let html = body_text(send(&app, get("/")).await).await;
    assert!(html.contains(r#"id="totalBuku">10<"#));
    assert!(html.contains(r#"id="bukuDipinjam">3<"#));
    assert!(html.contains(r#"id="totalAnggota">5<"#));
}

#[tokio::test]
async fn test_home_survives_unreachable_backend() {
    let app = app(Arc::new(StubGateway::default()));

    let response = send(&app, get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#"id="totalBuku">Error<"#));
}

#[tokio::test]
async fn test_catalog_then_search_uses_cached_list() {
    let stub = Arc::new(StubGateway::default().with_read(Action::GetBooks, catalog_body()));
    let app = app(stub.clone());

    let html = body_text(send(&app, get("/books")).await).await;
    assert!(html.contains("Laskar Pelangi"));
    assert!(html.contains("Bumi Manusia"));
    assert!(html.contains(r#"<option value="Sejarah">Sejarah</option>"#));

    let html = body_text(send(&app, get("/books/search?q=HIRATA&kategori=")).await).await;
    assert!(html.contains("Laskar Pelangi"));
    assert!(!html.contains("Bumi Manusia"));

    let html = body_text(send(&app, get("/books/search?q=&kategori=Sejarah")).await).await;
    assert!(html.contains("Sejarah Indonesia Modern"));
    assert!(!html.contains("Laskar Pelangi"));

    let html = body_text(send(&app, get("/books/search?q=tidak-ada")).await).await;
    assert!(html.contains("Tidak ada buku yang sesuai dengan pencarian."));

    assert_eq!(stub.read_count(Action::GetBooks), 1);
}

#[tokio::test]
async fn test_search_before_any_fetch_loads_catalog() {
    let stub = Arc::new(StubGateway::default().with_read(Action::GetBooks, catalog_body()));
    let app = app(stub.clone());

    let html = body_text(send(&app, get("/books/search?q=bumi")).await).await;
    assert!(html.contains("Bumi Manusia"));
    assert_eq!(stub.read_count(Action::GetBooks), 1);
}

#[tokio::test]
async fn test_catalog_with_malformed_response_shows_error_panel() {
    let stub = Arc::new(
        StubGateway::default().with_read(Action::GetBooks, json!({"data": "not a list"})),
    );
    let app = app(stub);

    let html = body_text(send(&app, get("/books")).await).await;
    assert!(html.contains("Gagal memuat data buku. Periksa koneksi Apps Script Anda."));
}

#[tokio::test]
async fn test_borrow_page_prefills_code() {
    let app = app(Arc::new(StubGateway::default()));

    let html = body_text(send(&app, get("/borrow?kode=B-001")).await).await;
    assert!(html.contains(r#"name="kodeBuku" value="B-001""#));
}

#[tokio::test]
async fn test_borrow_submission() {
    let stub = Arc::new(
        StubGateway::default()
            .with_write_reply(json!({"success": true, "message": "Peminjaman berhasil dicatat untuk M-07."})),
    );
    let app = app(stub.clone());

    let response = send(
        &app,
        post_form("/borrow", "memberID=M-07&kodeBuku=B-001&tanggalPinjam=2026-10-01", None),
    )
    .await;
    let html = body_text(response).await;

    assert!(html.contains("alert-success"));
    assert!(html.contains("Peminjaman berhasil dicatat untuk M-07."));
    // Form was reset
    assert!(html.contains(r#"name="memberID" value="""#));

    let writes = stub.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0]["action"], "addBorrow");
    assert_eq!(writes[0]["memberID"], "M-07");
    assert_eq!(writes[0]["kodeBuku"], "B-001");
}

#[tokio::test]
async fn test_return_shows_fee() {
    let stub = Arc::new(
        StubGateway::default()
            .with_read(Action::GetBooks, catalog_body())
            .with_write_reply(json!({
                "success": true,
                "message": "2 buku berhasil dikembalikan.",
                "denda": 7000
            })),
    );
    let app = app(stub.clone());

    let response = send(
        &app,
        post_form(
            "/return",
            "memberIDReturn=M-01&booksToReturn%5B%5D=B-001&booksToReturn%5B%5D=B-002",
            None,
        ),
    )
    .await;
    let html = body_text(response).await;

    assert!(html.contains("Pengembalian Berhasil!"));
    assert!(html.contains("2 buku berhasil dikembalikan."));
    assert!(html.contains("Rp 7.000"));

    let writes = stub.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(
        Value::Object(writes[0].clone()),
        json!({"action": "processReturn", "memberID": "M-01", "books": ["B-001", "B-002"]})
    );
    // The list is re-fetched after a successful return
    assert_eq!(stub.read_count(Action::GetBooks), 1);
}

#[tokio::test]
async fn test_empty_return_never_reaches_backend() {
    let stub = Arc::new(StubGateway::default().with_read(Action::GetBooks, catalog_body()));
    let app = app(stub.clone());

    let html = body_text(send(&app, post_form("/return", "memberIDReturn=M-01", None)).await).await;

    assert!(html.contains("alert-warning"));
    assert!(html.contains("Pilih minimal satu buku untuk dikembalikan."));
    assert!(stub.writes().is_empty());
}

#[tokio::test]
async fn test_admin_requires_login() {
    let stub = Arc::new(StubGateway::default().with_read(Action::GetBooksAdmin, catalog_body()));
    let app = app(stub.clone());

    let html = body_text(send(&app, get("/admin")).await).await;
    assert!(html.contains(r#"id="loginForm""#));
    assert!(!html.contains("adminBookTable"));
    assert_eq!(stub.read_count(Action::GetBooksAdmin), 0);
}

#[tokio::test]
async fn test_login() {
    let stub = Arc::new(StubGateway::default().with_read(Action::GetBooksAdmin, catalog_body()));
    let app = app(stub.clone());

    let response = send(&app, post_form("/admin/login", "username=admin&password=admin123", None)).await;
    let cookie = set_cookie(&response).expect("No session cookie set");
    assert!(cookie.starts_with(ADMIN_COOKIE));

    let html = body_text(response).await;
    assert!(html.contains("adminBookTable"));
    assert!(html.contains(r#"href="/admin/books/B-002/edit""#));
    assert_eq!(stub.read_count(Action::GetBooksAdmin), 1);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let app = app(Arc::new(StubGateway::default()));

    let response = send(&app, post_form("/admin/login", "username=admin&password=wrong", None)).await;
    assert!(set_cookie(&response).is_none());
    assert!(body_text(response).await.contains("Username atau password salah!"));
}

#[tokio::test]
async fn test_logout_requires_confirmation() {
    let app = app(Arc::new(StubGateway::default()));

    let response = send(&app, post_form("/admin/logout", "", Some(ADMIN_COOKIE))).await;
    assert!(set_cookie(&response).is_none());
    assert!(body_text(response).await.contains("logoutConfirm"));

    let response = send(&app, post_form("/admin/logout", "confirm=true", Some(ADMIN_COOKIE))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/admin");
    let cookie = set_cookie(&response).expect("Session cookie not cleared");
    assert!(cookie.starts_with("isAdminLoggedIn=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_edit_book_refreshes_listing() {
    let stub = Arc::new(
        StubGateway::default()
            .with_read(Action::GetBooksAdmin, catalog_body())
            .with_write_reply(json!({"success": true, "message": "Buku diperbarui."})),
    );
    let app = app(stub.clone());

    let html = body_text(send(&app, get_with_cookie("/admin/books/B-003/edit")).await).await;
    assert!(html.contains("Edit Buku"));
    assert!(html.contains("readonly"));

    let response = send(
        &app,
        post_form(
            "/admin/books",
            "editingKode=B-003&kode=B-003&judul=Sejarah+Baru&pengarang=Ricklefs&kategori=Sejarah&stok=2",
            Some(ADMIN_COOKIE),
        ),
    )
    .await;
    let html = body_text(response).await;
    assert!(html.contains("Buku diperbarui."));
    assert!(html.contains("Tambah Buku"));

    let writes = stub.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0]["action"], "editBook");
    assert_eq!(writes[0]["kode"], "B-003");
    assert!(!writes[0].contains_key("editingKode"));
    // Once for the edit form, once after the successful write
    assert_eq!(stub.read_count(Action::GetBooksAdmin), 2);
}

#[tokio::test]
async fn test_edit_unknown_book_is_not_found() {
    let stub = Arc::new(StubGateway::default().with_read(Action::GetBooksAdmin, catalog_body()));
    let app = app(stub);

    let response = send(&app, get_with_cookie("/admin/books/B-404/edit")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_link_with_reserved_characters_resolves() {
    let stub = Arc::new(StubGateway::default().with_read(
        Action::GetBooksAdmin,
        json!({"data": [{"Kode": "A/1&2", "Judul": "Arsip Kota", "Pengarang": "Anonim",
                         "Kategori": "Umum", "Stok": 1}]}),
    ));
    let app = app(stub);

    let html = body_text(send(&app, get_with_cookie("/admin")).await).await;
    assert!(html.contains(r#"href="/admin/books/A%2F1%262/edit""#));

    let response = send(&app, get_with_cookie("/admin/books/A%2F1%262/edit")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"name="editingKode" value="A/1&amp;2""#));
}

#[tokio::test]
async fn test_empty_catalog_is_not_reported_as_no_match() {
    let stub = Arc::new(StubGateway::default().with_read(Action::GetBooks, json!({"data": []})));
    let app = app(stub);

    let html = body_text(send(&app, get("/books")).await).await;
    assert!(html.contains("Belum ada data buku."));
    assert!(!html.contains("Tidak ada buku yang sesuai dengan pencarian."));
}

#[tokio::test]
async fn test_admin_writes_need_session() {
    let stub = Arc::new(StubGateway::default().with_write_reply(json!({"success": true})));
    let app = app(stub.clone());

    let response = send(&app, post_form("/admin/books/B-001/delete", "", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(stub.writes().is_empty());
}

#[tokio::test]
async fn test_delete_book() {
    let stub = Arc::new(
        StubGateway::default()
            .with_read(Action::GetBooksAdmin, catalog_body())
            .with_write_reply(json!({"success": true, "message": "Buku B-001 dihapus."})),
    );
    let app = app(stub.clone());

    let html = body_text(send(&app, post_form("/admin/books/B-001/delete", "", Some(ADMIN_COOKIE))).await).await;
    assert!(html.contains("Buku B-001 dihapus."));

    let writes = stub.writes();
    assert_eq!(writes[0]["action"], "deleteBook");
    assert_eq!(writes[0]["kode"], "B-001");
}

fn get_with_cookie(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(COOKIE, ADMIN_COOKIE)
        .body(Body::empty())
        .expect("Invalid request")
}

#[tokio::test]
#[ignore] // Run against a live portal with: cargo test -- --ignored
async fn test_live_health_check() {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}
