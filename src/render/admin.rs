//! Admin dashboard: book table and session panels

use crate::models::{Book, ListingError};

use super::html_escape;

const COLUMNS: usize = 7;

/// Table body with edit/delete controls keyed by book code
pub fn render_admin_table(listing: Result<&[Book], &ListingError>) -> String {
    let rows = match listing {
        Err(_) => format!(
            r#"<tr><td colspan="{COLUMNS}" class="text-center text-danger">Gagal memuat data buku. Periksa koneksi Apps Script Anda.</td></tr>"#
        ),
        Ok([]) => format!(
            r#"<tr><td colspan="{COLUMNS}" class="text-center text-muted">Belum ada data buku.</td></tr>"#
        ),
        Ok(books) => books.iter().map(admin_row).collect(),
    };

    format!(
        r#"<table class="table table-striped align-middle">
    <thead><tr><th>Kode</th><th>Judul</th><th>Pengarang</th><th>Kategori</th><th>Stok</th><th>Status</th><th>Aksi</th></tr></thead>
    <tbody id="adminBookTable">{rows}</tbody>
</table>"#
    )
}

fn admin_row(book: &Book) -> String {
    let code = html_escape(&book.code);
    let segment = html_escape(&urlencoding::encode(&book.code));
    let badge = if book.is_available() { "bg-success" } else { "bg-danger" };

    format!(
        r#"
        <tr data-kode="{code}">
            <td>{code}</td>
            <td>{title}</td>
            <td>{author}</td>
            <td>{category}</td>
            <td>{stock}</td>
            <td><span class="badge {badge}">{status}</span></td>
            <td class="text-nowrap">
                <a class="btn btn-sm btn-warning" href="/admin/books/{segment}/edit">Edit</a>
                <form class="d-inline" method="post" action="/admin/books/{segment}/delete">
                    <button type="submit" class="btn btn-sm btn-danger">Hapus</button>
                </form>
            </td>
        </tr>"#,
        title = html_escape(&book.title),
        author = html_escape(&book.author),
        category = html_escape(&book.category),
        stock = book.stock,
        status = book.status(),
    )
}

/// Login panel shown while the session flag is unset
pub fn render_login_panel(error: Option<&str>) -> String {
    let alert = match error {
        Some(message) => format!(
            r#"<div id="loginError" class="alert alert-danger" role="alert">{}</div>"#,
            html_escape(message)
        ),
        None => r#"<div id="loginError" class="alert alert-danger d-none" role="alert"></div>"#.to_string(),
    };

    format!(
        r#"<div id="loginSection" class="row justify-content-center">
    <div class="col-md-5">
        <div class="card shadow-sm">
            <div class="card-body">
                <h5 class="card-title mb-3">Login Admin</h5>
                {alert}
                <form id="loginForm" method="post" action="/admin/login">
                    <div class="mb-3"><label class="form-label" for="username">Username</label>
                        <input class="form-control" id="username" name="username" required></div>
                    <div class="mb-3"><label class="form-label" for="password">Password</label>
                        <input class="form-control" id="password" name="password" type="password" required></div>
                    <button type="submit" class="btn btn-info w-100">Masuk</button>
                </form>
            </div>
        </div>
    </div>
</div>"#
    )
}

/// Confirmation step before the session flag is cleared
pub fn render_logout_confirm() -> String {
    r#"<div id="logoutConfirm" class="alert alert-warning">
    <p>Yakin ingin keluar dari halaman admin?</p>
    <form method="post" action="/admin/logout" class="d-inline">
        <input type="hidden" name="confirm" value="true">
        <button type="submit" class="btn btn-danger btn-sm">Ya, Keluar</button>
    </form>
    <a href="/admin" class="btn btn-secondary btn-sm">Batal</a>
</div>"#
        .to_string()
}

/// Logout control shown on the dashboard
pub fn render_logout_button() -> String {
    r#"<form method="post" action="/admin/logout" class="text-end mb-3">
    <button type="submit" class="btn btn-outline-danger btn-sm">Logout</button>
</form>"#
        .to_string()
}
