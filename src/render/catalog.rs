//! Catalog grid and its filter form

use crate::models::{Book, ListingError};

use super::{html_escape, status::error_panel};

pub const LOAD_FAILED: &str = "Gagal memuat data buku. Periksa koneksi Apps Script Anda.";
pub const NO_MATCH: &str = "Tidak ada buku yang sesuai dengan pencarian.";
pub const EMPTY_CATALOG: &str = "Belum ada data buku.";

/// `bookListContainer` with one card per book, an empty-state message, or an
/// error panel when the listing could not be loaded.
///
/// `filtered` is set when the list shown is what a search left of a
/// non-empty catalog; an empty result then reads as "no match".
pub fn render_catalog(listing: Result<&[Book], &ListingError>, filtered: bool) -> String {
    let inner = match listing {
        Err(_) => error_panel(LOAD_FAILED),
        Ok([]) => format!(
            r#"<div class="col-12"><div class="alert alert-info text-center" role="alert">{}</div></div>"#,
            if filtered { NO_MATCH } else { EMPTY_CATALOG }
        ),
        Ok(books) => books.iter().map(book_card).collect(),
    };

    format!(
        r#"<div id="bookListContainer" class="row row-cols-1 row-cols-md-3 g-4">{inner}</div>"#
    )
}

fn book_card(book: &Book) -> String {
    let (status_class, border_class, button) = if book.is_available() {
        (
            "bg-success",
            "border-info",
            format!(
                r#"<a href="/borrow?kode={}" class="btn btn-sm btn-outline-info w-100">Pinjam (Detail)</a>"#,
                html_escape(&urlencoding::encode(&book.code))
            ),
        )
    } else {
        (
            "bg-danger",
            "border-danger",
            r#"<button class="btn btn-sm btn-outline-secondary w-100" disabled>Dipinjam</button>"#
                .to_string(),
        )
    };

    format!(
        r#"
    <div class="col">
        <div class="card h-100 shadow-sm border-2 {border_class}" data-kode="{code}">
            <div class="card-body">
                <span class="badge {status_class} float-end">{status}</span>
                <h5 class="card-title fw-bold" style="color: #0097A7;">{title}</h5>
                <p class="card-text text-muted mb-1">Penulis {author}</p>
                <p class="card-text"><small class="text-secondary">Kategori: {category}</small></p>
                {button}
            </div>
        </div>
    </div>"#,
        code = html_escape(&book.code),
        status = book.status(),
        title = html_escape(&book.title),
        author = html_escape(&book.author),
        category = html_escape(&book.category),
    )
}

/// Search form; submitting it filters the cached list without a re-fetch.
pub fn render_filter_form(query: &str, category: &str, categories: &[String]) -> String {
    let mut options = String::from(r#"<option value="">Semua Kategori</option>"#);
    for name in categories {
        let selected = if name == category { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{value}"{selected}>{value}</option>"#,
            value = html_escape(name),
        ));
    }

    format!(
        r#"<form id="filterForm" class="row g-2 mb-4" method="get" action="/books/search">
    <div class="col-md-7"><input type="search" class="form-control" name="q" placeholder="Cari judul atau penulis..." value="{query}"></div>
    <div class="col-md-3"><select class="form-select" name="kategori">{options}</select></div>
    <div class="col-md-2"><button type="submit" class="btn btn-info w-100">Cari</button></div>
</form>"#,
        query = html_escape(query),
    )
}
