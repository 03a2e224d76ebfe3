//! Borrow, return and book editing forms

use crate::{
    models::{Book, FormFields, ListingError, StatusPanel},
    services::forms::{EDITING_FIELD, RETURN_BOOKS_FIELD, RETURN_MEMBER_FIELD},
};

use super::{html_escape, status};

fn value_of(values: &FormFields, name: &str) -> String {
    html_escape(values.get(name).unwrap_or_default())
}

/// Borrow form. `values` pre-fills fields (a catalog link passes `kodeBuku`).
pub fn render_borrow_form(values: &FormFields, panel: Option<&StatusPanel>) -> String {
    format!(
        r#"<form id="borrowForm" method="post" action="/borrow" class="card card-body shadow-sm">
    <div class="mb-3"><label class="form-label" for="memberID">ID Anggota</label>
        <input class="form-control" id="memberID" name="memberID" value="{member}" required></div>
    <div class="mb-3"><label class="form-label" for="kodeBuku">Kode Buku</label>
        <input class="form-control" id="kodeBuku" name="kodeBuku" value="{code}" required></div>
    <div class="mb-3"><label class="form-label" for="tanggalPinjam">Tanggal Pinjam</label>
        <input class="form-control" id="tanggalPinjam" name="tanggalPinjam" type="date" value="{date}"></div>
    <button type="submit" class="btn btn-info">Catat Peminjaman</button>
</form>
<div class="mt-3">{message}</div>"#,
        member = value_of(values, "memberID"),
        code = value_of(values, "kodeBuku"),
        date = value_of(values, "tanggalPinjam"),
        message = status::message_box("borrowMessage", panel),
    )
}

/// Return form with a checkbox per catalog book. Availability only says
/// whether copies remain, so every title stays selectable.
pub fn render_return_form(
    books: Result<&[Book], &ListingError>,
    member: &str,
    panel: Option<&StatusPanel>,
) -> String {
    let choices = match books {
        Err(_) => r#"<p class="text-danger">Gagal memuat daftar buku.</p>"#.to_string(),
        Ok([]) => r#"<p class="text-muted">Belum ada data buku.</p>"#.to_string(),
        Ok(books) => books
            .iter()
            .map(|book| {
                let code = html_escape(&book.code);
                format!(
                    r#"
        <div class="form-check">
            <input class="form-check-input" type="checkbox" name="{RETURN_BOOKS_FIELD}" value="{code}" id="return-{code}">
            <label class="form-check-label" for="return-{code}">{code} - {title}</label>
        </div>"#,
                    title = html_escape(&book.title),
                )
            })
            .collect(),
    };

    format!(
        r#"<form id="returnForm" method="post" action="/return" class="card card-body shadow-sm">
    <div class="mb-3"><label class="form-label" for="{RETURN_MEMBER_FIELD}">ID Anggota</label>
        <input class="form-control" id="{RETURN_MEMBER_FIELD}" name="{RETURN_MEMBER_FIELD}" value="{member}" required></div>
    <fieldset class="mb-3"><legend class="fs-6">Buku yang dikembalikan</legend>{choices}</fieldset>
    <button type="submit" class="btn btn-info">Proses Pengembalian</button>
</form>
<div class="mt-3">{notification}</div>"#,
        member = html_escape(member),
        notification = status::fee_notification(panel),
    )
}

/// Field values for editing `book`, including the locked editing target
pub fn book_fields(book: &Book) -> FormFields {
    FormFields::from_pairs([
        (EDITING_FIELD, book.code.clone()),
        ("kode", book.code.clone()),
        ("judul", book.title.clone()),
        ("pengarang", book.author.clone()),
        ("kategori", book.category.clone()),
        ("stok", book.stock.to_string()),
    ])
}

/// Add/edit form. A non-blank editing target switches to edit mode and makes
/// the code field read-only.
pub fn render_book_form(values: &FormFields, panel: Option<&StatusPanel>) -> String {
    let editing = values.non_empty(EDITING_FIELD);
    let (heading, code_attr, submit) = match editing {
        Some(_) => ("Edit Buku", " readonly", "Simpan Perubahan"),
        None => ("Tambah Buku", "", "Tambah Buku"),
    };
    let cancel = if editing.is_some() {
        r#"<a href="/admin" class="btn btn-secondary ms-2">Batal</a>"#
    } else {
        ""
    };

    format!(
        r#"<form id="bookForm" method="post" action="/admin/books" class="card card-body shadow-sm mb-4">
    <h5 class="card-title">{heading}</h5>
    <input type="hidden" name="{EDITING_FIELD}" value="{editing_value}">
    <div class="row g-2">
        <div class="col-md-2"><input class="form-control" name="kode" placeholder="Kode" value="{code}" required{code_attr}></div>
        <div class="col-md-3"><input class="form-control" name="judul" placeholder="Judul" value="{title}" required></div>
        <div class="col-md-3"><input class="form-control" name="pengarang" placeholder="Pengarang" value="{author}"></div>
        <div class="col-md-2"><input class="form-control" name="kategori" placeholder="Kategori" value="{category}"></div>
        <div class="col-md-2"><input class="form-control" name="stok" type="number" min="0" placeholder="Stok" value="{stock}"></div>
    </div>
    <div class="mt-3"><button type="submit" class="btn btn-info">{submit}</button>{cancel}</div>
</form>
{message}"#,
        editing_value = html_escape(editing.unwrap_or_default()),
        code = value_of(values, "kode"),
        title = value_of(values, "judul"),
        author = value_of(values, "pengarang"),
        category = value_of(values, "kategori"),
        stock = value_of(values, "stok"),
        message = status::message_box("adminMessage", panel),
    )
}
