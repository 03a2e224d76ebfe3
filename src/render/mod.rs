//! HTML rendering.
//!
//! Every function returns a complete fragment for its region, so rendering the
//! same region again replaces the previous output instead of appending to it.

pub mod admin;
pub mod catalog;
pub mod forms;
pub mod stats;
pub mod status;

use rust_decimal::Decimal;

/// Navigation entry highlighted in the page header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Books,
    Borrow,
    Return,
    Admin,
    None,
}

const NAV_LINKS: [(Nav, &str, &str); 5] = [
    (Nav::Home, "/", "Beranda"),
    (Nav::Books, "/books", "Daftar Buku"),
    (Nav::Borrow, "/borrow", "Peminjaman"),
    (Nav::Return, "/return", "Pengembalian"),
    (Nav::Admin, "/admin", "Admin"),
];

/// Full HTML document around `content`
pub fn page(title: &str, active: Nav, content: &str) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|(nav, href, label)| {
            let class = if *nav == active { "nav-link active" } else { "nav-link" };
            format!(r#"<li class="nav-item"><a class="{class}" href="{href}">{label}</a></li>"#)
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Perpustakaan</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
</head>
<body>
    <nav class="navbar navbar-expand navbar-dark" style="background-color: #0097A7;">
        <div class="container">
            <a class="navbar-brand fw-bold" href="/">Perpustakaan</a>
            <ul class="navbar-nav">{links}</ul>
        </div>
    </nav>
    <main class="container py-4">
        <h1 class="h3 mb-4">{title}</h1>
        {content}
    </main>
</body>
</html>"#,
        title = html_escape(title),
        links = links,
        content = content,
    )
}

/// Escape text for HTML element content and quoted attributes
pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Indonesian rupiah: `.` groups thousands, `,` separates at most three
/// fraction digits. `7000` renders as `Rp 7.000`.
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = amount.round_dp(3);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let text = rounded.abs().to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit);
    }

    if fraction.is_empty() {
        format!("Rp {sign}{grouped}")
    } else {
        format!("Rp {sign}{grouped},{fraction}")
    }
}
