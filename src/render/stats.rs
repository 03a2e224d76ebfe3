//! Landing page counters

use crate::models::{LibraryStats, ListingError};

const SLOTS: [(&str, &str); 4] = [
    ("totalBuku", "Total Buku"),
    ("bukuTersedia", "Buku Tersedia"),
    ("bukuDipinjam", "Buku Dipinjam"),
    ("totalAnggota", "Total Anggota"),
];

/// Four counter slots. On a failed fetch the total slot shows `Error` and the
/// others stay at zero.
pub fn render_stats(stats: Result<&LibraryStats, &ListingError>) -> String {
    let values: [String; 4] = match stats {
        Ok(s) => [
            s.total_books.to_string(),
            s.available.to_string(),
            s.borrowed.to_string(),
            s.members.to_string(),
        ],
        Err(_) => ["Error".into(), "0".into(), "0".into(), "0".into()],
    };

    let cards: String = SLOTS
        .iter()
        .zip(values.iter())
        .map(|((id, label), value)| {
            format!(
                r#"
    <div class="col">
        <div class="card text-center shadow-sm h-100">
            <div class="card-body">
                <p class="text-muted mb-1">{label}</p>
                <h2 class="fw-bold" id="{id}">{value}</h2>
            </div>
        </div>
    </div>"#
            )
        })
        .collect();

    format!(r#"<div class="row row-cols-2 row-cols-md-4 g-3" id="statsContainer">{cards}</div>"#)
}
