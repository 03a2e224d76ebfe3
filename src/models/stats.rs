//! Aggregate counters shown on the landing page

use serde::Deserialize;

use super::cell;

/// Read-only projection returned by `getStats`.
///
/// Fields are read from the top level of the response; a missing counter
/// counts as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct LibraryStats {
    #[serde(rename = "totalBuku", default, deserialize_with = "cell::count")]
    pub total_books: u64,
    #[serde(rename = "bukuTersedia", default, deserialize_with = "cell::count")]
    pub available: u64,
    #[serde(rename = "bukuDipinjam", default, deserialize_with = "cell::count")]
    pub borrowed: u64,
    #[serde(rename = "totalAnggota", default, deserialize_with = "cell::count")]
    pub members: u64,
}
