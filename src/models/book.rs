//! Book record as served by the spreadsheet backend

use serde::{Deserialize, Deserializer};

use super::cell;

/// Availability of a book, as labelled in the `Status` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BookStatus {
    #[serde(rename = "Tersedia")]
    Available,
    #[serde(rename = "Dipinjam")]
    Borrowed,
}

impl BookStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookStatus::Available => "Tersedia",
            BookStatus::Borrowed => "Dipinjam",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Tersedia" => Some(BookStatus::Available),
            "Dipinjam" => Some(BookStatus::Borrowed),
            _ => None,
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the books sheet.
///
/// The client never edits these; it holds a transient copy for rendering and
/// filtering and re-fetches after every write.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    #[serde(rename = "Kode", default, deserialize_with = "cell::text")]
    pub code: String,
    #[serde(rename = "Judul", default, deserialize_with = "cell::text")]
    pub title: String,
    #[serde(rename = "Pengarang", default, deserialize_with = "cell::text")]
    pub author: String,
    #[serde(rename = "Kategori", default, deserialize_with = "cell::text")]
    pub category: String,
    #[serde(rename = "Stok", default, deserialize_with = "cell::stock")]
    pub stock: u32,
    #[serde(rename = "Status", default, deserialize_with = "status_cell")]
    status: Option<BookStatus>,
}

impl Book {
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        stock: u32,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            author: author.into(),
            category: category.into(),
            stock,
            status: None,
        }
    }

    /// Pin an explicit status instead of deriving it from stock
    pub fn with_status(mut self, status: BookStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Explicit `Status` column when recognised, otherwise derived from stock.
    pub fn status(&self) -> BookStatus {
        self.status.unwrap_or(if self.stock > 0 {
            BookStatus::Available
        } else {
            BookStatus::Borrowed
        })
    }

    pub fn is_available(&self) -> bool {
        self.status() == BookStatus::Available
    }
}

fn status_cell<'de, D>(deserializer: D) -> Result<Option<BookStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = cell::text(deserializer)?;
    Ok(BookStatus::from_label(&label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_sheet_row() {
        let book: Book = serde_json::from_value(json!({
            "Kode": "B-001",
            "Judul": "Laskar Pelangi",
            "Pengarang": "Andrea Hirata",
            "Kategori": "Novel",
            "Stok": "3",
            "Status": "Tersedia"
        }))
        .unwrap();

        assert_eq!(book.code, "B-001");
        assert_eq!(book.stock, 3);
        assert_eq!(book.status(), BookStatus::Available);
    }

    #[test]
    fn explicit_status_wins_over_stock() {
        let book: Book = serde_json::from_value(json!({
            "Kode": "B-002",
            "Stok": 4,
            "Status": "Dipinjam"
        }))
        .unwrap();
        assert!(!book.is_available());
    }

    #[test]
    fn missing_or_unknown_status_is_derived_from_stock() {
        let in_stock: Book = serde_json::from_value(json!({"Kode": "B-3", "Stok": 1})).unwrap();
        let empty: Book =
            serde_json::from_value(json!({"Kode": "B-4", "Stok": 0, "Status": "Hilang"})).unwrap();

        assert_eq!(in_stock.status(), BookStatus::Available);
        assert_eq!(empty.status(), BookStatus::Borrowed);
    }
}
