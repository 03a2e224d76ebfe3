//! Local catalog filter over already-fetched records

use crate::models::Book;

/// Books whose title or author contains `query` (case-insensitive) and whose
/// category equals `category` when it is non-empty. Input order is kept.
///
/// Categories compare trimmed, the same way [`categories`] offers them.
pub fn filter_books(books: &[Book], query: &str, category: &str) -> Vec<Book> {
    let needle = query.to_lowercase();
    let category = category.trim();

    books
        .iter()
        .filter(|book| category.is_empty() || book.category.trim() == category)
        .filter(|book| {
            needle.is_empty()
                || book.title.to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Distinct non-blank categories, in first-seen order
pub fn categories(books: &[Book]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for book in books {
        let category = book.category.trim();
        if !category.is_empty() && !seen.iter().any(|c| c == category) {
            seen.push(category.to_string());
        }
    }
    seen
}
