//! Last-fetched record lists.
//!
//! Each list is replaced wholesale on every successful fetch and read back by
//! the filter and the renderers. The copies are advisory and may be stale.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::models::Book;

/// A fetched list and when it was fetched
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub books: Vec<Book>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct CacheState {
    catalog: Option<Snapshot>,
    admin: Option<Snapshot>,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogCache {
    inner: Arc<RwLock<CacheState>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn store_catalog(&self, books: Vec<Book>) -> Snapshot {
        let snapshot = Snapshot {
            books,
            fetched_at: Utc::now(),
        };
        self.inner.write().await.catalog = Some(snapshot.clone());
        snapshot
    }

    pub async fn catalog(&self) -> Option<Snapshot> {
        self.inner.read().await.catalog.clone()
    }

    pub async fn store_admin(&self, books: Vec<Book>) -> Snapshot {
        let snapshot = Snapshot {
            books,
            fetched_at: Utc::now(),
        };
        self.inner.write().await.admin = Some(snapshot.clone());
        snapshot
    }

    pub async fn admin(&self) -> Option<Snapshot> {
        self.inner.read().await.admin.clone()
    }

    /// Look a code up in the admin list
    pub async fn admin_book(&self, code: &str) -> Option<Book> {
        self.inner
            .read()
            .await
            .admin
            .as_ref()
            .and_then(|s| s.books.iter().find(|b| b.code == code).cloned())
    }
}
