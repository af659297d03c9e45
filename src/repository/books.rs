//! In-memory book storage

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::book::{seed_books, Book};

struct Catalog {
    books: Vec<Book>,
    next_id: i64,
}

/// Ordered book collection plus id assignment.
///
/// Clones share the same underlying catalog.
#[derive(Clone)]
pub struct BooksRepository {
    inner: Arc<RwLock<Catalog>>,
}

impl BooksRepository {
    /// Create a repository holding `books` in the given order.
    ///
    /// The next id is one above the highest seeded id, or 1 when empty.
    pub fn seeded(books: Vec<Book>) -> Self {
        let next_id = books.iter().map(|b| b.id).max().map_or(1, |max| max + 1);
        Self {
            inner: Arc::new(RwLock::new(Catalog { books, next_id })),
        }
    }

    /// Create a repository holding the startup catalog
    pub fn with_default_seed() -> Self {
        Self::seeded(seed_books())
    }

    /// All books in insertion order
    pub async fn list_all(&self) -> Vec<Book> {
        self.inner.read().await.books.clone()
    }

    /// Number of books held
    pub async fn count(&self) -> usize {
        self.inner.read().await.books.len()
    }

    /// Append a book under the next id.
    ///
    /// Title and author must already be validated.
    pub async fn insert(&self, title: String, author: String) -> Book {
        let mut catalog = self.inner.write().await;
        let book = Book {
            id: catalog.next_id,
            title,
            author,
        };
        catalog.next_id += 1;
        catalog.books.push(book.clone());
        book
    }

    /// Id the next inserted book will receive
    pub async fn next_id(&self) -> i64 {
        self.inner.read().await.next_id
    }
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::with_default_seed()
    }
}
