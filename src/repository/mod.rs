//! Repository layer for catalog storage

pub mod books;

/// Main repository struct holding the process-local stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository seeded with the startup catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository around an existing book store
    pub fn with_books(books: books::BooksRepository) -> Self {
        Self { books }
    }
}
