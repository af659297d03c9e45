//! Catalog service

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every book in insertion order
    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list_all().await
    }

    pub async fn count_books(&self) -> usize {
        self.repository.books.count().await
    }

    /// Validate a create request and store the book.
    ///
    /// Nothing is stored when validation fails.
    pub async fn create_book(&self, data: CreateBook) -> AppResult<Book> {
        let new_book = data.validate().map_err(|e| {
            tracing::debug!("Rejected book payload: {}", e);
            e
        })?;

        let book = self
            .repository
            .books
            .insert(new_book.title, new_book.author)
            .await;
        tracing::info!("Catalog create: id={} title={:?}", book.id, book.title);
        Ok(book)
    }
}
