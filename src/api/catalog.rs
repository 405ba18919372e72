//! Catalog endpoints: books and categories

use validator::Validate;

use crate::{
    error::ApiResult,
    models::{
        book::{Book, BookFilter, Category, CategoryRequest, CreateBookRequest, UpdateBookRequest},
        response::Page,
    },
};

use super::ApiClient;

#[derive(Clone)]
pub struct CatalogClient {
    client: ApiClient,
}

impl CatalogClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List books with optional search/category/availability filters
    pub async fn list_books(&self, filter: &BookFilter) -> ApiResult<Page<Book>> {
        let page: Page<Book> = self.client.get_with_query("/livres", filter).await?;
        for book in &page.data {
            book.validate()?;
        }
        Ok(page)
    }

    pub async fn get_book(&self, id: i64) -> ApiResult<Book> {
        let book: Book = self.client.get(&format!("/livres/{}", id)).await?;
        book.validate()?;
        Ok(book)
    }

    /// Create a book (librarian/administrator; enforcement is server-side)
    pub async fn create_book(&self, request: &CreateBookRequest) -> ApiResult<Book> {
        request.validate()?;
        self.client.post("/livres", request).await
    }

    pub async fn update_book(&self, id: i64, request: &UpdateBookRequest) -> ApiResult<Book> {
        request.validate()?;
        self.client.put(&format!("/livres/{}", id), request).await
    }

    pub async fn delete_book(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/livres/{}", id)).await
    }

    /// Most-borrowed books for the home page
    pub async fn popular_books(&self) -> ApiResult<Vec<Book>> {
        self.client.get("/livres/populaires").await
    }

    /// Latest acquisitions
    pub async fn recent_books(&self) -> ApiResult<Vec<Book>> {
        self.client.get("/livres/nouveaux").await
    }

    pub async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.client.get("/categories").await
    }

    pub async fn create_category(&self, request: &CategoryRequest) -> ApiResult<Category> {
        request.validate()?;
        self.client.post("/categories", request).await
    }

    pub async fn update_category(&self, id: i64, request: &CategoryRequest) -> ApiResult<Category> {
        request.validate()?;
        self.client.put(&format!("/categories/{}", id), request).await
    }

    /// Delete a category. Fails with `Conflict` while books still reference it;
    /// the caller's cached lists must stay untouched in that case.
    pub async fn delete_category(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/categories/{}", id)).await
    }
}
