//! Book (livre) and category models

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ApiError, ApiResult};

/// ISBN as the backend accepts it: 10 to 17 digits and hyphens
static ISBN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9-]{10,17}$").unwrap());

/// Catalog book snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(rename = "auteur")]
    pub author: String,
    pub isbn: String,
    #[serde(rename = "editeur")]
    pub publisher: Option<String>,
    #[serde(rename = "annee_publication")]
    pub publication_year: Option<i32>,
    #[serde(rename = "nombre_pages")]
    pub page_count: Option<i32>,
    #[serde(rename = "langue")]
    pub language: Option<String>,
    #[serde(rename = "resume")]
    pub summary: Option<String>,
    #[serde(rename = "image_couverture")]
    pub cover_url: Option<String>,
    #[serde(rename = "categorie")]
    pub category: Option<Category>,
    #[serde(rename = "nombre_exemplaires")]
    pub total_copies: Option<i64>,
    #[serde(rename = "exemplaires_disponibles")]
    pub available_copies: Option<i64>,
    #[serde(rename = "est_disponible")]
    pub is_available: Option<bool>,
    pub created_at: Option<String>,
}

impl Book {
    pub fn total_copies(&self) -> i64 {
        self.total_copies.unwrap_or(0)
    }

    pub fn available_copies(&self) -> i64 {
        self.available_copies.unwrap_or(0)
    }

    /// Check copy-count invariants: `0 <= available <= total`.
    pub fn validate(&self) -> ApiResult<()> {
        let total = self.total_copies();
        let available = self.available_copies();
        if total < 0 || available < 0 || available > total {
            return Err(ApiError::MalformedEntity(format!(
                "book {} reports {} available of {} copies",
                self.id, available, total
            )));
        }
        if !ISBN_PATTERN.is_match(&self.isbn) {
            return Err(ApiError::MalformedEntity(format!(
                "book {} has malformed ISBN '{}'",
                self.id, self.isbn
            )));
        }
        Ok(())
    }
}

/// Book category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "nom")]
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "livres_count")]
    pub book_count: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Summary of a book inside a loan or reservation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: i64,
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(rename = "auteur")]
    pub author: String,
    #[serde(rename = "image_couverture")]
    pub cover_url: Option<String>,
}

/// Create book request (librarian/administrator)
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateBookRequest {
    #[serde(rename = "titre")]
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    #[serde(rename = "auteur")]
    #[validate(length(min = 1, max = 255, message = "Author is required"))]
    pub author: String,
    #[validate(length(min = 10, max = 17, message = "ISBN must be 10-17 characters"))]
    pub isbn: String,
    #[serde(rename = "editeur", skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(rename = "annee_publication", skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(rename = "nombre_pages", skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i32>,
    #[serde(rename = "langue", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "categorie_id", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(rename = "resume", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(rename = "image_couverture", skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(rename = "nombre_exemplaires")]
    #[validate(range(min = 1, message = "At least one copy is required"))]
    pub total_copies: i64,
}

/// Partial update; omitted fields are left untouched server-side
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateBookRequest {
    #[serde(rename = "titre", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "auteur", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(rename = "editeur", skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(rename = "annee_publication", skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(rename = "nombre_pages", skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i32>,
    #[serde(rename = "langue", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "categorie_id", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(rename = "resume", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(rename = "nombre_exemplaires", skip_serializing_if = "Option::is_none")]
    pub total_copies: Option<i64>,
}

/// Create/update category request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CategoryRequest {
    #[serde(rename = "nom")]
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
}

/// Catalog listing filter
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "categorie_id", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(rename = "disponible", skip_serializing_if = "Option::is_none")]
    pub available_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(rename = "per_page", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}
