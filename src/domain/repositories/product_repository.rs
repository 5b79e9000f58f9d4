//! Repository trait for product data access.

use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::domain::pagination::Window;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing products.
///
/// Foreign-key existence is checked by the service layer before writes; the
/// database constraint is the last line.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteProductRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_product.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts a product and generates its external identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the attachment does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError>;

    /// Finds a product by its internal ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Lists one window of all products ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, window: Window) -> Result<Vec<Product>, AppError>;

    /// Lists one window of the products attached to a company, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_company(
        &self,
        company_id: i64,
        window: Window,
    ) -> Result<Vec<Product>, AppError>;

    /// Applies a partial update.
    ///
    /// Returns `Ok(None)` if no product has this ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the new attachment does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: ProductPatch) -> Result<Option<Product>, AppError>;

    /// Deletes a product. Returns `false` if no product has this ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts all products.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
