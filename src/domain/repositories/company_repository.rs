//! Repository trait for company data access.

use crate::domain::entities::{Company, CompanyPatch, NewCompany};
use crate::domain::pagination::Window;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing companies.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteCompanyRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_company.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Inserts a company and generates its external identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the generated identifier collides.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_company: NewCompany) -> Result<Company, AppError>;

    /// Finds a company by its internal ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, AppError>;

    /// Finds all companies whose IDs are in `ids`, ordered by ID.
    ///
    /// Unknown IDs are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_ids(&self, ids: Vec<i64>) -> Result<Vec<Company>, AppError>;

    /// Returns true if a company with the given ID exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;

    /// Lists one window of companies ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, window: Window) -> Result<Vec<Company>, AppError>;

    /// Applies a partial update.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Company))` with the stored state after the update
    /// - `Ok(None)` if no company has this ID
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: CompanyPatch) -> Result<Option<Company>, AppError>;

    /// Deletes a company and, through the foreign key, all of its products.
    ///
    /// Returns `false` if no company has this ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts all companies.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
