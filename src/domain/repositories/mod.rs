//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access behind the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CompanyRepository`] - Company CRUD operations
//! - [`ProductRepository`] - Product CRUD operations and per-company listing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod company_repository;
pub mod product_repository;

pub use company_repository::CompanyRepository;
pub use product_repository::ProductRepository;

#[cfg(test)]
pub use company_repository::MockCompanyRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
