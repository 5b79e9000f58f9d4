//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row types.
//!
//! # Repositories
//!
//! - [`SqliteCompanyRepository`] - Company storage and retrieval
//! - [`SqliteProductRepository`] - Product storage, per-company listing
//!
//! Pool construction and migrations live in [`pool`].

pub mod pool;
pub mod sqlite_company_repository;
pub mod sqlite_product_repository;

pub use pool::MIGRATOR;
pub use sqlite_company_repository::SqliteCompanyRepository;
pub use sqlite_product_repository::SqliteProductRepository;
