//! # Company Catalog
//!
//! A REST service for companies and the products attached to them, built
//! with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, pagination window and repository traits
//! - **Application Layer** ([`application`]) - Services orchestrating repositories
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations and repositories
//! - **API Layer** ([`api`]) - Handlers, DTOs, OpenAPI document and middleware
//!
//! ## Features
//!
//! - Limit/offset pagination, with an independent window over each
//!   company's embedded products
//! - Deleting a company deletes its products
//! - Field-keyed validation errors
//! - OpenAPI document at `/api/schema`
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://company-catalog.db"
//!
//! # Migrations run on start-up
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CompanyService, ProductService};
    pub use crate::domain::entities::{Company, NewCompany, NewProduct, Product};
    pub use crate::domain::pagination::Window;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
