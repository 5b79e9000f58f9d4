//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls
//! and business rules. Services consume repository traits and provide a clean
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::company_service::CompanyService`] - Companies with their embedded products
//! - [`services::product_service::ProductService`] - Products with their expanded company

pub mod services;
