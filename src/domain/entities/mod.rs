//! Core domain entities representing the catalog data model.
//!
//! Entities are plain data structures without persistence or HTTP concerns.
//!
//! # Entity Types
//!
//! - [`Company`] - An organisation that owns products
//! - [`Product`] - A product, optionally attached to a company
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for writes:
//! - `NewCompany`, `NewProduct` - For creating new records
//! - `CompanyPatch`, `ProductPatch` - For partial updates
//!
//! Nested read models live in [`views`].

pub mod company;
pub mod product;
pub mod views;

pub use company::{Company, CompanyPatch, NewCompany};
pub use product::{NewProduct, Product, ProductPatch};
pub use views::{CompanyWithProducts, ProductWithCompany};
