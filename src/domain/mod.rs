//! Domain layer containing business entities and data access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures and nested read views
//! - [`repositories`] - Data access trait definitions
//! - [`pagination`] - Limit/offset windows shared by listings
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod pagination;
pub mod repositories;
