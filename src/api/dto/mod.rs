//! Data Transfer Objects for API requests and responses.

pub mod company;
pub mod fields;
pub mod health;
pub mod pagination;
pub mod product;
