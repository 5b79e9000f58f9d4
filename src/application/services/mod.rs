//! Business logic services for the application layer.

pub mod company_service;
pub mod product_service;

pub use company_service::CompanyService;
pub use product_service::ProductService;
