//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{CompanyService, ProductService};
use crate::infrastructure::persistence::{SqliteCompanyRepository, SqliteProductRepository};

pub type AppCompanyService = CompanyService<SqliteCompanyRepository, SqliteProductRepository>;
pub type AppProductService = ProductService<SqliteProductRepository, SqliteCompanyRepository>;

#[derive(Clone)]
pub struct AppState {
    pub company_service: Arc<AppCompanyService>,
    pub product_service: Arc<AppProductService>,
}

impl AppState {
    /// Wires repositories and services over one connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        let company_repository = Arc::new(SqliteCompanyRepository::new(pool.clone()));
        let product_repository = Arc::new(SqliteProductRepository::new(pool));

        Self {
            company_service: Arc::new(CompanyService::new(
                company_repository.clone(),
                product_repository.clone(),
            )),
            product_service: Arc::new(ProductService::new(product_repository, company_repository)),
        }
    }
}
