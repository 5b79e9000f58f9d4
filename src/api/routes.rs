//! API route configuration.

use crate::api::handlers::{
    company_list_handler, create_company_handler, create_product_handler, delete_company_handler,
    delete_product_handler, get_company_handler, get_product_handler, product_list_handler,
    replace_company_handler, replace_product_handler, update_company_handler,
    update_product_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Company and product resource routes.
///
/// # Endpoints
///
/// - `GET    /companies`       - List companies with embedded products (paginated)
/// - `POST   /companies`       - Create a company
/// - `GET    /companies/{id}`  - Company with embedded products
/// - `PUT    /companies/{id}`  - Replace a company
/// - `PATCH  /companies/{id}`  - Partially update a company
/// - `DELETE /companies/{id}`  - Delete a company and its products
/// - `GET    /products`        - List products with expanded company (paginated)
/// - `POST   /products`        - Create a product
/// - `GET    /products/{id}`   - Product with expanded company
/// - `PUT    /products/{id}`   - Replace a product
/// - `PATCH  /products/{id}`   - Partially update a product
/// - `DELETE /products/{id}`   - Delete a product
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies",
            get(company_list_handler).post(create_company_handler),
        )
        .route(
            "/companies/{id}",
            get(get_company_handler)
                .put(replace_company_handler)
                .patch(update_company_handler)
                .delete(delete_company_handler),
        )
        .route(
            "/products",
            get(product_list_handler).post(create_product_handler),
        )
        .route(
            "/products/{id}",
            get(get_product_handler)
                .put(replace_product_handler)
                .patch(update_product_handler)
                .delete(delete_product_handler),
        )
}
