//! OpenAPI document for the REST API.

use axum::Json;
use utoipa::OpenApi;

use crate::api::dto::company::{CompanyDetail, CompanyInput, CompanyItem, CompanyPatchInput};
use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::api::dto::product::{ProductDetail, ProductInput, ProductItem, ProductPatchInput};

#[derive(OpenApi)]
#[openapi(
    info(title = "Company catalog API"),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::companies::company_list_handler,
        crate::api::handlers::companies::create_company_handler,
        crate::api::handlers::companies::get_company_handler,
        crate::api::handlers::companies::replace_company_handler,
        crate::api::handlers::companies::update_company_handler,
        crate::api::handlers::companies::delete_company_handler,
        crate::api::handlers::products::product_list_handler,
        crate::api::handlers::products::create_product_handler,
        crate::api::handlers::products::get_product_handler,
        crate::api::handlers::products::replace_product_handler,
        crate::api::handlers::products::update_product_handler,
        crate::api::handlers::products::delete_product_handler,
    ),
    components(
        schemas(
            CompanyInput,
            CompanyPatchInput,
            CompanyItem,
            CompanyDetail,
            ProductInput,
            ProductPatchInput,
            ProductItem,
            ProductDetail,
            HealthResponse,
            HealthChecks,
            CheckStatus,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies"),
        (name = "products")
    )
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document.
///
/// # Endpoint
///
/// `GET /api/schema`
pub async fn schema_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for path in [
            "/health",
            "/companies/",
            "/companies/{id}/",
            "/products/",
            "/products/{id}/",
        ] {
            assert!(paths.contains(&path), "missing {path}");
        }
    }

    #[test]
    fn test_company_item_schema_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();

        assert!(components.schemas.contains_key("CompanyItem"));
        assert!(components.schemas.contains_key("ProductDetail"));
    }
}
