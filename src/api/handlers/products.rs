//! Handlers for product endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::product::{ProductDetail, ProductInput, ProductItem, ProductPatchInput};
use crate::domain::entities::{NewProduct, ProductPatch};
use crate::error::AppError;
use crate::state::AppState;

/// Lists products with their companies expanded.
///
/// # Endpoint
///
/// `GET /products?offset=&limit=`
///
/// # Errors
///
/// Returns 400 if a pagination parameter is malformed.
#[utoipa::path(
    get, path = "/products/", tag = "products",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of products", body = [ProductDetail]),
        (status = 400, description = "Invalid pagination parameters")
    )
)]
pub async fn product_list_handler(
    State(state): State<AppState>,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<Vec<ProductDetail>>, AppError> {
    let Query(params) = query?;
    let window = params.window();

    let products = state.product_service.list_products(window).await?;

    Ok(Json(products.into_iter().map(ProductDetail::from).collect()))
}

/// Creates a product.
///
/// # Endpoint
///
/// `POST /products`
///
/// The response expands `attachment` into the full company.
///
/// # Errors
///
/// Returns 400 with a field map if the body is invalid or `attachment`
/// names a company that does not exist.
#[utoipa::path(
    post, path = "/products/", tag = "products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = ProductDetail),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductDetail>), AppError> {
    let Json(input) = payload?;
    let new_product = NewProduct::try_from(input)?;

    let product = state.product_service.create_product(new_product).await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Retrieves a product with its company expanded.
///
/// # Endpoint
///
/// `GET /products/{id}`
///
/// # Errors
///
/// Returns 404 if the product does not exist.
#[utoipa::path(
    get, path = "/products/{id}/", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductDetail),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<ProductDetail>, AppError> {
    let Path(id) = path?;
    let product = state.product_service.get_product(id).await?;

    Ok(Json(product.into()))
}

/// Replaces every field of a product.
///
/// # Endpoint
///
/// `PUT /products/{id}`
///
/// Without an `attachment` key the current company is kept; `null` detaches
/// the product.
///
/// # Errors
///
/// Returns 400 with a field map if the body is invalid.
/// Returns 404 if the product does not exist.
#[utoipa::path(
    put, path = "/products/{id}/", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated", body = ProductItem),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn replace_product_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Json<ProductItem>, AppError> {
    let Path(id) = path?;
    state.product_service.ensure_exists(id).await?;
    let Json(input) = payload?;
    let patch = ProductPatch::try_from(input)?;

    let product = state.product_service.update_product(id, patch).await?;

    Ok(Json(product.into()))
}

/// Partially updates a product.
///
/// # Endpoint
///
/// `PATCH /products/{id}`
///
/// # Errors
///
/// Returns 400 with a field map if a supplied field is invalid.
/// Returns 404 if the product does not exist.
#[utoipa::path(
    patch, path = "/products/{id}/", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = ProductPatchInput,
    responses(
        (status = 200, description = "Product updated", body = ProductItem),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<ProductPatchInput>, JsonRejection>,
) -> Result<Json<ProductItem>, AppError> {
    let Path(id) = path?;
    state.product_service.ensure_exists(id).await?;
    let Json(input) = payload?;
    let patch = ProductPatch::try_from(input)?;

    let product = state.product_service.update_product(id, patch).await?;

    Ok(Json(product.into()))
}

/// Deletes a product.
///
/// # Endpoint
///
/// `DELETE /products/{id}`
///
/// # Errors
///
/// Returns 404 if the product does not exist.
#[utoipa::path(
    delete, path = "/products/{id}/", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.product_service.delete_product(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
