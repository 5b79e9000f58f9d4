//! Handlers for company endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::api::dto::company::{CompanyDetail, CompanyInput, CompanyItem, CompanyPatchInput};
use crate::api::dto::pagination::{CompanyListParams, ProductPaginationParams};
use crate::domain::entities::{CompanyPatch, NewCompany};
use crate::error::AppError;
use crate::state::AppState;

/// Lists companies, each with a window of its products.
///
/// # Endpoint
///
/// `GET /companies?offset=&limit=&product_offset=&product_limit=`
///
/// # Errors
///
/// Returns 400 if a pagination parameter is malformed.
#[utoipa::path(
    get, path = "/companies/", tag = "companies",
    params(
        crate::api::dto::pagination::PaginationParams,
        ProductPaginationParams,
    ),
    responses(
        (status = 200, description = "One page of companies", body = [CompanyDetail]),
        (status = 400, description = "Invalid pagination parameters")
    )
)]
pub async fn company_list_handler(
    State(state): State<AppState>,
    query: Result<Query<CompanyListParams>, QueryRejection>,
) -> Result<Json<Vec<CompanyDetail>>, AppError> {
    let Query(params) = query?;
    let window = params.companies.window();
    let product_window = params.products.window();

    let companies = state
        .company_service
        .list_companies(window, product_window)
        .await?;

    Ok(Json(companies.into_iter().map(CompanyDetail::from).collect()))
}

/// Creates a company.
///
/// # Endpoint
///
/// `POST /companies`
///
/// # Errors
///
/// Returns 400 with a field map if the body is invalid.
#[utoipa::path(
    post, path = "/companies/", tag = "companies",
    request_body = CompanyInput,
    responses(
        (status = 201, description = "Company created", body = CompanyItem),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_company_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompanyInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyItem>), AppError> {
    let Json(input) = payload?;
    let new_company = NewCompany::try_from(input)?;

    let company = state.company_service.create_company(new_company).await?;

    Ok((StatusCode::CREATED, Json(company.into())))
}

/// Retrieves a company with a window of its products.
///
/// # Endpoint
///
/// `GET /companies/{id}?product_offset=&product_limit=`
///
/// # Errors
///
/// Returns 404 if the company does not exist.
#[utoipa::path(
    get, path = "/companies/{id}/", tag = "companies",
    params(
        ("id" = i64, Path, description = "Company ID"),
        ProductPaginationParams,
    ),
    responses(
        (status = 200, description = "Company found", body = CompanyDetail),
        (status = 404, description = "Company not found")
    )
)]
pub async fn get_company_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    query: Result<Query<ProductPaginationParams>, QueryRejection>,
) -> Result<Json<CompanyDetail>, AppError> {
    let Path(id) = path?;
    let Query(params) = query?;
    let product_window = params.window();

    let company = state.company_service.get_company(id, product_window).await?;

    Ok(Json(company.into()))
}

/// Replaces every field of a company.
///
/// # Endpoint
///
/// `PUT /companies/{id}`
///
/// `id` and `identity_company` are never changed.
///
/// # Errors
///
/// Returns 400 with a field map if the body is invalid.
/// Returns 404 if the company does not exist.
#[utoipa::path(
    put, path = "/companies/{id}/", tag = "companies",
    params(("id" = i64, Path, description = "Company ID")),
    request_body = CompanyInput,
    responses(
        (status = 200, description = "Company updated", body = CompanyItem),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Company not found")
    )
)]
pub async fn replace_company_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<CompanyInput>, JsonRejection>,
) -> Result<Json<CompanyItem>, AppError> {
    let Path(id) = path?;
    state.company_service.ensure_exists(id).await?;
    let Json(input) = payload?;
    let patch = CompanyPatch::from(NewCompany::try_from(input)?);

    let company = state.company_service.update_company(id, patch).await?;

    Ok(Json(company.into()))
}

/// Partially updates a company.
///
/// # Endpoint
///
/// `PATCH /companies/{id}`
///
/// Omitted fields keep their stored values.
///
/// # Errors
///
/// Returns 400 with a field map if a supplied field is invalid.
/// Returns 404 if the company does not exist.
#[utoipa::path(
    patch, path = "/companies/{id}/", tag = "companies",
    params(("id" = i64, Path, description = "Company ID")),
    request_body = CompanyPatchInput,
    responses(
        (status = 200, description = "Company updated", body = CompanyItem),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Company not found")
    )
)]
pub async fn update_company_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<CompanyPatchInput>, JsonRejection>,
) -> Result<Json<CompanyItem>, AppError> {
    let Path(id) = path?;
    state.company_service.ensure_exists(id).await?;
    let Json(input) = payload?;
    let patch = CompanyPatch::try_from(input)?;

    let company = state.company_service.update_company(id, patch).await?;

    Ok(Json(company.into()))
}

/// Deletes a company and every product attached to it.
///
/// # Endpoint
///
/// `DELETE /companies/{id}`
///
/// # Errors
///
/// Returns 404 if the company does not exist.
#[utoipa::path(
    delete, path = "/companies/{id}/", tag = "companies",
    params(("id" = i64, Path, description = "Company ID")),
    responses(
        (status = 204, description = "Company and its products deleted"),
        (status = 404, description = "Company not found")
    )
)]
pub async fn delete_company_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.company_service.delete_company(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
