//! Limit/offset query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use utoipa::IntoParams;

use crate::domain::pagination::{DEFAULT_LIMIT, Window};

/// Pagination over a top-level collection.
///
/// Uses `serde_with` to parse numbers from query strings; negative or
/// non-numeric values are rejected before reaching the handler. A zero
/// limit falls back to the default page size.
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Number of items to skip (default 0).
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[param(value_type = Option<u64>)]
    pub offset: Option<u64>,

    /// Maximum number of items to return (default 10).
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[param(value_type = Option<u64>)]
    pub limit: Option<u64>,
}

impl PaginationParams {
    /// Resolves defaults.
    pub fn window(&self) -> Window {
        resolve(self.offset, self.limit)
    }
}

/// Pagination over the products embedded in a company.
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductPaginationParams {
    /// Number of embedded products to skip (default 0).
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[param(value_type = Option<u64>)]
    pub product_offset: Option<u64>,

    /// Maximum number of embedded products per company (default 10).
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[param(value_type = Option<u64>)]
    pub product_limit: Option<u64>,
}

impl ProductPaginationParams {
    pub fn window(&self) -> Window {
        resolve(self.product_offset, self.product_limit)
    }
}

/// Query for the company list: one window over companies plus one over
/// each company's products.
#[derive(Debug, Default, Deserialize)]
pub struct CompanyListParams {
    #[serde(flatten)]
    pub companies: PaginationParams,

    #[serde(flatten)]
    pub products: ProductPaginationParams,
}

fn resolve(offset: Option<u64>, limit: Option<u64>) -> Window {
    let limit = limit.filter(|&l| l > 0).unwrap_or(DEFAULT_LIMIT);
    Window::new(offset.unwrap_or(0), limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::extract::{Query, rejection::QueryRejection};
    use axum::http::Uri;
    use serde::de::DeserializeOwned;

    fn parse<T: DeserializeOwned>(query: &str) -> Result<T, QueryRejection> {
        let uri: Uri = format!("/companies?{query}").parse().unwrap();
        Query::try_from_uri(&uri).map(|Query(params)| params)
    }

    #[test]
    fn test_defaults() {
        let params: PaginationParams = parse("").unwrap();
        assert_eq!(params.window(), Window::new(0, DEFAULT_LIMIT));
    }

    #[test]
    fn test_explicit_values() {
        let params: PaginationParams = parse("offset=20&limit=5").unwrap();
        assert_eq!(params.window(), Window::new(20, 5));
    }

    #[test]
    fn test_zero_limit_falls_back_to_default() {
        let params: PaginationParams = parse("offset=3&limit=0").unwrap();
        assert_eq!(params.window(), Window::new(3, DEFAULT_LIMIT));

        let params: ProductPaginationParams = parse("product_limit=0").unwrap();
        assert_eq!(params.window(), Window::new(0, DEFAULT_LIMIT));
    }

    #[test]
    fn test_negative_and_garbage_rejected() {
        assert!(parse::<PaginationParams>("offset=-1").is_err());
        assert!(parse::<PaginationParams>("limit=ten").is_err());
    }

    #[test]
    fn test_company_list_params_are_independent() {
        let params: CompanyListParams =
            parse("offset=1&limit=2&product_offset=3&product_limit=4").unwrap();

        assert_eq!(params.companies.window(), Window::new(1, 2));
        assert_eq!(params.products.window(), Window::new(3, 4));
    }

    #[test]
    fn test_unknown_parameters_ignored() {
        let params: CompanyListParams = parse("format=json&limit=3").unwrap();
        assert_eq!(params.companies.window(), Window::new(0, 3));
        assert_eq!(params.products.window(), Window::default());
    }
}
