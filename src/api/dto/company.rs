//! DTOs for company endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::fields::{not_blank, trim};
use super::product::ProductItem;
use crate::domain::entities::{Company, CompanyPatch, CompanyWithProducts, NewCompany};
use crate::error::{AppError, NON_FIELD_ERRORS};

/// Request body for creating or replacing a company.
///
/// Every field is required.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CompanyInput {
    #[validate(
        required(message = "This field is required."),
        length(max = 150, message = "Ensure this field has no more than 150 characters."),
        custom(function = "not_blank")
    )]
    #[schema(example = "Valid data", max_length = 150)]
    pub title: Option<String>,

    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank")
    )]
    #[schema(example = "Valid test data")]
    pub description: Option<String>,

    #[validate(
        required(message = "This field is required."),
        length(max = 150, message = "Ensure this field has no more than 150 characters."),
        custom(function = "not_blank")
    )]
    #[schema(example = "J 240 s.right", max_length = 150)]
    pub location: Option<String>,

    #[validate(
        required(message = "This field is required."),
        length(max = 50, message = "Ensure this field has no more than 50 characters."),
        custom(function = "not_blank")
    )]
    #[schema(example = "8:30-17:30", max_length = 50)]
    pub schedule: Option<String>,
}

impl TryFrom<CompanyInput> for NewCompany {
    type Error = AppError;

    fn try_from(mut input: CompanyInput) -> Result<Self, AppError> {
        trim(&mut input.title);
        trim(&mut input.description);
        trim(&mut input.location);
        trim(&mut input.schedule);
        input.validate()?;

        let CompanyInput {
            title: Some(title),
            description: Some(description),
            location: Some(location),
            schedule: Some(schedule),
        } = input
        else {
            return Err(AppError::invalid_field(
                NON_FIELD_ERRORS,
                "Missing required fields.",
            ));
        };

        Ok(NewCompany {
            title,
            description,
            location,
            schedule,
        })
    }
}

/// Request body for a partial company update.
///
/// Omitted fields keep their stored values.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CompanyPatchInput {
    #[validate(
        length(max = 150, message = "Ensure this field has no more than 150 characters."),
        custom(function = "not_blank")
    )]
    pub title: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub description: Option<String>,

    #[validate(
        length(max = 150, message = "Ensure this field has no more than 150 characters."),
        custom(function = "not_blank")
    )]
    pub location: Option<String>,

    #[validate(
        length(max = 50, message = "Ensure this field has no more than 50 characters."),
        custom(function = "not_blank")
    )]
    pub schedule: Option<String>,
}

impl TryFrom<CompanyPatchInput> for CompanyPatch {
    type Error = AppError;

    fn try_from(mut input: CompanyPatchInput) -> Result<Self, AppError> {
        trim(&mut input.title);
        trim(&mut input.description);
        trim(&mut input.location);
        trim(&mut input.schedule);
        input.validate()?;

        Ok(CompanyPatch {
            title: input.title,
            description: input.description,
            location: input.location,
            schedule: input.schedule,
        })
    }
}

/// Company as returned by create and update, and when embedded in a product.
#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyItem {
    pub id: i64,
    /// Server-generated UUID, never changes.
    pub identity_company: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub schedule: String,
}

impl From<Company> for CompanyItem {
    fn from(c: Company) -> Self {
        Self {
            id: c.id,
            identity_company: c.identity_company,
            title: c.title,
            description: c.description,
            location: c.location,
            schedule: c.schedule,
        }
    }
}

/// Company with one window of its products, as returned by list and detail.
#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyDetail {
    pub id: i64,
    pub identity_company: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub schedule: String,
    pub products: Vec<ProductItem>,
}

impl From<CompanyWithProducts> for CompanyDetail {
    fn from(view: CompanyWithProducts) -> Self {
        let CompanyWithProducts { company, products } = view;

        Self {
            id: company.id,
            identity_company: company.identity_company,
            title: company.title,
            description: company.description,
            location: company.location,
            schedule: company.schedule,
            products: products.into_iter().map(ProductItem::from).collect(),
        }
    }
}
