//! DTOs for product endpoints.
//!
//! `price`, `quantity` and `attachment` are read as raw JSON values so that a
//! malformed number is reported against its own field instead of failing the
//! whole body.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::company::CompanyItem;
use super::fields::{amount, not_blank, parse_integer, parse_reference, trim};
use crate::domain::entities::{NewProduct, Product, ProductPatch, ProductWithCompany};
use crate::error::{AppError, NON_FIELD_ERRORS};

/// Request body for creating or replacing a product.
///
/// `attachment` may be omitted or `null` to leave the product unattached.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
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
        custom(function = "amount")
    )]
    #[schema(value_type = i64, minimum = 0, maximum = 2147483647, example = 100)]
    pub price: Option<Value>,

    #[validate(
        required(message = "This field is required."),
        custom(function = "amount")
    )]
    #[schema(value_type = i64, minimum = 0, maximum = 2147483647, example = 50)]
    pub quantity: Option<Value>,

    /// Id of the owning company.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i64>)]
    pub attachment: Option<Option<Value>>,
}

impl ProductInput {
    /// Whether the body carried an `attachment` key at all.
    pub fn has_attachment_key(&self) -> bool {
        self.attachment.is_some()
    }
}

impl TryFrom<ProductInput> for NewProduct {
    type Error = AppError;

    fn try_from(mut input: ProductInput) -> Result<Self, AppError> {
        trim(&mut input.title);
        trim(&mut input.description);
        let mut errors = input.validate().err().unwrap_or_else(ValidationErrors::new);
        let attachment_id = read_attachment(input.attachment.as_ref(), &mut errors);
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let (Some(title), Some(description), Some(price), Some(quantity)) = (
            input.title,
            input.description,
            input.price.as_ref().and_then(parse_integer),
            input.quantity.as_ref().and_then(parse_integer),
        ) else {
            return Err(AppError::invalid_field(
                NON_FIELD_ERRORS,
                "Missing required fields.",
            ));
        };

        Ok(NewProduct {
            title,
            description,
            price,
            quantity,
            attachment_id: attachment_id.flatten(),
        })
    }
}

/// Request body for a partial product update.
///
/// `attachment: null` detaches the product; omitting it keeps the current
/// company.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct ProductPatchInput {
    #[validate(
        length(max = 150, message = "Ensure this field has no more than 150 characters."),
        custom(function = "not_blank")
    )]
    pub title: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub description: Option<String>,

    #[validate(custom(function = "amount"))]
    #[schema(value_type = Option<i64>, minimum = 0, maximum = 2147483647)]
    pub price: Option<Value>,

    #[validate(custom(function = "amount"))]
    #[schema(value_type = Option<i64>, minimum = 0, maximum = 2147483647)]
    pub quantity: Option<Value>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i64>)]
    pub attachment: Option<Option<Value>>,
}

impl TryFrom<ProductPatchInput> for ProductPatch {
    type Error = AppError;

    fn try_from(mut input: ProductPatchInput) -> Result<Self, AppError> {
        trim(&mut input.title);
        trim(&mut input.description);
        let mut errors = input.validate().err().unwrap_or_else(ValidationErrors::new);
        let attachment_id = read_attachment(input.attachment.as_ref(), &mut errors);
        if !errors.is_empty() {
            return Err(errors.into());
        }

        Ok(ProductPatch {
            title: input.title,
            description: input.description,
            price: input.price.as_ref().and_then(parse_integer),
            quantity: input.quantity.as_ref().and_then(parse_integer),
            attachment_id,
        })
    }
}

/// Converts a full replacement body into a patch.
///
/// A `PUT` without an `attachment` key keeps the current company.
impl TryFrom<ProductInput> for ProductPatch {
    type Error = AppError;

    fn try_from(input: ProductInput) -> Result<Self, AppError> {
        let keep_attachment = !input.has_attachment_key();
        let new_product = NewProduct::try_from(input)?;

        Ok(ProductPatch {
            title: Some(new_product.title),
            description: Some(new_product.description),
            price: Some(new_product.price),
            quantity: Some(new_product.quantity),
            attachment_id: if keep_attachment {
                None
            } else {
                Some(new_product.attachment_id)
            },
        })
    }
}

/// `None` when the key was absent, `Some(None)` for `null`.
fn read_attachment(
    attachment: Option<&Option<Value>>,
    errors: &mut ValidationErrors,
) -> Option<Option<i64>> {
    let value = attachment?;
    let Some(value) = value else {
        return Some(None);
    };

    match parse_reference(value) {
        Ok(id) => Some(id),
        Err(e) => {
            errors.add("attachment", e);
            None
        }
    }
}

/// Product with its company id, as embedded in a company.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductItem {
    pub id: i64,
    /// Server-generated UUID, never changes.
    pub identity_product: String,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub quantity: i64,
    /// Id of the owning company, if any.
    pub attachment: Option<i64>,
}

impl From<Product> for ProductItem {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            identity_product: p.identity_product,
            title: p.title,
            description: p.description,
            price: p.price,
            quantity: p.quantity,
            attachment: p.attachment_id,
        }
    }
}

/// Product with its company expanded, as returned by list, detail and create.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetail {
    pub id: i64,
    pub identity_product: String,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub quantity: i64,
    pub attachment: Option<CompanyItem>,
}

impl From<ProductWithCompany> for ProductDetail {
    fn from(view: ProductWithCompany) -> Self {
        let ProductWithCompany { product, company } = view;

        Self {
            id: product.id,
            identity_product: product.identity_product,
            title: product.title,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            attachment: company.map(CompanyItem::from),
        }
    }
}
