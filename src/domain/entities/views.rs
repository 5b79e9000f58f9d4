//! Read-side compositions of companies and products.
//!
//! Companies embed their products and products embed their company, but
//! never recursively: each view carries the related entity in its flat form.

use super::{Company, Product};

/// A company together with one page of its products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyWithProducts {
    pub company: Company,
    pub products: Vec<Product>,
}

/// A product together with the company it is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductWithCompany {
    pub product: Product,
    pub company: Option<Company>,
}
