//! Product management service.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product, ProductPatch, ProductWithCompany};
use crate::domain::pagination::Window;
use crate::domain::repositories::{CompanyRepository, ProductRepository};
use crate::error::AppError;
use serde_json::json;

/// Field name clients use for a product's company reference.
const ATTACHMENT_FIELD: &str = "attachment";

/// Service for managing products.
///
/// Enforces that a product's attachment refers to an existing company at
/// write time, and expands attachments into full companies on reads.
pub struct ProductService<P: ProductRepository, C: CompanyRepository> {
    product_repository: Arc<P>,
    company_repository: Arc<C>,
}

impl<P: ProductRepository, C: CompanyRepository> ProductService<P, C> {
    /// Creates a new product service.
    pub fn new(product_repository: Arc<P>, company_repository: Arc<C>) -> Self {
        Self {
            product_repository,
            company_repository,
        }
    }

    /// Lists one window of products with their companies expanded.
    ///
    /// Companies are loaded with a single batch lookup per page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_products(&self, window: Window) -> Result<Vec<ProductWithCompany>, AppError> {
        let products = self.product_repository.list(window).await?;

        let mut ids: Vec<i64> = products.iter().filter_map(|p| p.attachment_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let companies: HashMap<i64, _> = self
            .company_repository
            .find_by_ids(ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(products
            .into_iter()
            .map(|product| {
                let company = product
                    .attachment_id
                    .and_then(|id| companies.get(&id).cloned());
                ProductWithCompany { product, company }
            })
            .collect())
    }

    /// Creates a product and returns it with its company expanded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the attachment does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_product(
        &self,
        new_product: NewProduct,
    ) -> Result<ProductWithCompany, AppError> {
        self.ensure_attachment_exists(new_product.attachment_id)
            .await?;

        let product = self.product_repository.create(new_product).await?;

        tracing::info!(
            product_id = product.id,
            identity = %product.identity_product,
            attachment_id = ?product.attachment_id,
            "Product created"
        );

        self.expand(product).await
    }

    /// Retrieves a product with its company expanded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_product(&self, id: i64) -> Result<ProductWithCompany, AppError> {
        let product = self
            .product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| product_not_found(id))?;

        self.expand(product).await
    }

    /// Updates the given fields of a product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    /// Returns [`AppError::Validation`] if the new attachment does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_product(&self, id: i64, patch: ProductPatch) -> Result<Product, AppError> {
        self.ensure_attachment_exists(patch.new_attachment()).await?;

        let product = self
            .product_repository
            .update(id, patch)
            .await?
            .ok_or_else(|| product_not_found(id))?;

        tracing::info!(
            product_id = id,
            attached = product.is_attached(),
            "Product updated"
        );

        Ok(product)
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_product(&self, id: i64) -> Result<(), AppError> {
        if !self.product_repository.delete(id).await? {
            return Err(product_not_found(id));
        }

        tracing::info!(product_id = id, "Product deleted");

        Ok(())
    }

    /// Fails with [`AppError::NotFound`] unless the product exists.
    pub async fn ensure_exists(&self, id: i64) -> Result<(), AppError> {
        if self.product_repository.find_by_id(id).await?.is_none() {
            return Err(product_not_found(id));
        }
        Ok(())
    }

    /// Counts all products.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_products(&self) -> Result<i64, AppError> {
        self.product_repository.count().await
    }

    async fn ensure_attachment_exists(&self, attachment_id: Option<i64>) -> Result<(), AppError> {
        let Some(company_id) = attachment_id else {
            return Ok(());
        };

        if !self.company_repository.exists(company_id).await? {
            return Err(AppError::does_not_exist(ATTACHMENT_FIELD, company_id));
        }

        Ok(())
    }

    async fn expand(&self, product: Product) -> Result<ProductWithCompany, AppError> {
        let company = match product.attachment_id {
            Some(company_id) => self.company_repository.find_by_id(company_id).await?,
            None => None,
        };

        Ok(ProductWithCompany { product, company })
    }
}

fn product_not_found(id: i64) -> AppError {
    AppError::not_found("Product not found", json!({ "id": id }))
}
