//! Company management service.

use std::sync::Arc;

use crate::domain::entities::{Company, CompanyPatch, CompanyWithProducts, NewCompany};
use crate::domain::pagination::Window;
use crate::domain::repositories::{CompanyRepository, ProductRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for managing companies and rendering them with their products.
///
/// Products are embedded one window at a time; the window is independent of
/// the one used to page through companies.
pub struct CompanyService<C: CompanyRepository, P: ProductRepository> {
    company_repository: Arc<C>,
    product_repository: Arc<P>,
}

impl<C: CompanyRepository, P: ProductRepository> CompanyService<C, P> {
    /// Creates a new company service.
    pub fn new(company_repository: Arc<C>, product_repository: Arc<P>) -> Self {
        Self {
            company_repository,
            product_repository,
        }
    }

    /// Lists one window of companies, each with one window of its products.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_companies(
        &self,
        window: Window,
        product_window: Window,
    ) -> Result<Vec<CompanyWithProducts>, AppError> {
        let companies = self.company_repository.list(window).await?;

        let mut result = Vec::with_capacity(companies.len());
        for company in companies {
            result.push(self.with_products(company, product_window).await?);
        }

        Ok(result)
    }

    /// Creates a new company.
    ///
    /// The input is expected to be validated by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_company(&self, new_company: NewCompany) -> Result<Company, AppError> {
        let company = self.company_repository.create(new_company).await?;

        tracing::info!(
            company_id = company.id,
            identity = %company.identity_company,
            "Company created"
        );

        Ok(company)
    }

    /// Retrieves a company with one window of its products.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the company does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_company(
        &self,
        id: i64,
        product_window: Window,
    ) -> Result<CompanyWithProducts, AppError> {
        let company = self
            .company_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| company_not_found(id))?;

        self.with_products(company, product_window).await
    }

    /// Updates the given fields of a company.
    ///
    /// Used for both full (`PUT`) and partial (`PATCH`) updates; a full update
    /// is simply a patch with every field set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the company does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_company(&self, id: i64, patch: CompanyPatch) -> Result<Company, AppError> {
        if patch.is_empty() {
            return self
                .company_repository
                .find_by_id(id)
                .await?
                .ok_or_else(|| company_not_found(id));
        }

        let company = self
            .company_repository
            .update(id, patch)
            .await?
            .ok_or_else(|| company_not_found(id))?;

        tracing::info!(company_id = id, "Company updated");

        Ok(company)
    }

    /// Deletes a company together with all of its products.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the company does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_company(&self, id: i64) -> Result<(), AppError> {
        if !self.company_repository.delete(id).await? {
            return Err(company_not_found(id));
        }

        tracing::info!(company_id = id, "Company deleted with its products");

        Ok(())
    }

    /// Fails with [`AppError::NotFound`] unless the company exists.
    pub async fn ensure_exists(&self, id: i64) -> Result<(), AppError> {
        if !self.company_repository.exists(id).await? {
            return Err(company_not_found(id));
        }
        Ok(())
    }

    /// Counts all companies.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_companies(&self) -> Result<i64, AppError> {
        self.company_repository.count().await
    }

    async fn with_products(
        &self,
        company: Company,
        product_window: Window,
    ) -> Result<CompanyWithProducts, AppError> {
        let products = self
            .product_repository
            .list_by_company(company.id, product_window)
            .await?;

        Ok(CompanyWithProducts { company, products })
    }
}

fn company_not_found(id: i64) -> AppError {
    AppError::not_found("Company not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Product;
    use crate::domain::repositories::{MockCompanyRepository, MockProductRepository};

    fn company(id: i64, title: &str) -> Company {
        Company::new(
            id,
            format!("00000000-0000-4000-8000-{id:012}"),
            title.to_string(),
            "Test case description".to_string(),
            "L 120 right and left".to_string(),
            "8:00-17:00".to_string(),
        )
    }

    fn product(id: i64, attachment_id: i64) -> Product {
        Product::new(
            id,
            format!("11111111-0000-4000-8000-{id:012}"),
            format!("Product {id}"),
            "Description".to_string(),
            100,
            50,
            Some(attachment_id),
        )
    }

    fn service(
        companies: MockCompanyRepository,
        products: MockProductRepository,
    ) -> CompanyService<MockCompanyRepository, MockProductRepository> {
        CompanyService::new(Arc::new(companies), Arc::new(products))
    }

    #[tokio::test]
    async fn test_list_companies_embeds_products_with_product_window() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_list()
            .withf(|w| *w == Window::new(0, 10))
            .times(1)
            .returning(|_| Ok(vec![company(1, "A"), company(2, "B")]));

        let mut products = MockProductRepository::new();
        products
            .expect_list_by_company()
            .withf(|id, w| *id == 1 && *w == Window::new(0, 2))
            .times(1)
            .returning(|id, _| Ok(vec![product(10, id), product(11, id)]));
        products
            .expect_list_by_company()
            .withf(|id, w| *id == 2 && *w == Window::new(0, 2))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let result = service(companies, products)
            .list_companies(Window::default(), Window::new(0, 2))
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].products.len(), 2);
        assert!(result[1].products.is_empty());
    }

    #[tokio::test]
    async fn test_get_company_not_found() {
        let mut companies = MockCompanyRepository::new();
        companies.expect_find_by_id().times(1).returning(|_| Ok(None));

        let result = service(companies, MockProductRepository::new())
            .get_company(404, Window::default())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_company_success() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|id| Ok(Some(company(id, "Test case"))));

        let mut products = MockProductRepository::new();
        products
            .expect_list_by_company()
            .times(1)
            .returning(|id, _| Ok(vec![product(5, id)]));

        let view = service(companies, products)
            .get_company(1, Window::default())
            .await
            .unwrap();

        assert_eq!(view.company.title, "Test case");
        assert_eq!(view.products[0].attachment_id, Some(1));
    }

    #[tokio::test]
    async fn test_update_company_not_found() {
        let mut companies = MockCompanyRepository::new();
        companies.expect_update().times(1).returning(|_, _| Ok(None));

        let result = service(companies, MockProductRepository::new())
            .update_company(
                9,
                CompanyPatch {
                    title: Some("Valid title".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_company_passes_patch_through() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_update()
            .withf(|id, patch| {
                *id == 1 && patch.title.as_deref() == Some("Valid title") && patch.location.is_none()
            })
            .times(1)
            .returning(|id, _| Ok(Some(company(id, "Valid title"))));

        let updated = service(companies, MockProductRepository::new())
            .update_company(
                1,
                CompanyPatch {
                    title: Some("Valid title".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Valid title");
    }

    #[tokio::test]
    async fn test_update_company_empty_patch_skips_write() {
        let mut companies = MockCompanyRepository::new();
        companies.expect_update().never();
        companies
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(company(id, "Unchanged"))));

        let company = service(companies, MockProductRepository::new())
            .update_company(1, CompanyPatch::default())
            .await
            .unwrap();

        assert_eq!(company.title, "Unchanged");
    }

    #[tokio::test]
    async fn test_ensure_exists() {
        let mut companies = MockCompanyRepository::new();
        companies.expect_exists().returning(|id| Ok(id == 1));
        let service = service(companies, MockProductRepository::new());

        assert!(service.ensure_exists(1).await.is_ok());
        assert!(matches!(
            service.ensure_exists(2).await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_delete_company_not_found() {
        let mut companies = MockCompanyRepository::new();
        companies.expect_delete().times(1).returning(|_| Ok(false));

        let result = service(companies, MockProductRepository::new())
            .delete_company(3)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_company_success() {
        let mut companies = MockCompanyRepository::new();
        companies.expect_delete().times(1).returning(|_| Ok(true));

        let result = service(companies, MockProductRepository::new())
            .delete_company(3)
            .await;

        assert!(result.is_ok());
    }
}
