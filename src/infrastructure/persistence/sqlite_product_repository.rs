//! SQLite implementation of product repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::domain::pagination::Window;
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

const PRODUCT_COLUMNS: &str =
    "id, identity_product, title, description, price, quantity, attachment_id";

/// Row type for mapping SQLite rows to [`Product`].
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    identity_product: String,
    title: String,
    description: String,
    price: i64,
    quantity: i64,
    attachment_id: Option<i64>,
}

impl From<ProductRow> for Product {
    fn from(r: ProductRow) -> Self {
        Product::new(
            r.id,
            r.identity_product,
            r.title,
            r.description,
            r.price,
            r.quantity,
            r.attachment_id,
        )
    }
}

/// Maps a foreign-key violation on `attachment_id` to a field error.
///
/// The service checks the attachment before writing; this covers a company
/// deleted between that check and the statement.
fn map_attachment_error(e: sqlx::Error, attachment_id: Option<i64>) -> AppError {
    if let (Some(db), Some(id)) = (e.as_database_error(), attachment_id)
        && db.is_foreign_key_violation()
    {
        return AppError::does_not_exist("attachment", id);
    }

    AppError::from(e)
}

/// SQLite repository for product storage and retrieval.
pub struct SqliteProductRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let attachment_id = new_product.attachment_id;

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            INSERT INTO products (identity_product, title, description, price, quantity, attachment_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4().to_string())
        .bind(new_product.title)
        .bind(new_product.description)
        .bind(new_product.price)
        .bind(new_product.quantity)
        .bind(attachment_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_attachment_error(e, attachment_id))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn list(&self, window: Window) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id LIMIT ?1 OFFSET ?2"
        ))
        .bind(window.sql_limit())
        .bind(window.sql_offset())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn list_by_company(
        &self,
        company_id: i64,
        window: Window,
    ) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS} FROM products
            WHERE attachment_id = ?1
            ORDER BY id
            LIMIT ?2 OFFSET ?3
            "#
        ))
        .bind(company_id)
        .bind(window.sql_limit())
        .bind(window.sql_offset())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn update(&self, id: i64, patch: ProductPatch) -> Result<Option<Product>, AppError> {
        let update_attachment = patch.attachment_id.is_some();
        let new_attachment = patch.new_attachment();

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            UPDATE products SET
                title         = COALESCE(?2, title),
                description   = COALESCE(?3, description),
                price         = COALESCE(?4, price),
                quantity      = COALESCE(?5, quantity),
                attachment_id = CASE WHEN ?6 THEN ?7 ELSE attachment_id END
            WHERE id = ?1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.price)
        .bind(patch.quantity)
        .bind(update_attachment)
        .bind(new_attachment)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_attachment_error(e, new_attachment))?;

        Ok(row.map(Product::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
