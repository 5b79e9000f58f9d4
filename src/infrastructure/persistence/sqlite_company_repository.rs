//! SQLite implementation of company repository.

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Company, CompanyPatch, NewCompany};
use crate::domain::pagination::Window;
use crate::domain::repositories::CompanyRepository;
use crate::error::AppError;

const COMPANY_COLUMNS: &str = "id, identity_company, title, description, location, schedule";

/// Row type for mapping SQLite rows to [`Company`].
#[derive(sqlx::FromRow)]
struct CompanyRow {
    id: i64,
    identity_company: String,
    title: String,
    description: String,
    location: String,
    schedule: String,
}

impl From<CompanyRow> for Company {
    fn from(r: CompanyRow) -> Self {
        Company::new(
            r.id,
            r.identity_company,
            r.title,
            r.description,
            r.location,
            r.schedule,
        )
    }
}

/// SQLite repository for company storage and retrieval.
pub struct SqliteCompanyRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCompanyRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for SqliteCompanyRepository {
    async fn create(&self, new_company: NewCompany) -> Result<Company, AppError> {
        let row = sqlx::query_as::<_, CompanyRow>(&format!(
            r#"
            INSERT INTO companies (identity_company, title, description, location, schedule)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4().to_string())
        .bind(new_company.title)
        .bind(new_company.description)
        .bind(new_company.location)
        .bind(new_company.schedule)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, AppError> {
        let row = sqlx::query_as::<_, CompanyRow>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Company::from))
    }

    async fn find_by_ids(&self, ids: Vec<i64>) -> Result<Vec<Company>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new(format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE id IN ("));
        {
            let mut separated = query.separated(", ");
            for id in ids {
                separated.push_bind(id);
            }
            separated.push_unseparated(") ORDER BY id");
        }

        let rows = query
            .build_query_as::<CompanyRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let found: i64 =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM companies WHERE id = ?1)")
                .bind(id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(found != 0)
    }

    async fn list(&self, window: Window) -> Result<Vec<Company>, AppError> {
        let rows = sqlx::query_as::<_, CompanyRow>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies ORDER BY id LIMIT ?1 OFFSET ?2"
        ))
        .bind(window.sql_limit())
        .bind(window.sql_offset())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn update(&self, id: i64, patch: CompanyPatch) -> Result<Option<Company>, AppError> {
        let row = sqlx::query_as::<_, CompanyRow>(&format!(
            r#"
            UPDATE companies SET
                title       = COALESCE(?2, title),
                description = COALESCE(?3, description),
                location    = COALESCE(?4, location),
                schedule    = COALESCE(?5, schedule)
            WHERE id = ?1
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.location)
        .bind(patch.schedule)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Company::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = ?1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
