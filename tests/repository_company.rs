mod common;

use company_catalog::domain::entities::{CompanyPatch, NewCompany};
use company_catalog::domain::pagination::Window;
use company_catalog::domain::repositories::CompanyRepository;
use company_catalog::infrastructure::persistence::SqliteCompanyRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

fn new_company(title: &str) -> NewCompany {
    NewCompany {
        title: title.to_string(),
        description: "Valid test data".to_string(),
        location: "J 240 s.right".to_string(),
        schedule: "8:30-17:30".to_string(),
    }
}

#[sqlx::test]
async fn test_create_company(pool: SqlitePool) {
    let repo = SqliteCompanyRepository::new(Arc::new(pool));

    let company = repo.create(new_company("Valid data")).await.unwrap();

    assert_eq!(company.id, 1);
    assert_eq!(company.title, "Valid data");
    assert_eq!(company.schedule, "8:30-17:30");
    assert_eq!(company.identity_company.len(), 36);
}

#[sqlx::test]
async fn test_identities_are_unique(pool: SqlitePool) {
    let repo = SqliteCompanyRepository::new(Arc::new(pool));

    let a = repo.create(new_company("A")).await.unwrap();
    let b = repo.create(new_company("B")).await.unwrap();

    assert_ne!(a.identity_company, b.identity_company);
}

#[sqlx::test]
async fn test_find_by_id(pool: SqlitePool) {
    let repo = SqliteCompanyRepository::new(Arc::new(pool));
    let created = repo.create(new_company("Find me")).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));

    let missing = repo.find_by_id(999).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_find_by_ids(pool: SqlitePool) {
    let repo = SqliteCompanyRepository::new(Arc::new(pool));
    for title in ["A", "B", "C"] {
        repo.create(new_company(title)).await.unwrap();
    }

    let found = repo.find_by_ids(vec![1, 3, 42]).await.unwrap();
    let mut titles: Vec<_> = found.iter().map(|c| c.title.as_str()).collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["A", "C"]);

    assert!(repo.find_by_ids(vec![]).await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_exists(pool: SqlitePool) {
    let repo = SqliteCompanyRepository::new(Arc::new(pool));
    let created = repo.create(new_company("A")).await.unwrap();

    assert!(repo.exists(created.id).await.unwrap());
    assert!(!repo.exists(created.id + 1).await.unwrap());
}

#[sqlx::test]
async fn test_list_window(pool: SqlitePool) {
    let repo = SqliteCompanyRepository::new(Arc::new(pool));
    for i in 1..=5 {
        repo.create(new_company(&format!("Company {i}"))).await.unwrap();
    }

    let page = repo.list(Window::new(1, 3)).await.unwrap();
    let ids: Vec<i64> = page.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 3, 4]);

    assert!(repo.list(Window::new(5, 3)).await.unwrap().is_empty());
    assert_eq!(repo.list(Window::new(0, u64::MAX)).await.unwrap().len(), 5);
}

#[sqlx::test]
async fn test_update_partial(pool: SqlitePool) {
    let repo = SqliteCompanyRepository::new(Arc::new(pool));
    let created = repo.create(new_company("Before")).await.unwrap();

    let updated = repo
        .update(
            created.id,
            CompanyPatch {
                title: Some("After".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "After");
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.identity_company, created.identity_company);
}

#[sqlx::test]
async fn test_update_missing_returns_none(pool: SqlitePool) {
    let repo = SqliteCompanyRepository::new(Arc::new(pool));

    let result = repo
        .update(3, CompanyPatch::from(new_company("Nope")))
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_delete_and_count(pool: SqlitePool) {
    let repo = SqliteCompanyRepository::new(Arc::new(pool));
    let created = repo.create(new_company("A")).await.unwrap();
    repo.create(new_company("B")).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
async fn test_delete_cascades_products(pool: SqlitePool) {
    let repo = SqliteCompanyRepository::new(Arc::new(pool.clone()));
    let company_id = common::create_test_company(&pool, "Parent").await;
    common::create_test_product(&pool, "Child", Some(company_id)).await;
    common::create_test_product(&pool, "Orphan", None).await;

    assert!(repo.delete(company_id).await.unwrap());

    assert_eq!(common::count_products(&pool).await, 1);
}
