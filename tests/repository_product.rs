mod common;

use company_catalog::AppError;
use company_catalog::domain::entities::{NewProduct, ProductPatch};
use company_catalog::domain::pagination::Window;
use company_catalog::domain::repositories::ProductRepository;
use company_catalog::infrastructure::persistence::SqliteProductRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

fn new_product(title: &str, attachment_id: Option<i64>) -> NewProduct {
    NewProduct {
        title: title.to_string(),
        description: "Valid test data".to_string(),
        price: 100,
        quantity: 50,
        attachment_id,
    }
}

#[sqlx::test]
async fn test_create_product(pool: SqlitePool) {
    let company_id = common::create_test_company(&pool, "Owner").await;
    let repo = SqliteProductRepository::new(Arc::new(pool));

    let product = repo
        .create(new_product("Valid data", Some(company_id)))
        .await
        .unwrap();

    assert_eq!(product.title, "Valid data");
    assert_eq!(product.price, 100);
    assert_eq!(product.attachment_id, Some(company_id));
    assert!(product.is_attached());
    assert_eq!(product.identity_product.len(), 36);
}

#[sqlx::test]
async fn test_create_with_missing_company_fails(pool: SqlitePool) {
    let repo = SqliteProductRepository::new(Arc::new(pool.clone()));

    let err = repo
        .create(new_product("Dangling", Some(77)))
        .await
        .unwrap_err();

    let AppError::Validation { fields } = err else {
        panic!("expected validation error");
    };
    assert!(fields.contains_key("attachment"));
    assert_eq!(common::count_products(&pool).await, 0);
}

#[sqlx::test]
async fn test_list_by_company(pool: SqlitePool) {
    let a = common::create_test_company(&pool, "A").await;
    let b = common::create_test_company(&pool, "B").await;
    let repo = SqliteProductRepository::new(Arc::new(pool));

    for i in 1..=3 {
        repo.create(new_product(&format!("A{i}"), Some(a))).await.unwrap();
    }
    repo.create(new_product("B1", Some(b))).await.unwrap();
    repo.create(new_product("None", None)).await.unwrap();

    let page = repo.list_by_company(a, Window::new(1, 5)).await.unwrap();
    let titles: Vec<_> = page.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["A2", "A3"]);

    assert_eq!(repo.list_by_company(b, Window::default()).await.unwrap().len(), 1);
    assert_eq!(repo.list(Window::default()).await.unwrap().len(), 5);
    assert_eq!(repo.count().await.unwrap(), 5);
}

#[sqlx::test]
async fn test_update_fields_and_attachment(pool: SqlitePool) {
    let a = common::create_test_company(&pool, "A").await;
    let b = common::create_test_company(&pool, "B").await;
    let repo = SqliteProductRepository::new(Arc::new(pool));
    let created = repo.create(new_product("Before", Some(a))).await.unwrap();

    let moved = repo
        .update(
            created.id,
            ProductPatch {
                price: Some(7),
                attachment_id: Some(Some(b)),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.price, 7);
    assert_eq!(moved.title, "Before");
    assert_eq!(moved.attachment_id, Some(b));

    let kept = repo
        .update(
            created.id,
            ProductPatch {
                title: Some("After".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(kept.attachment_id, Some(b));

    let detached = repo
        .update(
            created.id,
            ProductPatch {
                attachment_id: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detached.attachment_id, None);
    assert_eq!(detached.identity_product, created.identity_product);
}

#[sqlx::test]
async fn test_update_missing_returns_none(pool: SqlitePool) {
    let repo = SqliteProductRepository::new(Arc::new(pool));

    let result = repo
        .update(
            9,
            ProductPatch {
                title: Some("x".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_delete(pool: SqlitePool) {
    let repo = SqliteProductRepository::new(Arc::new(pool));
    let created = repo.create(new_product("Gone", None)).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    assert!(!repo.delete(created.id).await.unwrap());
}
