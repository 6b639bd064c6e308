//! Integration tests for the PostgreSQL store.
//!
//! Run with `cargo test -- --ignored` when DATABASE_URL points at a scratch database.
//! Tables are created as temporary tables on a single-connection pool, so the
//! real catalog tables are never touched.

use retail_transform::models::RolePattern;
use retail_transform::pipeline;
use retail_transform::store::{PgProductStore, ProductStore};
use retail_transform::ExportError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

async fn create_test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("Failed to create test pool")
}

async fn create_schema(pool: &PgPool) {
    for statement in [
        r#"
        CREATE TEMPORARY TABLE products (
            id INTEGER PRIMARY KEY,
            product_guid TEXT NOT NULL,
            name TEXT NOT NULL,
            short_description TEXT,
            eslite_sn TEXT
        )
        "#,
        r#"
        CREATE TEMPORARY TABLE characters (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TEMPORARY TABLE character_products (
            product_id INTEGER NOT NULL,
            character_id INTEGER NOT NULL,
            charter_type TEXT NOT NULL
        )
        "#,
    ] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .expect("Failed to create table");
    }
}

async fn seed(pool: &PgPool) {
    sqlx::query(
        r#"
        INSERT INTO products (id, product_guid, name, short_description, eslite_sn)
        VALUES (1, 'g1', '書 A', NULL, 'SN1'),
               (2, 'g2', '書 B', 'desc', 'SN2'),
               (3, 'g3', '書 C', NULL, 'SN3')
        "#,
    )
    .execute(pool)
    .await
    .expect("Failed to seed products");

    sqlx::query("INSERT INTO characters (id, name) VALUES (10, '王小明'), (11, 'Original')")
        .execute(pool)
        .await
        .expect("Failed to seed characters");

    sqlx::query(
        r#"
        INSERT INTO character_products (product_id, character_id, charter_type)
        VALUES (2, 10, '作者'),
               (3, 11, '作者(原文)')
        "#,
    )
    .execute(pool)
    .await
    .expect("Failed to seed links");
}

#[tokio::test]
#[ignore] // Run with `cargo test --ignored` when database is available
async fn test_fetch_products_ignores_extra_columns() {
    let pool = create_test_pool().await;
    create_schema(&pool).await;
    seed(&pool).await;

    let store = PgProductStore::new(pool.clone());
    let products = store.fetch_products(2).await.unwrap();
    assert_eq!(products.len(), 2);

    pool.close().await;
}

#[tokio::test]
#[ignore]
async fn test_find_link_applies_role_pattern() {
    let pool = create_test_pool().await;
    create_schema(&pool).await;
    seed(&pool).await;

    let store = PgProductStore::new(pool.clone());
    let found = store
        .find_character_link(2, &RolePattern::AUTHOR)
        .await
        .unwrap();
    assert_eq!(found.map(|l| l.character_id), Some(10));

    let excluded = store
        .find_character_link(3, &RolePattern::AUTHOR)
        .await
        .unwrap();
    assert!(excluded.is_none());

    pool.close().await;
}

#[tokio::test]
#[ignore]
async fn test_pipeline_against_postgres() {
    let pool = create_test_pool().await;
    create_schema(&pool).await;
    seed(&pool).await;

    let store = PgProductStore::new(pool.clone());
    let mut records = pipeline::run(&store).await.unwrap();
    records.sort_by(|a, b| a.id.cmp(&b.id));

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].description, "");
    assert_eq!(records[1].author, "王小明");
    assert_eq!(records[2].author, "");

    pool.close().await;
}

#[tokio::test]
#[ignore]
async fn test_dangling_link_is_integrity_error() {
    let pool = create_test_pool().await;
    create_schema(&pool).await;
    seed(&pool).await;

    sqlx::query("INSERT INTO character_products VALUES (1, 999, '作者')")
        .execute(&pool)
        .await
        .unwrap();

    let store = PgProductStore::new(pool.clone());
    let err = pipeline::run(&store).await.unwrap_err();
    assert!(matches!(
        err,
        ExportError::DataIntegrity {
            product_id: 1,
            character_id: 999
        }
    ));

    pool.close().await;
}
