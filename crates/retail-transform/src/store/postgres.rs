//! PostgreSQL-backed product store

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::trace;

use super::{ProductStore, StoreResult};
use crate::models::{Character, CharacterLink, RolePattern, SourceProduct};

/// Product store over a shared connection pool.
///
/// The pool is owned by the caller; this type only borrows a clone of the handle.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn fetch_products(&self, limit: i64) -> StoreResult<Vec<SourceProduct>> {
        // Explicit columns keep extra columns on `products` from breaking the row mapping.
        let products = sqlx::query_as::<_, SourceProduct>(
            r#"
            SELECT id, product_guid, name, short_description
            FROM products
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        trace!(count = products.len(), limit, "Fetched products");
        Ok(products)
    }

    async fn find_character_link(
        &self,
        product_id: i32,
        role: &RolePattern,
    ) -> StoreResult<Option<CharacterLink>> {
        let link = sqlx::query_as::<_, CharacterLink>(
            r#"
            SELECT product_id, character_id, charter_type
            FROM character_products
            WHERE product_id = $1
              AND charter_type LIKE $2
              AND charter_type NOT LIKE $3
            LIMIT 1
            "#,
        )
        .bind(product_id)
        .bind(role.include_like())
        .bind(role.exclude_like())
        .fetch_optional(&self.pool)
        .await?;

        Ok(link)
    }

    async fn fetch_character(&self, character_id: i32) -> StoreResult<Option<Character>> {
        let character = sqlx::query_as::<_, Character>(
            r#"
            SELECT id, name
            FROM characters
            WHERE id = $1
            "#,
        )
        .bind(character_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(character)
    }
}
