//! Read-only access to the product catalog
//!
//! Every lookup reports "no rows" as `None` (or an empty `Vec`) and reserves
//! `Err` for store failures. Deciding whether a missing row is acceptable is
//! left to the caller.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Character, CharacterLink, RolePattern, SourceProduct};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgProductStore;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Store handle consumed by the transform pipeline
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetch at most `limit` products in whatever order the store returns them.
    async fn fetch_products(&self, limit: i64) -> StoreResult<Vec<SourceProduct>>;

    /// Fetch at most one link for `product_id` whose role label satisfies `role`.
    ///
    /// When several links match, which one comes back is unspecified.
    async fn find_character_link(
        &self,
        product_id: i32,
        role: &RolePattern,
    ) -> StoreResult<Option<CharacterLink>>;

    /// Fetch one character by id.
    async fn fetch_character(&self, character_id: i32) -> StoreResult<Option<Character>>;
}
