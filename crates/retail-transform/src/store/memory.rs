//! In-memory product store for fixtures and tests

use async_trait::async_trait;

use super::{ProductStore, StoreResult};
use crate::error::StoreError;
use crate::models::{Character, CharacterLink, RolePattern, SourceProduct};

/// Product store backed by plain vectors.
///
/// Rows come back in insertion order, so the first matching link wins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    products: Vec<SourceProduct>,
    links: Vec<CharacterLink>,
    characters: Vec<Character>,
    unreachable_links: Vec<i32>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(
        mut self,
        id: i32,
        guid: &str,
        name: &str,
        description: Option<&str>,
    ) -> Self {
        self.products.push(SourceProduct {
            id,
            product_guid: guid.to_string(),
            name: name.to_string(),
            short_description: description.map(str::to_string),
        });
        self
    }

    pub fn with_link(mut self, product_id: i32, character_id: i32, role: &str) -> Self {
        self.links.push(CharacterLink {
            product_id,
            character_id,
            character_type: role.to_string(),
        });
        self
    }

    pub fn with_character(mut self, id: i32, name: &str) -> Self {
        self.characters.push(Character {
            id,
            name: name.to_string(),
        });
        self
    }

    /// Make link lookups for `product_id` fail as if the connection dropped.
    pub fn with_unreachable_links(mut self, product_id: i32) -> Self {
        self.unreachable_links.push(product_id);
        self
    }
}

#[async_trait]
impl ProductStore for InMemoryStore {
    async fn fetch_products(&self, limit: i64) -> StoreResult<Vec<SourceProduct>> {
        let take = usize::try_from(limit).unwrap_or(0);
        Ok(self.products.iter().take(take).cloned().collect())
    }

    async fn find_character_link(
        &self,
        product_id: i32,
        role: &RolePattern,
    ) -> StoreResult<Option<CharacterLink>> {
        if self.unreachable_links.contains(&product_id) {
            return Err(StoreError::Connectivity(sqlx::Error::PoolClosed));
        }

        Ok(self
            .links
            .iter()
            .find(|link| link.product_id == product_id && role.matches(&link.character_type))
            .cloned())
    }

    async fn fetch_character(&self, character_id: i32) -> StoreResult<Option<Character>> {
        Ok(self
            .characters
            .iter()
            .find(|character| character.id == character_id)
            .cloned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_products_respects_limit() {
        let store = InMemoryStore::new()
            .with_product(1, "g1", "A", None)
            .with_product(2, "g2", "B", None)
            .with_product(3, "g3", "C", None);

        let products = store.fetch_products(2).await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[1].id, 2);
    }

    #[tokio::test]
    async fn test_find_link_skips_excluded_role() {
        let store = InMemoryStore::new()
            .with_link(1, 10, "作者(原文)")
            .with_link(1, 11, "作者");

        let link = store
            .find_character_link(1, &RolePattern::AUTHOR)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(link.character_id, 11);
    }

    #[tokio::test]
    async fn test_find_link_other_product_is_none() {
        let store = InMemoryStore::new().with_link(2, 10, "作者");
        let link = store.find_character_link(1, &RolePattern::AUTHOR).await.unwrap();
        assert!(link.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_links_fail() {
        let store = InMemoryStore::new().with_unreachable_links(1);
        let err = store
            .find_character_link(1, &RolePattern::AUTHOR)
            .await
            .unwrap_err();
        assert!(err.is_connectivity());
    }
}
