//! Author resolution through the character link table
//!
//! A product with no matching link has no author, which is a normal result.
//! A matching link whose character row is missing is broken data and fails
//! the run.

use tracing::debug;

use crate::error::{ExportError, Result};
use crate::models::{Character, RolePattern};
use crate::store::ProductStore;

/// Resolve the primary author of `product_id` using [`RolePattern::AUTHOR`].
pub async fn resolve_author<S>(store: &S, product_id: i32) -> Result<Option<Character>>
where
    S: ProductStore + ?Sized,
{
    resolve_author_with(store, product_id, &RolePattern::AUTHOR).await
}

/// Resolve the character linked to `product_id` under `role`.
///
/// If several links qualify, the store picks one; no ranking is applied.
#[tracing::instrument(skip(store, role))]
pub async fn resolve_author_with<S>(
    store: &S,
    product_id: i32,
    role: &RolePattern,
) -> Result<Option<Character>>
where
    S: ProductStore + ?Sized,
{
    let Some(link) = store.find_character_link(product_id, role).await? else {
        debug!("No author link");
        return Ok(None);
    };

    let character = store
        .fetch_character(link.character_id)
        .await?
        .ok_or(ExportError::DataIntegrity {
            product_id,
            character_id: link.character_id,
        })?;

    debug!(character_id = character.id, "Resolved author");
    Ok(Some(character))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[tokio::test]
    async fn test_no_link_is_none() {
        let store = InMemoryStore::new().with_product(1, "g1", "Book A", None);
        let author = resolve_author(&store, 1).await.unwrap();
        assert!(author.is_none());
    }

    #[tokio::test]
    async fn test_matching_link_resolves_character() {
        let store = InMemoryStore::new()
            .with_link(2, 10, "作者")
            .with_character(10, "Jane Doe");

        let author = resolve_author(&store, 2).await.unwrap().unwrap();
        assert_eq!(author.id, 10);
        assert_eq!(author.name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_original_language_author_only_is_none() {
        let store = InMemoryStore::new()
            .with_link(3, 10, "作者(原文)")
            .with_character(10, "Original Writer");

        let author = resolve_author(&store, 3).await.unwrap();
        assert!(author.is_none());
    }

    #[tokio::test]
    async fn test_non_author_role_is_none() {
        let store = InMemoryStore::new()
            .with_link(4, 10, "譯者")
            .with_character(10, "Translator");

        assert!(resolve_author(&store, 4).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_character_is_integrity_error() {
        let store = InMemoryStore::new().with_link(5, 99, "作者");

        let result = resolve_author(&store, 5).await;
        assert!(matches!(
            result,
            Err(ExportError::DataIntegrity {
                product_id: 5,
                character_id: 99
            })
        ));
    }

    #[tokio::test]
    async fn test_excluded_link_with_missing_character_is_not_an_error() {
        // The broken row is filtered out before the character lookup happens.
        let store = InMemoryStore::new().with_link(6, 99, "作者(原文)");
        assert!(resolve_author(&store, 6).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = InMemoryStore::new().with_unreachable_links(7);
        let result = resolve_author(&store, 7).await;
        assert!(matches!(result, Err(ExportError::Store(e)) if e.is_connectivity()));
    }

    #[tokio::test]
    async fn test_custom_role_pattern() {
        let role = RolePattern::new("author", "author(original)");
        let store = InMemoryStore::new()
            .with_link(9, 20, "author(original)")
            .with_link(9, 21, "author")
            .with_character(20, "Original")
            .with_character(21, "Jane Doe");

        let author = resolve_author_with(&store, 9, &role).await.unwrap().unwrap();
        assert_eq!(author.name, "Jane Doe");
        assert!(resolve_author(&store, 9).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_multiple_matches_yield_one_author() {
        let store = InMemoryStore::new()
            .with_link(8, 10, "作者")
            .with_link(8, 11, "作者")
            .with_character(10, "First")
            .with_character(11, "Second");

        let author = resolve_author(&store, 8).await.unwrap().unwrap();
        assert!(author.id == 10 || author.id == 11);
    }
}
