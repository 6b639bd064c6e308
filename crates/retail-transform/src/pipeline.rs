//! Load, resolve and assemble one batch of products
//!
//! The run is all-or-nothing: the first error aborts it and no partial
//! output is returned.

use tracing::{debug, info};

use crate::assembler::assemble;
use crate::error::Result;
use crate::loader::{load_batch, PRODUCT_BATCH_LIMIT};
use crate::models::{OutputRecord, RolePattern};
use crate::resolver::resolve_author_with;
use crate::store::ProductStore;

/// Batch size and author role used for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    pub limit: i64,
    pub role: RolePattern,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            limit: PRODUCT_BATCH_LIMIT,
            role: RolePattern::AUTHOR,
        }
    }
}

/// Transform the standard product batch.
pub async fn run<S>(store: &S) -> Result<Vec<OutputRecord>>
where
    S: ProductStore + ?Sized,
{
    run_with(store, &TransformOptions::default()).await
}

/// Transform up to `options.limit` products, one at a time, preserving load order.
#[tracing::instrument(skip(store))]
pub async fn run_with<S>(store: &S, options: &TransformOptions) -> Result<Vec<OutputRecord>>
where
    S: ProductStore + ?Sized,
{
    let products = load_batch(store, options.limit).await?;
    let mut records = Vec::with_capacity(products.len());
    let mut without_author = 0usize;

    for product in &products {
        let author = resolve_author_with(store, product.id, &options.role).await?;
        if author.is_none() {
            without_author += 1;
        }

        debug!(
            product_id = product.id,
            guid = %product.product_guid,
            has_author = author.is_some(),
            "Transformed product"
        );
        records.push(assemble(product, author.as_ref()));
    }

    info!(
        records = records.len(),
        without_author, "Product batch transformed"
    );

    Ok(records)
}
