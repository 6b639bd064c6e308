//! Product batch loading

use tracing::debug;

use crate::error::{ExportError, Result};
use crate::models::SourceProduct;
use crate::store::ProductStore;

/// Number of products read per run.
pub const PRODUCT_BATCH_LIMIT: i64 = 10;

/// Load at most `limit` products from the store.
///
/// Store errors are returned unchanged; there is no retry.
#[tracing::instrument(skip(store))]
pub async fn load_batch<S>(store: &S, limit: i64) -> Result<Vec<SourceProduct>>
where
    S: ProductStore + ?Sized,
{
    if limit <= 0 {
        return Err(ExportError::InvalidBatchLimit(limit));
    }

    let products = store.fetch_products(limit).await?;
    debug!(count = products.len(), "Loaded product batch");

    Ok(products)
}
