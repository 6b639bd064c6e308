//! Mapping of a product and its author into an output record

use crate::models::{Character, OutputRecord, SourceProduct, PRODUCT_RECORD_KIND};

/// Build the output record. Missing description and author become `""`.
pub fn assemble(product: &SourceProduct, author: Option<&Character>) -> OutputRecord {
    OutputRecord {
        kind: PRODUCT_RECORD_KIND.to_string(),
        id: product.product_guid.clone(),
        title: product.name.clone(),
        description: product.short_description.clone().unwrap_or_default(),
        author: author.map(|c| c.name.clone()).unwrap_or_default(),
    }
}
