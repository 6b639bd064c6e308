//! Row and output types for the product transform

use serde::{Deserialize, Serialize};

/// Record kind tag written to every output record.
pub const PRODUCT_RECORD_KIND: &str = "PP";

/// A row from `products`, read with an explicit column list.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct SourceProduct {
    pub id: i32,
    pub product_guid: String,
    pub name: String,
    pub short_description: Option<String>,
}

/// A row from `character_products` linking a product to a character.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CharacterLink {
    pub product_id: i32,
    pub character_id: i32,
    /// Free-text role label, stored in the `charter_type` column.
    #[sqlx(rename = "charter_type")]
    pub character_type: String,
}

/// A row from `characters`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Character {
    pub id: i32,
    pub name: String,
}

/// Flattened record handed to the analytics sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: String,
}

/// Substring filter over a free-text role label.
///
/// A label matches when it contains `include` and does not contain `exclude`.
/// The Postgres store renders the same rule as `LIKE` / `NOT LIKE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePattern {
    pub include: &'static str,
    pub exclude: &'static str,
}

impl RolePattern {
    /// Primary author, excluding the original-language author credit.
    pub const AUTHOR: RolePattern = RolePattern::new("作者", "作者(原文)");

    pub const fn new(include: &'static str, exclude: &'static str) -> Self {
        Self { include, exclude }
    }

    pub fn matches(&self, label: &str) -> bool {
        label.contains(self.include) && !label.contains(self.exclude)
    }

    /// `LIKE` argument for the inclusion rule.
    pub fn include_like(&self) -> String {
        format!("%{}%", escape_like(self.include))
    }

    /// `NOT LIKE` argument for the exclusion rule.
    pub fn exclude_like(&self) -> String {
        format!("%{}%", escape_like(self.exclude))
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
