//! Retail Transform Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Extracts a batch of products from the catalog database, attaches each
//! product's primary author and produces flat records for the analytics sink.
//!
//! # Pipeline
//!
//! 1. [`loader::load_batch`] reads up to [`loader::PRODUCT_BATCH_LIMIT`] products.
//! 2. [`resolver::resolve_author`] finds the author through `character_products`.
//! 3. [`assembler::assemble`] builds one [`models::OutputRecord`] per product.
//!
//! [`pipeline::run`] drives the three steps and fails the whole batch on the
//! first error.
//!
//! # Example
//!
//! ```no_run
//! use retail_transform::{config::DatabaseConfig, db, output, pipeline, store::PgProductStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = DatabaseConfig::load()?;
//!     let pool = db::connect(&config).await?;
//!     let store = PgProductStore::new(pool.clone());
//!
//!     let records = pipeline::run(&store).await;
//!     pool.close().await;
//!
//!     println!("{}", output::to_json_pretty(&records?)?);
//!     Ok(())
//! }
//! ```

pub mod assembler;
pub mod config;
pub mod db;
pub mod error;
pub mod loader;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod resolver;
pub mod store;
pub mod tree;

pub use error::{ExportError, Result, StoreError};
pub use models::{Character, CharacterLink, OutputRecord, RolePattern, SourceProduct};
