//! Retail Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling and logging for the retail data tools.
//!
//! # Overview
//!
//! - **Error Handling**: Common error type and result alias
//! - **Logging**: Environment-driven `tracing` setup shared by every binary
//!
//! # Example
//!
//! ```no_run
//! use retail_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

pub use error::{CommonError, Result};
