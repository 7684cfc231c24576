//! # Best Buy Catalog Client
//!
//! A Rust client for the Best Buy catalog API, covering the Products, Stores,
//! Reviews and Categories APIs with field selection, query filters and
//! page-based iteration.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`CatalogConfig`] and [`CatalogConfigBuilder`]
//! - Per-resource field selection via [`FieldSelections`]
//! - Deterministic request URL construction via [`build_url`]
//! - A [`CatalogClient`] that tracks a shared pagination cursor across calls
//! - One error type, [`CatalogError`], for every way a fetch can fail
//!
//! ## Quick Start
//!
//! ```rust
//! use bestbuy_catalog::{ApiKey, CatalogConfig, FieldSelections};
//!
//! let config = CatalogConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .page_size(100)
//!     .build()
//!     .unwrap();
//!
//! let fields = FieldSelections::new()
//!     .products(["sku", "name", "salePrice"])
//!     .stores(["storeId", "name", "city"]);
//! ```
//!
//! ## Fetching Pages
//!
//! ```rust,ignore
//! use bestbuy_catalog::CatalogClient;
//!
//! let mut client = CatalogClient::new(config, fields)?;
//!
//! // First page of a search; the cursor moves to page 2
//! let tvs = client.products(Some("type=HardGood AND name=tv*"), None).await?;
//!
//! // Jump straight to page 5; the cursor moves to page 6
//! let more = client.products(Some("type=HardGood AND name=tv*"), Some(5)).await?;
//!
//! let state = client.pagination();
//! println!("{} results over {} pages", state.total_count, state.total_pages);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and cursor live on the client instance
//! - **Fail-fast validation**: Configuration newtypes validate on construction
//! - **No hidden resilience**: No caching, no retries, no parallel page fetches
//! - **Pluggable transport**: [`transport::Transport`] can be replaced in tests

pub mod catalog;
pub mod config;
pub mod error;
pub mod transport;

// Re-export public types at crate root for convenience
pub use catalog::{
    build_url, CatalogClient, CatalogError, CatalogErrorKind, CatalogPage, FieldSelection,
    FieldSelections, PaginationState, ResourceType,
};
pub use config::{ApiKey, BaseUrl, CatalogConfig, CatalogConfigBuilder};
pub use error::ConfigError;
pub use transport::{HttpTransport, Transport, TransportError};
