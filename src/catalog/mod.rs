//! Catalog resources, URL construction, pagination and the client.
//!
//! # Overview
//!
//! - [`CatalogClient`]: Fetches pages of catalog resources
//! - [`ResourceType`]: Products, stores, reviews or categories
//! - [`FieldSelection`] / [`FieldSelections`]: Fields requested per resource
//! - [`build_url`]: Pure request URL construction
//! - [`PaginationState`]: The cursor shared by all resources of a client
//! - [`CatalogPage`]: One page of items with its totals
//! - [`CatalogError`]: The single error type returned by fetches

mod client;
mod errors;
mod fields;
mod pagination;
mod resource;
mod response;
mod url;

pub use client::CatalogClient;
pub use errors::{CatalogError, CatalogErrorKind};
pub use fields::{FieldSelection, FieldSelections};
pub use pagination::PaginationState;
pub use resource::{ResourceType, UnknownResourceError};
pub use response::CatalogPage;
pub use url::{build_url, escape_query, redact_api_key};
