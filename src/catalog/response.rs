//! Response envelope handling.
//!
//! Every successful catalog response is a JSON object carrying at least:
//!
//! ```json
//! { "totalPages": 3, "total": 250, "products": [ ... ] }
//! ```
//!
//! where the array key matches the requested resource. Other top-level keys
//! (`from`, `to`, `currentPage`, ...) are ignored. Items are returned as
//! opaque JSON values.
//!
//! [`CatalogPage`] implements `Deref<Target = [Value]>`, so it can be
//! iterated and indexed like a slice:
//!
//! ```rust,ignore
//! let page = client.fetch_page(ResourceType::Products, None, None).await?;
//! for product in page.iter() {
//!     println!("{}", product["name"]);
//! }
//! println!("page {} of {}", page.page(), page.total_pages());
//! ```

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::catalog::{CatalogError, ResourceType};

/// One page of catalog items with the totals reported alongside it.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogPage {
    resource: ResourceType,
    page: u32,
    total_pages: u32,
    total: u64,
    items: Vec<Value>,
}

impl CatalogPage {
    /// Parses a raw response body for `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if `body` is not valid JSON, or
    /// [`CatalogError::MalformedResponse`] if `totalPages`, `total` or the
    /// resource array is missing or has the wrong type.
    pub fn parse(resource: ResourceType, page: u32, body: &[u8]) -> Result<Self, CatalogError> {
        let mut json: Value = serde_json::from_slice(body)?;

        let total_pages = json
            .get("totalPages")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok());
        let total = json.get("total").and_then(Value::as_u64);
        let items = match json.get_mut(resource.as_str()).map(Value::take) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        };

        match (total_pages, total, items) {
            (Some(total_pages), Some(total), Some(items)) => Ok(Self {
                resource,
                page,
                total_pages,
                total,
                items,
            }),
            (total_pages, total, items) => {
                let mut fields = Vec::new();
                if total_pages.is_none() {
                    fields.push("totalPages");
                }
                if total.is_none() {
                    fields.push("total");
                }
                if items.is_none() {
                    fields.push(resource.as_str());
                }
                Err(CatalogError::MalformedResponse { resource, fields })
            }
        }
    }

    /// Returns the resource these items belong to.
    #[must_use]
    pub const fn resource(&self) -> ResourceType {
        self.resource
    }

    /// Returns the page number that was requested.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the total number of pages reported by the server.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Returns the total number of matching items reported by the server.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    /// Deserializes every item into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if any item does not match `T`.
    pub fn deserialize_items<T: DeserializeOwned>(&self) -> Result<Vec<T>, CatalogError> {
        self.items
            .iter()
            .map(|item| T::deserialize(item).map_err(CatalogError::from))
            .collect()
    }
}

impl Deref for CatalogPage {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}
