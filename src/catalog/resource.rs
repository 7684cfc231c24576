//! The catalog collections exposed by the API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four catalog collections.
///
/// Each resource type names both the URL path segment (`/products`) and the
/// top-level array key in the response body (`"products": [...]`).
///
/// # Example
///
/// ```rust
/// use bestbuy_catalog::ResourceType;
///
/// assert_eq!(ResourceType::Products.as_str(), "products");
/// assert_eq!("stores".parse::<ResourceType>().unwrap(), ResourceType::Stores);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// The Products API.
    Products,
    /// The Stores API.
    Stores,
    /// The Reviews API.
    Reviews,
    /// The Categories API.
    Categories,
}

impl ResourceType {
    /// All resource types, in declaration order.
    pub const ALL: [Self; 4] = [Self::Products, Self::Stores, Self::Reviews, Self::Categories];

    /// Returns the path segment and response array key for this resource.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Stores => "stores",
            Self::Reviews => "reviews",
            Self::Categories => "categories",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown resource name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown catalog resource '{0}'. Expected one of: products, stores, reviews, categories.")]
pub struct UnknownResourceError(pub String);

impl FromStr for ResourceType {
    type Err = UnknownResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|resource| resource.as_str() == s)
            .ok_or_else(|| UnknownResourceError(s.to_string()))
    }
}
