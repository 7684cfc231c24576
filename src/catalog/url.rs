//! Request URL construction.
//!
//! Every catalog request is a single `GET` whose URL has the shape
//!
//! ```text
//! <base>/<resource>[(<query>)]?format=json[&show=<fields>]&pageSize=<n>&page=<n>&apiKey=<key>
//! ```
//!
//! The query expression is opaque: the only change made to it is replacing
//! each space with `%20`. Nothing here validates its inputs.
//!
//! # Example
//!
//! ```rust
//! use bestbuy_catalog::{build_url, FieldSelection, ResourceType};
//!
//! let url = build_url(
//!     "https://api.bestbuy.com/v1",
//!     ResourceType::Products,
//!     &FieldSelection::new(["sku", "name"]),
//!     Some("sku=43900 AND salePrice<100"),
//!     1,
//!     100,
//!     "ABC",
//! );
//!
//! assert_eq!(
//!     url,
//!     "https://api.bestbuy.com/v1/products(sku=43900%20AND%20salePrice<100)\
//!      ?format=json&show=sku,name&pageSize=100&page=1&apiKey=ABC"
//! );
//! ```

use crate::catalog::{FieldSelection, ResourceType};

/// Builds the request URL for one page of a catalog resource.
///
/// Parameters are emitted in a fixed order: `format`, `show` (only when
/// `fields` is non-empty), `pageSize`, `page`, `apiKey`. The same inputs
/// always produce the same string.
#[must_use]
pub fn build_url(
    base: &str,
    resource: ResourceType,
    fields: &FieldSelection,
    query: Option<&str>,
    page: u32,
    page_size: u32,
    api_key: &str,
) -> String {
    let mut url = format!("{base}/{resource}");

    if let Some(query) = query {
        url.push('(');
        url.push_str(&escape_query(query));
        url.push(')');
    }

    url.push_str("?format=json");

    if let Some(show) = fields.show_param() {
        url.push_str("&show=");
        url.push_str(&show);
    }

    url.push_str(&format!(
        "&pageSize={page_size}&page={page}&apiKey={api_key}"
    ));

    url
}

/// Percent-encodes spaces in a query expression. All other characters are
/// left alone.
#[must_use]
pub fn escape_query(query: &str) -> String {
    query.replace(' ', "%20")
}

/// Replaces the value of the `apiKey` parameter with `*****`, for logging.
#[must_use]
pub fn redact_api_key(url: &str) -> String {
    match url.find("apiKey=") {
        Some(start) => {
            let value_start = start + "apiKey=".len();
            let value_end = url[value_start..]
                .find('&')
                .map_or(url.len(), |i| value_start + i);
            format!("{}*****{}", &url[..value_start], &url[value_end..])
        }
        None => url.to_string(),
    }
}
