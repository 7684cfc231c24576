//! The catalog client.
//!
//! This module provides [`CatalogClient`], which turns a logical request
//! (resource, optional query, optional page) into a URL, sends it through a
//! [`Transport`], parses the response and advances the pagination cursor.

use serde_json::Value;

use crate::catalog::url::{build_url, redact_api_key};
use crate::catalog::{CatalogError, CatalogPage, FieldSelections, PaginationState, ResourceType};
use crate::config::CatalogConfig;
use crate::transport::{HttpTransport, Transport};

/// Client for the Best Buy catalog API.
///
/// One fetch per call: build URL, `GET`, parse, update pagination, return
/// the items. Failures are returned as [`CatalogError`] and never retried.
///
/// # Shared Pagination Cursor
///
/// A single `current_page` is shared by all four resource types. This is
/// intentional, but it surprises callers who interleave resources on one
/// client: after reading products page 1, an implicit-page stores request
/// asks for page 2. Pass an explicit page or keep one client per resource
/// when interleaving.
///
/// # Sequential Use
///
/// Fetch methods take `&mut self`, so an instance can only have one request
/// in flight. Use one client per task for parallel crawling.
///
/// # Example
///
/// ```rust,ignore
/// use bestbuy_catalog::{ApiKey, CatalogClient, CatalogConfig, FieldSelections};
///
/// let config = CatalogConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .build()
///     .unwrap();
///
/// let fields = FieldSelections::new().products(["sku", "name", "salePrice"]);
/// let mut client = CatalogClient::new(config, fields)?;
///
/// // Walk every page of a search
/// loop {
///     let products = client.products(Some("manufacturer=apple"), None).await?;
///     println!("{} products", products.len());
///     if !client.pagination().has_more() {
///         break;
///     }
/// }
/// ```
#[derive(Debug)]
pub struct CatalogClient<T = HttpTransport> {
    config: CatalogConfig,
    fields: FieldSelections,
    pagination: PaginationState,
    transport: T,
}

impl CatalogClient<HttpTransport> {
    /// Creates a client that talks to the API over HTTP.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] if the HTTP client cannot be created.
    pub fn new(config: CatalogConfig, fields: FieldSelections) -> Result<Self, CatalogError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, fields, transport))
    }
}

impl<T: Transport> CatalogClient<T> {
    /// Creates a client that sends its requests through `transport`.
    #[must_use]
    pub fn with_transport(config: CatalogConfig, fields: FieldSelections, transport: T) -> Self {
        Self {
            config,
            fields,
            pagination: PaginationState::default(),
            transport,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Returns the per-resource field selections.
    #[must_use]
    pub const fn fields(&self) -> &FieldSelections {
        &self.fields
    }

    /// Returns the current pagination state.
    #[must_use]
    pub const fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the URL that a fetch of `resource` would request.
    ///
    /// Uses the pagination cursor when `page` is `None`. Does not send
    /// anything or touch the cursor.
    #[must_use]
    pub fn request_url(
        &self,
        resource: ResourceType,
        query: Option<&str>,
        page: Option<u32>,
    ) -> String {
        build_url(
            self.config.base_url().as_ref(),
            resource,
            self.fields.get(resource),
            query,
            page.unwrap_or(self.pagination.current_page),
            self.config.page_size(),
            self.config.api_key().as_ref(),
        )
    }

    /// Fetches one page of `resource` and returns it with its totals.
    ///
    /// `page` defaults to the pagination cursor. On success the cursor moves
    /// to the page after the one requested and the totals are overwritten
    /// with the server's values. On failure the pagination state is left
    /// exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] if the request fails,
    /// [`CatalogError::Parse`] if the body is not JSON, and
    /// [`CatalogError::MalformedResponse`] if `totalPages`, `total` or the
    /// resource array is missing.
    pub async fn fetch_page(
        &mut self,
        resource: ResourceType,
        query: Option<&str>,
        page: Option<u32>,
    ) -> Result<CatalogPage, CatalogError> {
        let page = page.unwrap_or(self.pagination.current_page);
        let url = self.request_url(resource, query, Some(page));

        tracing::debug!(
            resource = %resource,
            page,
            url = %redact_api_key(&url),
            "Fetching catalog page"
        );

        let body = self.transport.get(&url).await?;
        let result = CatalogPage::parse(resource, page, &body)?;

        self.pagination
            .record_success(page, result.total_pages(), result.total());

        tracing::debug!(
            resource = %resource,
            current_page = self.pagination.current_page,
            total_pages = self.pagination.total_pages,
            total_count = self.pagination.total_count,
            "Catalog pagination advanced"
        );

        Ok(result)
    }

    /// Fetches one page of `resource` and returns its items.
    ///
    /// See [`CatalogClient::fetch_page`] for cursor handling.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::fetch_page`].
    pub async fn fetch(
        &mut self,
        resource: ResourceType,
        query: Option<&str>,
        page: Option<u32>,
    ) -> Result<Vec<Value>, CatalogError> {
        self.fetch_page(resource, query, page)
            .await
            .map(CatalogPage::into_items)
    }

    /// Searches the Products API. With no query the whole collection is paged.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::fetch_page`].
    pub async fn products(
        &mut self,
        query: Option<&str>,
        page: Option<u32>,
    ) -> Result<Vec<Value>, CatalogError> {
        self.fetch(ResourceType::Products, query, page).await
    }

    /// Searches the Stores API. With no query the whole collection is paged.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::fetch_page`].
    pub async fn stores(
        &mut self,
        query: Option<&str>,
        page: Option<u32>,
    ) -> Result<Vec<Value>, CatalogError> {
        self.fetch(ResourceType::Stores, query, page).await
    }

    /// Searches the Reviews API. With no query the whole collection is paged.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::fetch_page`].
    pub async fn reviews(
        &mut self,
        query: Option<&str>,
        page: Option<u32>,
    ) -> Result<Vec<Value>, CatalogError> {
        self.fetch(ResourceType::Reviews, query, page).await
    }

    /// Searches the Categories API. With no query the whole collection is paged.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::fetch_page`].
    pub async fn categories(
        &mut self,
        query: Option<&str>,
        page: Option<u32>,
    ) -> Result<Vec<Value>, CatalogError> {
        self.fetch(ResourceType::Categories, query, page).await
    }
}
