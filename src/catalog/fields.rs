//! Per-resource field selection.
//!
//! A [`FieldSelection`] is the ordered list of fields sent in the `show`
//! query parameter. Names are passed through untouched: no sorting, no
//! deduplication, no check that the field exists. The server decides what to
//! do with names it does not know.

use crate::catalog::ResourceType;

/// An ordered list of field names to request for one resource type.
///
/// An empty selection means "let the server pick", and omits `show` entirely.
///
/// # Example
///
/// ```rust
/// use bestbuy_catalog::FieldSelection;
///
/// let fields = FieldSelection::new(["sku", "name"]);
/// assert_eq!(fields.show_param().as_deref(), Some("sku,name"));
///
/// assert_eq!(FieldSelection::default().show_param(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSelection(Vec<String>);

impl FieldSelection {
    /// Creates a selection from the given field names, keeping their order.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if no fields were selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the selected field names.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the comma-joined value for the `show` parameter, or `None`
    /// when the selection is empty.
    #[must_use]
    pub fn show_param(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(","))
        }
    }
}

impl<S: Into<String>> FromIterator<S> for FieldSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// The field selections for all four resource types.
///
/// Every instance owns its own selections; nothing is shared between clients.
///
/// # Example
///
/// ```rust
/// use bestbuy_catalog::{FieldSelections, ResourceType};
///
/// let fields = FieldSelections::new()
///     .products(["sku", "name", "salePrice"])
///     .stores(["storeId", "city"]);
///
/// assert_eq!(fields.get(ResourceType::Products).as_slice().len(), 3);
/// assert!(fields.get(ResourceType::Reviews).is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSelections {
    products: FieldSelection,
    stores: FieldSelection,
    reviews: FieldSelection,
    categories: FieldSelection,
}

impl FieldSelections {
    /// Creates empty selections for every resource type.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fields requested from the Products API.
    #[must_use]
    pub fn products<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(ResourceType::Products, FieldSelection::new(fields))
    }

    /// Sets the fields requested from the Stores API.
    #[must_use]
    pub fn stores<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(ResourceType::Stores, FieldSelection::new(fields))
    }

    /// Sets the fields requested from the Reviews API.
    #[must_use]
    pub fn reviews<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(ResourceType::Reviews, FieldSelection::new(fields))
    }

    /// Sets the fields requested from the Categories API.
    #[must_use]
    pub fn categories<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(ResourceType::Categories, FieldSelection::new(fields))
    }

    /// Replaces the selection for `resource`.
    #[must_use]
    pub fn with(mut self, resource: ResourceType, selection: FieldSelection) -> Self {
        *self.slot_mut(resource) = selection;
        self
    }

    /// Returns the selection configured for `resource`.
    #[must_use]
    pub const fn get(&self, resource: ResourceType) -> &FieldSelection {
        match resource {
            ResourceType::Products => &self.products,
            ResourceType::Stores => &self.stores,
            ResourceType::Reviews => &self.reviews,
            ResourceType::Categories => &self.categories,
        }
    }

    fn slot_mut(&mut self, resource: ResourceType) -> &mut FieldSelection {
        match resource {
            ResourceType::Products => &mut self.products,
            ResourceType::Stores => &mut self.stores,
            ResourceType::Reviews => &mut self.reviews,
            ResourceType::Categories => &mut self.categories,
        }
    }
}
