//! Product shape as supplied by the external product source.

use serde::{Deserialize, Serialize};

/// A product from the external catalog API.
///
/// The core performs read-only passes over collections of these; it never
/// mutates or persists them. Identity is the upstream string id — products
/// are not created through this shape (drafts have their own type in the
/// wizard crate).
///
/// Optional fields are genuinely optional upstream: a product without a
/// `category` simply does not participate in the category facet, and a
/// product without `stock` never counts as low-stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

impl Product {
    /// Trimmed, non-empty category, if the product has one.
    pub fn category_trimmed(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
