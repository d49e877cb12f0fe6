use serde::{Deserialize, Serialize};

/// Draft of a product being created.
///
/// Starts all-empty/zero and is mutated incrementally through
/// [`ProductDraft::merge`]. The draft has no identity: it only becomes a
/// product once the completion handler persists it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub sku: String,
    pub category: String,
    pub image_urls: Vec<String>,
    pub marketing_copy: String,
    pub keywords: Vec<String>,
}

impl ProductDraft {
    /// Shallow-merge a partial update: only supplied fields overwrite,
    /// everything else is preserved.
    pub fn merge(&mut self, patch: DraftPatch) {
        let DraftPatch {
            name,
            description,
            price,
            stock,
            sku,
            category,
            image_urls,
            marketing_copy,
            keywords,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(stock) = stock {
            self.stock = stock;
        }
        if let Some(sku) = sku {
            self.sku = sku;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(image_urls) = image_urls {
            self.image_urls = image_urls;
        }
        if let Some(marketing_copy) = marketing_copy {
            self.marketing_copy = marketing_copy;
        }
        if let Some(keywords) = keywords {
            self.keywords = keywords;
        }
    }
}

/// Partial field set for a [`ProductDraft`] update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub marketing_copy: Option<String>,
    pub keywords: Option<Vec<String>>,
}

impl DraftPatch {
    pub fn name(value: impl Into<String>) -> Self {
        Self {
            name: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn description(value: impl Into<String>) -> Self {
        Self {
            description: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn category(value: impl Into<String>) -> Self {
        Self {
            category: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn marketing_copy(value: impl Into<String>) -> Self {
        Self {
            marketing_copy: Some(value.into()),
            ..Self::default()
        }
    }
}
