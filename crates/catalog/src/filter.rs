use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use mercato_core::Product;

/// Stock at or below this count flags a product as low-stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Mutable filter criteria for a catalog view session.
///
/// Mutated exclusively through [`CatalogFilter`] setters; reset through
/// [`CatalogFilter::clear_filters`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search: String,
    pub category_filter: String,
    pub low_stock_only: bool,
}

/// Derives a filtered product view and a category facet from a source
/// product collection plus the active [`FilterCriteria`].
///
/// The derived values are recomputed on read from the current state snapshot;
/// setters only update state. The source collection is never mutated and its
/// order is preserved by every filter pass.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    products: Vec<Product>,
    criteria: FilterCriteria,
}

impl CatalogFilter {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            criteria: FilterCriteria::default(),
        }
    }

    /// Replace the source collection (e.g. after a refetch). Active criteria
    /// are kept; derived values reflect the new collection on next read.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn search(&self) -> &str {
        &self.criteria.search
    }

    pub fn category_filter(&self) -> &str {
        &self.criteria.category_filter
    }

    pub fn low_stock_only(&self) -> bool {
        self.criteria.low_stock_only
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
    }

    pub fn set_category_filter(&mut self, category: impl Into<String>) {
        self.criteria.category_filter = category.into();
    }

    pub fn set_low_stock_only(&mut self, low_stock_only: bool) {
        self.criteria.low_stock_only = low_stock_only;
    }

    /// Reset all criteria in one state update.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Distinct, trimmed, non-empty categories across the FULL source
    /// collection, lexicographically ascending.
    ///
    /// Independent of active filters so a cleared filter still shows every
    /// option.
    pub fn categories(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .products
            .iter()
            .filter_map(Product::category_trimmed)
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// The source collection after applying the active criteria, in order:
    /// search, category, low-stock. Filters are conjunctive; source order is
    /// preserved.
    pub fn filtered_products(&self) -> Vec<&Product> {
        let query = self.criteria.search.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| query.is_empty() || Self::matches_query(p, &query))
            .filter(|p| self.matches_category(p))
            .filter(|p| self.matches_stock(p))
            .collect()
    }

    /// Case-insensitive substring match against name, sku, or category.
    /// Absent fields simply do not match.
    fn matches_query(product: &Product, query: &str) -> bool {
        let contains = |field: Option<&str>| {
            field.is_some_and(|value| value.to_lowercase().contains(query))
        };
        product.name.to_lowercase().contains(query)
            || contains(product.sku.as_deref())
            || contains(product.category.as_deref())
    }

    fn matches_category(&self, product: &Product) -> bool {
        if self.criteria.category_filter.is_empty() {
            return true;
        }
        product.category.as_deref().unwrap_or("").trim() == self.criteria.category_filter
    }

    fn matches_stock(&self, product: &Product) -> bool {
        if !self.criteria.low_stock_only {
            return true;
        }
        product
            .stock
            .is_some_and(|stock| stock <= LOW_STOCK_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, category: Option<&str>, stock: Option<i64>) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: 10.0,
            category: category.map(str::to_string),
            stock,
            sku: Some(format!("SKU-{id}")),
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product("1", "Office Chair", Some("Furniture"), Some(3)),
            product("2", "Standing Desk", Some("Furniture"), Some(25)),
            product("3", "USB Cable", Some("Electronics"), Some(8)),
            product("4", "Mystery Box", None, None),
        ]
    }

    fn ids<'a>(filtered: &'a [&'a Product]) -> Vec<&'a str> {
        filtered.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn unfiltered_view_is_identity() {
        let filter = CatalogFilter::new(sample_catalog());
        assert_eq!(ids(&filter.filtered_products()), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn categories_are_distinct_sorted_and_skip_absent() {
        let filter = CatalogFilter::new(sample_catalog());
        assert_eq!(filter.categories(), vec!["Electronics", "Furniture"]);
    }

    #[test]
    fn categories_trim_whitespace_and_merge_duplicates() {
        let filter = CatalogFilter::new(vec![
            product("1", "A", Some("  Tools"), None),
            product("2", "B", Some("Tools  "), None),
            product("3", "C", Some("   "), None),
        ]);
        assert_eq!(filter.categories(), vec!["Tools"]);
    }

    #[test]
    fn categories_ignore_active_filters() {
        let mut filter = CatalogFilter::new(sample_catalog());
        filter.set_category_filter("Furniture");
        filter.set_search("chair");
        assert_eq!(filter.categories(), vec!["Electronics", "Furniture"]);
    }

    #[test]
    fn search_matches_name_sku_and_category_case_insensitively() {
        let mut filter = CatalogFilter::new(sample_catalog());

        filter.set_search("CHAIR");
        assert_eq!(ids(&filter.filtered_products()), vec!["1"]);

        filter.set_search("sku-3");
        assert_eq!(ids(&filter.filtered_products()), vec!["3"]);

        filter.set_search("electronics");
        assert_eq!(ids(&filter.filtered_products()), vec!["3"]);
    }

    #[test]
    fn blank_search_matches_everything() {
        let mut filter = CatalogFilter::new(sample_catalog());
        filter.set_search("   ");
        assert_eq!(filter.filtered_products().len(), 4);
    }

    #[test]
    fn product_without_category_still_matches_search_on_name() {
        let mut filter = CatalogFilter::new(sample_catalog());
        filter.set_search("mystery");
        assert_eq!(ids(&filter.filtered_products()), vec!["4"]);
    }

    #[test]
    fn category_filter_is_exact_on_trimmed_value() {
        let mut filter = CatalogFilter::new(vec![
            product("1", "A", Some(" Furniture "), None),
            product("2", "B", Some("Furniture Extra"), None),
            product("3", "C", None, None),
        ]);
        filter.set_category_filter("Furniture");
        assert_eq!(ids(&filter.filtered_products()), vec!["1"]);
    }

    #[test]
    fn low_stock_requires_numeric_stock_at_or_below_threshold() {
        let mut filter = CatalogFilter::new(sample_catalog());
        filter.set_low_stock_only(true);
        // "4" has no stock field, "2" is above threshold.
        assert_eq!(ids(&filter.filtered_products()), vec!["1", "3"]);
    }

    #[test]
    fn filters_compose_conjunctively() {
        let mut filter = CatalogFilter::new(sample_catalog());
        filter.set_search("s");
        filter.set_category_filter("Furniture");
        filter.set_low_stock_only(true);
        // "s" matches all SKUs; category keeps 1 and 2; low-stock keeps 1.
        assert_eq!(ids(&filter.filtered_products()), vec!["1"]);
    }

    #[test]
    fn clear_filters_restores_identity_and_is_idempotent() {
        let mut filter = CatalogFilter::new(sample_catalog());
        filter.set_search("chair");
        filter.set_category_filter("Furniture");
        filter.set_low_stock_only(true);

        filter.clear_filters();
        let once = filter.criteria().clone();
        filter.clear_filters();

        assert_eq!(filter.criteria(), &once);
        assert_eq!(filter.criteria(), &FilterCriteria::default());
        assert_eq!(filter.filtered_products().len(), 4);
    }

    #[test]
    fn set_products_keeps_criteria() {
        let mut filter = CatalogFilter::new(sample_catalog());
        filter.set_search("cable");
        filter.set_products(vec![product("9", "HDMI Cable", Some("Electronics"), Some(2))]);
        assert_eq!(ids(&filter.filtered_products()), vec!["9"]);
        assert_eq!(filter.search(), "cable");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                "[a-z0-9]{1,8}",
                "[A-Za-z ]{1,16}",
                proptest::option::of("[A-Za-z]{1,8}"),
                proptest::option::of(-5i64..50),
                proptest::option::of("[A-Z0-9-]{1,10}"),
            )
                .prop_map(|(id, name, category, stock, sku)| Product {
                    id,
                    name,
                    price: 10.0,
                    category,
                    stock,
                    sku,
                })
        }

        proptest! {
            /// Empty criteria never drop or reorder anything.
            #[test]
            fn unfiltered_equals_source(products in proptest::collection::vec(arb_product(), 0..20)) {
                let filter = CatalogFilter::new(products.clone());
                let view: Vec<Product> = filter.filtered_products().into_iter().cloned().collect();
                prop_assert_eq!(view, products);
            }

            /// Every filtered view is an order-preserving subsequence of the source.
            #[test]
            fn filtered_is_stable_subsequence(
                products in proptest::collection::vec(arb_product(), 0..20),
                search in "[a-z]{0,4}",
                category in "[A-Za-z]{0,4}",
                low_stock in any::<bool>(),
            ) {
                let mut filter = CatalogFilter::new(products.clone());
                filter.set_search(search);
                filter.set_category_filter(category);
                filter.set_low_stock_only(low_stock);

                let mut source = products.iter();
                for kept in filter.filtered_products() {
                    // Each kept product must appear later in the source iterator.
                    prop_assert!(source.any(|p| p == kept));
                }
            }

            /// Adding the category filter can only narrow the search result.
            #[test]
            fn category_filter_narrows_search_result(
                products in proptest::collection::vec(arb_product(), 0..20),
                search in "[a-z]{0,4}",
                category in "[A-Za-z]{1,4}",
            ) {
                let mut filter = CatalogFilter::new(products);
                filter.set_search(search);
                let search_only: Vec<String> =
                    filter.filtered_products().iter().map(|p| p.id.clone()).collect();

                filter.set_category_filter(category);
                for p in filter.filtered_products() {
                    prop_assert!(search_only.contains(&p.id));
                }
            }

            /// Clearing filters always restores the identity view.
            #[test]
            fn clear_restores_identity(
                products in proptest::collection::vec(arb_product(), 0..20),
                search in "[a-z]{0,4}",
                low_stock in any::<bool>(),
            ) {
                let mut filter = CatalogFilter::new(products.clone());
                filter.set_search(search);
                filter.set_low_stock_only(low_stock);
                filter.clear_filters();
                prop_assert_eq!(filter.filtered_products().len(), products.len());
            }

            /// The category facet is sorted and duplicate-free.
            #[test]
            fn categories_sorted_and_distinct(
                products in proptest::collection::vec(arb_product(), 0..20),
            ) {
                let filter = CatalogFilter::new(products);
                let categories = filter.categories();
                let mut sorted = categories.clone();
                sorted.sort();
                sorted.dedup();
                prop_assert_eq!(categories, sorted);
            }
        }
    }
}
