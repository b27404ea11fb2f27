//! Deposited product queries over the catalog.

use crate::config::PRODUCT_PAGE_SIZE;
use crate::models::ProductRecord;
use crate::queries::controller::{ListingController, ListingParams};
use crate::queries::filter::FilterCriteria;
use crate::queries::paginate::Page;
use crate::queries::predicate::{find_by_id, Listing};
use crate::snapshot::Catalog;

/// Query interface for products deposited in stores.
pub struct ProductQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> ProductQuery<'a> {
    /// Create a new `ProductQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn get(&self, id: i64) -> Option<&'a ProductRecord> {
        find_by_id(&self.catalog.products, id)
    }

    pub fn all(&self) -> &'a [ProductRecord] {
        &self.catalog.products
    }

    /// Filter, sort and paginate the products. The range criterion filters
    /// by weight.
    pub fn search(&self, params: &ListingParams) -> Page<&'a ProductRecord> {
        params.run(&self.catalog.products, None, PRODUCT_PAGE_SIZE)
    }

    pub fn count(&self, criteria: &FilterCriteria) -> usize {
        self.catalog
            .products
            .iter()
            .filter(|p| p.matches(criteria, None))
            .count()
    }

    /// Products held in the store named `name` (case-insensitive).
    pub fn by_store(&self, name: &str) -> Vec<&'a ProductRecord> {
        let wanted = name.to_lowercase();
        self.catalog
            .products
            .iter()
            .filter(|p| {
                p.store
                    .as_ref()
                    .is_some_and(|s| s.name.to_lowercase() == wanted)
            })
            .collect()
    }

    /// Summed weight of the products matching `criteria`.
    pub fn total_weight(&self, criteria: &FilterCriteria) -> f64 {
        self.catalog
            .products
            .iter()
            .filter(|p| p.matches(criteria, None))
            .map(|p| p.weight)
            .sum()
    }

    pub fn controller(&self) -> ListingController<ProductRecord> {
        ListingController::new(self.catalog.products.clone(), PRODUCT_PAGE_SIZE)
    }
}
