//! Contract offer queries over the catalog.
//!
//! Unlike auctions and products, contract listings depend on who is
//! looking: the buyer/seller role filter compares against the viewer.

use crate::config::CONTRACT_PAGE_SIZE;
use crate::models::{ContractOfferRecord, UserId};
use crate::queries::controller::{ListingController, ListingParams};
use crate::queries::filter::{FilterCriteria, ViewerRole};
use crate::queries::paginate::Page;
use crate::queries::predicate::{find_by_id, Listing};
use crate::snapshot::Catalog;

/// Query interface for contract offers, bound to the current viewer.
pub struct ContractQuery<'a> {
    catalog: &'a Catalog,
    viewer: Option<UserId>,
}

impl<'a> ContractQuery<'a> {
    /// Create a new `ContractQuery` bound to the given catalog and viewer.
    pub fn new(catalog: &'a Catalog, viewer: Option<UserId>) -> Self {
        Self { catalog, viewer }
    }

    pub fn get(&self, id: i64) -> Option<&'a ContractOfferRecord> {
        find_by_id(&self.catalog.contracts, id)
    }

    pub fn all(&self) -> &'a [ContractOfferRecord] {
        &self.catalog.contracts
    }

    pub fn search(&self, params: &ListingParams) -> Page<&'a ContractOfferRecord> {
        params.run(&self.catalog.contracts, self.viewer, CONTRACT_PAGE_SIZE)
    }

    pub fn count(&self, criteria: &FilterCriteria) -> usize {
        self.catalog
            .contracts
            .iter()
            .filter(|c| c.matches(criteria, self.viewer))
            .count()
    }

    /// The viewer's contracts on one side of the agreement.
    ///
    /// Empty when no viewer is set.
    pub fn for_viewer(&self, role: ViewerRole, page: usize) -> Page<&'a ContractOfferRecord> {
        let params = ListingParams::new(FilterCriteria::default().with_role(role)).with_page(page);
        self.search(&params)
    }

    pub fn controller(&self) -> ListingController<ContractOfferRecord> {
        ListingController::new(self.catalog.contracts.clone(), CONTRACT_PAGE_SIZE)
            .with_viewer(self.viewer)
    }
}
