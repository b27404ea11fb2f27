//! Auction listing queries over the catalog.

use crate::config::{AUCTION_PAGE_SIZE, SELLER_WIDGET_PAGE_SIZE};
use crate::models::{AuctionRecord, BidRecord, UserId};
use crate::queries::controller::{ListingController, ListingParams};
use crate::queries::filter::FilterCriteria;
use crate::queries::paginate::{paginate, Page};
use crate::queries::predicate::{find_by_id, Listing};
use crate::queries::sort::{sort_stable, SortSpec};
use crate::snapshot::Catalog;

// ---------------------------------------------------------------------------
// AuctionQuery
// ---------------------------------------------------------------------------

/// Query interface for marketplace auctions.
pub struct AuctionQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> AuctionQuery<'a> {
    /// Create a new `AuctionQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    // -- Lookup ------------------------------------------------------------

    pub fn get(&self, id: i64) -> Option<&'a AuctionRecord> {
        find_by_id(&self.catalog.auctions, id)
    }

    pub fn all(&self) -> &'a [AuctionRecord] {
        &self.catalog.auctions
    }

    // -- Listing -----------------------------------------------------------

    /// Filter, sort and paginate the marketplace (12 per page by default).
    pub fn search(&self, params: &ListingParams) -> Page<&'a AuctionRecord> {
        params.run(&self.catalog.auctions, None, AUCTION_PAGE_SIZE)
    }

    /// Number of auctions matching `criteria`.
    pub fn count(&self, criteria: &FilterCriteria) -> usize {
        self.catalog
            .auctions
            .iter()
            .filter(|a| a.matches(criteria, None))
            .count()
    }

    /// Auctions published by one trader, as shown in the seller widget
    /// (3 per page, soonest expiration first).
    pub fn by_trader(&self, trader_id: UserId, page: usize) -> Page<&'a AuctionRecord> {
        let mut own: Vec<&AuctionRecord> = self
            .catalog
            .auctions
            .iter()
            .filter(|a| a.trader.as_ref().is_some_and(|t| t.id == trader_id))
            .collect();
        sort_stable(&mut own, SortSpec::date_asc());
        paginate(&own, SELLER_WIDGET_PAGE_SIZE, page)
    }

    // -- Bids --------------------------------------------------------------

    pub fn highest_bid(&self, id: i64) -> Option<&'a BidRecord> {
        self.get(id).and_then(|a| a.highest_bid())
    }

    /// Every bid placed by `trader_id`, newest first.
    pub fn bids_by(&self, trader_id: UserId) -> Vec<(&'a AuctionRecord, &'a BidRecord)> {
        let mut bids: Vec<(&AuctionRecord, &BidRecord)> = self
            .catalog
            .auctions
            .iter()
            .flat_map(|a| a.bids.iter().map(move |b| (a, b)))
            .filter(|(_, b)| b.trader.as_ref().is_some_and(|t| t.id == trader_id))
            .collect();
        bids.sort_by(|(_, x), (_, y)| y.creation_date.cmp(&x.creation_date));
        bids
    }

    // -- Controller --------------------------------------------------------

    /// A stateful controller over a copy of the auctions.
    pub fn controller(&self) -> ListingController<AuctionRecord> {
        ListingController::new(self.catalog.auctions.clone(), AUCTION_PAGE_SIZE)
    }
}
