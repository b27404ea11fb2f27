use std::collections::HashMap;
use std::path::PathBuf;

pub const AUCTION_PAGE_SIZE: usize = 12;
pub const PRODUCT_PAGE_SIZE: usize = 12;
pub const CONTRACT_PAGE_SIZE: usize = 12;
pub const ADMIN_TABLE_PAGE_SIZE: usize = 10;
pub const SELLER_WIDGET_PAGE_SIZE: usize = 3;

/// The views a listing can be rendered in. Page size is fixed per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingView {
    Marketplace,
    Products,
    Contracts,
    AdminTable,
    SellerAuctions,
}

impl ListingView {
    pub fn page_size(self) -> usize {
        match self {
            ListingView::Marketplace => AUCTION_PAGE_SIZE,
            ListingView::Products => PRODUCT_PAGE_SIZE,
            ListingView::Contracts => CONTRACT_PAGE_SIZE,
            ListingView::AdminTable => ADMIN_TABLE_PAGE_SIZE,
            ListingView::SellerAuctions => SELLER_WIDGET_PAGE_SIZE,
        }
    }
}

pub fn snapshot_files() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("auctions", "auctions.json"),
        ("products", "products.json"),
        ("contracts", "contracts.json"),
    ])
}

pub fn default_snapshot_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("agro-listings")
    } else {
        PathBuf::from(".agro-listings-cache")
    }
}
