//! Listing query pipeline for an agricultural commodity marketplace.
//!
//! Turns in-memory collections of auctions, deposited products and contract
//! offers into the page a user sees, given filter criteria, a sort order and
//! a page number. Record collections are supplied by the upstream API client,
//! either directly or as JSON snapshots on disk.
//!
//! # Quick start
//!
//! ```no_run
//! use agro_listings::Marketplace;
//! use agro_listings::queries::{FilterCriteria, ListingParams, SortSpec};
//!
//! let market = Marketplace::builder().snapshot_dir("/tmp/market").build().unwrap();
//!
//! let params = ListingParams::new(FilterCriteria::default().with_search("maize"))
//!     .with_sort(SortSpec::price_desc());
//! let page = market.auctions().search(&params);
//! println!("{} of {} pages", page.page, page.total_pages);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod snapshot;

pub use error::{ListingError, Result};
pub use snapshot::Catalog;

use std::fmt;
use std::path::{Path, PathBuf};

use models::UserId;

// ---------------------------------------------------------------------------
// MarketplaceBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Marketplace`].
///
/// Use [`Marketplace::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](MarketplaceBuilder::build).
#[derive(Default)]
pub struct MarketplaceBuilder {
    snapshot_dir: Option<PathBuf>,
    viewer: Option<UserId>,
    catalog: Option<Catalog>,
}

impl MarketplaceBuilder {
    /// Load records from JSON snapshots in `path`.
    pub fn snapshot_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.snapshot_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load records from the platform cache directory
    /// (e.g. `~/.cache/agro-listings` on Linux).
    pub fn default_snapshot_dir(mut self) -> Self {
        self.snapshot_dir = Some(config::default_snapshot_dir());
        self
    }

    /// The user browsing the listings. Contract role filters compare
    /// against it.
    pub fn viewer(mut self, user_id: UserId) -> Self {
        self.viewer = Some(user_id);
        self
    }

    /// Start from records already held in memory. Ignored when a snapshot
    /// directory is also configured.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build the marketplace, reading the snapshot directory if one is set.
    pub fn build(self) -> Result<Marketplace> {
        let catalog = match &self.snapshot_dir {
            Some(dir) => Catalog::load_dir(dir)?,
            None => self.catalog.unwrap_or_default(),
        };
        Ok(Marketplace {
            catalog,
            snapshot_dir: self.snapshot_dir,
            viewer: self.viewer,
        })
    }
}

// ---------------------------------------------------------------------------
// Marketplace
// ---------------------------------------------------------------------------

/// Entry point: owns the record catalog and the current viewer, and hands
/// out per-kind query interfaces as lightweight borrowing wrappers.
pub struct Marketplace {
    catalog: Catalog,
    snapshot_dir: Option<PathBuf>,
    viewer: Option<UserId>,
}

impl Marketplace {
    pub fn builder() -> MarketplaceBuilder {
        MarketplaceBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the auction query interface.
    pub fn auctions(&self) -> queries::AuctionQuery<'_> {
        queries::AuctionQuery::new(&self.catalog)
    }

    /// Access the product query interface.
    pub fn products(&self) -> queries::ProductQuery<'_> {
        queries::ProductQuery::new(&self.catalog)
    }

    /// Access the contract query interface, bound to the current viewer.
    pub fn contracts(&self) -> queries::ContractQuery<'_> {
        queries::ContractQuery::new(&self.catalog, self.viewer)
    }

    // -- State -------------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn viewer(&self) -> Option<UserId> {
        self.viewer
    }

    pub fn set_viewer(&mut self, viewer: Option<UserId>) {
        self.viewer = viewer;
    }

    /// Re-read the snapshot directory.
    ///
    /// Returns `false` without touching the catalog when the marketplace was
    /// built from in-memory records.
    pub fn reload(&mut self) -> Result<bool> {
        match &self.snapshot_dir {
            Some(dir) => {
                self.catalog = Catalog::load_dir(dir)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = self
            .snapshot_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "memory".to_string());
        write!(
            f,
            "Marketplace(source={}, auctions={}, products={}, contracts={})",
            source,
            self.catalog.auctions.len(),
            self.catalog.products.len(),
            self.catalog.contracts.len()
        )
    }
}
