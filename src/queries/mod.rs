//! The listing query pipeline.
//!
//! Leaves first: [`predicate`] decides matches, [`sort`] selects
//! comparators, [`paginate`] cuts pages, and [`controller`] orchestrates
//! them for a view. The per-kind modules ([`auctions`], [`products`],
//! [`contracts`]) borrow a [`Catalog`](crate::snapshot::Catalog) and expose
//! the pipeline with each view's page size.

pub mod auctions;
pub mod contracts;
pub mod controller;
pub mod filter;
pub mod paginate;
pub mod predicate;
pub mod products;
pub mod sort;

pub use auctions::AuctionQuery;
pub use contracts::ContractQuery;
pub use controller::{run_pipeline, ListingController, ListingParams, ListingSnapshot};
pub use filter::{FilterCriteria, ValueRange, ViewerRole};
pub use paginate::{clamp_page, paginate, Page};
pub use predicate::{find_by_id, matches, Listing, ListingKind, RecordRef};
pub use products::ProductQuery;
pub use sort::{comparator_for, sort_stable, SortDirection, SortField, SortSpec};
