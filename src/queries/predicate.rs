//! Per-kind match rules for listing records.
//!
//! Every active dimension of a [`FilterCriteria`] is ANDed together; an
//! unset dimension always matches. Nested objects missing from a record
//! make the predicate that reads them fail rather than panic.

use std::fmt;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use super::filter::{FilterCriteria, ValueRange, ViewerRole};
use crate::models::{
    AuctionRecord, ContractOfferRecord, Person, ProductRecord, ProductType, TradeStatus, UserId,
};

// ---------------------------------------------------------------------------
// ListingKind / RecordRef
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingKind {
    Auction,
    Product,
    Contract,
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListingKind::Auction => "auction",
            ListingKind::Product => "product",
            ListingKind::Contract => "contract",
        };
        f.write_str(name)
    }
}

/// A borrowed record of any listing kind.
#[derive(Debug, Clone, Copy)]
pub enum RecordRef<'a> {
    Auction(&'a AuctionRecord),
    Product(&'a ProductRecord),
    Contract(&'a ContractOfferRecord),
}

impl RecordRef<'_> {
    pub fn kind(&self) -> ListingKind {
        match self {
            RecordRef::Auction(_) => ListingKind::Auction,
            RecordRef::Product(_) => ListingKind::Product,
            RecordRef::Contract(_) => ListingKind::Contract,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            RecordRef::Auction(a) => a.id,
            RecordRef::Product(p) => p.id,
            RecordRef::Contract(c) => c.id,
        }
    }
}

/// Decide whether `record` passes `criteria`, using the rules of its kind.
///
/// `viewer` is the current user; only the contract role filter reads it.
pub fn matches(record: RecordRef<'_>, criteria: &FilterCriteria, viewer: Option<UserId>) -> bool {
    match record {
        RecordRef::Auction(a) => a.matches(criteria, viewer),
        RecordRef::Product(p) => p.matches(criteria, viewer),
        RecordRef::Contract(c) => c.matches(criteria, viewer),
    }
}

/// The first record in `records` whose id is `id`.
pub fn find_by_id<T: Listing>(records: &[T], id: i64) -> Option<&T> {
    records.iter().find(|r| r.id() == id)
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// A record that can flow through the listing pipeline.
pub trait Listing {
    const KIND: ListingKind;

    fn id(&self) -> i64;

    fn as_record(&self) -> RecordRef<'_>;

    /// Match decision for one record. Must not depend on anything but its
    /// arguments.
    fn matches(&self, criteria: &FilterCriteria, viewer: Option<UserId>) -> bool;

    /// Expiration, delivery or end date, in milliseconds since the epoch.
    fn primary_date_millis(&self) -> i64;

    /// The value the range slider and the price sort operate on.
    fn price_key(&self) -> f64;
}

impl Listing for AuctionRecord {
    const KIND: ListingKind = ListingKind::Auction;

    fn id(&self) -> i64 {
        self.id
    }

    fn as_record(&self) -> RecordRef<'_> {
        RecordRef::Auction(self)
    }

    fn matches(&self, criteria: &FilterCriteria, _viewer: Option<UserId>) -> bool {
        let product = self.product.as_ref();
        let store = self.store();

        let id = self.id.to_string();
        let text = [
            product.map(|p| p.product_type.as_str()).unwrap_or(""),
            store.map(|s| s.name.as_str()).unwrap_or(""),
            id.as_str(),
            first_name(self.trader.as_ref()),
            last_name(self.trader.as_ref()),
        ];

        text_matches(&text, &criteria.search)
            && status_matches(criteria.status, self.status)
            && in_range(criteria.range, self.price_key())
            && on_or_before_cutoff(self.expiration_date, criteria.cutoff_date)
            && eq_when_set(criteria.quality_id, product.and_then(|p| p.quality_id))
            && type_matches(criteria.product_type, product.map(|p| p.product_type))
            && eq_when_set(criteria.region_id, store.and_then(|s| s.region_id()))
            && eq_when_set(criteria.city_id, store.and_then(|s| s.city_id()))
    }

    fn primary_date_millis(&self) -> i64 {
        self.expiration_date.timestamp_millis()
    }

    fn price_key(&self) -> f64 {
        self.price_per_kg()
    }
}

impl Listing for ProductRecord {
    const KIND: ListingKind = ListingKind::Product;

    fn id(&self) -> i64 {
        self.id
    }

    fn as_record(&self) -> RecordRef<'_> {
        RecordRef::Product(self)
    }

    fn matches(&self, criteria: &FilterCriteria, _viewer: Option<UserId>) -> bool {
        let store = self.store.as_ref();

        let id = self.id.to_string();
        let text = [
            self.product_type.as_str(),
            store.map(|s| s.name.as_str()).unwrap_or(""),
            id.as_str(),
        ];

        text_matches(&text, &criteria.search)
            && in_range(criteria.range, self.price_key())
            && on_or_before_cutoff(self.delivery_date, criteria.cutoff_date)
            && eq_when_set(criteria.quality_id, self.quality_id())
            && type_matches(criteria.product_type, Some(self.product_type))
            && eq_when_set(criteria.region_id, store.and_then(|s| s.region_id()))
            && eq_when_set(criteria.city_id, store.and_then(|s| s.city_id()))
    }

    fn primary_date_millis(&self) -> i64 {
        self.delivery_date.timestamp_millis()
    }

    // The product view's range slider filters by weight.
    fn price_key(&self) -> f64 {
        self.weight
    }
}

impl Listing for ContractOfferRecord {
    const KIND: ListingKind = ListingKind::Contract;

    fn id(&self) -> i64 {
        self.id
    }

    fn as_record(&self) -> RecordRef<'_> {
        RecordRef::Contract(self)
    }

    fn matches(&self, criteria: &FilterCriteria, viewer: Option<UserId>) -> bool {
        let quality = self.quality.as_ref();

        let id = self.id.to_string();
        let text = [
            id.as_str(),
            first_name(self.seller.as_ref()),
            last_name(self.seller.as_ref()),
            first_name(self.buyer.as_ref()),
            last_name(self.buyer.as_ref()),
            self.status.as_str(),
        ];

        let type_ok = match criteria.product_type {
            None => true,
            Some(index) => quality.and_then(|q| q.quality_type_id) == Some(index),
        };

        text_matches(&text, &criteria.search)
            && in_range(criteria.range, self.price_key())
            && on_or_before_cutoff(self.end_date, criteria.cutoff_date)
            && eq_when_set(criteria.quality_id, quality.and_then(|q| q.id))
            && type_ok
            && role_matches(criteria.role, viewer, self)
    }

    fn primary_date_millis(&self) -> i64 {
        self.end_date.timestamp_millis()
    }

    fn price_key(&self) -> f64 {
        self.price_per_kg
    }
}

// ---------------------------------------------------------------------------
// Rule helpers
// ---------------------------------------------------------------------------

/// Case-insensitive substring search over the space-joined fields.
fn text_matches(fields: &[&str], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    fields
        .join(" ")
        .to_lowercase()
        .contains(&term.to_lowercase())
}

/// `open` selects open records; every other status selects the records
/// that are not open.
fn status_matches(selected: Option<TradeStatus>, status: TradeStatus) -> bool {
    match selected {
        None => true,
        Some(TradeStatus::Open) => status == TradeStatus::Open,
        Some(_) => status != TradeStatus::Open,
    }
}

fn in_range(range: Option<ValueRange>, value: f64) -> bool {
    range.map_or(true, |r| r.contains(value))
}

fn on_or_before_cutoff(date: DateTime<Utc>, cutoff: Option<NaiveDate>) -> bool {
    let Some(cutoff) = cutoff else {
        return true;
    };
    match cutoff.and_hms_milli_opt(23, 59, 59, 999) {
        Some(end_of_day) => date <= Utc.from_utc_datetime(&end_of_day),
        None => true,
    }
}

fn eq_when_set<T: PartialEq>(selected: Option<T>, value: Option<T>) -> bool {
    match selected {
        None => true,
        Some(s) => value.is_some_and(|v| v == s),
    }
}

fn type_matches(selected: Option<u32>, value: Option<ProductType>) -> bool {
    match selected {
        None => true,
        Some(index) => match (ProductType::from_index(index), value) {
            (Some(wanted), Some(actual)) => wanted == actual,
            _ => false,
        },
    }
}

fn role_matches(
    role: Option<ViewerRole>,
    viewer: Option<UserId>,
    contract: &ContractOfferRecord,
) -> bool {
    let party = match role {
        None => return true,
        Some(ViewerRole::Seller) => contract.seller.as_ref(),
        Some(ViewerRole::Buyer) => contract.buyer.as_ref(),
    };
    match (party, viewer) {
        (Some(p), Some(user)) => p.id == user,
        _ => false,
    }
}

fn first_name(person: Option<&Person>) -> &str {
    person.map(|p| p.first_name.as_str()).unwrap_or("")
}

fn last_name(person: Option<&Person>) -> &str {
    person.map(|p| p.last_name.as_str()).unwrap_or("")
}
