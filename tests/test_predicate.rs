//! Match rules for auctions, products and contract offers.

mod common;

use agro_listings::models::{ProductType, TradeStatus};
use agro_listings::queries::{
    find_by_id, matches, FilterCriteria, Listing, ListingKind, RecordRef, ViewerRole,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn default_criteria_match_every_kind() {
    let criteria = FilterCriteria::default();
    assert!(criteria.is_empty());
    assert!(common::auction(1, 10.0, 1.0, "2024-01-01T00:00:00Z").matches(&criteria, None));
    assert!(common::product(1, ProductType::Harvest, 5.0, "2024-01-01T00:00:00Z")
        .matches(&criteria, None));
    assert!(common::contract(1, 2, 3, 1.0, "2024-01-01T00:00:00Z").matches(&criteria, None));
}

#[test]
fn reset_clears_every_dimension() {
    let mut criteria = FilterCriteria::default()
        .with_search("maize")
        .with_range(1.0, 2.0)
        .with_region(4)
        .with_role(ViewerRole::Buyer);
    assert!(!criteria.is_empty());
    criteria.reset();
    assert!(criteria.is_empty());
}

// ---------------------------------------------------------------------------
// Text search
// ---------------------------------------------------------------------------

#[test]
fn search_finds_trader_last_name_in_any_case() {
    let mut auctions: Vec<_> = (1..=5)
        .map(|i| common::auction(i, 100.0, 1.0, "2024-01-01T00:00:00Z"))
        .collect();
    auctions[2].trader = Some(common::person(7, "Jane", "Doe"));

    for term in ["doe", "Doe", "DOE"] {
        let criteria = FilterCriteria::default().with_search(term);
        let hits: Vec<i64> = auctions
            .iter()
            .filter(|a| a.matches(&criteria, None))
            .map(|a| a.id)
            .collect();
        assert_eq!(hits, vec![3], "term {:?}", term);
    }
}

#[test]
fn auction_search_covers_type_store_and_id() {
    let a = common::auction(4321, 100.0, 1.0, "2024-01-01T00:00:00Z");
    for term in ["harvest", "central silo", "4321", "john", "smith"] {
        assert!(a.matches(&FilterCriteria::default().with_search(term), None), "{}", term);
    }
    assert!(!a.matches(&FilterCriteria::default().with_search("wheat"), None));
}

#[test]
fn product_search_ignores_fields_outside_its_set() {
    let p = common::product(77, ProductType::Transformed, 5.0, "2024-01-01T00:00:00Z");
    assert!(p.matches(&FilterCriteria::default().with_search("TRANSFORMED"), None));
    assert!(p.matches(&FilterCriteria::default().with_search("silo"), None));
    assert!(p.matches(&FilterCriteria::default().with_search("77"), None));
    assert!(!p.matches(&FilterCriteria::default().with_search("john"), None));
}

#[test]
fn contract_search_covers_parties_and_status() {
    let c = common::contract(5, 7, 8, 1.0, "2024-01-01T00:00:00Z");
    assert!(c.matches(&FilterCriteria::default().with_search("seller 7"), None));
    assert!(c.matches(&FilterCriteria::default().with_search("buyer"), None));
    assert!(c.matches(&FilterCriteria::default().with_search("OPEN"), None));
    assert!(!c.matches(&FilterCriteria::default().with_search("expired"), None));
}

// ---------------------------------------------------------------------------
// Status bucket
// ---------------------------------------------------------------------------

#[test]
fn open_status_selects_only_open_auctions() {
    let criteria = FilterCriteria::default().with_status(TradeStatus::Open);
    assert!(common::auction_with_status(1, TradeStatus::Open).matches(&criteria, None));
    assert!(!common::auction_with_status(2, TradeStatus::Expired).matches(&criteria, None));
}

#[test]
fn any_other_status_selects_every_non_open_auction() {
    let criteria = FilterCriteria::default().with_status(TradeStatus::Expired);
    assert!(!common::auction_with_status(1, TradeStatus::Open).matches(&criteria, None));
    for status in [
        TradeStatus::Expired,
        TradeStatus::Accepted,
        TradeStatus::Rejected,
        TradeStatus::Cancelled,
    ] {
        assert!(common::auction_with_status(2, status).matches(&criteria, None), "{}", status);
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

#[test]
fn auction_range_uses_price_per_kg() {
    let a = common::auction(1, 1000.0, 10.0, "2024-01-01T00:00:00Z");
    assert_eq!(a.price_per_kg(), 100.0);
    assert!(!a.matches(&FilterCriteria::default().with_range(0.0, 50.0), None));
    assert!(a.matches(&FilterCriteria::default().with_range(0.0, 150.0), None));
    assert!(a.matches(&FilterCriteria::default().with_range(100.0, 100.0), None));
}

#[test]
fn zero_quantity_auction_counts_as_zero_per_kg() {
    let a = common::auction(1, 1000.0, 0.0, "2024-01-01T00:00:00Z");
    assert_eq!(a.price_per_kg(), 0.0);
    assert!(a.matches(&FilterCriteria::default().with_range(0.0, 10.0), None));
    assert!(!a.matches(&FilterCriteria::default().with_range(1.0, 10.0), None));
}

#[test]
fn product_range_filters_by_weight() {
    let p = common::product(1, ProductType::Harvest, 500.0, "2024-01-01T00:00:00Z");
    assert!(p.matches(&FilterCriteria::default().with_range(400.0, 600.0), None));
    assert!(!p.matches(&FilterCriteria::default().with_range(0.0, 100.0), None));
}

#[test]
fn contract_range_uses_price_per_kg_field() {
    let c = common::contract(1, 2, 3, 1.5, "2024-01-01T00:00:00Z");
    assert!(c.matches(&FilterCriteria::default().with_range(1.0, 2.0), None));
    assert!(!c.matches(&FilterCriteria::default().with_range(1.6, 2.0), None));
}

// ---------------------------------------------------------------------------
// Date cutoff
// ---------------------------------------------------------------------------

#[test]
fn cutoff_includes_the_whole_selected_day() {
    let late_evening = common::auction(1, 1.0, 1.0, "2024-06-01T23:59:59Z");
    let next_day = common::auction(2, 1.0, 1.0, "2024-06-02T00:00:00Z");
    let criteria = FilterCriteria::default().with_cutoff_date(date(2024, 6, 1));

    assert!(late_evening.matches(&criteria, None));
    assert!(!next_day.matches(&criteria, None));
}

#[test]
fn cutoff_reads_delivery_and_end_dates() {
    let criteria = FilterCriteria::default().with_cutoff_date(date(2024, 3, 31));
    let delivered = common::product(1, ProductType::Harvest, 1.0, "2024-03-31T10:00:00Z");
    let later = common::product(2, ProductType::Harvest, 1.0, "2024-04-01T10:00:00Z");
    assert!(delivered.matches(&criteria, None));
    assert!(!later.matches(&criteria, None));

    let ending = common::contract(1, 2, 3, 1.0, "2024-03-30T00:00:00Z");
    assert!(ending.matches(&criteria, None));
}

// ---------------------------------------------------------------------------
// Quality / type / location
// ---------------------------------------------------------------------------

#[test]
fn quality_filter_compares_kind_specific_ids() {
    let criteria = FilterCriteria::default().with_quality(2);
    let mut a = common::auction(1, 1.0, 1.0, "2024-01-01T00:00:00Z");
    assert!(!a.matches(&criteria, None));
    a.product.as_mut().unwrap().quality_id = Some(2);
    assert!(a.matches(&criteria, None));

    let mut p = common::product(1, ProductType::Harvest, 1.0, "2024-01-01T00:00:00Z");
    p.quality_control = None;
    assert!(!p.matches(&criteria, None));

    let mut c = common::contract(1, 2, 3, 1.0, "2024-01-01T00:00:00Z");
    c.quality.as_mut().unwrap().id = Some(2);
    assert!(c.matches(&criteria, None));
}

#[test]
fn product_type_index_is_one_based() {
    let harvest = common::product(1, ProductType::Harvest, 1.0, "2024-01-01T00:00:00Z");
    let transformed = common::product(2, ProductType::Transformed, 1.0, "2024-01-01T00:00:00Z");

    let first = FilterCriteria::default().with_product_type(1);
    let second = FilterCriteria::default().with_product_type(2);
    assert!(harvest.matches(&first, None));
    assert!(!transformed.matches(&first, None));
    assert!(transformed.matches(&second, None));

    let out_of_range = FilterCriteria::default().with_product_type(3);
    assert!(!harvest.matches(&out_of_range, None));
    assert!(!transformed.matches(&out_of_range, None));
}

#[test]
fn contract_type_filter_reads_quality_type() {
    let mut c = common::contract(1, 2, 3, 1.0, "2024-01-01T00:00:00Z");
    assert!(c.matches(&FilterCriteria::default().with_product_type(1), None));
    assert!(!c.matches(&FilterCriteria::default().with_product_type(2), None));

    c.quality = None;
    assert!(!c.matches(&FilterCriteria::default().with_product_type(1), None));
}

#[test]
fn region_and_city_filters_read_store_address() {
    let a = common::auction(1, 1.0, 1.0, "2024-01-01T00:00:00Z");
    assert!(a.matches(&FilterCriteria::default().with_region(1).with_city(10), None));
    assert!(!a.matches(&FilterCriteria::default().with_region(2), None));
    assert!(!a.matches(&FilterCriteria::default().with_city(11), None));
}

#[test]
fn location_filters_do_not_apply_to_contracts() {
    let c = common::contract(1, 2, 3, 1.0, "2024-01-01T00:00:00Z");
    assert!(c.matches(&FilterCriteria::default().with_region(99).with_city(99), None));
}

#[test]
fn missing_nested_objects_fail_only_the_filters_reading_them() {
    let mut a = common::auction(1, 1.0, 1.0, "2024-01-01T00:00:00Z");
    a.product = None;
    a.trader = None;

    assert!(a.matches(&FilterCriteria::default(), None));
    assert!(a.matches(&FilterCriteria::default().with_search("1"), None));
    assert!(!a.matches(&FilterCriteria::default().with_region(1), None));
    assert!(!a.matches(&FilterCriteria::default().with_quality(1), None));
    assert!(!a.matches(&FilterCriteria::default().with_product_type(1), None));
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

#[test]
fn seller_role_keeps_only_contracts_sold_by_viewer() {
    let contracts = [
        common::contract(1, 7, 8, 1.0, "2024-01-01T00:00:00Z"),
        common::contract(2, 8, 7, 1.0, "2024-01-01T00:00:00Z"),
        common::contract(3, 7, 9, 1.0, "2024-01-01T00:00:00Z"),
    ];
    let criteria = FilterCriteria::default().with_role(ViewerRole::Seller);
    let hits: Vec<i64> = contracts
        .iter()
        .filter(|c| c.matches(&criteria, Some(7)))
        .map(|c| c.id)
        .collect();
    assert_eq!(hits, vec![1, 3]);

    let criteria = FilterCriteria::default().with_role(ViewerRole::Buyer);
    let hits: Vec<i64> = contracts
        .iter()
        .filter(|c| c.matches(&criteria, Some(7)))
        .map(|c| c.id)
        .collect();
    assert_eq!(hits, vec![2]);
}

#[test]
fn role_filter_without_viewer_matches_nothing() {
    let c = common::contract(1, 7, 8, 1.0, "2024-01-01T00:00:00Z");
    assert!(!c.matches(&FilterCriteria::default().with_role(ViewerRole::Seller), None));
    assert!(c.matches(&FilterCriteria::default(), None));
}

// ---------------------------------------------------------------------------
// Tagged dispatch
// ---------------------------------------------------------------------------

#[test]
fn record_ref_dispatches_on_kind() {
    let a = common::auction(1, 1000.0, 10.0, "2024-01-01T00:00:00Z");
    let p = common::product(2, ProductType::Harvest, 1000.0, "2024-01-01T00:00:00Z");
    let criteria = FilterCriteria::default().with_range(0.0, 150.0);

    assert_eq!(a.as_record().kind(), ListingKind::Auction);
    assert_eq!(RecordRef::Product(&p).kind(), ListingKind::Product);
    assert_eq!(RecordRef::Product(&p).id(), 2);

    assert!(matches(RecordRef::Auction(&a), &criteria, None));
    assert!(!matches(RecordRef::Product(&p), &criteria, None));
}

#[test]
fn find_by_id_returns_first_record_with_that_id() {
    let contracts = vec![
        common::contract(5, 7, 8, 1.0, "2024-01-01T00:00:00Z"),
        common::contract(6, 7, 8, 2.0, "2024-01-01T00:00:00Z"),
        common::contract(6, 9, 8, 3.0, "2024-01-01T00:00:00Z"),
    ];
    let found = find_by_id(&contracts, 6).unwrap();
    assert_eq!(found.id(), 6);
    assert_eq!(found.price_per_kg, 2.0);
    assert!(find_by_id(&contracts, 99).is_none());
}
