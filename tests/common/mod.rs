//! Shared test fixtures for the listing pipeline integration tests.
//!
//! Record builders use sensible defaults (a harvest lot of quality 1 in the
//! "Central Silo" store, region 1, city 10) so each test only spells out
//! the fields it is about.

#![allow(dead_code)]

use agro_listings::models::{
    Address, AuctionProduct, AuctionRecord, BidRecord, ContractOfferRecord, Person, ProductRecord,
    ProductType, Quality, QualityControl, Store, TradeStatus, UserId,
};
use agro_listings::Catalog;
use chrono::{DateTime, Utc};

pub fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

pub fn person(id: UserId, first: &str, last: &str) -> Person {
    Person {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
    }
}

pub fn store(name: &str, region_id: i64, city_id: i64) -> Store {
    Store {
        name: name.to_string(),
        address: Some(Address {
            region_id: Some(region_id),
            city_id: Some(city_id),
        }),
    }
}

// ---------------------------------------------------------------------------
// Auctions
// ---------------------------------------------------------------------------

pub fn auction(id: i64, price: f64, quantity: f64, expiration: &str) -> AuctionRecord {
    AuctionRecord {
        id,
        price,
        quantity,
        expiration_date: ts(expiration),
        status: TradeStatus::Open,
        product: Some(AuctionProduct {
            product_type: ProductType::Harvest,
            quality_id: Some(1),
            store: Some(store("Central Silo", 1, 10)),
        }),
        trader: Some(person(100, "John", "Smith")),
        bids: Vec::new(),
    }
}

pub fn auction_with_status(id: i64, status: TradeStatus) -> AuctionRecord {
    AuctionRecord {
        status,
        ..auction(id, 1000.0, 10.0, "2024-06-01T12:00:00Z")
    }
}

pub fn bid(amount: f64, trader_id: UserId, created: &str) -> BidRecord {
    BidRecord {
        amount,
        status: TradeStatus::Pending,
        trader: Some(person(trader_id, "Bidder", &trader_id.to_string())),
        creation_date: ts(created),
    }
}

/// `n` open auctions with ids `1..=n`, one day apart.
pub fn open_auctions(n: usize) -> Vec<AuctionRecord> {
    (1..=n)
        .map(|i| {
            let mut a = auction(i as i64, 100.0 * i as f64, 10.0, "2024-01-01T00:00:00Z");
            a.expiration_date = a.expiration_date + chrono::Duration::days(i as i64);
            a
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

pub fn product(id: i64, product_type: ProductType, weight: f64, delivery: &str) -> ProductRecord {
    ProductRecord {
        id,
        product_type,
        weight,
        delivery_date: ts(delivery),
        quality_control: Some(QualityControl { quality_id: Some(1) }),
        store: Some(store("Central Silo", 1, 10)),
    }
}

// ---------------------------------------------------------------------------
// Contracts
// ---------------------------------------------------------------------------

pub fn contract(
    id: i64,
    seller_id: UserId,
    buyer_id: UserId,
    price_per_kg: f64,
    end: &str,
) -> ContractOfferRecord {
    ContractOfferRecord {
        id,
        status: TradeStatus::Open,
        price_per_kg,
        end_date: ts(end),
        seller: Some(person(seller_id, "Seller", &seller_id.to_string())),
        buyer: Some(person(buyer_id, "Buyer", &buyer_id.to_string())),
        quality: Some(Quality {
            id: Some(1),
            quality_type_id: Some(1),
        }),
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

pub fn sample_catalog() -> Catalog {
    let mut a1 = auction(1, 1000.0, 10.0, "2024-06-01T12:00:00Z");
    a1.trader = Some(person(7, "Jane", "Doe"));
    a1.bids = vec![
        bid(1100.0, 20, "2024-05-01T08:00:00Z"),
        bid(1250.0, 21, "2024-05-02T08:00:00Z"),
        bid(1250.0, 20, "2024-05-03T08:00:00Z"),
    ];

    let mut a2 = auction(2, 500.0, 10.0, "2024-05-15T12:00:00Z");
    a2.status = TradeStatus::Expired;

    let mut a3 = auction(3, 900.0, 3.0, "2024-07-01T12:00:00Z");
    a3.trader = Some(person(7, "Jane", "Doe"));
    a3.bids = vec![bid(950.0, 20, "2024-06-10T08:00:00Z")];

    let mut p2 = product(12, ProductType::Transformed, 250.0, "2024-03-15T09:00:00Z");
    p2.store = Some(store("North Depot", 2, 20));

    Catalog::new(
        vec![a1, a2, a3],
        vec![
            product(11, ProductType::Harvest, 1200.0, "2024-03-01T09:00:00Z"),
            p2,
            product(13, ProductType::Harvest, 80.0, "2024-04-01T09:00:00Z"),
        ],
        vec![
            contract(21, 7, 8, 1.5, "2024-12-31T00:00:00Z"),
            contract(22, 8, 7, 2.0, "2024-11-30T00:00:00Z"),
            contract(23, 9, 10, 1.2, "2024-10-31T00:00:00Z"),
        ],
    )
}
