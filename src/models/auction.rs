use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sub::{Person, ProductType, Store, TradeStatus};

// ---------------------------------------------------------------------------
// BidRecord
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRecord {
    pub amount: f64,
    pub status: TradeStatus,
    pub trader: Option<Person>,
    pub creation_date: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// AuctionProduct — the lot an auction sells
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionProduct {
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub quality_id: Option<i64>,
    pub store: Option<Store>,
}

// ---------------------------------------------------------------------------
// AuctionRecord
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionRecord {
    pub id: i64,
    pub price: f64,
    pub quantity: f64,
    pub expiration_date: DateTime<Utc>,
    pub status: TradeStatus,
    pub product: Option<AuctionProduct>,
    pub trader: Option<Person>,
    #[serde(default)]
    pub bids: Vec<BidRecord>,
}

impl AuctionRecord {
    /// Asking price divided by quantity, `0.0` when the quantity is zero.
    pub fn price_per_kg(&self) -> f64 {
        if self.quantity == 0.0 {
            0.0
        } else {
            self.price / self.quantity
        }
    }

    /// The largest bid placed so far. On equal amounts the earliest bid wins.
    pub fn highest_bid(&self) -> Option<&BidRecord> {
        self.bids.iter().fold(None, |best: Option<&BidRecord>, bid| match best {
            Some(b) if b.amount >= bid.amount => Some(b),
            _ => Some(bid),
        })
    }

    pub fn store(&self) -> Option<&Store> {
        self.product.as_ref().and_then(|p| p.store.as_ref())
    }
}
