use std::fmt;

use serde::{Deserialize, Serialize};

pub type UserId = i64;

// ---------------------------------------------------------------------------
// TradeStatus
// ---------------------------------------------------------------------------

/// Lifecycle state shared by auctions, bids and contract offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Open,
    Expired,
    Accepted,
    Rejected,
    Cancelled,
    Pending,
}

impl TradeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeStatus::Open => "open",
            TradeStatus::Expired => "expired",
            TradeStatus::Accepted => "accepted",
            TradeStatus::Rejected => "rejected",
            TradeStatus::Cancelled => "cancelled",
            TradeStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProductType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Harvest,
    Transformed,
}

impl ProductType {
    /// Map the 1-based index used by the product-type selector.
    ///
    /// Returns `None` for `0` and for indexes past the last type.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            1 => Some(ProductType::Harvest),
            2 => Some(ProductType::Transformed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Harvest => "harvest",
            ProductType::Transformed => "transformed",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

/// A trader, seller or buyer as embedded in listing payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: UserId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

// ---------------------------------------------------------------------------
// Store / Address
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub region_id: Option<i64>,
    pub city_id: Option<i64>,
}

/// The warehouse a lot is deposited in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(default)]
    pub name: String,
    pub address: Option<Address>,
}

impl Store {
    pub fn region_id(&self) -> Option<i64> {
        self.address.as_ref().and_then(|a| a.region_id)
    }

    pub fn city_id(&self) -> Option<i64> {
        self.address.as_ref().and_then(|a| a.city_id)
    }
}

// ---------------------------------------------------------------------------
// Quality
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct QualityControl {
    pub quality_id: Option<i64>,
}

/// Quality grade attached to a contract offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Quality {
    pub id: Option<i64>,
    pub quality_type_id: Option<u32>,
}
