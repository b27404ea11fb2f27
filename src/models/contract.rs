use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sub::{Person, Quality, TradeStatus};

// ---------------------------------------------------------------------------
// ContractOfferRecord — a bilateral supply agreement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractOfferRecord {
    pub id: i64,
    pub status: TradeStatus,
    pub price_per_kg: f64,
    pub end_date: DateTime<Utc>,
    pub seller: Option<Person>,
    pub buyer: Option<Person>,
    pub quality: Option<Quality>,
}
