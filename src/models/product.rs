use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sub::{ProductType, QualityControl, Store};

// ---------------------------------------------------------------------------
// ProductRecord — a lot deposited in a store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: i64,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub weight: f64,
    pub delivery_date: DateTime<Utc>,
    pub quality_control: Option<QualityControl>,
    pub store: Option<Store>,
}

impl ProductRecord {
    pub fn quality_id(&self) -> Option<i64> {
        self.quality_control.as_ref().and_then(|q| q.quality_id)
    }
}
