//! Filter criteria shared by every listing view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::TradeStatus;

// ---------------------------------------------------------------------------
// ValueRange
// ---------------------------------------------------------------------------

/// Inclusive numeric range selected with the range slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `true` when `min <= value <= max`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

// ---------------------------------------------------------------------------
// ViewerRole
// ---------------------------------------------------------------------------

/// Which side of a contract the current user is looking from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    Buyer,
    Seller,
}

// ---------------------------------------------------------------------------
// FilterCriteria
// ---------------------------------------------------------------------------

/// The active filter values of one listing view.
///
/// All fields are optional. When `None` (or an empty search string), the
/// corresponding dimension is skipped. Each listing kind reads only the
/// fields that apply to it:
///
/// * `range` ranges over price per kg for auctions and contract offers,
///   and over weight for products.
/// * `status` applies to auctions only.
/// * `region_id` / `city_id` do not apply to contract offers.
/// * `role` applies to contract offers only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search: String,
    pub range: Option<ValueRange>,
    pub cutoff_date: Option<NaiveDate>,
    pub quality_id: Option<i64>,
    /// 1-based index into the product-type selector.
    pub product_type: Option<u32>,
    pub region_id: Option<i64>,
    pub city_id: Option<i64>,
    pub status: Option<TradeStatus>,
    pub role: Option<ViewerRole>,
}

impl FilterCriteria {
    /// `true` when no dimension is active.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Clear every dimension back to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn with_search(mut self, term: &str) -> Self {
        self.search = term.to_string();
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some(ValueRange::new(min, max));
        self
    }

    pub fn with_cutoff_date(mut self, date: NaiveDate) -> Self {
        self.cutoff_date = Some(date);
        self
    }

    pub fn with_quality(mut self, quality_id: i64) -> Self {
        self.quality_id = Some(quality_id);
        self
    }

    pub fn with_product_type(mut self, index: u32) -> Self {
        self.product_type = Some(index);
        self
    }

    pub fn with_region(mut self, region_id: i64) -> Self {
        self.region_id = Some(region_id);
        self
    }

    pub fn with_city(mut self, city_id: i64) -> Self {
        self.city_id = Some(city_id);
        self
    }

    pub fn with_status(mut self, status: TradeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_role(mut self, role: ViewerRole) -> Self {
        self.role = Some(role);
        self
    }
}
