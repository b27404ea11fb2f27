//! Sort specs and the comparators they select.
//!
//! Specs are written `<field>-<direction>`, e.g. `price-desc` or
//! `expiration-asc`. Sorting is always stable: records with equal keys keep
//! their input order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::predicate::Listing;
use crate::error::{ListingError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Expiration (auctions), delivery (products) or end date (contracts).
    #[default]
    Date,
    /// Price per kg (auctions, contracts) or weight (products).
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// The user-selected field and direction. Defaults to date ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn price_asc() -> Self {
        Self::new(SortField::Price, SortDirection::Asc)
    }

    pub fn price_desc() -> Self {
        Self::new(SortField::Price, SortDirection::Desc)
    }

    pub fn date_asc() -> Self {
        Self::new(SortField::Date, SortDirection::Asc)
    }

    pub fn date_desc() -> Self {
        Self::new(SortField::Date, SortDirection::Desc)
    }
}

impl FromStr for SortSpec {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        let (field, direction) = normalized
            .rsplit_once('-')
            .ok_or_else(|| ListingError::InvalidArgument(format!("Invalid sort spec '{}'", s)))?;

        let field = match field {
            "date" | "expiration" | "delivery" | "end" | "end-date" => SortField::Date,
            "price" | "weight" => SortField::Price,
            other => {
                return Err(ListingError::InvalidArgument(format!(
                    "Unknown sort field '{}'",
                    other
                )))
            }
        };
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            other => {
                return Err(ListingError::InvalidArgument(format!(
                    "Unknown sort direction '{}'",
                    other
                )))
            }
        };

        Ok(Self { field, direction })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self.field {
            SortField::Date => "date",
            SortField::Price => "price",
        };
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}-{}", field, direction)
    }
}

impl Serialize for SortSpec {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SortSpec {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Return the comparator selected by `spec`.
///
/// Dates compare by millisecond epoch value, prices as `f64`; values that
/// do not compare (NaN) are treated as equal.
pub fn comparator_for<T: Listing>(spec: SortSpec) -> impl Fn(&T, &T) -> Ordering {
    move |a: &T, b: &T| {
        let ordering = match spec.field {
            SortField::Date => a.primary_date_millis().cmp(&b.primary_date_millis()),
            SortField::Price => a
                .price_key()
                .partial_cmp(&b.price_key())
                .unwrap_or(Ordering::Equal),
        };
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Stable in-place sort of borrowed records.
pub fn sort_stable<T: Listing>(records: &mut [&T], spec: SortSpec) {
    let cmp = comparator_for::<T>(spec);
    records.sort_by(|a, b| cmp(*a, *b));
}
