use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::vendor::Vendor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Rating,
    Distance,
    DeliveryFee,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Rating, SortKey::Distance, SortKey::DeliveryFee];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Rating => "Rating",
            SortKey::Distance => "Distance",
            SortKey::DeliveryFee => "Delivery fee",
        }
    }

    /// Numeric value compared by this key. Unknown distance counts as 0.
    pub fn value(self, vendor: &Vendor) -> f64 {
        match self {
            SortKey::Rating => vendor.rating,
            SortKey::Distance => vendor.distance_km.unwrap_or(0.0),
            SortKey::DeliveryFee => vendor.delivery_fee,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "rating" => Ok(SortKey::Rating),
            "distance" => Ok(SortKey::Distance),
            "delivery-fee" | "fee" => Ok(SortKey::DeliveryFee),
            other => Err(format!(
                "unknown sort key '{}', expected rating, distance or delivery-fee",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Exactly one active sort key with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Rating,
            direction: SortDirection::Desc,
        }
    }
}

impl SortConfig {
    /// Re-selecting the active key flips direction; a new key starts descending.
    pub fn select(self, key: SortKey) -> Self {
        if key == self.key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Desc,
            }
        }
    }

    pub fn compare(&self, a: &Vendor, b: &Vendor) -> Ordering {
        let ord = self.key.value(a).total_cmp(&self.key.value(b));
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}
