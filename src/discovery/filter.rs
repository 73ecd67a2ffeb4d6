use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::vendor::Vendor;

/// Category tabs. `All` disables the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Food,
    Grocery,
    Pharmacy,
    Electronics,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Food,
        Category::Grocery,
        Category::Pharmacy,
        Category::Electronics,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Food => "Food",
            Category::Grocery => "Grocery",
            Category::Pharmacy => "Pharmacy",
            Category::Electronics => "Electronics",
        }
    }

    /// Exact tag match; `All` matches every vendor.
    pub fn matches(self, vendor: &Vendor) -> bool {
        self == Category::All || vendor.category == self.name()
    }

    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown category '{}', expected one of: All, Food, Grocery, Pharmacy, Electronics",
                    s
                )
            })
    }
}

/// Minimum-rating choices offered by the filter dialog. `None` is "any".
pub const RATING_CHOICES: [Option<f64>; 5] = [None, Some(3.0), Some(3.5), Some(4.0), Some(4.5)];

/// Maximum-distance choices in km offered by the filter dialog. `None` is "any".
pub const DISTANCE_CHOICES: [Option<f64>; 5] = [None, Some(1.0), Some(2.0), Some(5.0), Some(10.0)];

/// Independent vendor predicates. The default excludes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub min_rating: Option<f64>,
    pub max_distance_km: Option<f64>,
    pub open_now: bool,
}

impl FilterState {
    pub fn is_neutral(&self) -> bool {
        self.min_rating.is_none() && self.max_distance_km.is_none() && !self.open_now
    }

    pub fn matches(&self, vendor: &Vendor) -> bool {
        self.matches_rating(vendor) && self.matches_distance(vendor) && self.matches_open(vendor)
    }

    fn matches_rating(&self, vendor: &Vendor) -> bool {
        match self.min_rating {
            None => true,
            Some(min) => vendor.rating.is_finite() && vendor.rating >= min,
        }
    }

    /// Vendors with unknown distance never satisfy a distance bound.
    fn matches_distance(&self, vendor: &Vendor) -> bool {
        match self.max_distance_km {
            None => true,
            Some(max) => vendor.distance_km.is_some_and(|d| d <= max),
        }
    }

    fn matches_open(&self, vendor: &Vendor) -> bool {
        !self.open_now || vendor.is_open
    }

    /// Step the rating threshold through [`RATING_CHOICES`].
    pub fn cycle_rating(&mut self, forward: bool) {
        self.min_rating = cycle(&RATING_CHOICES, self.min_rating, forward);
    }

    /// Step the distance threshold through [`DISTANCE_CHOICES`].
    pub fn cycle_distance(&mut self, forward: bool) {
        self.max_distance_km = cycle(&DISTANCE_CHOICES, self.max_distance_km, forward);
    }
}

fn cycle(choices: &[Option<f64>], current: Option<f64>, forward: bool) -> Option<f64> {
    let len = choices.len();
    let idx = choices.iter().position(|c| *c == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    choices[next]
}

/// Label for a rating threshold, e.g. `4.0+` or `Any`.
pub fn rating_label(min_rating: Option<f64>) -> String {
    match min_rating {
        None => "Any".to_string(),
        Some(r) => format!("{:.1}+", r),
    }
}

/// Label for a distance threshold, e.g. `≤ 5 km` or `Any`.
pub fn distance_label(max_distance_km: Option<f64>) -> String {
    match max_distance_km {
        None => "Any".to_string(),
        Some(d) => format!("≤ {} km", d),
    }
}
