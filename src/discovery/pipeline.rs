use serde::Serialize;

use crate::discovery::filter::{Category, FilterState};
use crate::discovery::sort::SortConfig;
use crate::vendor::Vendor;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Everything the user has selected that shapes the vendor list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveryQuery {
    pub search: String,
    pub category: Category,
    pub filter: FilterState,
    pub sort: SortConfig,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Default for DiscoveryQuery {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl DiscoveryQuery {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            search: String::new(),
            category: Category::All,
            filter: FilterState::default(),
            sort: SortConfig::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Number of items the current page count allows.
    pub fn shown_limit(&self) -> usize {
        self.page.max(1).saturating_mul(self.page_size)
    }
}

/// The slice to render plus what is needed to decide on "load more".
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryView<'a> {
    pub items: Vec<&'a Vendor>,
    pub total_matches: usize,
    pub has_more: bool,
}

impl DiscoveryView<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Search, filter, sort, then take the first `page * page_size` vendors.
///
/// The slice is recomputed from the start on every call; there is no cursor.
pub fn apply<'a>(vendors: &'a [Vendor], query: &DiscoveryQuery) -> DiscoveryView<'a> {
    let needle = query.search.trim().to_lowercase();

    let mut matched: Vec<&Vendor> = vendors
        .iter()
        .filter(|v| needle.is_empty() || v.name.to_lowercase().contains(&needle))
        .filter(|v| query.category.matches(v))
        .filter(|v| query.filter.matches(v))
        .collect();

    // Stable: equal keys keep fixture order.
    matched.sort_by(|a, b| query.sort.compare(a, b));

    let total_matches = matched.len();
    matched.truncate(query.shown_limit());
    let has_more = total_matches > matched.len();

    tracing::debug!(
        total = vendors.len(),
        matches = total_matches,
        shown = matched.len(),
        page = query.page,
        "Recomputed vendor list"
    );

    DiscoveryView {
        items: matched,
        total_matches,
        has_more,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::sort::{SortDirection, SortKey};

    fn vendor(name: &str, rating: f64, distance: Option<f64>) -> Vendor {
        Vendor {
            id: name.to_lowercase(),
            name: name.to_string(),
            brand: String::new(),
            logo: String::new(),
            brand_image: None,
            rating,
            category: "Food".to_string(),
            coordinate: None,
            products: Vec::new(),
            is_open: true,
            review_count: 0,
            description: None,
            delivery_time: "Unknown".to_string(),
            minimum_order: 0.0,
            delivery_fee: 0.0,
            distance_km: distance,
        }
    }

    fn names<'a>(view: &DiscoveryView<'a>) -> Vec<&'a str> {
        view.items.iter().copied().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let vendors = vec![vendor("Mama Put", 4.0, None), vendor("Suya Spot", 4.0, None)];
        let query = DiscoveryQuery {
            search: "PUT".to_string(),
            ..DiscoveryQuery::default()
        };
        assert_eq!(names(&apply(&vendors, &query)), vec!["Mama Put"]);
    }

    #[test]
    fn blank_search_matches_all() {
        let vendors = vec![vendor("A", 4.0, None), vendor("B", 3.0, None)];
        let query = DiscoveryQuery {
            search: "   ".to_string(),
            ..DiscoveryQuery::default()
        };
        assert_eq!(apply(&vendors, &query).total_matches, 2);
    }

    #[test]
    fn pagination_takes_page_times_size() {
        let vendors: Vec<Vendor> = (0..25).map(|i| vendor(&format!("V{i}"), 4.0, None)).collect();
        let mut query = DiscoveryQuery::default();

        let view = apply(&vendors, &query);
        assert_eq!(view.items.len(), 10);
        assert_eq!(view.total_matches, 25);
        assert!(view.has_more);

        query.page = 3;
        let view = apply(&vendors, &query);
        assert_eq!(view.items.len(), 25);
        assert!(!view.has_more);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let vendors = vec![vendor("First", 4.0, None), vendor("Second", 4.0, None)];
        let view = apply(&vendors, &DiscoveryQuery::default());
        assert_eq!(names(&view), vec!["First", "Second"]);
    }

    #[test]
    fn unknown_distance_sorts_as_zero() {
        let vendors = vec![
            vendor("Far", 4.0, Some(8.0)),
            vendor("Unknown", 4.0, None),
            vendor("Near", 4.0, Some(1.0)),
        ];
        let query = DiscoveryQuery {
            sort: SortConfig {
                key: SortKey::Distance,
                direction: SortDirection::Asc,
            },
            ..DiscoveryQuery::default()
        };
        assert_eq!(names(&apply(&vendors, &query)), vec!["Unknown", "Near", "Far"]);
    }

    #[test]
    fn empty_input_gives_empty_view() {
        let view = apply(&[], &DiscoveryQuery::default());
        assert!(view.is_empty());
        assert_eq!(view.total_matches, 0);
        assert!(!view.has_more);
    }

    #[test]
    fn page_size_never_zero() {
        assert_eq!(DiscoveryQuery::with_page_size(0).page_size, 1);
    }
}
