//! Search, filter, sort and paginate the vendor list.
//!
//! Everything here is a pure function of the vendor set and the user's
//! current selection; the UI re-runs [`apply`] whenever either changes.

mod filter;
mod pipeline;
mod sort;

pub use filter::{
    distance_label, rating_label, Category, FilterState, DISTANCE_CHOICES, RATING_CHOICES,
};
pub use pipeline::{apply, DiscoveryQuery, DiscoveryView, DEFAULT_PAGE_SIZE};
pub use sort::{SortConfig, SortDirection, SortKey};
