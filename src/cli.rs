//! Command-line surface.
//!
//! - `vendorscope` / `vendorscope browse` - interactive terminal UI
//! - `vendorscope list` - run the discovery pipeline once and print the result

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::discovery::{
    apply, Category, DiscoveryQuery, DiscoveryView, FilterState, SortConfig, SortDirection,
    SortKey,
};
use crate::geo::format_distance;
use crate::vendor::{format_price, format_rating, format_review_count, Vendor};

/// Browse nearby vendors from the terminal.
#[derive(Debug, Parser)]
#[command(name = "vendorscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Vendor fixture (JSON) to use instead of the configured or bundled one.
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    /// Subcommand to execute. Defaults to `browse`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive terminal UI.
    Browse,
    /// Print one page of the vendor list and exit.
    List(ListArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Case-insensitive substring of the vendor name.
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// All, Food, Grocery, Pharmacy or Electronics.
    #[arg(long, short = 'c', default_value = "all")]
    pub category: Category,

    /// Only vendors rated at least this high.
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Only vendors within this many kilometres.
    #[arg(long)]
    pub max_distance: Option<f64>,

    /// Only vendors that are open now.
    #[arg(long)]
    pub open: bool,

    /// rating, distance or delivery-fee.
    #[arg(long, default_value = "rating")]
    pub sort: SortKey,

    /// Sort ascending instead of descending.
    #[arg(long)]
    pub asc: bool,

    /// Number of pages to include (1-based).
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn to_query(&self, page_size: usize) -> DiscoveryQuery {
        let mut query = DiscoveryQuery::with_page_size(page_size);
        query.search = self.search.clone().unwrap_or_default();
        query.category = self.category;
        query.filter = FilterState {
            min_rating: self.min_rating,
            max_distance_km: self.max_distance,
            open_now: self.open,
        };
        query.sort = SortConfig {
            key: self.sort,
            direction: if self.asc {
                SortDirection::Asc
            } else {
                SortDirection::Desc
            },
        };
        query.page = self.page.max(1);
        query
    }
}

#[derive(Serialize)]
struct ListOutput<'a> {
    query: &'a DiscoveryQuery,
    total_matches: usize,
    has_more: bool,
    vendors: &'a [&'a Vendor],
}

/// Run the pipeline and render the result as text or JSON.
pub fn render_list(
    args: &ListArgs,
    vendors: &[Vendor],
    page_size: usize,
) -> Result<String, serde_json::Error> {
    let query = args.to_query(page_size);
    let view = apply(vendors, &query);

    if args.json {
        let output = ListOutput {
            query: &query,
            total_matches: view.total_matches,
            has_more: view.has_more,
            vendors: &view.items,
        };
        return serde_json::to_string_pretty(&output);
    }

    Ok(render_table(&view))
}

fn render_table(view: &DiscoveryView<'_>) -> String {
    if view.is_empty() {
        return "No vendors found\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<26} {:<12} {:>6} {:>8} {:>9} {:<7} {:>8}",
        "#", "NAME", "CATEGORY", "RATING", "REVIEWS", "DISTANCE", "STATUS", "FEE"
    );
    for (index, vendor) in view.items.iter().enumerate() {
        let distance = vendor
            .distance_km
            .map(format_distance)
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<4} {:<26} {:<12} {:>6} {:>8} {:>9} {:<7} {:>8}",
            index + 1,
            truncate(&vendor.name, 26),
            truncate(&vendor.category, 12),
            format_rating(vendor.rating),
            format_review_count(vendor.review_count),
            distance,
            if vendor.is_open { "open" } else { "closed" },
            format_price(vendor.delivery_fee),
        );
    }
    let _ = writeln!(
        out,
        "\nShowing {} of {}",
        view.items.len(),
        view.total_matches
    );
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendor::{build_vendors, parse_fixture, BUNDLED_FIXTURE};

    fn bundled() -> Vec<Vendor> {
        build_vendors(&parse_fixture(BUNDLED_FIXTURE).unwrap(), None)
    }

    #[test]
    fn no_subcommand_means_browse() {
        let cli = Cli::parse_from(["vendorscope"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn list_flags_build_query() {
        let cli = Cli::parse_from([
            "vendorscope",
            "list",
            "--search",
            "mart",
            "--category",
            "grocery",
            "--min-rating",
            "4",
            "--open",
            "--sort",
            "delivery-fee",
            "--asc",
            "--page",
            "2",
        ]);
        let Some(Commands::List(args)) = cli.command else {
            panic!("expected list subcommand");
        };

        let query = args.to_query(10);
        assert_eq!(query.search, "mart");
        assert_eq!(query.category, Category::Grocery);
        assert_eq!(query.filter.min_rating, Some(4.0));
        assert!(query.filter.open_now);
        assert_eq!(query.sort.key, SortKey::DeliveryFee);
        assert_eq!(query.sort.direction, SortDirection::Asc);
        assert_eq!(query.page, 2);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["vendorscope", "list", "--fixture", "/tmp/v.json"]);
        assert_eq!(cli.fixture, Some(PathBuf::from("/tmp/v.json")));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result = Cli::try_parse_from(["vendorscope", "list", "--category", "toys"]);
        assert!(result.is_err());
    }

    #[test]
    fn table_lists_first_page() {
        let args = ListArgs {
            search: None,
            category: Category::All,
            min_rating: None,
            max_distance: None,
            open: false,
            sort: SortKey::Rating,
            asc: false,
            page: 1,
            json: false,
        };
        let out = render_list(&args, &bundled(), 5).unwrap();
        assert!(out.starts_with("#"));
        assert!(out.contains("Showing 5 of 22"));
    }

    #[test]
    fn json_output_carries_totals() {
        let args = ListArgs {
            search: Some("zzz-no-match".to_string()),
            category: Category::All,
            min_rating: None,
            max_distance: None,
            open: false,
            sort: SortKey::Rating,
            asc: false,
            page: 1,
            json: true,
        };
        let out = render_list(&args, &bundled(), 10).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total_matches"], 0);
        assert_eq!(value["vendors"].as_array().map(Vec::len), Some(0));
    }
}
