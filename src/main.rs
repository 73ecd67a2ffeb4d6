use anyhow::{Context, Result};
use clap::Parser;

use vendorscope::cli::{render_list, Cli, Commands, ListArgs};
use vendorscope::config::Config;
use vendorscope::location::{resolve, source_from_config};
use vendorscope::logging::{init_tracing, LogTarget};
use vendorscope::ui::runtime;
use vendorscope::vendor::{build_vendors, load_fixture, RawVendor};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    match cli.command {
        Some(Commands::List(ref args)) => {
            init_tracing(&config.logging, LogTarget::Stderr)
                .context("Failed to initialize logging")?;
            let raw = load_vendors(&cli, &config)?;
            run_list(args, &config, &raw)
        }
        Some(Commands::Browse) | None => {
            let log_path = init_tracing(&config.logging, LogTarget::File)
                .context("Failed to initialize logging")?;
            tracing::info!(config = %config_path.display(), log = ?log_path, "Starting vendorscope");
            let raw = load_vendors(&cli, &config)?;
            // Distances are filled in once the location lookup finishes.
            let vendors = build_vendors(&raw, None);
            runtime::run(config, vendors).context("Terminal UI failed")
        }
    }
}

/// `--fixture` wins over the configured fixture; neither means the bundled set.
fn load_vendors(cli: &Cli, config: &Config) -> Result<Vec<RawVendor>> {
    let path = cli
        .fixture
        .as_deref()
        .or(config.discovery.fixture_path.as_deref());
    load_fixture(path).context("Failed to load vendor fixture")
}

fn run_list(args: &ListArgs, config: &Config, raw: &[RawVendor]) -> Result<()> {
    let source = source_from_config(&config.location);
    let location = resolve(source.as_ref());
    if let Some(message) = location.error() {
        eprintln!("Location unavailable: {}", message);
    }

    let vendors = build_vendors(raw, location.location());
    let output = render_list(args, &vendors, config.discovery.page_size)
        .context("Failed to render vendor list")?;
    print!("{}", output);
    Ok(())
}
