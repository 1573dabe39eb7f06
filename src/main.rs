//! Series Index - Entry Point

use clap::Parser;
use sidx::config::CliOverrides;
use sidx::model::SeriesFilter;
use sidx::state::LOGS_ROOT;
use std::path::PathBuf;
use tracing::info;

/// Series Index - TUI for browsing a TV-series library
#[derive(Parser, Debug)]
#[command(name = "sidx")]
#[command(version)]
#[command(about = "TUI application for browsing a TV-series library")]
pub struct Args {
    /// Path to the JSON series library
    pub library: Option<PathBuf>,

    /// Initial view (table or posters; anything else means table)
    #[arg(long)]
    pub view: Option<String>,

    /// Initial sort key (sortTitle, status, network, seasonCount,
    /// episodeProgress, sizeOnDisk, added, year)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub descending: bool,

    /// Initial filter
    #[arg(long, value_parser = parse_filter)]
    pub filter: Option<SeriesFilter>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start on the system logs page
    #[arg(long)]
    pub logs: bool,
}

fn parse_filter(name: &str) -> Result<SeriesFilter, String> {
    SeriesFilter::from_name(name).ok_or_else(|| {
        let names: Vec<&str> = SeriesFilter::MENU.iter().map(|f| f.name()).collect();
        format!("unknown filter '{name}', expected one of: {}", names.join(", "))
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = sidx::config::load_config_with_precedence(args.config.clone())?;
        let merged = sidx::config::merge_config(config_file);
        let with_env = sidx::config::apply_env_overrides(merged);
        sidx::config::apply_cli_overrides(
            with_env,
            CliOverrides {
                library: args.library.clone(),
                view: args.view.clone(),
                sort_key: args.sort.clone(),
                descending: args.descending,
                filter: args.filter,
            },
        )
    };

    sidx::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let start_route = args.logs.then_some(LOGS_ROOT);
    sidx::view::run_with_config(&config, start_route)?;

    Ok(())
}
