//! partfind TUI - search-as-you-type over the part description list.

use anyhow::Result;
use clap::Parser;
use partfind_core::{paths, Config, MatchPolicy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "partfind-tui")]
#[command(about = "Interactive part description search", long_about = None)]
struct Cli {
    /// Config file (defaults to $PARTFIND_DIR/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Workbook to search
    #[arg(long)]
    source: Option<PathBuf>,

    /// Match policy (all-tokens, slash-alternatives)
    #[arg(long)]
    policy: Option<MatchPolicy>,

    /// Print version information
    #[arg(short = 'V', long)]
    version: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!(
            "{}",
            partfind_core::build_info::BUILD_INFO.version_line("partfind-tui")
        );
        return Ok(());
    }

    // The terminal belongs to the UI; logs go to a file.
    partfind_core::logging::init_to_file(&paths::tui_log_path())?;

    let config_path = cli.config.unwrap_or_else(paths::config_path);
    let mut config = Config::load_or_default(&config_path)?;
    if let Some(source) = cli.source {
        config.source.path = source;
    }
    if let Some(policy) = cli.policy {
        config.search.policy = policy;
    }

    partfind_tui::run(config)
}
