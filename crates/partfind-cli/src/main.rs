//! partfind-cli: Command-line interface for partfind.

mod output;

use clap::{Args, Parser, Subcommand};
use output::OutputFormat;
use partfind_core::{paths, Config, MatchPolicy, Result};
use partfind_index::{ParsedQuery, Query, QueryEngine};
use partfind_loader::{IndexCache, WorkbookLoader};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "partfind")]
#[command(about = "Search part-number descriptions loaded from a spreadsheet", long_about = None)]
#[command(version = partfind_core::build_info::BUILD_INFO.version)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    /// Log level for partfind crates (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Overrides for the configured source and policy.
#[derive(Args, Debug, Default)]
struct SourceArgs {
    /// Config file (defaults to $PARTFIND_DIR/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Workbook to search
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Sheet holding the descriptions
    #[arg(long, global = true)]
    sheet: Option<String>,

    /// Header of the description column
    #[arg(long, global = true)]
    column: Option<String>,

    /// Match policy (all-tokens, slash-alternatives)
    #[arg(long, global = true)]
    policy: Option<MatchPolicy>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for part descriptions
    Search {
        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Disable match highlighting
        #[arg(long)]
        no_color: bool,
    },

    /// Show source and index status
    Status,

    /// Show how a query is tokenized
    Tokens {
        /// Text to tokenize
        text: String,
    },

    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.log_level {
        Some(level) => partfind_core::logging::init_with_level(level),
        None => partfind_core::logging::init(),
    }

    match cli.command {
        Some(Commands::Search {
            query,
            limit,
            format,
            no_color,
        }) => {
            search(&cli.source, &query, limit, format, no_color)?;
        }
        Some(Commands::Status) => {
            status(&cli.source)?;
        }
        Some(Commands::Tokens { text }) => {
            tokens(&cli.source, &text)?;
        }
        Some(Commands::InitConfig { force }) => {
            init_config(&cli.source, force)?;
        }
        None => {
            println!("{}", partfind_core::build_info::version_string("partfind"));
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn search(
    args: &SourceArgs,
    term: &str,
    limit: Option<usize>,
    format: OutputFormat,
    no_color: bool,
) -> Result<()> {
    let config = load_config(args)?;
    let query = Query::new(term).with_limit(limit.or(config.search.limit));

    if query.is_blank() && format != OutputFormat::Json {
        eprintln!("Please enter a search query.");
        return Ok(());
    }

    let cache = open_index(&config);
    let index = cache.current();
    let engine = QueryEngine::new(&index).with_policy(config.search.policy);

    let hits = engine.run(&query);
    debug!(total = hits.total, shown = hits.results.len(), "Search finished");

    output::print_results(
        format,
        &query,
        config.search.policy,
        hits.total,
        &hits.results,
        output::use_color(no_color),
    )
}

fn status(args: &SourceArgs) -> Result<()> {
    let config = load_config(args)?;
    let cache = open_index(&config);
    let index = cache.current();

    println!("Source:");
    println!("  Workbook: {}", config.source.path.display());
    println!("  Sheet: {}", config.source.sheet);
    println!("  Column: {}", config.source.column);
    println!("  Policy: {}", config.search.policy);

    match cache.fingerprint() {
        Some(fingerprint) => {
            println!("  Size: {} bytes", fingerprint.len);
            println!(
                "  Last modified: {}",
                fingerprint.modified_local().format("%Y-%m-%d %H:%M:%S")
            );
        }
        None => println!("  Status: unavailable"),
    }

    println!("Index:");
    println!("  Entries: {}", index.len());
    println!("  Tokens: {}", index.token_count());
    println!("  Postings: {}", index.posting_count());
    println!("  Approx. memory: {} bytes", index.allocated_bytes());

    Ok(())
}

fn tokens(args: &SourceArgs, text: &str) -> Result<()> {
    let config = load_config(args)?;
    let parsed = ParsedQuery::parse(text, config.search.policy);

    if parsed.is_empty() {
        println!("(no tokens)");
        return Ok(());
    }

    for (i, group) in parsed.groups().iter().enumerate() {
        let words: Vec<&str> = group.iter().map(|t| t.as_str()).collect();
        if parsed.groups().len() == 1 {
            println!("{}", words.join(" "));
        } else {
            println!("alternative {}: {}", i + 1, words.join(" "));
        }
    }

    Ok(())
}

fn init_config(args: &SourceArgs, force: bool) -> Result<()> {
    let path = config_path(args);

    if path.exists() && !force {
        eprintln!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
        return Ok(());
    }

    Config::default().save(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

/// Build the index, reporting load failures and continuing with an empty one.
fn open_index(config: &Config) -> IndexCache {
    let mut cache = IndexCache::new(WorkbookLoader::new(config.source.clone()));
    if let Err(e) = cache.refresh() {
        warn!("Source unavailable: {e}");
        eprintln!("Error: {e}");
    }
    cache
}

fn config_path(args: &SourceArgs) -> PathBuf {
    args.config.clone().unwrap_or_else(paths::config_path)
}

fn load_config(args: &SourceArgs) -> Result<Config> {
    let mut config = Config::load_or_default(&config_path(args))?;

    if let Some(source) = &args.source {
        config.source.path = source.clone();
    }
    if let Some(sheet) = &args.sheet {
        config.source.sheet = sheet.clone();
    }
    if let Some(column) = &args.column {
        config.source.column = column.clone();
    }
    if let Some(policy) = args.policy {
        config.search.policy = policy;
    }

    Ok(config)
}
