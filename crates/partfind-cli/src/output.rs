//! Result rendering for the terminal.

use clap::ValueEnum;
use owo_colors::OwoColorize;
use partfind_core::{Error, MatchPolicy, Result};
use partfind_index::{Highlighter, Query, SearchResult};
use serde::Serialize;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered, highlighted list
    Table,
    /// Machine-readable JSON
    Json,
    /// One description per line
    Plain,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    query: &'a str,
    policy: MatchPolicy,
    total: usize,
    results: &'a [SearchResult],
}

pub fn use_color(no_color: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

pub fn print_results(
    format: OutputFormat,
    query: &Query,
    policy: MatchPolicy,
    total: usize,
    results: &[SearchResult],
    color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&JsonOutput {
            query: &query.term,
            policy,
            total,
            results,
        }),
        OutputFormat::Plain => {
            for result in results {
                println!("{}", result.text);
            }
            Ok(())
        }
        OutputFormat::Table => {
            print_table(query, total, results, color);
            Ok(())
        }
    }
}

fn print_table(query: &Query, total: usize, results: &[SearchResult], color: bool) {
    if total == 0 {
        println!("No matches found.");
        return;
    }

    if results.len() < total {
        println!("Found {total} match(es), showing {}.", results.len());
    } else {
        println!("Found {total} match(es).");
    }

    let highlighter = Highlighter::new(&query.term);
    println!("{:<6} DESCRIPTION", "#");
    for result in results {
        let text = if color {
            highlighter.render(&result.text, |s| s.black().on_bright_green().to_string())
        } else {
            result.text.clone()
        };
        println!("{:<6} {}", result.position + 1, text);
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::Other(format!("failed to serialize results: {e}")))?;
    println!("{json}");
    Ok(())
}
