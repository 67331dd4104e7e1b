use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use partfind_core::{Config, MatchPolicy};
use rust_xlsxwriter::Workbook;
use serde_json::Value;
use tempfile::TempDir;

fn write_parts(path: &Path) {
    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Sheet1").unwrap();
        sheet.write_string(0, 0, "NAME LIST").unwrap();
        for (i, part) in [
            "10-PIN CONNECTOR",
            "10-PIN HEADER",
            "20-PIN CONNECTOR",
            "ABC/123 BRACKET",
        ]
        .iter()
        .enumerate()
        {
            sheet.write_string(i as u32 + 1, 0, *part).unwrap();
        }
    }
    workbook.save(path).unwrap();
}

struct Fixture {
    _dir: TempDir,
    partfind_dir: PathBuf,
}

impl Fixture {
    fn new(policy: MatchPolicy) -> Self {
        let dir = TempDir::new().unwrap();
        let workbook = dir.path().join("parts.xlsx");
        write_parts(&workbook);

        let partfind_dir = dir.path().join("state");
        let mut config = Config::default();
        config.source.path = workbook;
        config.search.policy = policy;
        config.save(&partfind_dir.join("config.toml")).unwrap();

        Self {
            _dir: dir,
            partfind_dir,
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        let output = Command::new(env!("CARGO_BIN_EXE_partfind"))
            .env("PARTFIND_DIR", &self.partfind_dir)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "partfind {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }

    fn search_json(&self, query: &str) -> Value {
        let output = self.run(&["search", query, "--format", "json"]);
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

fn texts(json: &Value) -> Vec<String> {
    json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["text"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn cli_search_returns_json_results() {
    let fixture = Fixture::new(MatchPolicy::AllTokens);

    let json = fixture.search_json("10 connector");
    assert_eq!(json["total"], 1);
    assert_eq!(json["policy"], "all-tokens");
    assert_eq!(texts(&json), vec!["10-PIN CONNECTOR"]);

    let json = fixture.search_json("PIN");
    assert_eq!(json["total"], 3);
    assert_eq!(json["results"][2]["position"], 2);

    let json = fixture.search_json("99");
    assert_eq!(json["total"], 0);
}

#[test]
fn cli_blank_query_returns_nothing() {
    let fixture = Fixture::new(MatchPolicy::AllTokens);

    let json = fixture.search_json("  ");
    assert_eq!(json["total"], 0);

    let output = fixture.run(&["search", ""]);
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Please enter a search query."));
}

#[test]
fn cli_policy_override() {
    let fixture = Fixture::new(MatchPolicy::AllTokens);

    let output = fixture.run(&[
        "search",
        "header/20",
        "--policy",
        "slash-alternatives",
        "--format",
        "plain",
    ]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec!["10-PIN HEADER", "20-PIN CONNECTOR"]
    );
}

#[test]
fn cli_table_output_and_limit() {
    let fixture = Fixture::new(MatchPolicy::AllTokens);

    let output = fixture.run(&["search", "pin", "--limit", "1"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Found 3 match(es), showing 1."));
    assert!(stdout.contains("10-PIN CONNECTOR"));
    assert!(!stdout.contains("10-PIN HEADER"));

    let output = fixture.run(&["search", "relay"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("No matches found."));

    let output = fixture.run(&["search", "pin", "--limit", "0"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Found 3 match(es), showing 0."));
    assert!(!stdout.contains("No matches found."));
}

#[test]
fn cli_log_level_flag() {
    let fixture = Fixture::new(MatchPolicy::AllTokens);

    let output = fixture.run(&["--log-level", "debug", "search", "pin", "--format", "plain"]);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Search finished"));
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 3);

    let output = fixture.run(&["search", "pin", "--format", "plain"]);
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Search finished"));
}

#[test]
fn cli_missing_workbook_is_reported_not_fatal() {
    let fixture = Fixture::new(MatchPolicy::AllTokens);

    let output = fixture.run(&["search", "pin", "--source", "/nonexistent/parts.xlsx"]);
    assert!(String::from_utf8_lossy(&output.stderr).contains("workbook not found"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("No matches found."));
}

#[test]
fn cli_status_and_tokens() {
    let fixture = Fixture::new(MatchPolicy::SlashAlternatives);

    let output = fixture.run(&["status"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Entries: 4"));
    assert!(stdout.contains("Policy: slash-alternatives"));

    let output = fixture.run(&["tokens", "ABC/123 abc"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec!["alternative 1: abc", "alternative 2: 123 abc"]
    );
}

#[test]
fn cli_init_config_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    let config_arg = config_path.to_string_lossy().into_owned();

    let output = Command::new(env!("CARGO_BIN_EXE_partfind"))
        .args(["init-config", "--config", &config_arg])
        .output()
        .unwrap();
    assert!(output.status.success());

    let config = Config::load(&config_path).unwrap();
    assert_eq!(config, Config::default());
}
