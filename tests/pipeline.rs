use std::path::{Path, PathBuf};

use matchscrape::config::{DumpMode, FetchErrorPolicy, ScrapeConfig};
use matchscrape::domain::ScrapeOutcome;
use matchscrape::error::ScrapeError;
use matchscrape::services::run_scrape;
use serde_json::Value;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn offline_config(dir: &Path, input: PathBuf) -> ScrapeConfig {
    ScrapeConfig {
        input_html: Some(input),
        output: dir.join("json").join("shahidkoora.json"),
        debug_path: dir.join("debug.html"),
        progress: false,
        seed: Some(1),
        ..Default::default()
    }
}

#[tokio::test]
async fn duplicate_cards_collapse_to_first_occurrence() {
    let dir = tempfile::tempdir().unwrap();
    let config = offline_config(dir.path(), fixture("listing.html"));

    let outcome = run_scrape(&config).await.unwrap();
    let records = outcome.records();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].url, "/watch/1");
    assert_eq!(records[0].home, "Real Madrid");
    assert_eq!(records[0].away, "Barcelona");
    assert_eq!(records[0].league, "La Liga");
    assert_eq!(records[0].time, "21:00 Not started");
    assert_eq!(records[0].label.as_deref(), Some("rea-bar"));
    assert_eq!(records[1].url, "/watch/2");
    assert_eq!(records[1].label.as_deref(), Some("ars-che"));

    assert!(!dir.path().join("debug.html").exists());
}

#[tokio::test]
async fn output_file_has_exactly_the_record_fields() {
    let dir = tempfile::tempdir().unwrap();
    let config = offline_config(dir.path(), fixture("listing.html"));
    run_scrape(&config).await.unwrap();

    let content = std::fs::read_to_string(&config.output).unwrap();
    let parsed: Value = serde_json::from_str(&content).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 2);

    for item in items {
        let mut keys: Vec<&str> = item.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["away", "home", "label", "league", "time", "url"]);
        assert!(item.as_object().unwrap().values().all(Value::is_string));
    }
}

#[tokio::test]
async fn logo_variant_without_label() {
    let dir = tempfile::tempdir().unwrap();
    let config = ScrapeConfig {
        label: false,
        logo: true,
        ..offline_config(dir.path(), fixture("listing.html"))
    };

    let outcome = run_scrape(&config).await.unwrap();
    for record in outcome.records() {
        assert_eq!(record.label, None);
        let logo = record.logo.as_ref().unwrap();
        assert!(config.assets.contains(logo));
    }

    let parsed: Value =
        serde_json::from_str(&std::fs::read_to_string(&config.output).unwrap()).unwrap();
    let first = parsed[0].as_object().unwrap();
    assert!(first.contains_key("logo"));
    assert!(!first.contains_key("label"));
}

#[tokio::test]
async fn same_seed_same_logos() {
    let dir = tempfile::tempdir().unwrap();
    let config = ScrapeConfig {
        logo: true,
        seed: Some(2024),
        ..offline_config(dir.path(), fixture("listing.html"))
    };

    let first = run_scrape(&config).await.unwrap().into_records();
    let second = run_scrape(&config).await.unwrap().into_records();
    assert_eq!(first, second);
}

#[tokio::test]
async fn page_without_cards_writes_empty_array_and_dump() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("blank.html");
    std::fs::write(&page, "<html><body><p>No matches today</p></body></html>").unwrap();
    let config = offline_config(dir.path(), page);

    let outcome = run_scrape(&config).await.unwrap();
    assert!(outcome.is_empty());

    assert_eq!(std::fs::read_to_string(&config.output).unwrap(), "[]");
    let dumped = std::fs::read_to_string(&config.debug_path).unwrap();
    assert!(dumped.contains("No matches today"));
}

#[tokio::test]
async fn always_dump_keeps_markup_next_to_results() {
    let dir = tempfile::tempdir().unwrap();
    let config = ScrapeConfig {
        debug_dump: DumpMode::Always,
        ..offline_config(dir.path(), fixture("listing.html"))
    };

    let outcome = run_scrape(&config).await.unwrap();
    assert_eq!(outcome.records().len(), 2);
    assert!(std::fs::read_to_string(&config.debug_path)
        .unwrap()
        .contains("watch-link"));
}

#[tokio::test]
async fn unreadable_input_respects_fetch_error_policy() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.html");

    let abort = offline_config(dir.path(), missing.clone());
    assert!(matches!(run_scrape(&abort).await, Err(ScrapeError::Io(_))));
    assert!(!abort.output.exists());

    let tolerate = ScrapeConfig {
        on_fetch_error: FetchErrorPolicy::Continue,
        ..offline_config(dir.path(), missing)
    };
    let outcome = run_scrape(&tolerate).await.unwrap();
    assert_eq!(outcome, ScrapeOutcome::Empty { markup: None });
    assert_eq!(std::fs::read_to_string(&tolerate.output).unwrap(), "[]");
    assert!(!tolerate.debug_path.exists());
}
