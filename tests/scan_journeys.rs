//! Behavior-driven tests for the scan journey.
//!
//! These verify WHAT a scan produces — which stock wins, what the CSV
//! looks like — rather than how the pieces are wired internally.

use std::sync::Arc;

use topmover_tests::{
    most_volatile, quote_body, symbol, write_report, FinnhubAdapter, QuoteFetcher, Quote,
    RetryConfig, ScriptedHttpClient, UtcDateTime, CSV_HEADER, DEFAULT_SYMBOLS, REPORT_FILE,
};

fn fixture_quote(raw_symbol: &str, dp: f64) -> Quote {
    Quote::new(
        symbol(raw_symbol),
        100.0,
        100.0,
        dp,
        UtcDateTime::parse("2024-01-02T21:00:00Z").expect("timestamp"),
    )
    .expect("fixture quote is valid")
}

// =============================================================================
// Scan Journey: Selecting the top mover
// =============================================================================

#[test]
fn documented_fixture_selects_amzn() {
    // Given: the five tracked stocks with known daily moves
    let quotes = vec![
        fixture_quote("AAPL", 1.0),
        fixture_quote("AMZN", -13.2),
        fixture_quote("NFLX", 5.0),
        fixture_quote("META", -2.0),
        fixture_quote("GOOGL", 0.5),
    ];

    // When: the scan reduces them to the top mover
    let mover = most_volatile(&quotes).expect("five quotes were scanned");

    // Then: AMZN's -13.2% beats NFLX's +5.0% on magnitude
    assert_eq!(mover.symbol.as_str(), "AMZN");
    assert_eq!(mover.percent_change, 13.2);
}

#[test]
fn tracked_set_is_the_five_tech_stocks() {
    assert_eq!(DEFAULT_SYMBOLS, ["AAPL", "AMZN", "NFLX", "META", "GOOGL"]);
}

// =============================================================================
// Scan Journey: The CSV artifact
// =============================================================================

#[test]
fn report_always_has_header_plus_one_row() {
    // Given: a completed scan over all five symbols
    let quotes: Vec<Quote> = [
        ("AAPL", 1.0),
        ("AMZN", -13.2),
        ("NFLX", 5.0),
        ("META", -2.0),
        ("GOOGL", 0.5),
    ]
    .into_iter()
    .map(|(raw, dp)| fixture_quote(raw, dp))
    .collect();
    let mover = most_volatile(&quotes).expect("scan is non-empty");

    // When: the report is written
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(REPORT_FILE);
    write_report(&path, &mover).expect("report write succeeds");

    // Then: two rows exactly, regardless of how many symbols were scanned
    let contents = std::fs::read_to_string(&path).expect("report is readable");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    // And: the data row carries the AMZN magnitude
    assert!(lines[1].starts_with("AMZN,13.2,"));
}

#[test]
fn header_matches_the_documented_columns_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(REPORT_FILE);

    let mover = most_volatile(&[fixture_quote("AAPL", 2.5)]).expect("scan is non-empty");
    write_report(&path, &mover).expect("report write succeeds");

    let contents = std::fs::read_to_string(&path).expect("report is readable");
    let header = contents.lines().next().expect("header row present");

    assert_eq!(header.split(',').collect::<Vec<_>>(), CSV_HEADER.to_vec());
    assert_eq!(
        header,
        "stock_symbol,percentage_change,current_price,last_close_price"
    );
}

// =============================================================================
// Scan Journey: End-to-end over a scripted transport
// =============================================================================

#[tokio::test]
async fn full_scan_over_scripted_transport_writes_the_expected_row() {
    // Given: the upstream answers each tracked symbol with a known move
    let moves = [
        (225.0, 1.0, 222.77),   // AAPL
        (208.74, -13.2, 240.5), // AMZN
        (630.0, 5.0, 600.0),    // NFLX
        (500.0, -2.0, 510.2),   // META
        (170.0, 0.5, 169.15),   // GOOGL
    ];
    let script = moves
        .iter()
        .map(|(c, dp, pc)| Ok(topmover_tests::HttpResponse::ok_json(quote_body(*c, *dp, *pc))))
        .collect();
    let client = Arc::new(ScriptedHttpClient::new(script));
    let adapter = Arc::new(FinnhubAdapter::with_http_client(client.clone(), "test-key"));
    let fetcher = QuoteFetcher::new(adapter, RetryConfig::no_retry());

    // When: every tracked symbol is fetched and the report is written
    let mut quotes = Vec::new();
    for raw in DEFAULT_SYMBOLS {
        let outcome = fetcher.fetch(&symbol(raw)).await.expect("fetch succeeds");
        quotes.push(outcome.quote);
    }
    let mover = most_volatile(&quotes).expect("scan is non-empty");

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(REPORT_FILE);
    write_report(&path, &mover).expect("report write succeeds");

    // Then: one request per symbol went out, and AMZN won
    assert_eq!(client.request_count(), DEFAULT_SYMBOLS.len());
    let contents = std::fs::read_to_string(&path).expect("report is readable");
    assert_eq!(
        contents,
        "stock_symbol,percentage_change,current_price,last_close_price\nAMZN,13.2,208.74,240.5\n"
    );
}
