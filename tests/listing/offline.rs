use httpmock::Method::GET;
use httpmock::MockServer;
use sp500_bubbles::{BubbleError, ListingScraper, TickerSource};

use crate::common;

#[tokio::test]
async fn listing_returns_ranked_unique_symbols() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/sp500");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::listing_html(&["NVDA", "MSFT", "AAPL", "BRK.B", "MSFT"]));
    });

    let scraper = ListingScraper::new(common::client_for(&server));
    let got = scraper.top_tickers(10).await.unwrap();
    mock.assert();
    assert_eq!(got, vec!["NVDA", "MSFT", "AAPL", "BRK.B"]);
}

#[tokio::test]
async fn listing_truncates_to_limit() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/sp500");
        then.status(200)
            .body(common::listing_html(&["NVDA", "MSFT", "AAPL", "AMZN"]));
    });

    let scraper = ListingScraper::new(common::client_for(&server));
    assert_eq!(scraper.top_tickers(2).await.unwrap(), vec!["NVDA", "MSFT"]);
}

#[tokio::test]
async fn listing_non_2xx_is_source_unavailable() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/sp500");
        then.status(503).body("maintenance");
    });

    let scraper = ListingScraper::new(common::client_for(&server));
    let err = scraper.top_tickers(10).await.unwrap_err();
    mock.assert_hits(1);
    match err {
        BubbleError::SourceUnavailable(msg) => assert!(msg.contains("503"), "{msg}"),
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn listing_without_symbols_is_source_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/sp500");
        then.status(200)
            .body("<html><body><a href=\"/about\">About</a></body></html>");
    });

    let scraper = ListingScraper::new(common::client_for(&server));
    let err = scraper.top_tickers(10).await.unwrap_err();
    assert!(matches!(err, BubbleError::SourceUnavailable(_)), "{err:?}");
}

#[tokio::test]
async fn listing_honours_custom_href_prefix() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/sp500");
        then.status(200).body(
            r#"<a href="/quote/XOM">Exxon</a><a href="/symbol/CVX">Chevron</a><a href="/quote/JPM">JPM</a>"#,
        );
    });

    let scraper = ListingScraper::new(common::client_for(&server)).href_prefix("/quote/");
    assert_eq!(scraper.top_tickers(10).await.unwrap(), vec!["XOM", "JPM"]);
}
