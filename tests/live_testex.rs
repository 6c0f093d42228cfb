//! Live tests against the public test exchange (`TESTEX` / `FOOBAR`).
//!
//! All tests are `#[ignore]` because they need network access. Order tests
//! also need `STOCKFIGHTER_API_KEY`, read from the environment or a `.env` file.
//!
//! Run with:
//! ```bash
//! cargo test --test live_testex -- --ignored --test-threads=1
//! ```

use stockfighter_sdk::prelude::*;

fn anonymous_client() -> StockfighterClient {
    StockfighterClient::builder()
        .test_venue()
        .build()
        .expect("client builds")
}

fn authed_client() -> Option<StockfighterClient> {
    dotenvy::dotenv().ok();
    let key = std::env::var("STOCKFIGHTER_API_KEY").ok()?;
    Some(
        StockfighterClient::builder()
            .api_key(key)
            .test_venue()
            .read_retry(RetryPolicy::Idempotent)
            .build()
            .expect("client builds"),
    )
}

#[tokio::test]
#[ignore]
async fn live_heartbeats() {
    let client = anonymous_client();
    client.venues().heartbeat().await.expect("API is up");
    let venue = client.venues().venue_heartbeat().await.expect("TESTEX is up");
    assert_eq!(venue.as_str(), "TESTEX");
    assert!(client.venues().is_venue_up().await);
    assert!(!client.with_venue("NOPEX").venues().is_venue_up().await);
}

#[tokio::test]
#[ignore]
async fn live_stocks_and_market_data() {
    let client = anonymous_client();

    let stocks = client.venues().stocks().await.expect("stock list");
    assert!(stocks.iter().any(|s| s.symbol.as_str() == "FOOBAR"));

    let book = client.orderbooks().get().await.expect("orderbook");
    assert_eq!(book.symbol.as_str(), "FOOBAR");

    let quote = client.quotes().get().await.expect("quote");
    assert_eq!(quote.venue.as_str(), "TESTEX");
}

#[tokio::test]
#[ignore]
async fn live_order_lifecycle() {
    let Some(client) = authed_client() else {
        eprintln!("STOCKFIGHTER_API_KEY not set, skipping");
        return;
    };

    let placed = client
        .orders()
        .place(&NewOrder::limit(Direction::Buy, 1, 10))
        .await
        .expect("order placed");
    assert_eq!(placed.original_quantity, 10);

    let status = client.orders().status(placed.id).await.expect("status");
    assert_eq!(status.id, placed.id);

    let cancelled = client.orders().cancel(placed.id).await.expect("cancelled");
    assert!(!cancelled.open);

    let mine = client.orders().for_stock().await.expect("stock orders");
    assert!(mine.iter().any(|o| o.id == placed.id));
}
