//! Trade query integration tests: join, exact-match filters, counterparty side.

use tradebook::persistence::{SqlitePool, create_pool_and_migrate, trades_for_position};

async fn seeded_pool() -> SqlitePool {
    create_pool_and_migrate("sqlite::memory:", 1).await.unwrap()
}

#[tokio::test]
async fn trades_for_position_returns_each_matching_trade() {
    let pool = seeded_pool().await;

    let trades = trades_for_position(&pool, "US Eq Flow", "TSLA").await.unwrap();

    assert_eq!(trades.len(), 3);
    let ids: Vec<i64> = trades.iter().map(|t| t.trade_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    let quantities: Vec<i64> = trades.iter().map(|t| t.quantity).collect();
    assert_eq!(quantities, vec![200, 50, 50]);
    let counterparties: Vec<&str> = trades.iter().map(|t| t.counterparty.as_str()).collect();
    assert_eq!(counterparties, vec!["Prime Client A", "Prime Client B", "Street"]);
}

#[tokio::test]
async fn trades_for_position_rows_carry_filter_values() {
    let pool = seeded_pool().await;

    let trades = trades_for_position(&pool, "EU Eq Flow", "BARC").await.unwrap();

    assert_eq!(trades.len(), 1);
    assert!(trades.iter().all(|t| t.book == "EU Eq Flow" && t.security == "BARC"));
}

#[tokio::test]
async fn trades_for_position_counterparty_is_book_b_side() {
    let pool = seeded_pool().await;

    let trades = trades_for_position(&pool, "EU Eq Flow", "VOD").await.unwrap();

    let expected: Vec<(i64, String)> = sqlx::query_as(
        "SELECT trade.id, book.display_name FROM trade \
         JOIN book ON book.id = trade.book_b \
         WHERE trade.book_a = 1 AND trade.instrument_id = 1 ORDER BY trade.id",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    let actual: Vec<(i64, String)> = trades
        .iter()
        .map(|t| (t.trade_id, t.counterparty.clone()))
        .collect();
    assert_eq!(actual, expected);
    assert_eq!(actual, vec![(5, "Prime Client A".to_string())]);
}

#[tokio::test]
async fn trades_for_position_ignores_book_b_side() {
    let pool = seeded_pool().await;

    // Prime Client A only ever appears on the book_b side for TSLA.
    let trades = trades_for_position(&pool, "Prime Client A", "TSLA").await.unwrap();

    assert!(trades.is_empty());
}

#[tokio::test]
async fn trades_for_position_no_match_is_empty() {
    let pool = seeded_pool().await;

    assert!(trades_for_position(&pool, "No Such Book", "TSLA").await.unwrap().is_empty());
    assert!(trades_for_position(&pool, "US Eq Flow", "NOPE").await.unwrap().is_empty());
    // Instrument exists but nobody traded it.
    assert!(trades_for_position(&pool, "US Eq Flow", "MSFT").await.unwrap().is_empty());
}

#[tokio::test]
async fn trades_for_position_match_is_case_sensitive() {
    let pool = seeded_pool().await;

    assert!(trades_for_position(&pool, "us eq flow", "TSLA").await.unwrap().is_empty());
    assert!(trades_for_position(&pool, "US Eq Flow", "tsla").await.unwrap().is_empty());
}

#[tokio::test]
async fn trades_for_position_is_idempotent() {
    let pool = seeded_pool().await;

    let first = trades_for_position(&pool, "US Eq Flow", "TSLA").await.unwrap();
    let second = trades_for_position(&pool, "US Eq Flow", "TSLA").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn schema_rejects_trade_between_same_book() {
    let pool = seeded_pool().await;

    let res = sqlx::query(
        "INSERT INTO trade (id, book_a, book_b, instrument_id, quantity) VALUES (100, 1, 1, 1, 5)",
    )
    .execute(&pool)
    .await;

    assert!(res.is_err());
}

#[tokio::test]
async fn schema_rejects_trade_with_unknown_book() {
    let pool = seeded_pool().await;

    let res = sqlx::query(
        "INSERT INTO trade (id, book_a, book_b, instrument_id, quantity) VALUES (100, 1, 99, 1, 5)",
    )
    .execute(&pool)
    .await;

    assert!(res.is_err());
}
