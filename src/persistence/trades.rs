//! Trade reads: trades behind a (book, instrument) position.

use sqlx::SqlitePool;

use crate::types::trade::TradeForPosition;

/// Trades where `book` is on the `book_a` side and the instrument is `security`
/// (for GET /tradesForPosition). Both names match exactly. The counterparty is
/// the `book_b` side. No match yields an empty vector.
pub async fn trades_for_position(
    pool: &SqlitePool,
    book: &str,
    security: &str,
) -> Result<Vec<TradeForPosition>, sqlx::Error> {
    let rows = sqlx::query_as::<_, TradeForPosition>(
        "SELECT trade_book.display_name AS book, instrument.name AS security, \
                trade.quantity AS quantity, trade.id AS trade_id, \
                client_book.display_name AS counterparty \
         FROM trade \
         JOIN book trade_book ON trade_book.id = trade.book_a \
         JOIN book client_book ON client_book.id = trade.book_b \
         JOIN instrument ON instrument.id = trade.instrument_id \
         WHERE trade_book.display_name = ?1 AND instrument.name = ?2 \
         ORDER BY trade.id",
    )
    .bind(book)
    .bind(security)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
