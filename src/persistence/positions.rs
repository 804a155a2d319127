//! Position reads.

use sqlx::SqlitePool;

use crate::types::position::Position;

/// List all positions in stored order (for GET /listPositions).
pub async fn list_positions(pool: &SqlitePool) -> Result<Vec<Position>, sqlx::Error> {
    let rows = sqlx::query_as::<_, Position>(
        "SELECT book_id, instrument_id, quantity FROM position ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
