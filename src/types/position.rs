use serde::{Deserialize, Serialize};

/// Stored aggregate row keyed by `(book_id, instrument_id)`: the book's net signed quantity in that instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub book_id: i64,
    pub instrument_id: i64,
    pub quantity: i64,
}
