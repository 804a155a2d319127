use serde::ser::{Serialize, SerializeTuple, Serializer};

/// One trade booked by `book` in `security`, with the book on the other side.
///
/// Serialized as a positional array:
/// `[book, security, quantity, trade_id, counterparty]`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TradeForPosition {
    pub book: String,
    pub security: String,
    pub quantity: i64,
    pub trade_id: i64,
    pub counterparty: String,
}

impl Serialize for TradeForPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_tuple(5)?;
        row.serialize_element(&self.book)?;
        row.serialize_element(&self.security)?;
        row.serialize_element(&self.quantity)?;
        row.serialize_element(&self.trade_id)?;
        row.serialize_element(&self.counterparty)?;
        row.end()
    }
}
