//! Read-only handlers: one query per request, JSON out.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::api::routes::AppState;
use crate::error::AppError;
use crate::persistence;
use crate::types::position::Position;
use crate::types::trade::TradeForPosition;

#[derive(Debug, Deserialize)]
pub struct TradesForPositionQuery {
    pub book: Option<String>,
    pub security: Option<String>,
}

/// GET /listPositions
pub async fn list_positions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Position>>, AppError> {
    let positions = persistence::list_positions(&state.db).await?;
    tracing::debug!(count = positions.len(), "listed positions");
    Ok(Json(positions))
}

/// GET /tradesForPosition?book=..&security=..
pub async fn trades_for_position(
    State(state): State<AppState>,
    query: Result<Query<TradesForPositionQuery>, QueryRejection>,
) -> Result<Json<Vec<TradeForPosition>>, AppError> {
    let Query(params) = query.map_err(|rejection| AppError::InvalidQuery(rejection.body_text()))?;
    let book = required(params.book, "book")?;
    let security = required(params.security, "security")?;
    let trades = persistence::trades_for_position(&state.db, &book, &security).await?;
    tracing::debug!(%book, %security, count = trades.len(), "trades for position");
    Ok(Json(trades))
}

fn required(value: Option<String>, name: &'static str) -> Result<String, AppError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(AppError::MissingParameter(name))
}
