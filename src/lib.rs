//! Read-only REST service over a trade-booking schema: positions and the
//! trades behind them.

pub mod api;
pub mod config;
pub mod error;
pub mod persistence;
pub mod types;
