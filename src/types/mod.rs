pub mod position;
pub mod trade;
