//! Database layer: pool, migrations, and read queries for positions and trades.

mod pool;
mod positions;
mod trades;

pub use pool::{create_pool_and_migrate, run_migrations};
pub use positions::list_positions;
pub use sqlx::SqlitePool;
pub use trades::trades_for_position;
