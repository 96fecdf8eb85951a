//! Database layer: pool, repositories, and the `Store` seam.

mod memory;
mod pool;
mod repositories;
mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, run_migrations, DbPool};
pub use repositories::*;
pub use store::{group_markers, PgStore, Store};
