pub mod db_utils;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod stats;
pub mod store;
pub mod tasks;
pub mod time_entries;

pub use pool::DbPool;
pub use store::Store;
