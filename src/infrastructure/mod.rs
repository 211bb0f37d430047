pub mod duckdb_storage;
pub mod export;
pub mod filesystem;
pub mod logger;
pub mod repository;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

pub use duckdb_storage::*;
pub use export::*;
pub use filesystem::*;
pub use logger::*;
pub use repository::*;
pub use storage::*;
