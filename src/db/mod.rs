pub mod connection;
pub mod store;

pub use connection::{init_db, Database};
pub use store::{BlobStore, MemoryStore, StoreError};
