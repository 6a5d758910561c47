pub mod connection;
pub mod console_store;
pub mod pg_store;
pub mod record_store;
pub mod rest_store;

pub use record_store::{RecordStore, StoreError, StoreResult};
