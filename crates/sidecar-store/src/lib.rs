//! Store implementations for sidecar-hub.

pub mod error;
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sql_store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryActionStore;
#[cfg(feature = "sqlite")]
pub use sql_store::SqlActionStore;
