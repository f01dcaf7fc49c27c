//! Core domain model for sidecar-hub: collector actions queued for remote
//! sidecar agents, the store trait they are persisted through, and the
//! service the REST layer delegates to.

pub mod audit;
pub mod error;
pub mod permissions;
pub mod service;
pub mod store;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use service::ActionService;
pub use store::ActionStore;
pub use types::{CollectorAction, CollectorActions};
