mod migrations;
mod store;

pub use migrations::MigrationRunner;
pub use store::SqlActionStore;
