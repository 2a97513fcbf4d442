//! SQLite storage bootstrap for PawHaven.
//!
//! - `connect`: open (and optionally create) the store described by
//!   [`DatabaseSettings`](pawhaven_kernel::settings::DatabaseSettings).
//! - `connect_in_memory`: a single-connection in-memory store for tests and
//!   throwaway runs.
//! - `run_migrations`: apply every module migration that has not been
//!   recorded yet.

pub mod connection;
pub mod error;
pub mod migrate;

pub use connection::{connect, connect_in_memory};
pub use error::DbError;
pub use migrate::run_migrations;
