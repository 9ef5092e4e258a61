//! Async result-typed access layer over SQLite.
//!
//! Every operation returns an explicit `Result` instead of panicking, and
//! [`SqliteConnection::run_batch`] executes a sequence of statements
//! atomically, rolling back on the first failure.

mod batch;
mod config;
mod error;
mod params;
mod query;
mod results;
mod types;
mod worker;

pub mod prelude;

pub use config::SqliteOptions;
pub use error::SqliteAdapterError;
pub use params::{convert_params, to_sqlite_value};
pub use query::{build_result_set, extract_value};
pub use results::{DbRow, ResultSet};
pub use types::{QueryAndParams, RowValues};
pub use worker::SqliteConnection;
