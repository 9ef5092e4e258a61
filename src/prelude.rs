//! Convenient imports for common functionality.

pub use crate::config::SqliteOptions;
pub use crate::error::SqliteAdapterError;
pub use crate::results::{DbRow, ResultSet};
pub use crate::types::{QueryAndParams, RowValues};
pub use crate::worker::SqliteConnection;
