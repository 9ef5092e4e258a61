use std::collections::HashMap;
use std::sync::Arc;

use super::row::DbRow;
use crate::types::RowValues;

/// Materialized rows returned by a query.
///
/// An empty set is a normal successful result, not an error. Column names and
/// the lookup table are built once and shared by every row.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    /// The rows returned by the query, in driver iteration order
    pub rows: Vec<DbRow>,
    column_names: Option<Arc<Vec<String>>>,
    column_index: Option<Arc<HashMap<String, usize>>>,
}

impl ResultSet {
    /// Create an empty result set with preallocated row capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> ResultSet {
        ResultSet {
            rows: Vec::with_capacity(capacity),
            column_names: None,
            column_index: None,
        }
    }

    /// Set the column names shared by all rows, building the lookup table.
    pub fn set_column_names(&mut self, column_names: Vec<String>) {
        let index = column_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect::<HashMap<_, _>>();
        self.column_names = Some(Arc::new(column_names));
        self.column_index = Some(Arc::new(index));
    }

    /// The column names for this result set, if any rows were described.
    #[must_use]
    pub fn column_names(&self) -> Option<&Arc<Vec<String>>> {
        self.column_names.as_ref()
    }

    /// Append a row of values; no-op until column names are set.
    pub fn add_row_values(&mut self, values: Vec<RowValues>) {
        if let (Some(names), Some(index)) = (&self.column_names, &self.column_index) {
            self.rows
                .push(DbRow::new(Arc::clone(names), Arc::clone(index), values));
        }
    }

    /// Number of rows in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the set and take the first row, if any.
    #[must_use]
    pub fn into_first(self) -> Option<DbRow> {
        self.rows.into_iter().next()
    }
}
