//! Display grid derived from a record set.

use super::RecordSet;
use serde::Serialize;

/// Header plus body of stringified cells, ready for presentation.
///
/// Every body row has exactly `header.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayGrid {
    /// Column names, in record set order.
    pub header: Vec<String>,
    /// One row of cell text per record.
    pub body: Vec<Vec<String>>,
}

impl DisplayGrid {
    /// Project a record set into a grid. Absent values become empty strings.
    pub fn from_records(records: &RecordSet) -> Self {
        let header = records.column_names().to_vec();
        let body = records
            .iter()
            .map(|record| {
                header
                    .iter()
                    .map(|col| record.get(col).map(|v| v.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self { header, body }
    }

    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.body.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Check if the grid has no body rows.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl From<&RecordSet> for DisplayGrid {
    fn from(records: &RecordSet) -> Self {
        Self::from_records(records)
    }
}
