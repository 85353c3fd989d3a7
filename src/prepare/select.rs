use log::debug;

use crate::errors::{PipelineError, Result};
use crate::flow_record::REQUIRED_COLUMNS;
use crate::loader::RawTable;

/// The working table after projection: every row holds exactly the required
/// columns, in [`REQUIRED_COLUMNS`] order, still as text.
pub struct ProjectedTable {
    rows: Vec<Vec<String>>,
}

impl ProjectedTable {
    /// The fixed column order of every projected row.
    pub fn columns() -> &'static [&'static str] {
        &REQUIRED_COLUMNS
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Projects the raw table down to the standardized IPFIX feature subset plus
/// the two label columns. Extra columns are dropped; a missing required
/// column fails the run.
pub fn project(table: &RawTable) -> Result<ProjectedTable> {
    let mut indices = Vec::with_capacity(REQUIRED_COLUMNS.len());
    for name in REQUIRED_COLUMNS {
        let index = table
            .column_index(name)
            .ok_or_else(|| PipelineError::Schema(name.to_string()))?;
        indices.push(index);
    }

    let rows = table
        .rows()
        .iter()
        .map(|record| {
            indices
                .iter()
                .map(|&i| record.get(i).unwrap_or_default().to_string())
                .collect()
        })
        .collect::<Vec<Vec<String>>>();

    debug!(
        "projected {} of {} columns over {} rows",
        REQUIRED_COLUMNS.len(),
        table.width(),
        rows.len()
    );

    Ok(ProjectedTable { rows })
}
