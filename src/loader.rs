use std::path::Path;

use anyhow::Context;
use csv::StringRecord;
use gag::Gag;
use log::{debug, info};

/// The raw flow-record table as read from disk: an unconstrained header and
/// one string record per row. Column lookup goes through the header.
pub struct RawTable {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl RawTable {
    pub fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        RawTable { headers, rows }
    }

    /// Position of a named column in the header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

/// Reads a delimited flow-record file into memory.
///
/// Standard output is suppressed for the duration of the load and restored
/// when the guard drops, on success and on failure alike. Diagnostics keep
/// flowing through the logger, which writes to stderr.
pub fn load_csv(path: &Path) -> anyhow::Result<RawTable> {
    let _silence = match Gag::stdout() {
        Ok(gag) => Some(gag),
        Err(e) => {
            debug!("stdout suppression unavailable: {}", e);
            None
        }
    };

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening dataset {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("reading header of {}", path.display()))?
        .clone();
    let rows = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("reading records of {}", path.display()))?;

    info!(
        "loaded {} rows with {} columns from {}",
        rows.len(),
        headers.len(),
        path.display()
    );

    Ok(RawTable::new(headers, rows))
}
