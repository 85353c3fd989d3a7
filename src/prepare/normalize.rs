use log::debug;

use crate::errors::{PipelineError, Result};
use crate::flow_record::{
    FlowLabels, FlowRecord, FLOW_DURATION_MILLISECONDS, IN_BYTES, IN_PKTS, L4_DST_PORT,
    L4_SRC_PORT, OUT_BYTES, OUT_PKTS,
};
use crate::prepare::select::ProjectedTable;

// Column positions fixed by the projection order.
const SRC_ADDR: usize = 0;
const DST_ADDR: usize = 1;
const SRC_PORT: usize = 2;
const DST_PORT: usize = 3;
const PROTO: usize = 4;
const L7: usize = 5;
const BYTES_IN: usize = 6;
const BYTES_OUT: usize = 7;
const PKTS_IN: usize = 8;
const PKTS_OUT: usize = 9;
const FLAGS: usize = 10;
const DURATION: usize = 11;
const LABEL_COL: usize = 12;
const ATTACK_COL: usize = 13;

/// Parses every projected row into a typed [`FlowRecord`] with its label
/// pair. Addresses and protocol identifiers stay categorical (two rows with
/// the same text share the same identity); ports narrow to `u16`; counters
/// and the duration narrow to `u64`. Row count is preserved.
pub fn normalize(table: ProjectedTable) -> Result<(Vec<FlowRecord>, Vec<FlowLabels>)> {
    let mut records = Vec::with_capacity(table.height());
    let mut labels = Vec::with_capacity(table.height());

    for row in table.into_rows() {
        let record = FlowRecord {
            src_addr: row[SRC_ADDR].trim().to_string(),
            dst_addr: row[DST_ADDR].trim().to_string(),
            src_port: parse_port(&row[SRC_PORT], L4_SRC_PORT)?,
            dst_port: parse_port(&row[DST_PORT], L4_DST_PORT)?,
            protocol: row[PROTO].trim().to_string(),
            l7_protocol: row[L7].trim().to_string(),
            in_bytes: parse_counter(&row[BYTES_IN], IN_BYTES)?,
            out_bytes: parse_counter(&row[BYTES_OUT], OUT_BYTES)?,
            in_pkts: parse_counter(&row[PKTS_IN], IN_PKTS)?,
            out_pkts: parse_counter(&row[PKTS_OUT], OUT_PKTS)?,
            tcp_flags: row[FLAGS].trim().to_string(),
            flow_duration_ms: parse_counter(&row[DURATION], FLOW_DURATION_MILLISECONDS)?,
        };
        records.push(record);
        labels.push(FlowLabels {
            label: row[LABEL_COL].trim().to_string(),
            attack: row[ATTACK_COL].trim().to_string(),
        });
    }

    debug!("normalized {} records", records.len());

    Ok((records, labels))
}

fn parse_port(raw: &str, column: &'static str) -> Result<u16> {
    let value: i64 = raw.trim().parse().map_err(|_| PipelineError::Range {
        column,
        value: raw.to_string(),
        expected: "an unsigned 16-bit port number",
    })?;
    u16::try_from(value).map_err(|_| PipelineError::Range {
        column,
        value: raw.to_string(),
        expected: "an unsigned 16-bit port number",
    })
}

fn parse_counter(raw: &str, column: &'static str) -> Result<u64> {
    let value: i64 = raw.trim().parse().map_err(|_| PipelineError::Range {
        column,
        value: raw.to_string(),
        expected: "a non-negative integer",
    })?;
    u64::try_from(value).map_err(|_| PipelineError::Range {
        column,
        value: raw.to_string(),
        expected: "a non-negative integer",
    })
}
