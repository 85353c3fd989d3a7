/// Source column names as exported by nProbe-style NetFlow/IPFIX datasets
/// (NF-ToN-IoT and its siblings).
pub const IPV4_SRC_ADDR: &str = "IPV4_SRC_ADDR";
pub const IPV4_DST_ADDR: &str = "IPV4_DST_ADDR";
pub const L4_SRC_PORT: &str = "L4_SRC_PORT";
pub const L4_DST_PORT: &str = "L4_DST_PORT";
pub const PROTOCOL: &str = "PROTOCOL";
pub const L7_PROTO: &str = "L7_PROTO";
pub const IN_BYTES: &str = "IN_BYTES";
pub const OUT_BYTES: &str = "OUT_BYTES";
pub const IN_PKTS: &str = "IN_PKTS";
pub const OUT_PKTS: &str = "OUT_PKTS";
pub const TCP_FLAGS: &str = "TCP_FLAGS";
pub const FLOW_DURATION_MILLISECONDS: &str = "FLOW_DURATION_MILLISECONDS";
pub const LABEL: &str = "Label";
pub const ATTACK: &str = "Attack";

/// The columns every input table must provide, in the order the working
/// table carries them: twelve IPFIX-standardized features followed by the
/// binary indicator and the attack-type column.
pub const REQUIRED_COLUMNS: [&str; 14] = [
    IPV4_SRC_ADDR,
    IPV4_DST_ADDR,
    L4_SRC_PORT,
    L4_DST_PORT,
    PROTOCOL,
    L7_PROTO,
    IN_BYTES,
    OUT_BYTES,
    IN_PKTS,
    OUT_PKTS,
    TCP_FLAGS,
    FLOW_DURATION_MILLISECONDS,
    LABEL,
    ATTACK,
];

/// The feature columns handed to the trainer, in matrix column order.
pub const FEATURE_COLUMNS: [&str; 12] = [
    IPV4_SRC_ADDR,
    IPV4_DST_ADDR,
    L4_SRC_PORT,
    L4_DST_PORT,
    PROTOCOL,
    L7_PROTO,
    IN_BYTES,
    OUT_BYTES,
    IN_PKTS,
    OUT_PKTS,
    TCP_FLAGS,
    FLOW_DURATION_MILLISECONDS,
];

/// The features a training session must treat as unordered discrete values.
/// Ports are declared here as well: port numbers are identifiers, not
/// quantities.
pub const CATEGORICAL_COLUMNS: [&str; 7] = [
    IPV4_SRC_ADDR,
    IPV4_DST_ADDR,
    L4_SRC_PORT,
    L4_DST_PORT,
    PROTOCOL,
    L7_PROTO,
    TCP_FLAGS,
];

/// One normalized flow record: the IPFIX feature subset with narrowed types.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowRecord {
    /// The source address of the flow, kept as an opaque categorical value.
    pub src_addr: String,
    /// The destination address of the flow, kept as an opaque categorical value.
    pub dst_addr: String,
    /// The source port of the flow.
    pub src_port: u16,
    /// The destination port of the flow.
    pub dst_port: u16,
    /// The layer-4 protocol identifier.
    pub protocol: String,
    /// The layer-7 protocol identifier.
    pub l7_protocol: String,
    /// Bytes received on the flow.
    pub in_bytes: u64,
    /// Bytes sent on the flow.
    pub out_bytes: u64,
    /// Packets received on the flow.
    pub in_pkts: u64,
    /// Packets sent on the flow.
    pub out_pkts: u64,
    /// Cumulative TCP flags identifier.
    pub tcp_flags: String,
    /// Flow duration in milliseconds.
    pub flow_duration_ms: u64,
}

/// The two label columns carried alongside a record until one of them is
/// selected as the training target.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowLabels {
    /// Binary benign/attack indicator.
    pub label: String,
    /// Multi-class attack-type identifier.
    pub attack: String,
}

/// How a feature column is presented to the trainer.
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureValue {
    /// An unordered discrete identifier, identity by equality.
    Categorical(String),
    /// An ordered continuous quantity.
    Numeric(f64),
}

/// The declared kind of a feature column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Categorical,
    Numeric,
}

/// Returns the kind of a feature column, or `None` for unknown names.
pub fn column_kind(column: &str) -> Option<ColumnKind> {
    if !FEATURE_COLUMNS.contains(&column) {
        return None;
    }
    if CATEGORICAL_COLUMNS.contains(&column) {
        Some(ColumnKind::Categorical)
    } else {
        Some(ColumnKind::Numeric)
    }
}

impl FlowRecord {
    /// Returns the value of one feature column of this record, typed the way
    /// the training session consumes it. `None` for unknown column names.
    pub fn feature(&self, column: &str) -> Option<FeatureValue> {
        let value = match column {
            IPV4_SRC_ADDR => FeatureValue::Categorical(self.src_addr.clone()),
            IPV4_DST_ADDR => FeatureValue::Categorical(self.dst_addr.clone()),
            L4_SRC_PORT => FeatureValue::Categorical(self.src_port.to_string()),
            L4_DST_PORT => FeatureValue::Categorical(self.dst_port.to_string()),
            PROTOCOL => FeatureValue::Categorical(self.protocol.clone()),
            L7_PROTO => FeatureValue::Categorical(self.l7_protocol.clone()),
            IN_BYTES => FeatureValue::Numeric(self.in_bytes as f64),
            OUT_BYTES => FeatureValue::Numeric(self.out_bytes as f64),
            IN_PKTS => FeatureValue::Numeric(self.in_pkts as f64),
            OUT_PKTS => FeatureValue::Numeric(self.out_pkts as f64),
            TCP_FLAGS => FeatureValue::Categorical(self.tcp_flags.clone()),
            FLOW_DURATION_MILLISECONDS => FeatureValue::Numeric(self.flow_duration_ms as f64),
            _ => return None,
        };
        Some(value)
    }
}
