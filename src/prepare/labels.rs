use log::info;

use crate::flow_record::{FlowLabels, FlowRecord, ATTACK, LABEL};

/// The working table with its training target selected: feature records plus
/// one target column, index-aligned.
pub struct Dataset {
    pub records: Vec<FlowRecord>,
    /// Name of the surviving label column.
    pub target_name: &'static str,
    /// Target value per record.
    pub target: Vec<String>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Keeps exactly one of the two label columns as the training target.
///
/// With `binary` set the benign/attack indicator is dropped and the
/// attack-type column becomes the target; otherwise the attack-type column
/// is dropped and the indicator becomes the target.
pub fn select_target(records: Vec<FlowRecord>, labels: Vec<FlowLabels>, binary: bool) -> Dataset {
    let (target_name, target): (&'static str, Vec<String>) = if binary {
        (ATTACK, labels.into_iter().map(|l| l.attack).collect())
    } else {
        (LABEL, labels.into_iter().map(|l| l.label).collect())
    };

    info!("training target is `{}`", target_name);

    Dataset {
        records,
        target_name,
        target,
    }
}
