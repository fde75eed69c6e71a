//! Delta application.

use std::collections::HashSet;
use std::time::Instant;

use crate::delta::model::{DeltaRecord, Mapping};
use crate::{log_op_end, log_op_start};

/// Apply `delta` to a copy of `base`
///
/// Deletions are removed first, then updates overwrite with their `to`
/// value, then additions are inserted. The delta is not checked against
/// `base`: a deletion of a missing key is a no-op and an update of a missing
/// key inserts it. Surviving base keys keep their order; inserted keys
/// follow in delta order.
pub fn apply_delta(base: &Mapping, delta: &DeltaRecord) -> Mapping {
    log_op_start!(
        "apply_delta",
        base_key_count = base.len(),
        change_count = delta.change_count()
    );
    let start = Instant::now();

    let deleted: HashSet<&str> = delta.deletions.iter().map(String::as_str).collect();

    let mut result: Mapping = base
        .iter()
        .filter(|(key, _)| !deleted.contains(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    for update in &delta.updates {
        result.insert(update.key.clone(), update.to.clone());
    }

    for addition in &delta.additions {
        result.insert(addition.key.clone(), addition.value.clone());
    }

    log_op_end!(
        "apply_delta",
        duration_ms = start.elapsed().as_millis() as u64,
        key_count = result.len()
    );

    result
}
