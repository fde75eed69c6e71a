//! Delta computation.

use std::time::Instant;

use crate::delta::model::{Addition, DeltaRecord, Mapping, Update};
use crate::{log_op_end, log_op_start};

/// Compute the delta that turns `base` into `target`
///
/// Values are compared with deep JSON equality: nested objects compare
/// regardless of key order, numbers compare by their JSON representation
/// (`1` and `1.0` differ).
pub fn compute_delta(base: &Mapping, target: &Mapping) -> DeltaRecord {
    log_op_start!(
        "compute_delta",
        base_key_count = base.len(),
        target_key_count = target.len()
    );
    let start = Instant::now();

    let additions = target
        .iter()
        .filter(|(key, _)| !base.contains_key(key.as_str()))
        .map(|(key, value)| Addition {
            key: key.clone(),
            value: value.clone(),
        })
        .collect();

    let deletions = base
        .keys()
        .filter(|key| !target.contains_key(key.as_str()))
        .cloned()
        .collect();

    let updates = base
        .iter()
        .filter_map(|(key, from)| match target.get(key) {
            Some(to) if to != from => Some(Update {
                key: key.clone(),
                from: from.clone(),
                to: to.clone(),
            }),
            _ => None,
        })
        .collect();

    let delta = DeltaRecord {
        additions,
        deletions,
        updates,
    };

    log_op_end!(
        "compute_delta",
        duration_ms = start.elapsed().as_millis() as u64,
        addition_count = delta.additions.len(),
        deletion_count = delta.deletions.len(),
        update_count = delta.updates.len()
    );

    delta
}
