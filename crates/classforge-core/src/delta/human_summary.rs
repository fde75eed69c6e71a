//! Human-readable summary renderer for deltas.

use serde_json::Value;

use crate::delta::model::DeltaRecord;

/// Values longer than this are cut in the summary
const MAX_VALUE_CHARS: usize = 60;

/// Render a plain-text summary of a [`DeltaRecord`]
///
/// Intended for terminals and review. Informational only; the JSON form of
/// the record is the artifact.
pub fn render_delta_summary(delta: &DeltaRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Delta: {} addition(s), {} deletion(s), {} update(s)\n",
        delta.additions.len(),
        delta.deletions.len(),
        delta.updates.len()
    ));

    if delta.is_empty() {
        out.push_str("No changes.\n");
        return out;
    }

    for addition in &delta.additions {
        out.push_str(&format!(
            "  + {} = {}\n",
            addition.key,
            short(&addition.value)
        ));
    }
    for key in &delta.deletions {
        out.push_str(&format!("  - {}\n", key));
    }
    for update in &delta.updates {
        out.push_str(&format!(
            "  ~ {}: {} -> {}\n",
            update.key,
            short(&update.from),
            short(&update.to)
        ));
    }

    out
}

/// Compact JSON text, cut at `MAX_VALUE_CHARS` characters
fn short(value: &Value) -> String {
    let text = value.to_string();
    if text.chars().count() <= MAX_VALUE_CHARS {
        return text;
    }
    let cut: String = text.chars().take(MAX_VALUE_CHARS).collect();
    format!("{cut}...")
}
