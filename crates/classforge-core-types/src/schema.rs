//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Entity identifiers
pub const FIELD_ROOT_CLASS: &str = "root_class";

// Collection sizes
pub const FIELD_CLASS_COUNT: &str = "class_count";
pub const FIELD_EDGE_COUNT: &str = "edge_count";
pub const FIELD_NODE_COUNT: &str = "node_count";
pub const FIELD_DESCRIPTOR_COUNT: &str = "descriptor_count";
pub const FIELD_ADDITION_COUNT: &str = "addition_count";
pub const FIELD_DELETION_COUNT: &str = "deletion_count";
pub const FIELD_UPDATE_COUNT: &str = "update_count";
pub const FIELD_KEY_COUNT: &str = "key_count";
pub const FIELD_BASE_KEY_COUNT: &str = "base_key_count";
pub const FIELD_TARGET_KEY_COUNT: &str = "target_key_count";
pub const FIELD_CHANGE_COUNT: &str = "change_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_CLASS_COUNT.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_delta_count_fields_are_distinct() {
        assert_ne!(FIELD_ADDITION_COUNT, FIELD_DELETION_COUNT);
        assert_ne!(FIELD_DELETION_COUNT, FIELD_UPDATE_COUNT);
    }
}
