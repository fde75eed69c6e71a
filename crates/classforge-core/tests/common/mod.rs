use classforge_core::{AggregationEdge, ClassDef, ClassModel, Mapping};

/// A small device model:
///
/// ```text
/// Device (root)
/// └── Board      1..4
///     ├── Port   0..*
///     └── Sensor 1
/// Orphan (unreachable)
/// ```
#[allow(dead_code)]
pub fn device_model() -> ClassModel {
    ClassModel::new()
        .with_class(
            ClassDef::new("Device")
                .root()
                .with_documentation("Top-level device")
                .with_attribute("name", "string")
                .with_attribute("version", "string"),
        )
        .with_class(ClassDef::new("Board").with_attribute("serial", "string"))
        .with_class(
            ClassDef::new("Sensor")
                .with_attribute("rate", "float")
                .with_attribute("unit", "string"),
        )
        .with_class(ClassDef::new("Port").with_attribute("number", "int"))
        .with_class(ClassDef::new("Orphan").with_attribute("x", "int"))
        .with_aggregation(AggregationEdge::new("Board", "Device", "1..4", "1"))
        .with_aggregation(AggregationEdge::new("Port", "Board", "0..*", "1"))
        .with_aggregation(AggregationEdge::new("Sensor", "Board", "1", "1"))
}

/// Parse a `json!` object literal into a [`Mapping`]
#[allow(dead_code)]
pub fn mapping(value: serde_json::Value) -> Mapping {
    serde_json::from_value(value).expect("fixture must be a JSON object")
}
