use serde::{Deserialize, Serialize};

use crate::model::Multiplicity;

/// `type` of a parameter that stands for a nested class
pub const CLASS_PARAMETER_TYPE: &str = "class";

/// One entry of a descriptor's parameter list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Parameter {
    pub fn attribute(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    /// Parameter for a nested class
    pub fn class_ref(class_name: impl Into<String>) -> Self {
        Self::attribute(class_name, CLASS_PARAMETER_TYPE)
    }

    pub fn is_class_ref(&self) -> bool {
        self.type_name == CLASS_PARAMETER_TYPE
    }
}

/// Shape of one class for downstream consumers (form and UI generators)
///
/// `min`/`max` hold a single cardinality per class, taken from the last
/// aggregation edge whose target is this class. They are absent only for a
/// root class without nested classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub class: String,
    pub documentation: String,
    #[serde(rename = "isRoot")]
    pub is_root: bool,
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

impl ClassDescriptor {
    /// The `min`/`max` pair, if both are set
    pub fn cardinality(&self) -> Option<Multiplicity> {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => Some(Multiplicity {
                min: min.clone(),
                max: max.clone(),
            }),
            _ => None,
        }
    }

    pub fn set_cardinality(&mut self, cardinality: Multiplicity) {
        self.min = Some(cardinality.min);
        self.max = Some(cardinality.max);
    }

    /// Parameters that stand for nested classes
    pub fn class_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| p.is_class_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor() -> ClassDescriptor {
        ClassDescriptor {
            class: "Device".to_string(),
            documentation: String::new(),
            is_root: true,
            parameters: vec![Parameter::attribute("name", "string")],
            min: None,
            max: None,
        }
    }

    #[test]
    fn test_absent_cardinality_is_not_serialized() {
        let value = serde_json::to_value(descriptor()).unwrap();
        assert_eq!(
            value,
            json!({
                "class": "Device",
                "documentation": "",
                "isRoot": true,
                "parameters": [{"name": "name", "type": "string"}]
            })
        );
    }

    #[test]
    fn test_set_cardinality() {
        let mut d = descriptor();
        d.set_cardinality(Multiplicity::parse("0..*").unwrap());

        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(value["min"], json!("0"));
        assert_eq!(value["max"], json!("*"));
        assert_eq!(d.cardinality().unwrap().to_string(), "0..*");
    }
}
