use serde::{Deserialize, Serialize};

/// A declared attribute of a class
///
/// `type_name` is an opaque label; it becomes the text of the attribute's
/// leaf in the generated tree and the `type` of its metadata parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A class of the input model
///
/// The name is the class identity. Attribute names are not required to be
/// unique and keep their declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    pub name: String,
    #[serde(rename = "isRoot")]
    pub is_root: bool,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl ClassDef {
    /// Create a non-root class with no documentation and no attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_root: false,
            documentation: String::new(),
            attributes: Vec::new(),
        }
    }

    /// Flag this class as the tree root
    pub fn root(mut self) -> Self {
        self.is_root = true;
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = documentation.into();
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, type_name));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_attribute_order() {
        let class = ClassDef::new("Block")
            .with_attribute("id", "int")
            .with_attribute("label", "string")
            .with_attribute("id", "uuid");

        let names: Vec<&str> = class.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["id", "label", "id"]);
        assert!(!class.is_root);
        assert!(class.documentation.is_empty());
    }

    #[test]
    fn test_serde_field_names() {
        let class = ClassDef::new("Root").root().with_attribute("version", "string");
        let json = serde_json::to_value(&class).unwrap();

        assert_eq!(json["isRoot"], serde_json::json!(true));
        assert_eq!(json["attributes"][0]["type"], serde_json::json!("string"));
    }
}
