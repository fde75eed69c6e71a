//! Class model XML reader
//!
//! Reads documents of the form:
//!
//! ```xml
//! <XMI>
//!     <Class name="BTS" isRoot="true" documentation="Base station">
//!         <Attribute name="id" type="uint32"/>
//!     </Class>
//!     <Class name="MGMT" isRoot="false"/>
//!     <Aggregation source="MGMT" target="BTS" sourceMultiplicity="1" targetMultiplicity="1"/>
//! </XMI>
//! ```
//!
//! Only direct children of the document element count as classes and
//! aggregations, and only direct children of a `Class` as its attributes.
//! Everything else is skipped.

use std::fs;
use std::path::Path;
use std::time::Instant;

use classforge_core::{log_op_end, log_op_error, log_op_start};
use classforge_core::{AggregationEdge, Attribute, ClassDef, ClassModel};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::errors::{invalid_input, io_error, xml_error, Result};

const CLASS_TAG: &[u8] = b"Class";
const ATTRIBUTE_TAG: &[u8] = b"Attribute";
const AGGREGATION_TAG: &[u8] = b"Aggregation";

/// Depth of `Class`/`Aggregation` elements (the document element is depth 0)
const TOP_LEVEL: usize = 1;

/// Read and parse a class model file
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be read, otherwise as
/// [`parse_model_str`].
pub fn parse_model_file(path: &Path) -> Result<ClassModel> {
    let content = fs::read_to_string(path).map_err(|e| io_error("parse_model_file", path, e))?;
    parse_model_str(&content).map_err(|e| e.with_entity_id(path.display().to_string()))
}

/// Parse a class model from XML text
///
/// # Errors
///
/// * `InvalidModel` - the text is not well-formed XML, has no element, or
///   has content after the document element
/// * `InvalidInput` - a `Class` or `Attribute` has no `name`
pub fn parse_model_str(content: &str) -> Result<ClassModel> {
    log_op_start!("parse_model");
    let start = Instant::now();

    let model = parse_model_impl(content).map_err(|e| {
        log_op_error!(
            "parse_model",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "parse_model",
        duration_ms = start.elapsed().as_millis() as u64,
        class_count = model.class_count(),
        edge_count = model.edge_count()
    );

    Ok(model)
}

fn parse_model_impl(content: &str) -> Result<ClassModel> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut model = ClassModel::new();
    let mut open_class: Option<ClassDef> = None;
    let mut depth = 0usize;
    let mut saw_element = false;
    let mut root_closed = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            xml_error(
                "parse_model",
                format!("{} at byte {}", e, reader.buffer_position()),
            )
        })?;

        if root_closed && matches!(event, Event::Start(_) | Event::Empty(_)) {
            return Err(xml_error(
                "parse_model",
                format!(
                    "content after document element at byte {}",
                    reader.buffer_position()
                ),
            ));
        }

        match event {
            Event::Start(ref e) => {
                saw_element = true;
                match (depth, e.name().as_ref()) {
                    (TOP_LEVEL, CLASS_TAG) => open_class = Some(read_class(e)?),
                    (TOP_LEVEL, AGGREGATION_TAG) => model.add_aggregation(read_aggregation(e)?),
                    (d, ATTRIBUTE_TAG) if d == TOP_LEVEL + 1 => {
                        if let Some(class) = open_class.as_mut() {
                            class.attributes.push(read_attribute(e)?);
                        }
                    }
                    _ => {}
                }
                depth += 1;
            }
            Event::Empty(ref e) => {
                saw_element = true;
                root_closed = depth == 0;
                match (depth, e.name().as_ref()) {
                    (TOP_LEVEL, CLASS_TAG) => model.add_class(read_class(e)?),
                    (TOP_LEVEL, AGGREGATION_TAG) => model.add_aggregation(read_aggregation(e)?),
                    (d, ATTRIBUTE_TAG) if d == TOP_LEVEL + 1 => {
                        if let Some(class) = open_class.as_mut() {
                            class.attributes.push(read_attribute(e)?);
                        }
                    }
                    _ => {}
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                root_closed = depth == 0;
                if depth == TOP_LEVEL {
                    if let Some(class) = open_class.take() {
                        model.add_class(class);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_element {
        return Err(xml_error("parse_model", "document has no root element"));
    }
    if depth != 0 {
        return Err(xml_error(
            "parse_model",
            format!("document ends with {} unclosed element(s)", depth),
        ));
    }

    Ok(model)
}

fn read_class(e: &BytesStart<'_>) -> Result<ClassDef> {
    let name = required_attr(e, b"name", "Class")?;
    let mut class = ClassDef::new(name);
    class.is_root = attr(e, b"isRoot")?.as_deref() == Some("true");
    class.documentation = attr(e, b"documentation")?.unwrap_or_default();
    Ok(class)
}

fn read_attribute(e: &BytesStart<'_>) -> Result<Attribute> {
    let name = required_attr(e, b"name", "Attribute")?;
    let type_name = attr(e, b"type")?.unwrap_or_default();
    Ok(Attribute::new(name, type_name))
}

fn read_aggregation(e: &BytesStart<'_>) -> Result<AggregationEdge> {
    Ok(AggregationEdge::new(
        attr(e, b"source")?.unwrap_or_default(),
        attr(e, b"target")?.unwrap_or_default(),
        attr(e, b"sourceMultiplicity")?.unwrap_or_default(),
        attr(e, b"targetMultiplicity")?.unwrap_or_default(),
    ))
}

fn required_attr(e: &BytesStart<'_>, key: &[u8], element: &str) -> Result<String> {
    attr(e, key)?.ok_or_else(|| {
        invalid_input(
            "parse_model",
            &format!(
                "<{}> is missing the '{}' attribute",
                element,
                String::from_utf8_lossy(key)
            ),
        )
    })
}

/// Unescaped value of the XML attribute `key`, if present
fn attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| xml_error("parse_model", err))?;
        if attr.key.as_ref() == key {
            let value = attr
                .unescape_value()
                .map_err(|err| xml_error("parse_model", err))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
