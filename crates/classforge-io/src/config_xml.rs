//! Configuration XML renderer

use std::io::{Cursor, Write};

use classforge_core::TreeNode;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::errors::{xml_error, Result};

/// First line of every rendered configuration document
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" ?>"#;

/// Render a configuration tree as an XML document
///
/// The declaration line is followed by the compact element tree (no
/// indentation). Attribute leaves carry their type text with only `&`, `<`
/// and `>` escaped; elements with neither text nor children are written
/// self-closing as `<Name />`.
///
/// # Errors
///
/// Returns `InvalidModel` if the writer rejects an element name.
pub fn render_config_xml(tree: &TreeNode) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_node(&mut writer, tree)?;

    let body = String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| xml_error("render_config_xml", e))?;

    Ok(format!("{}\n{}", XML_DECLARATION, body))
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &TreeNode) -> Result<()> {
    let name = node.name.as_str();
    let text = node.text.as_deref().filter(|t| !t.is_empty());

    if text.is_none() && node.children.is_empty() {
        // Trailing space in the tag content gives `<Name />`
        let empty = BytesStart::from_content(format!("{} ", name), name.len());
        return writer
            .write_event(Event::Empty(empty))
            .map_err(|e| xml_error("render_config_xml", e));
    }

    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(|e| xml_error("render_config_xml", e))?;

    if let Some(text) = text {
        writer
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))
            .map_err(|e| xml_error("render_config_xml", e))?;
    }

    for child in &node.children {
        write_node(writer, child)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| xml_error("render_config_xml", e))
}
