//! Pulls the Unicode version and the ordered block list out of a UCD XML
//! export. The expected shape is a `<ucd>` root with a `<description>`
//! child holding the version text and a `<blocks>` child whose element
//! children each carry `name`, `first-cp`, and `last-cp` attributes.

use sxd_document::dom::Element;
use sxd_document::parser;

use crate::block::BlockRecord;
use crate::error::{Error, Result};

/// Parses the raw document bytes and returns the version string together
/// with every block record in document order. Any structural problem fails
/// the whole run; there is no partial result.
pub fn extract_blocks(raw: &[u8]) -> Result<(String, Vec<BlockRecord>)> {
    let text = std::str::from_utf8(raw)
        .map_err(|e| Error::Format(format!("input is not valid UTF-8: {e}")))?;
    let package =
        parser::parse(text).map_err(|e| Error::Format(format!("XML parse failure: {e}")))?;
    let document = package.as_document();

    let ucd = document
        .root()
        .children()
        .into_iter()
        .filter_map(|c| c.element())
        .find(|el| el.name().local_part() == "ucd")
        .ok_or_else(|| Error::Format("no <ucd> root element found".to_owned()))?;

    // The original tool reads the description unconditionally; an export
    // without one just yields an empty version string.
    let version = child_element(ucd, "description")
        .map(element_text)
        .unwrap_or_default();

    let container = child_element(ucd, "blocks")
        .ok_or_else(|| Error::Format("no <blocks> described in document".to_owned()))?;

    let mut blocks = Vec::new();
    for child in container.children() {
        if let Some(el) = child.element() {
            blocks.push(block_record(el)?);
        }
    }

    Ok((version, blocks))
}

fn block_record(el: Element<'_>) -> Result<BlockRecord> {
    let name = required_attribute(el, "name")?.to_owned();
    let start = code_point(el, "first-cp")?;
    let end = code_point(el, "last-cp")?;
    Ok(BlockRecord { name, start, end })
}

fn required_attribute<'d>(el: Element<'d>, attr: &str) -> Result<&'d str> {
    el.attribute_value(attr).ok_or_else(|| {
        Error::Format(format!(
            "<{}> element missing required attribute {:?}",
            el.name().local_part(),
            attr
        ))
    })
}

fn code_point(el: Element<'_>, attr: &str) -> Result<u32> {
    let raw = required_attribute(el, attr)?;
    u32::from_str_radix(raw, 16).map_err(|_| {
        Error::Format(format!(
            "attribute {attr}={raw:?} is not a hexadecimal code point"
        ))
    })
}

fn child_element<'d>(parent: Element<'d>, name: &str) -> Option<Element<'d>> {
    parent
        .children()
        .into_iter()
        .filter_map(|c| c.element())
        .find(|el| el.name().local_part() == name)
}

fn element_text(el: Element<'_>) -> String {
    el.children()
        .into_iter()
        .filter_map(|c| c.text())
        .map(|t| t.text())
        .collect()
}
