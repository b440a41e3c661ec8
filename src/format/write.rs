/* src/format/write.rs */

use super::{DEFAULT_INDENT, SEPARATOR};
use crate::model::{Document, Holder};

/// Serializes a document with tab-indented properties.
///
/// Output always ends with a newline after the last closing brace, and an
/// empty document serializes to an empty string.
pub fn serialize(document: &Document) -> String {
	serialize_with_indent(document, DEFAULT_INDENT)
}

/// Serializes a document using `indent` in front of each property line.
pub fn serialize_with_indent(document: &Document, indent: &str) -> String {
	let mut out = String::new();
	for holder in document {
		write_holder(&mut out, holder, indent);
	}
	out
}

pub(crate) fn write_holder(out: &mut String, holder: &Holder, indent: &str) {
	write_header(out, holder.name());
	for property in holder {
		write_property(out, indent, &property.key, &property.value);
	}
	write_close(out);
}

pub(crate) fn write_header(out: &mut String, name: &str) {
	out.push_str(name);
	out.push_str(" {\n");
}

pub(crate) fn write_property(out: &mut String, indent: &str, key: &str, value: &str) {
	out.push_str(indent);
	write_pair(out, key, value);
	out.push('\n');
}

pub(crate) fn write_pair(out: &mut String, key: &str, value: &str) {
	out.push_str(key);
	out.push_str(SEPARATOR);
	out.push_str(value);
}

pub(crate) fn write_close(out: &mut String) {
	out.push_str("}\n");
}
