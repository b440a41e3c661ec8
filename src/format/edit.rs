/* src/format/edit.rs */

//!
//! Line-level rewrites of CFR text.
//!
//! Each function takes the original text and a span from a fresh
//! [`scan`](super::scan) of that same text, and returns new text in which
//! only the targeted lines differ.

use std::ops::Range;

use super::outline::{HolderSpan, PropertySpan};
use super::write::{write_close, write_header, write_pair, write_property};

fn splice(text: &str, range: Range<usize>, replacement: &str) -> String {
	let mut out = String::with_capacity(text.len() - range.len() + replacement.len());
	out.push_str(&text[..range.start]);
	out.push_str(replacement);
	out.push_str(&text[range.end..]);
	out
}

/// Appends an empty holder at the end of the text.
pub(crate) fn append_holder(text: &str, name: &str) -> String {
	let mut out = String::with_capacity(text.len() + name.len() + 6);
	out.push_str(text);
	if !out.is_empty() && !out.ends_with('\n') {
		out.push('\n');
	}
	write_header(&mut out, name);
	write_close(&mut out);
	out
}

/// Inserts a property as the last line of `holder`.
pub(crate) fn insert_property(text: &str, holder: &HolderSpan, indent: &str, key: &str, value: &str) -> String {
	let at = holder.insert_at();
	let mut line = String::new();
	if at > 0 && !text[..at].ends_with('\n') {
		line.push('\n');
	}
	write_property(&mut line, indent, key, value);
	splice(text, at..at, &line)
}

/// Rewrites the value of `property`, keeping its indentation, key text and
/// line ending.
pub(crate) fn replace_value(text: &str, property: &PropertySpan, value: &str) -> String {
	let mut pair = String::new();
	write_pair(&mut pair, &property.key, value);
	splice(
		text,
		property.line.start + property.indent..property.content_end,
		&pair,
	)
}

/// Removes the line holding `property`.
pub(crate) fn remove_property(text: &str, property: &PropertySpan) -> String {
	splice(text, property.line.clone(), "")
}

/// Removes `holder` from its header line through its closing brace.
pub(crate) fn remove_holder(text: &str, holder: &HolderSpan) -> String {
	splice(text, holder.span(), "")
}
