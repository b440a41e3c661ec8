/* src/format/scan.rs */

use super::SEPARATOR;
use super::outline::{HolderSpan, Outline, PropertySpan};
use crate::model::MatchPolicy;

/// Classification of a single line, ignoring its line ending.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
	Blank,
	Header(&'a str),
	Close,
	Property { key: &'a str, value: &'a str },
	Other,
}

fn classify(content: &str) -> Line<'_> {
	let trimmed = content.trim();
	if trimmed.is_empty() {
		return Line::Blank;
	}
	if trimmed == "}" {
		return Line::Close;
	}
	if let Some((key, value)) = trimmed.split_once(SEPARATOR) {
		return Line::Property { key, value };
	}
	match trimmed.strip_suffix(" {") {
		Some(name) if is_header_name(name) => Line::Header(name),
		_ => Line::Other,
	}
}

fn is_header_name(name: &str) -> bool {
	!name.is_empty() && name.trim_end() == name && !name.contains(['{', '}'])
}

/// True if the header line written for `name` reads back as that holder.
pub(crate) fn reads_as_header(name: &str) -> bool {
	classify(&format!("{name} {{")) == Line::Header(name)
}

/// Scans `text` into holder and property spans.
///
/// Never fails. Lines that do not fit the grammar are recorded as defects
/// and left out of the outline.
pub(crate) fn scan(text: &str, policy: MatchPolicy) -> Outline {
	let mut outline = Outline::new(policy);
	let mut open: Option<HolderSpan> = None;
	let mut offset = 0;

	for (index, raw) in text.split_inclusive('\n').enumerate() {
		let start = offset;
		offset += raw.len();
		let line = index + 1;
		let content = raw.trim_end_matches(['\n', '\r']);

		match classify(content) {
			Line::Blank => {}
			Line::Header(name) => {
				if let Some(mut holder) = open.take() {
					outline.defect(holder.line, "holder is never closed");
					holder.end = start;
					outline.push_holder(holder);
				}
				open = Some(HolderSpan::new(name, line, start..offset));
			}
			Line::Close => match open.take() {
				Some(mut holder) => {
					holder.close = Some(start..offset);
					holder.end = offset;
					outline.push_holder(holder);
				}
				None => outline.defect(line, "closing brace outside of a holder"),
			},
			Line::Property { key, value } => match open.as_mut() {
				Some(holder) => {
					let shadowed = holder.find(key, policy.key).is_some();
					if shadowed {
						outline.defect(line, "duplicate key");
					}
					holder.properties.push(PropertySpan {
						key: key.to_string(),
						value: value.to_string(),
						line: start..offset,
						indent: content.len() - content.trim_start().len(),
						content_end: start + content.len(),
						shadowed,
					});
				}
				None => outline.defect(line, "property outside of a holder"),
			},
			Line::Other => outline.defect(line, "unrecognized line"),
		}
	}

	if let Some(mut holder) = open {
		outline.defect(holder.line, "holder is never closed");
		holder.end = text.len();
		outline.push_holder(holder);
	}

	outline
}
