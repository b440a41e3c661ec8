/* src/format/outline.rs */

use std::ops::Range;

use super::{FormatError, ParseMode};
use crate::model::{CaseMode, Document, MatchPolicy};

/// A line the scanner could not place, or a duplicate it chose to ignore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Defect {
	pub line: usize,
	pub reason: &'static str,
}

/// Location of one property line in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PropertySpan {
	pub key: String,
	pub value: String,
	/// Whole line, including its line ending.
	pub line: Range<usize>,
	/// Length of the leading whitespace.
	pub indent: usize,
	/// End of the line content, before the line ending.
	pub content_end: usize,
	/// Hidden by an earlier property with the same key.
	pub shadowed: bool,
}

/// Location of one holder and its properties in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HolderSpan {
	pub name: String,
	/// 1-based line number of the header.
	pub line: usize,
	pub header: Range<usize>,
	/// Closing brace line, if the holder was closed.
	pub close: Option<Range<usize>>,
	/// End of the holder span.
	pub end: usize,
	pub properties: Vec<PropertySpan>,
	/// Hidden by an earlier holder with the same name.
	pub shadowed: bool,
}

impl HolderSpan {
	pub fn new(name: &str, line: usize, header: Range<usize>) -> Self {
		Self {
			name: name.to_string(),
			line,
			end: header.end,
			header,
			close: None,
			properties: Vec::new(),
			shadowed: false,
		}
	}

	/// Header through closing brace, or through the last line before the
	/// next holder for an unclosed one.
	pub fn span(&self) -> Range<usize> {
		self.header.start..self.end
	}

	/// Offset where a new property line belongs.
	pub fn insert_at(&self) -> usize {
		self.close.as_ref().map_or(self.end, |close| close.start)
	}

	pub fn find(&self, key: &str, case: CaseMode) -> Option<&PropertySpan> {
		self.properties
			.iter()
			.find(|p| !p.shadowed && case.matches(&p.key, key))
	}
}

/// Span-annotated scan of a CFR text.
#[derive(Debug, Clone)]
pub(crate) struct Outline {
	pub holders: Vec<HolderSpan>,
	pub defects: Vec<Defect>,
	pub policy: MatchPolicy,
}

impl Outline {
	pub fn new(policy: MatchPolicy) -> Self {
		Self {
			holders: Vec::new(),
			defects: Vec::new(),
			policy,
		}
	}

	pub fn defect(&mut self, line: usize, reason: &'static str) {
		self.defects.push(Defect { line, reason });
	}

	pub fn push_holder(&mut self, mut holder: HolderSpan) {
		if self.find(&holder.name).is_some() {
			holder.shadowed = true;
			self.defect(holder.line, "duplicate holder name");
		}
		self.holders.push(holder);
	}

	pub fn find(&self, name: &str) -> Option<&HolderSpan> {
		self.holders
			.iter()
			.find(|h| !h.shadowed && self.policy.holder.matches(&h.name, name))
	}

	/// Fails on the first defect in strict mode, logs them in lenient mode.
	pub fn check(&self, mode: ParseMode) -> Result<(), FormatError> {
		match mode {
			ParseMode::Strict => match self.first_defect() {
				Some(defect) => Err(FormatError::Malformed {
					line: defect.line,
					reason: defect.reason,
				}),
				None => Ok(()),
			},
			ParseMode::Lenient => {
				self.report();
				Ok(())
			}
		}
	}

	fn first_defect(&self) -> Option<&Defect> {
		self.defects.iter().min_by_key(|d| d.line)
	}

	pub fn report(&self) {
		#[cfg(feature = "logging")]
		for defect in &self.defects {
			log::warn!("ignoring line {}: {}", defect.line, defect.reason);
		}
	}

	pub fn to_document(&self) -> Document {
		let mut document = Document::with_policy(self.policy);
		for holder in self.holders.iter().filter(|h| !h.shadowed) {
			document.insert_holder(holder.name.as_str());
			for property in holder.properties.iter().filter(|p| !p.shadowed) {
				document.insert_property(&holder.name, property.key.as_str(), property.value.as_str());
			}
		}
		document
	}
}
