/* src/format/error.rs */

use std::fmt;

/// Errors raised while reading or writing CFR text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
	/// A line the strict parser could not place.
	#[error("malformed document at line {line}: {reason}")]
	Malformed { line: usize, reason: &'static str },
	/// A name, key or value that the grammar cannot represent.
	#[error("invalid {kind} {name:?}: {reason}")]
	InvalidName {
		kind: NameKind,
		name: String,
		reason: &'static str,
	},
}

/// Which part of a line failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
	Holder,
	Key,
	Value,
}

impl fmt::Display for NameKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Holder => "holder name",
			Self::Key => "key",
			Self::Value => "value",
		})
	}
}
