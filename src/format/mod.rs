/* src/format/mod.rs */

//!
//! Text side of the CFR format: scanning, parsing, serialization and
//! line-level edits.
//!
//! ```text
//! UserSettings {
//! 	Theme : dark
//! 	Language : en
//! }
//! ```
//!
//! Parsing is line oriented. A line ending in ` {` opens a holder, a line
//! holding only `}` closes it, and inside a holder every line containing
//! `" : "` is split on its first occurrence into key and value.

pub(crate) mod edit;
mod error;
mod outline;
mod scan;
mod validate;
mod write;

pub use error::{FormatError, NameKind};
pub use validate::{validate_holder_name, validate_key, validate_value};
pub use write::{serialize, serialize_with_indent};

pub(crate) use outline::{Outline, PropertySpan};
pub(crate) use scan::scan;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::{Document, MatchPolicy};

/// Delimiter between a key and its value.
pub const SEPARATOR: &str = " : ";

/// Indentation written in front of new property lines.
pub const DEFAULT_INDENT: &str = "\t";

/// What the parser does with lines it cannot place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParseMode {
	/// Skip unrecognized lines, treat an unclosed holder as running to the
	/// end of its span, and ignore duplicate holders and keys.
	#[default]
	Lenient,
	/// Fail with [`FormatError::Malformed`] on the first such line.
	Strict,
}

/// Parses `text` leniently with the default [`MatchPolicy`].
pub fn parse(text: &str) -> Document {
	let outline = scan(text, MatchPolicy::default());
	outline.report();
	outline.to_document()
}

/// Parses `text` with an explicit policy and mode.
pub fn parse_with(text: &str, policy: MatchPolicy, mode: ParseMode) -> Result<Document, FormatError> {
	let outline = scan(text, policy);
	outline.check(mode)?;
	Ok(outline.to_document())
}
