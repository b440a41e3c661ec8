/* src/controller/options.rs */

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::format::{DEFAULT_INDENT, ParseMode};
use crate::model::{CaseMode, MatchPolicy};

/// Behavior of a [`Cfr`](super::Cfr) handle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
	/// Comparison used for holder names. Defaults to case-insensitive.
	pub holder_case: CaseMode,
	/// Comparison used for keys. Defaults to case-sensitive.
	pub key_case: CaseMode,
	/// How lines that do not fit the grammar are handled.
	pub parse_mode: ParseMode,
	/// Indentation written in front of new property lines.
	pub indent: String,
}

impl Options {
	pub fn policy(&self) -> MatchPolicy {
		MatchPolicy {
			holder: self.holder_case,
			key: self.key_case,
		}
	}
}

impl Default for Options {
	fn default() -> Self {
		let policy = MatchPolicy::default();
		Self {
			holder_case: policy.holder,
			key_case: policy.key,
			parse_mode: ParseMode::default(),
			indent: DEFAULT_INDENT.to_string(),
		}
	}
}
