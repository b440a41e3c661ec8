/* src/model/property.rs */

#[cfg(feature = "serde")]
use serde::Serialize;

/// A single `Key : Value` pair inside a holder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Property {
	/// Property key, unique within its holder.
	pub key: String,
	/// Raw value text. No coercion or unescaping is applied.
	pub value: String,
}

impl Property {
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
		}
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	/// Splits the property into its `(key, value)` pair.
	pub fn into_pair(self) -> (String, String) {
		(self.key, self.value)
	}
}
