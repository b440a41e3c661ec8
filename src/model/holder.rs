/* src/model/holder.rs */

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{CaseMode, Property};

/// A named container of unique properties, kept in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Holder {
	name: String,
	properties: Vec<Property>,
	#[cfg_attr(feature = "serde", serde(skip))]
	key_case: CaseMode,
}

impl Holder {
	/// Creates an empty holder with case-sensitive keys.
	pub fn new(name: impl Into<String>) -> Self {
		Self::with_key_case(name, CaseMode::Sensitive)
	}

	/// Creates an empty holder using `key_case` for key lookups.
	pub fn with_key_case(name: impl Into<String>, key_case: CaseMode) -> Self {
		Self {
			name: name.into(),
			properties: Vec::new(),
			key_case,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn key_case(&self) -> CaseMode {
		self.key_case
	}

	/// Properties in insertion order.
	pub fn properties(&self) -> &[Property] {
		&self.properties
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Property> {
		self.properties.iter()
	}

	pub fn len(&self) -> usize {
		self.properties.len()
	}

	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}

	/// Keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.properties.iter().map(|p| p.key.as_str())
	}

	pub fn position(&self, key: &str) -> Option<usize> {
		self.properties
			.iter()
			.position(|p| self.key_case.matches(&p.key, key))
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.position(key).is_some()
	}

	pub fn get(&self, key: &str) -> Option<&Property> {
		self.position(key).map(|i| &self.properties[i])
	}

	pub fn value(&self, key: &str) -> Option<&str> {
		self.get(key).map(|p| p.value.as_str())
	}

	/// Appends a property. Returns false, leaving the holder untouched, if
	/// the key is already present.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
		let key = key.into();
		if self.contains_key(&key) {
			return false;
		}
		self.properties.push(Property::new(key, value));
		true
	}

	/// Replaces the value of an existing key, returning the old value.
	pub fn set(&mut self, key: &str, value: impl Into<String>) -> Option<String> {
		let index = self.position(key)?;
		Some(std::mem::replace(
			&mut self.properties[index].value,
			value.into(),
		))
	}

	pub fn remove(&mut self, key: &str) -> Option<Property> {
		let index = self.position(key)?;
		Some(self.properties.remove(index))
	}

	/// Converts the holder into an unordered key/value map.
	pub fn into_map(self) -> HashMap<String, String> {
		self.properties.into_iter().map(Property::into_pair).collect()
	}
}

impl<'a> IntoIterator for &'a Holder {
	type Item = &'a Property;
	type IntoIter = std::slice::Iter<'a, Property>;

	fn into_iter(self) -> Self::IntoIter {
		self.properties.iter()
	}
}
