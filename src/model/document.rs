/* src/model/document.rs */

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{Holder, MatchPolicy};

/// An ordered set of uniquely named holders.
///
/// Holder order is the order of first appearance in the source text, or
/// insertion order for holders added afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Document {
	holders: Vec<Holder>,
	#[cfg_attr(feature = "serde", serde(skip))]
	policy: MatchPolicy,
}

impl Document {
	/// Creates an empty document with the default [`MatchPolicy`].
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_policy(policy: MatchPolicy) -> Self {
		Self {
			holders: Vec::new(),
			policy,
		}
	}

	pub fn policy(&self) -> MatchPolicy {
		self.policy
	}

	pub fn holders(&self) -> &[Holder] {
		&self.holders
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Holder> {
		self.holders.iter()
	}

	pub fn len(&self) -> usize {
		self.holders.len()
	}

	pub fn is_empty(&self) -> bool {
		self.holders.is_empty()
	}

	/// Holder names in document order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.holders.iter().map(|h| h.name())
	}

	pub fn position(&self, name: &str) -> Option<usize> {
		self.holders
			.iter()
			.position(|h| self.policy.holder.matches(h.name(), name))
	}

	pub fn contains(&self, name: &str) -> bool {
		self.position(name).is_some()
	}

	pub fn holder(&self, name: &str) -> Option<&Holder> {
		self.position(name).map(|i| &self.holders[i])
	}

	pub fn holder_mut(&mut self, name: &str) -> Option<&mut Holder> {
		let index = self.position(name)?;
		Some(&mut self.holders[index])
	}

	/// Appends an empty holder. Returns false if the name is already taken.
	pub fn insert_holder(&mut self, name: impl Into<String>) -> bool {
		let name = name.into();
		if self.contains(&name) {
			return false;
		}
		self.holders
			.push(Holder::with_key_case(name, self.policy.key));
		true
	}

	pub fn remove_holder(&mut self, name: &str) -> Option<Holder> {
		let index = self.position(name)?;
		Some(self.holders.remove(index))
	}

	/// Appends a property to an existing holder.
	///
	/// Returns false if the holder is missing or already has the key.
	pub fn insert_property(
		&mut self,
		holder: &str,
		key: impl Into<String>,
		value: impl Into<String>,
	) -> bool {
		match self.holder_mut(holder) {
			Some(h) => h.insert(key, value),
			None => false,
		}
	}
}

impl<'a> IntoIterator for &'a Document {
	type Item = &'a Holder;
	type IntoIter = std::slice::Iter<'a, Holder>;

	fn into_iter(self) -> Self::IntoIter {
		self.holders.iter()
	}
}
