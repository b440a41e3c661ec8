/* src/storage/memory.rs */

use super::{Storage, StorageError};

/// An in-memory storage, useful for testing and embedded content.
///
/// A storage created with [`MemoryStorage::new`] is absent until
/// something is written into it with [`MemoryStorage::set`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
	content: Option<String>,
}

impl MemoryStorage {
	/// Creates an absent storage.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a storage that exists with the given content.
	pub fn with_content(content: impl Into<String>) -> Self {
		Self {
			content: Some(content.into()),
		}
	}

	/// Current content, or `None` if absent.
	pub fn content(&self) -> Option<&str> {
		self.content.as_deref()
	}

	pub fn set(&mut self, content: impl Into<String>) {
		self.content = Some(content.into());
	}

	/// Makes the storage absent again, returning the old content.
	pub fn clear(&mut self) -> Option<String> {
		self.content.take()
	}
}

impl Storage for MemoryStorage {
	type Guard = ();

	fn location(&self) -> String {
		"<memory>".to_string()
	}

	fn exists(&self) -> bool {
		self.content.is_some()
	}

	fn read(&self) -> Result<String, StorageError> {
		self.content.clone().ok_or_else(|| StorageError::NotFound {
			location: self.location(),
		})
	}

	fn write(&mut self, content: &str) -> Result<(), StorageError> {
		match self.content.as_mut() {
			Some(current) => {
				current.clear();
				current.push_str(content);
				Ok(())
			}
			None => Err(StorageError::NotFound {
				location: self.location(),
			}),
		}
	}

	fn lock(&self) -> Result<Self::Guard, StorageError> {
		Ok(())
	}
}
