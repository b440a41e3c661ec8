/* src/storage/mod.rs */

//!
//! Backing media for CFR text.
//!
//! Every operation reads the whole content and writes the whole content
//! back. A [`Storage`] never caches between calls.

mod error;
mod memory;

#[cfg(feature = "fs")]
mod file;

pub use error::StorageError;
pub use memory::MemoryStorage;

#[cfg(feature = "fs")]
pub use file::{FileLock, FileStorage};

/// A resource holding the full text of one document.
pub trait Storage {
	/// Held for the duration of a read-modify-write cycle.
	type Guard;

	/// Human readable location used in errors and logs.
	fn location(&self) -> String;

	/// Check if the resource currently exists.
	fn exists(&self) -> bool;

	/// Read the full content. Fails with [`StorageError::NotFound`] if the
	/// resource is absent.
	fn read(&self) -> Result<String, StorageError>;

	/// Replace the full content.
	fn write(&mut self, content: &str) -> Result<(), StorageError>;

	/// Acquire whatever exclusion this medium offers for a mutation.
	fn lock(&self) -> Result<Self::Guard, StorageError>;
}
