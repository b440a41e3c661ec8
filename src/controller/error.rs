/* src/controller/error.rs */

use thiserror::Error;

use crate::format::FormatError;
use crate::storage::StorageError;

/// Errors returned by [`Cfr`](super::Cfr) operations.
#[derive(Debug, Error)]
pub enum CfrError {
	#[error("Storage error: {0}")]
	Storage(#[from] StorageError),

	#[error("Format error: {0}")]
	Format(#[from] FormatError),

	/// The holder or property an operation targets does not exist.
	#[error("Not found: {0}")]
	NotFound(#[from] Missing),

	#[error("Builder error: {0}")]
	Builder(String),
}

impl CfrError {
	/// True for a missing holder or property.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound(_))
	}

	/// True when the backing resource itself is absent.
	pub fn is_storage_not_found(&self) -> bool {
		matches!(self, Self::Storage(StorageError::NotFound { .. }))
	}

	pub fn missing(&self) -> Option<&Missing> {
		match self {
			Self::NotFound(missing) => Some(missing),
			_ => None,
		}
	}
}

/// What a lookup failed to find.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Missing {
	#[error("holder {holder:?}")]
	Holder { holder: String },

	#[error("property {key:?} in holder {holder:?}")]
	Property { holder: String, key: String },
}

impl Missing {
	pub(crate) fn holder(holder: &str) -> Self {
		Self::Holder {
			holder: holder.to_string(),
		}
	}

	pub(crate) fn property(holder: &str, key: &str) -> Self {
		Self::Property {
			holder: holder.to_string(),
			key: key.to_string(),
		}
	}
}
