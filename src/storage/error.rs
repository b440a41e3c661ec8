/* src/storage/error.rs */

/// Errors raised by a [`Storage`](super::Storage) backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
	/// The backing resource does not exist.
	#[error("storage not found: {location}")]
	NotFound { location: String },

	/// IO error while reading or writing the resource.
	#[error("io error on {location}: {source}")]
	Io {
		location: String,
		#[source]
		source: std::io::Error,
	},

	/// The advisory lock could not be acquired.
	#[error("failed to lock {location}")]
	LockFailed { location: String },
}

impl StorageError {
	pub(crate) fn io(location: impl Into<String>, source: std::io::Error) -> Self {
		if source.kind() == std::io::ErrorKind::NotFound {
			Self::NotFound {
				location: location.into(),
			}
		} else {
			Self::Io {
				location: location.into(),
				source,
			}
		}
	}
}
