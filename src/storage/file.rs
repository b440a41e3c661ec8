/* src/storage/file.rs */

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use super::{Storage, StorageError};

/// A single file on the local file system.
///
/// Writes go through a temporary file in the same directory that is then
/// renamed over the target, so readers never observe a half-written
/// document. Set [`FileStorage::locked`] to serialize read-modify-write
/// cycles across processes with an advisory lock on a sidecar file.
#[derive(Debug, Clone)]
pub struct FileStorage {
	path: PathBuf,
	atomic: bool,
	locked: bool,
}

impl FileStorage {
	/// Creates a FileStorage for the given path. The file is not touched.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			atomic: true,
			locked: false,
		}
	}

	/// Toggle write-to-temp-then-rename. When disabled the file is
	/// truncated and rewritten in place.
	pub fn atomic(mut self, atomic: bool) -> Self {
		self.atomic = atomic;
		self
	}

	/// Toggle the advisory lock held across each mutation.
	pub fn locked(mut self, locked: bool) -> Self {
		self.locked = locked;
		self
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Path of the sidecar file used for advisory locking, or `None` if the
	/// path does not name a file.
	pub fn lock_path(&self) -> Option<PathBuf> {
		let name = self.path.file_name()?.to_string_lossy();
		Some(self.path.with_file_name(format!(".{name}.lock")))
	}

	fn parent_dir(&self) -> &Path {
		match self.path.parent() {
			Some(parent) if !parent.as_os_str().is_empty() => parent,
			_ => Path::new("."),
		}
	}

	fn write_atomic(&self, content: &str) -> Result<(), StorageError> {
		let location = self.location();
		let mut temp = NamedTempFile::new_in(self.parent_dir()).map_err(|e| StorageError::io(&location, e))?;

		// Keep the original permissions across the rename.
		if let Ok(meta) = fs::metadata(&self.path) {
			temp.as_file()
				.set_permissions(meta.permissions())
				.map_err(|e| StorageError::io(&location, e))?;
		}

		temp.write_all(content.as_bytes())
			.map_err(|e| StorageError::io(&location, e))?;
		temp.as_file()
			.sync_all()
			.map_err(|e| StorageError::io(&location, e))?;
		temp.persist(&self.path)
			.map_err(|e| StorageError::io(&location, e.error))?;
		Ok(())
	}
}

impl Storage for FileStorage {
	type Guard = Option<FileLock>;

	fn location(&self) -> String {
		self.path.display().to_string()
	}

	fn exists(&self) -> bool {
		self.path.is_file()
	}

	fn read(&self) -> Result<String, StorageError> {
		let content = fs::read_to_string(&self.path).map_err(|e| StorageError::io(self.location(), e))?;
		#[cfg(feature = "logging")]
		log::trace!("read {} bytes from {}", content.len(), self.path.display());
		Ok(content)
	}

	fn write(&mut self, content: &str) -> Result<(), StorageError> {
		if !self.exists() {
			return Err(StorageError::NotFound {
				location: self.location(),
			});
		}

		if self.atomic {
			self.write_atomic(content)?;
		} else {
			fs::write(&self.path, content).map_err(|e| StorageError::io(self.location(), e))?;
		}

		#[cfg(feature = "logging")]
		log::trace!("wrote {} bytes to {}", content.len(), self.path.display());
		Ok(())
	}

	fn lock(&self) -> Result<Self::Guard, StorageError> {
		if !self.locked {
			return Ok(None);
		}
		// No sidecar is created for a missing target.
		let lock_path = match self.lock_path() {
			Some(lock_path) if self.exists() => lock_path,
			_ => {
				return Err(StorageError::NotFound {
					location: self.location(),
				});
			}
		};
		FileLock::acquire(&lock_path).map(Some)
	}
}

/// Exclusive advisory lock, released on drop.
#[derive(Debug)]
pub struct FileLock {
	file: File,
	path: PathBuf,
}

impl FileLock {
	/// Blocks until the lock on `path` is acquired, creating the file if
	/// needed.
	pub fn acquire(path: &Path) -> Result<Self, StorageError> {
		let file = OpenOptions::new()
			.read(true)
			.write(true)
			.create(true)
			.truncate(false)
			.open(path)
			.map_err(|e| StorageError::io(path.display().to_string(), e))?;

		FileExt::lock_exclusive(&file).map_err(|_| StorageError::LockFailed {
			location: path.display().to_string(),
		})?;

		#[cfg(feature = "logging")]
		log::trace!("acquired lock {}", path.display());

		Ok(Self {
			file,
			path: path.to_path_buf(),
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl Drop for FileLock {
	fn drop(&mut self) {
		let _ = FileExt::unlock(&self.file);
	}
}
