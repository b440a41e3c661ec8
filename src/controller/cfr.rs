/* src/controller/cfr.rs */

//!
//! Read-modify-write handle over a single CFR resource.

#[cfg(feature = "fs")]
use std::path::PathBuf;

#[cfg(feature = "logging")]
use log::debug;

use crate::format::{self, Outline, ParseMode, PropertySpan, edit};
use crate::format::{validate_holder_name, validate_key, validate_value};
use crate::model::{CaseMode, Document, Holder, Property};
#[cfg(feature = "fs")]
use crate::storage::FileStorage;
use crate::storage::Storage;

use super::{CfrError, Missing, Options};

/// A handle to one CFR resource.
///
/// Every call reads the full content from storage. Mutations apply one
/// change and write the full content back, rewriting only the lines they
/// touch. Nothing is cached between calls.
///
/// Mutations take `&mut self`, so a handle is a single writer. Separate
/// handles or processes writing the same resource race and the later
/// write wins, unless the storage serializes them (see
/// [`FileStorage::locked`]).
#[derive(Debug, Clone)]
pub struct Cfr<S> {
	storage: S,
	options: Options,
}

/// Builder for [`Cfr`].
#[derive(Debug, Clone)]
pub struct CfrBuilder<S> {
	storage: Option<S>,
	options: Options,
}

impl<S> CfrBuilder<S>
where
	S: Storage,
{
	pub fn new() -> Self {
		Self {
			storage: None,
			options: Options::default(),
		}
	}

	pub fn storage(mut self, storage: S) -> Self {
		self.storage = Some(storage);
		self
	}

	pub fn options(mut self, options: Options) -> Self {
		self.options = options;
		self
	}

	pub fn holder_case(mut self, mode: CaseMode) -> Self {
		self.options.holder_case = mode;
		self
	}

	pub fn key_case(mut self, mode: CaseMode) -> Self {
		self.options.key_case = mode;
		self
	}

	pub fn parse_mode(mut self, mode: ParseMode) -> Self {
		self.options.parse_mode = mode;
		self
	}

	pub fn indent(mut self, indent: impl Into<String>) -> Self {
		self.options.indent = indent.into();
		self
	}

	pub fn build(self) -> Result<Cfr<S>, CfrError> {
		let storage = self
			.storage
			.ok_or_else(|| CfrError::Builder("storage is required".to_string()))?;
		if !self.options.indent.chars().all(|c| c == ' ' || c == '\t') {
			return Err(CfrError::Builder(format!(
				"indent must be spaces or tabs, got {:?}",
				self.options.indent
			)));
		}

		Ok(Cfr {
			storage,
			options: self.options,
		})
	}
}

impl<S> Default for CfrBuilder<S>
where
	S: Storage,
{
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(feature = "fs")]
impl Cfr<FileStorage> {
	/// Opens a handle on a file with default options.
	///
	/// The file is not read until the first operation.
	pub fn open(path: impl Into<PathBuf>) -> Self {
		Self::new(FileStorage::new(path))
	}
}

impl<S> Cfr<S>
where
	S: Storage,
{
	pub fn builder() -> CfrBuilder<S> {
		CfrBuilder::new()
	}

	pub fn new(storage: S) -> Self {
		Self {
			storage,
			options: Options::default(),
		}
	}

	pub fn options(&self) -> &Options {
		&self.options
	}

	pub fn storage(&self) -> &S {
		&self.storage
	}

	pub fn into_storage(self) -> S {
		self.storage
	}

	fn load(&self) -> Result<(String, Outline), CfrError> {
		let text = self.storage.read()?;
		let outline = format::scan(&text, self.options.policy());
		outline.check(self.options.parse_mode)?;
		Ok((text, outline))
	}

	fn locate<'a>(&self, outline: &'a Outline, holder: &str, key: &str) -> Result<&'a PropertySpan, Missing> {
		let span = outline.find(holder).ok_or_else(|| Missing::holder(holder))?;
		span.find(key, self.options.key_case)
			.ok_or_else(|| Missing::property(holder, key))
	}

	/// Parses the current content into a [`Document`].
	pub fn document(&self) -> Result<Document, CfrError> {
		let (_, outline) = self.load()?;
		Ok(outline.to_document())
	}

	// ======================================== CREATE ======================================== //

	/// Appends an empty holder. Does nothing if the name is already taken.
	pub fn create_holder(&mut self, name: &str) -> Result<(), CfrError> {
		validate_holder_name(name)?;
		let _guard = self.storage.lock()?;
		let (text, outline) = self.load()?;
		if outline.find(name).is_some() {
			return Ok(());
		}

		self.storage.write(&edit::append_holder(&text, name))?;
		#[cfg(feature = "logging")]
		debug!("created holder {:?} in {}", name, self.storage.location());
		Ok(())
	}

	/// Appends a property to a holder.
	///
	/// Does nothing if the holder is missing or already has the key; an
	/// existing value is never overwritten.
	pub fn create_property(&mut self, holder: &str, key: &str, value: &str) -> Result<(), CfrError> {
		validate_key(key)?;
		validate_value(value)?;
		let _guard = self.storage.lock()?;
		let (text, outline) = self.load()?;
		let Some(span) = outline.find(holder) else {
			return Ok(());
		};
		if span.find(key, self.options.key_case).is_some() {
			return Ok(());
		}

		let updated = edit::insert_property(&text, span, &self.options.indent, key, value);
		self.storage.write(&updated)?;
		#[cfg(feature = "logging")]
		debug!("created property {:?} in holder {:?}", key, holder);
		Ok(())
	}

	// ======================================== READ ======================================== //

	pub fn holder_exists(&self, name: &str) -> Result<bool, CfrError> {
		let (_, outline) = self.load()?;
		Ok(outline.find(name).is_some())
	}

	/// False when either the holder or the key is missing.
	pub fn property_exists(&self, holder: &str, key: &str) -> Result<bool, CfrError> {
		let (_, outline) = self.load()?;
		Ok(self.locate(&outline, holder, key).is_ok())
	}

	/// Returns all properties of a holder.
	///
	/// A missing holder reads as an empty one named `holder`; use
	/// [`holder_exists`](Self::holder_exists) to tell the two apart.
	pub fn read_holder(&self, holder: &str) -> Result<Holder, CfrError> {
		let document = self.document()?;
		Ok(document
			.holder(holder)
			.cloned()
			.unwrap_or_else(|| Holder::with_key_case(holder, self.options.key_case)))
	}

	/// Holder names in file order, duplicates removed.
	pub fn get_holders(&self) -> Result<Vec<String>, CfrError> {
		let document = self.document()?;
		Ok(document.names().map(str::to_string).collect())
	}

	/// Returns the key and value of a property.
	pub fn get_property(&self, holder: &str, key: &str) -> Result<Property, CfrError> {
		let (_, outline) = self.load()?;
		let span = self.locate(&outline, holder, key)?;
		Ok(Property::new(span.key.as_str(), span.value.as_str()))
	}

	pub fn get_property_value(&self, holder: &str, key: &str) -> Result<String, CfrError> {
		Ok(self.get_property(holder, key)?.value)
	}

	// ======================================== UPDATE ======================================== //

	/// Replaces the value of an existing property.
	///
	/// Keys cannot be renamed; delete the property and create a new one
	/// instead.
	pub fn update_property(&mut self, holder: &str, key: &str, new_value: &str) -> Result<(), CfrError> {
		validate_value(new_value)?;
		let _guard = self.storage.lock()?;
		let (text, outline) = self.load()?;
		let property = self.locate(&outline, holder, key)?;
		if property.value == new_value {
			return Ok(());
		}

		let updated = edit::replace_value(&text, property, new_value);
		self.storage.write(&updated)?;
		#[cfg(feature = "logging")]
		debug!("updated property {:?} in holder {:?}", key, holder);
		Ok(())
	}

	// ======================================== DELETE ======================================== //

	/// Removes a holder together with all of its properties.
	pub fn delete_holder(&mut self, holder: &str) -> Result<(), CfrError> {
		let _guard = self.storage.lock()?;
		let (text, outline) = self.load()?;
		let span = outline.find(holder).ok_or_else(|| Missing::holder(holder))?;

		self.storage.write(&edit::remove_holder(&text, span))?;
		#[cfg(feature = "logging")]
		debug!("deleted holder {:?} from {}", holder, self.storage.location());
		Ok(())
	}

	/// Removes one property line from a holder.
	pub fn delete_property(&mut self, holder: &str, key: &str) -> Result<(), CfrError> {
		let _guard = self.storage.lock()?;
		let (text, outline) = self.load()?;
		let property = self.locate(&outline, holder, key)?;

		self.storage.write(&edit::remove_property(&text, property))?;
		#[cfg(feature = "logging")]
		debug!("deleted property {:?} from holder {:?}", key, holder);
		Ok(())
	}
}
