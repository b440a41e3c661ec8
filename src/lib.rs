/* src/lib.rs */

//!
//! Reader, writer and in-place editor for CFR files: an ordered set of
//! named holders, each containing unique `Key : Value` properties.
//!
//! ```text
//! UserSettings {
//! 	Theme : dark
//! 	Language : en
//! }
//! DatabaseSettings {
//! 	Host : localhost
//! 	Port : 5432
//! }
//! ```
//!
//! This crate integrates four components:
//!
//! - **model**: [`Document`], [`Holder`] and [`Property`], with the lookup rules in [`MatchPolicy`].
//! - **format**: Lenient or strict parsing, deterministic serialization and line-level edits.
//! - **storage**: The backing resource, in memory or on disk.
//! - **controller**: The [`Cfr`] handle exposing create, read, update and delete operations.
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features.
//! - `fs` (default): [`storage::FileStorage`] with atomic replace and optional advisory locking.
//! - `logging` (default): Emits `log` records for skipped lines and committed changes.
//! - `serde`: `Serialize` for the document model, `Serialize`/`Deserialize` for [`Options`].
//!
//! ## Basic Usage
//!
//! ```ignore
//! let mut cfr = Cfr::open("settings.cfr");
//! cfr.create_holder("UserSettings")?;
//! cfr.create_property("UserSettings", "Theme", "dark")?;
//! assert_eq!(cfr.get_property_value("UserSettings", "Theme")?, "dark");
//! ```

pub mod controller;
pub mod format;
pub mod model;
pub mod storage;

pub use controller::{Cfr, CfrBuilder, CfrError, Missing, Options};
pub use format::{FormatError, ParseMode, parse, parse_with, serialize};
pub use model::{CaseMode, Document, Holder, MatchPolicy, Property};
pub use storage::{MemoryStorage, Storage, StorageError};

#[cfg(feature = "fs")]
pub use storage::FileStorage;
