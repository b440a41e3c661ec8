/* src/model/mod.rs */

//!
//! In-memory representation of a CFR document.
//!
//! A [`Document`] is an ordered list of [`Holder`]s, each owning an ordered
//! list of [`Property`] pairs. Lookups go through the document's
//! [`MatchPolicy`], so holder and key comparison rules live in one place.

mod document;
mod holder;
mod policy;
mod property;

pub use document::Document;
pub use holder::Holder;
pub use policy::{CaseMode, MatchPolicy};
pub use property::Property;
