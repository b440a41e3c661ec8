/* src/controller/mod.rs */

//!
//! The CRUD surface over a single CFR resource.
//!
//! - [`Cfr`] - handle performing one read-modify-write per call
//! - [`CfrBuilder`] - builder for handles with non-default [`Options`]

mod cfr;
mod error;
mod options;

pub use cfr::{Cfr, CfrBuilder};
pub use error::{CfrError, Missing};
pub use options::Options;
