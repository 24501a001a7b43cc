//! Prelude module for civil_datetime crate.
//!
//! Re-exports the derive macros and error alias used across modules.

#[allow(unused_imports)]
pub use derive_more::Display;

#[allow(unused_imports)]
pub use crate::error::{CivilError, Result};
