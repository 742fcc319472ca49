//! Prelude module for civil_date crate.
//!
//! Re-exports the derive macros used from derive_more.

pub use derive_more::Display;
