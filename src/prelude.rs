//! Prelude module for datetime_picker_core crate.
//!
//! Re-exports the derive macros shared by the value types.

pub use derive_more::Display;
