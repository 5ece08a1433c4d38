//! Prelude module for the badi_calendar crate.
//!
//! Re-exports the derive_more macros used across modules.

pub use derive_more::Display;
