//! Common utilities for the kata exercises.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored terminal output for compatibility-mode diagnostics
//! - **JSON** - generic encode/decode helpers over `serde_json`

pub mod json;
pub mod warning;
