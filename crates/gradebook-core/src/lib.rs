//! gradebook-core — Student record store, validation, and score statistics.
//!
//! This crate defines the fundamental data model, the bounded record store,
//! and the roster loading logic that the gradebook CLI builds on.

pub mod error;
pub mod model;
pub mod parser;
pub mod statistics;
pub mod store;
