#![deny(missing_docs)]

//! Switchable performs percentage based splits, for split-testing
//! and similar experiments.
//! This includes:
//!
//! * Weighted selection between any number of variants
//! * Range computation over `[0, 100]` from percentage weights
//! * Loading variants from a JSON configuration

/// Errors returned by selection and configuration loading.
pub mod error;

/// Weighted items and the ranges assigned to them.
pub mod item;

/// Partitioning of the percentage scale between weighted items.
pub mod range;

/// Fixed-precision random draws.
pub mod draw;

/// The weighted selection engine.
pub mod splitter;

/// Bulk construction of splitters from loosely-typed records.
pub mod config;

pub use error::{ConfigError, SplitError};
pub use item::{Item, ItemRange};
pub use splitter::{Resolution, Selection, Splitter};
