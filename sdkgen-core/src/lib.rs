//! Core utilities and types for the sdkgen SDK generator.
//!
//! This crate provides the small building blocks shared by every other
//! sdkgen crate: identifier case conversion, output file writing and
//! semantic versions.

mod file;
mod utils;
mod version;

// File operations
pub use file::{File, Overwrite, WriteResult};
// String utilities
pub use utils::{
    split_words, to_camel_case, to_kebab_case, to_pascal_case, to_screaming_snake_case,
    to_snake_case,
};
pub use version::Version;
