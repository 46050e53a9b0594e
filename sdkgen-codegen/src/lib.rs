//! Shared code generation model for the sdkgen SDK generator.
//!
//! This crate provides the language-neutral pieces that language-specific
//! generators (e.g., `sdkgen-codegen-typescript`) are built from.
//!
//! # Module Organization
//!
//! - [`ast`] - Declarations, statements and expressions
//! - [`builder`] - Line-oriented text building ([`LineBuilder`], [`Indent`])
//! - [`error`] - Build and emit error types
//! - [`language`] - The [`LanguageCodegen`] trait and its result types
//! - [`naming`] - Per-language naming conventions

pub mod ast;
pub mod builder;
pub mod error;
pub mod language;
pub mod naming;

pub use builder::{Indent, LineBuilder};
pub use error::{BuildError, EmitError};
pub use language::{GenerateResult, LanguageCodegen, Preview, PreviewFile};
pub use naming::NamingConvention;
