//! TypeScript code generator for the sdkgen SDK generator.
//!
//! Turns a design plan into a single TypeScript module holding the client
//! class, its configuration, the error classes and the plan's named types,
//! and writes the documentation produced by `sdkgen-docs` next to it.
//!
//! # Usage
//!
//! This crate is used internally by the `sdkgen` CLI tool. You typically
//! don't need to use it directly.
//!
//! ```ignore
//! use sdkgen_codegen_typescript::{Generator, LanguageCodegen};
//! use sdkgen_plan::PlanFile;
//! use std::path::Path;
//!
//! let plan = PlanFile::from_file("sdkgen.toml")?;
//! let generator = Generator::new(&plan);
//!
//! // Preview files without writing
//! let preview = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("output"))?;
//! ```
//!
//! # Generated Output
//!
//! - `src/index.ts` - config interface and factory, errors, types, client
//! - `README.md` - overview, installation and quick start
//! - `docs/*.md` - quickstart, authentication, examples, error handling,
//!   API reference (empty sections are not written)

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod generator;
mod naming;
mod options;

pub mod builders;
pub mod emitter;

pub use emitter::Emitter;
pub use error::GenerateError;
pub use generator::{Generator, SOURCE_PATH};
pub use naming::{TS_NAMING, error_class_name};
pub use options::EmitOptions;
pub use sdkgen_codegen::language::{GenerateResult, LanguageCodegen, Preview, PreviewFile};
