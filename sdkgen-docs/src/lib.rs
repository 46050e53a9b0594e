//! Markdown documentation for generated SDKs.
//!
//! Sections read the same design plan as the code builders, so every method,
//! type and error they mention is one the generated client declares.

mod config;
mod context;
mod generator;
pub mod sections;
pub mod snippets;

pub use config::DocsConfig;
pub use context::DocContext;
pub use generator::{DocsGenerator, Documentation, RenderedSection};
pub use sections::{Section, SectionKind};
