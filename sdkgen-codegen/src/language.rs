//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

/// Trait for language-specific SDK generators.
///
/// Implement this trait to add support for generating an SDK in a new
/// language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript").
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts").
    fn file_extension(&self) -> &'static str;

    /// Render every output file without touching the disk.
    fn preview(&self) -> Result<Preview>;

    /// Generate all files into the specified output directory.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written because they were new or changed.
    pub written: Vec<String>,
    /// Files whose content already matched.
    pub unchanged: Vec<String>,
    /// Existing files left alone because overwriting was disabled.
    pub skipped: Vec<String>,
    /// Warnings collected while generating (duplicates, skipped emission).
    pub warnings: Vec<String>,
}

impl GenerateResult {
    /// Total number of files considered.
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len() + self.skipped.len()
    }
}

/// Files rendered by [`LanguageCodegen::preview`].
#[derive(Debug, Default)]
pub struct Preview {
    pub files: Vec<PreviewFile>,
    /// Same warnings [`LanguageCodegen::generate`] would report.
    pub warnings: Vec<String>,
}

/// A generated file for preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

impl PreviewFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
