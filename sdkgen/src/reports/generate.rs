//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from SDK generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Package name from the plan file.
    pub sdk_name: String,

    /// Package version from the plan file.
    pub sdk_version: String,

    /// Package description from the plan file.
    pub sdk_description: Option<String>,

    /// Generated client class.
    pub client_name: String,

    /// Target language identifier.
    pub language: String,

    pub method_count: usize,
    pub type_count: usize,
    pub error_count: usize,

    /// Non-fatal problems found during generation.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files created or updated.
    pub written: Vec<String>,
    /// Files whose content already matched.
    pub unchanged: Vec<String>,
    /// Existing files left alone.
    pub skipped: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!("{} v{}", self.sdk_name, self.sdk_version));
        if let Some(desc) = &self.sdk_description {
            out.preformatted(desc);
        }
        out.newline();

        out.key_value("Client", &self.client_name);
        out.key_value("Language", &self.language);
        out.key_value(
            "Surface",
            &format!(
                "{} methods, {} types, {} errors",
                self.method_count, self.type_count, self.error_count
            ),
        );
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
        if !written.written.is_empty() {
            out.section(&format!("Written ({})", written.written.len()));
            for path in &written.written {
                out.added_item(path);
            }
        }
        if !written.unchanged.is_empty() {
            out.section(&format!("Unchanged ({})", written.unchanged.len()));
            for path in &written.unchanged {
                out.list_item(path);
            }
        }
        if !written.skipped.is_empty() {
            out.section(&format!("Kept existing ({})", written.skipped.len()));
            for path in &written.skipped {
                out.list_item(path);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
