//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from plan validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the plan file.
    pub config_path: PathBuf,
    pub sdk_name: String,
    pub sdk_version: String,
    pub client_name: String,
    /// Method signatures as the client declares them.
    pub signatures: Vec<String>,
    /// Named types.
    pub types: Vec<String>,
    /// Error codes.
    pub error_codes: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

fn count(n: usize, noun: &str) -> String {
    format!("{} {}{}", n, noun, if n == 1 { "" } else { "s" })
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }
        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.preformatted(&format!(
            "  {} v{} ({})",
            self.sdk_name, self.sdk_version, self.client_name
        ));
        out.newline();

        out.section(&format!("  {}", count(self.signatures.len(), "method")));
        for signature in &self.signatures {
            out.list_item(signature);
        }
        if !self.types.is_empty() {
            out.section(&format!("  {}", count(self.types.len(), "type")));
            for ty in &self.types {
                out.list_item(ty);
            }
        }
        if !self.error_codes.is_empty() {
            out.section(&format!("  {}", count(self.error_codes.len(), "error")));
            for code in &self.error_codes {
                out.list_item(code);
            }
        }
    }
}
