//! Emitter formatting options.

use sdkgen_codegen::Indent;
use sdkgen_plan::{FormatSettings, IndentStyle};

/// Formatting knobs of the emitter, read from the `[format]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    pub indent: Indent,
    /// Target width. Informational; output is never wrapped.
    pub line_width: usize,
    pub trailing_newline: bool,
    /// Terminate statements with `;`.
    pub semicolons: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            indent: Indent::TYPESCRIPT,
            line_width: 100,
            trailing_newline: true,
            semicolons: true,
        }
    }
}

impl From<&FormatSettings> for EmitOptions {
    fn from(format: &FormatSettings) -> Self {
        let indent = match format.indent {
            IndentStyle::Spaces(n) => Indent::Spaces(n),
            IndentStyle::Tab => Indent::Tab,
        };
        Self {
            indent,
            line_width: format.line_width,
            trailing_newline: format.trailing_newline,
            semicolons: format.semicolons,
        }
    }
}
