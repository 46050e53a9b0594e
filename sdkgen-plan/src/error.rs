use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for plan operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the raw plan text and its display name so every validation
/// failure can point back into the file it came from. Plans built in memory
/// use [`SourceContext::detached`] and report errors without spans.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// A context for plans that were not read from text.
    pub fn detached() -> Self {
        Self::new("", "<plan>")
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Spans of every quoted occurrence of `value` (quotes excluded).
    pub fn value_spans(&self, value: &str) -> Vec<SourceSpan> {
        if value.is_empty() {
            return Vec::new();
        }
        let needle = format!("\"{}\"", value);
        self.src
            .match_indices(&needle)
            .map(|(pos, _)| SourceSpan::from((pos + 1, value.len())))
            .collect()
    }

    /// Span of the first occurrence of a `key =` assignment.
    pub fn key_span(&self, key: &str) -> Option<SourceSpan> {
        [format!("{} =", key), format!("{}=", key), format!("\"{}\"", key)]
            .iter()
            .find_map(|pattern| self.src.find(pattern.as_str()))
            .map(|pos| SourceSpan::from((pos, key.len())))
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = self.offset_of(source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a missing-field error for a plan entity.
    pub fn missing_field(&self, entity: impl Into<String>, field: &'static str) -> Box<Error> {
        Box::new(Error::MissingField {
            src: self.named_source(),
            span: None,
            entity: entity.into(),
            field,
        })
    }

    /// Create a duplicate method error, labelling the first two occurrences.
    pub fn duplicate_method(&self, name: &str) -> Box<Error> {
        let (first_span, second_span) = self.first_two(name);
        Box::new(Error::DuplicateMethod {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.to_string(),
        })
    }

    /// Create a duplicate error code error, labelling the first two occurrences.
    pub fn duplicate_error_code(&self, code: &str) -> Box<Error> {
        let (first_span, second_span) = self.first_two(code);
        Box::new(Error::DuplicateErrorCode {
            src: self.named_source(),
            first_span,
            second_span,
            code: code.to_string(),
        })
    }

    /// Create a validation error, optionally pointing at a key.
    pub fn validation_error(&self, message: impl Into<String>, key: Option<&str>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: key.and_then(|k| self.key_span(k)),
            message: message.into(),
        })
    }

    fn first_two(&self, value: &str) -> (Option<SourceSpan>, Option<SourceSpan>) {
        let spans = self.value_spans(value);
        (spans.first().copied(), spans.get(1).copied())
    }

    fn offset_of(&self, line: usize, column: usize) -> Option<usize> {
        if line == 0 {
            return None;
        }
        let line_start: usize = self
            .src
            .split_inclusive('\n')
            .take(line - 1)
            .map(str::len)
            .sum();
        Some((line_start + column.saturating_sub(1)).min(self.src.len()))
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(sdkgen::io),
        help("pass the plan file with --config, or run from the directory containing sdkgen.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse plan file")]
    #[diagnostic(code(sdkgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON plan")]
    #[diagnostic(code(sdkgen::json_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{entity} is missing required field '{field}'")]
    #[diagnostic(
        code(sdkgen::missing_field),
        help("every method, parameter, type, field and error needs a non-empty name")
    )]
    MissingField {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        entity: String,
        field: &'static str,
    },

    #[error("duplicate method '{name}'")]
    #[diagnostic(
        code(sdkgen::duplicate_method),
        help("method names must be unique within a plan; rename or remove one of them")
    )]
    DuplicateMethod {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: Option<SourceSpan>,
        #[label("defined again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("duplicate error code '{code}'")]
    #[diagnostic(
        code(sdkgen::duplicate_error_code),
        help("error codes must be unique within a plan")
    )]
    DuplicateErrorCode {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: Option<SourceSpan>,
        #[label("defined again here")]
        second_span: Option<SourceSpan>,
        code: String,
    },

    #[error("{message}")]
    #[diagnostic(code(sdkgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_spans_exclude_quotes() {
        let ctx = SourceContext::new(r#"name = "getBalance""#, "sdkgen.toml");
        let spans = ctx.value_spans("getBalance");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].offset(), 8);
        assert_eq!(spans[0].len(), 10);
    }

    #[test]
    fn test_duplicate_method_labels_both_occurrences() {
        let src = "[[methods]]\nname = \"ping\"\n\n[[methods]]\nname = \"ping\"\n";
        let ctx = SourceContext::new(src, "sdkgen.toml");
        let err = ctx.duplicate_method("ping");
        match *err {
            Error::DuplicateMethod {
                first_span,
                second_span,
                ..
            } => {
                assert!(first_span.is_some());
                assert!(second_span.is_some());
                assert!(first_span.unwrap().offset() < second_span.unwrap().offset());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_detached_context_has_no_spans() {
        let ctx = SourceContext::detached();
        assert!(ctx.value_spans("anything").is_empty());
        assert!(ctx.key_span("auth_required").is_none());
    }

    #[test]
    fn test_offset_of_line_and_column() {
        let ctx = SourceContext::new("{\n  \"a\": 1\n}", "plan.json");
        assert_eq!(ctx.offset_of(2, 3), Some(4));
        assert_eq!(ctx.offset_of(0, 1), None);
    }
}
