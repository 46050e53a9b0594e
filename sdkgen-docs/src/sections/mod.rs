//! Documentation sections.
//!
//! Each section is a pure function of the [`DocContext`]; an empty string
//! means the section has nothing to say and is dropped.

mod api_reference;
mod authentication;
mod error_handling;
mod examples;
mod quickstart;
mod readme;

pub use api_reference::ApiReference;
pub use authentication::Authentication;
pub use error_handling::ErrorHandling;
pub use examples::Examples;
pub use quickstart::Quickstart;
pub use readme::Readme;

use crate::DocContext;

/// Which document a section renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Readme,
    Quickstart,
    Authentication,
    Examples,
    ErrorHandling,
    ApiReference,
}

impl SectionKind {
    /// All kinds in generation order.
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Readme,
        SectionKind::Quickstart,
        SectionKind::Authentication,
        SectionKind::Examples,
        SectionKind::ErrorHandling,
        SectionKind::ApiReference,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Readme => "Overview",
            SectionKind::Quickstart => "Quickstart",
            SectionKind::Authentication => "Authentication",
            SectionKind::Examples => "Examples",
            SectionKind::ErrorHandling => "Error Handling",
            SectionKind::ApiReference => "API Reference",
        }
    }

    /// Output path relative to the SDK root.
    pub fn file_path(&self) -> &'static str {
        match self {
            SectionKind::Readme => "README.md",
            SectionKind::Quickstart => "docs/quickstart.md",
            SectionKind::Authentication => "docs/authentication.md",
            SectionKind::Examples => "docs/examples.md",
            SectionKind::ErrorHandling => "docs/error-handling.md",
            SectionKind::ApiReference => "docs/api-reference.md",
        }
    }
}

/// A documentation section builder.
pub trait Section {
    fn kind(&self) -> SectionKind;

    /// Render the section; an empty string omits it.
    fn build(&self, ctx: &DocContext) -> String;
}

/// Join blocks with one blank line, skipping empty ones.
pub(crate) fn join_blocks<I, S>(blocks: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for block in blocks {
        let block = block.as_ref().trim_end();
        if block.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(block);
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// A markdown bullet list.
pub(crate) fn bullets<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_blocks_skips_empty() {
        assert_eq!(join_blocks(["# A", "", "text\n"]), "# A\n\ntext\n");
        assert_eq!(join_blocks(Vec::<String>::new()), "");
    }

    #[test]
    fn test_bullets() {
        assert_eq!(bullets(["a", "b"]), "- a\n- b");
    }
}
