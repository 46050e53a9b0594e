//! Runs every section over one context.

use tracing::debug;

use crate::DocContext;
use crate::sections::{
    ApiReference, Authentication, ErrorHandling, Examples, Quickstart, Readme, Section, SectionKind,
};

/// One rendered section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub kind: SectionKind,
    pub content: String,
}

impl RenderedSection {
    /// Empty sections are not written.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// The full documentation set, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
    sections: Vec<RenderedSection>,
}

impl Documentation {
    pub fn sections(&self) -> &[RenderedSection] {
        &self.sections
    }

    /// Content of a section, if it rendered anything.
    pub fn get(&self, kind: SectionKind) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.kind == kind && !s.is_empty())
            .map(|s| s.content.as_str())
    }

    /// All non-empty sections as one markdown document.
    pub fn combined(&self) -> String {
        self.sections
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.content.trim_end())
            .collect::<Vec<_>>()
            .join("\n\n")
            + "\n"
    }
}

/// Runs the section builders.
pub struct DocsGenerator {
    sections: Vec<Box<dyn Section>>,
}

impl Default for DocsGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DocsGenerator {
    /// A generator with every section.
    pub fn new() -> Self {
        Self {
            sections: vec![
                Box::new(Readme),
                Box::new(Quickstart),
                Box::new(Authentication),
                Box::new(Examples),
                Box::new(ErrorHandling),
                Box::new(ApiReference),
            ],
        }
    }

    /// A generator limited to `kinds`, in generation order.
    pub fn only(kinds: &[SectionKind]) -> Self {
        let mut generator = Self::new();
        generator.sections.retain(|s| kinds.contains(&s.kind()));
        generator
    }

    pub fn generate(&self, ctx: &DocContext) -> Documentation {
        let sections = self
            .sections
            .iter()
            .map(|section| {
                let content = section.build(ctx);
                debug!(
                    section = section.kind().title(),
                    bytes = content.len(),
                    "rendered documentation section"
                );
                RenderedSection {
                    kind: section.kind(),
                    content,
                }
            })
            .collect();
        Documentation { sections }
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_plan::DesignPlan;

    use super::*;
    use crate::DocsConfig;

    #[test]
    fn test_every_kind_in_order() {
        let ctx = DocContext::new(&DesignPlan::new("C"), DocsConfig::new("c"));
        let docs = DocsGenerator::new().generate(&ctx);
        let kinds: Vec<_> = docs.sections().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SectionKind::ALL);
    }

    #[test]
    fn test_empty_sections_are_dropped() {
        let ctx = DocContext::new(&DesignPlan::new("C"), DocsConfig::new("c"));
        let docs = DocsGenerator::new().generate(&ctx);
        assert!(docs.get(SectionKind::Examples).is_none());
        assert!(docs.get(SectionKind::ApiReference).is_none());
        assert!(docs.get(SectionKind::Readme).is_some());
        assert!(!docs.combined().contains("# Examples"));
    }

    #[test]
    fn test_only() {
        let ctx = DocContext::new(&DesignPlan::new("C"), DocsConfig::new("c"));
        let docs = DocsGenerator::only(&[SectionKind::ErrorHandling]).generate(&ctx);
        assert_eq!(docs.sections().len(), 1);
        assert!(docs.combined().starts_with("# Error Handling"));
    }
}
