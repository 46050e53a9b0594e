//! Structured documentation comments attached to declarations.

/// A documented parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocParam {
    pub name: String,
    pub description: String,
}

/// Content of a `/** ... */` block. Every part is optional; absent parts
/// render nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsDoc {
    pub description: Option<String>,
    pub params: Vec<DocParam>,
    pub returns: Option<String>,
    pub throws: Vec<String>,
    pub deprecated: Option<String>,
    pub example: Option<String>,
}

impl JsDoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// A block holding only a description.
    pub fn text(description: impl Into<String>) -> Self {
        Self::new().description(description)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.params.push(DocParam {
            name: name.into(),
            description: description.into(),
        });
        self
    }

    pub fn returns(mut self, description: impl Into<String>) -> Self {
        self.returns = Some(description.into());
        self
    }

    pub fn throws(mut self, description: impl Into<String>) -> Self {
        self.throws.push(description.into());
        self
    }

    pub fn deprecated(mut self, note: impl Into<String>) -> Self {
        self.deprecated = Some(note.into());
        self
    }

    pub fn example(mut self, code: impl Into<String>) -> Self {
        self.example = Some(code.into());
        self
    }

    /// Whether any tag (anything besides the description) is present.
    pub fn has_tags(&self) -> bool {
        !self.params.is_empty()
            || self.returns.is_some()
            || !self.throws.is_empty()
            || self.deprecated.is_some()
            || self.example.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none() && !self.has_tags()
    }
}
