//! Line-oriented text accumulator with indentation tracking.

use std::fmt;

use super::Indent;
use crate::ast::JsDoc;

/// Accumulates indented lines of generated source.
///
/// The indent level never drops below zero, and [`block`](Self::block)
/// restores the level it started from whatever the closure did to it.
///
/// ```
/// use sdkgen_codegen::builder::LineBuilder;
///
/// let mut b = LineBuilder::new();
/// b.line("function greet() {");
/// b.block(|b| {
///     b.line("return \"hi\";");
/// });
/// b.line("}");
///
/// assert_eq!(b.to_string(), "function greet() {\n  return \"hi\";\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct LineBuilder {
    lines: Vec<String>,
    level: usize,
    indent: Indent,
    trailing_newline: bool,
}

impl LineBuilder {
    /// A builder with two-space indentation and a trailing newline.
    pub fn new() -> Self {
        Self::with_indent(Indent::TYPESCRIPT)
    }

    pub fn with_indent(indent: Indent) -> Self {
        Self {
            lines: Vec::new(),
            level: 0,
            indent,
            trailing_newline: true,
        }
    }

    /// Toggle the trailing newline added by `Display`.
    pub fn trailing_newline(mut self, enabled: bool) -> Self {
        self.trailing_newline = enabled;
        self
    }

    /// Append one line at the current level. Embedded newlines produce
    /// several lines; empty lines are never indented.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
            return self;
        }
        for part in text.split('\n') {
            let part = part.trim_end_matches('\r');
            if part.is_empty() {
                self.lines.push(String::new());
            } else {
                let mut out = self.indent.unit().repeat(self.level);
                out.push_str(part);
                self.lines.push(out);
            }
        }
        self
    }

    pub fn lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in lines {
            self.line(text);
        }
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Append a `//` comment, or a `/* */` block when `multiline` is set.
    pub fn comment(&mut self, text: &str, multiline: bool) -> &mut Self {
        if multiline {
            self.line("/*");
            for part in text.lines() {
                self.line(prefixed(" *", part));
            }
            self.line(" */");
        } else {
            for part in text.lines() {
                self.line(prefixed("//", part));
            }
        }
        self
    }

    /// Append a one-line `/** text */` doc, or a full block when the text
    /// spans several lines.
    pub fn doc_line(&mut self, text: &str) -> &mut Self {
        if text.contains('\n') {
            return self.js_doc(&JsDoc::text(text));
        }
        self.line(format!("/** {} */", escape_comment(text)))
    }

    /// Append a `/** */` block. Absent parts produce no lines, and an empty
    /// doc produces nothing at all. Comment text never closes the block early.
    pub fn js_doc(&mut self, doc: &JsDoc) -> &mut Self {
        if doc.is_empty() {
            return self;
        }

        self.line("/**");
        if let Some(description) = &doc.description {
            for part in description.lines() {
                self.line(prefixed(" *", part));
            }
            if doc.has_tags() {
                self.line(" *");
            }
        }
        for param in &doc.params {
            if param.description.is_empty() {
                self.line(format!(" * @param {}", param.name));
            } else {
                self.line(format!(
                    " * @param {} - {}",
                    param.name,
                    escape_comment(&param.description)
                ));
            }
        }
        if let Some(returns) = &doc.returns {
            self.line(prefixed(" * @returns", returns));
        }
        for throws in &doc.throws {
            self.line(prefixed(" * @throws", throws));
        }
        if let Some(note) = &doc.deprecated {
            self.line(prefixed(" * @deprecated", note));
        }
        if let Some(example) = &doc.example {
            self.line(" * @example");
            for part in example.lines() {
                self.line(prefixed(" *", part));
            }
        }
        self.line(" */");
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Decrease the level; a no-op at zero.
    pub fn outdent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Run `f` one level deeper, then restore the entry level.
    pub fn block<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let entry = self.level;
        self.level += 1;
        f(self);
        self.level = entry;
        self
    }

    /// Fallible [`block`](Self::block). The level is restored on both paths.
    pub fn try_block<F, E>(&mut self, f: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        let entry = self.level;
        self.level += 1;
        let result = f(self);
        self.level = entry;
        result.map(|()| self)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Consume the builder and return the rendered text.
    pub fn build(self) -> String {
        self.to_string()
    }
}

impl Default for LineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            return Ok(());
        }
        let joined = self.lines.join("\n");
        f.write_str(&joined)?;
        if self.trailing_newline && !joined.ends_with('\n') {
            f.write_str("\n")?;
        }
        Ok(())
    }
}

fn prefixed(prefix: &str, text: &str) -> String {
    if text.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix} {}", escape_comment(text))
    }
}

/// `*/` inside comment text would end the comment.
fn escape_comment(text: &str) -> String {
    text.replace("*/", "*\\/")
}
