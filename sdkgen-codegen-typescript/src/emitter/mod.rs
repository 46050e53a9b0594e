//! Curly-brace source emitter.
//!
//! Walks a [`Program`] in declaration order and renders each node through a
//! [`LineBuilder`]. Dispatch is an exhaustive `match` per node family:
//!
//! - declarations: imports, classes, interfaces, enums, functions
//! - statements: variable, return, throw, if, try/catch, expression
//! - expressions: rendered inline to a single string
//!
//! Unknown node kinds degrade to a marker comment and emission continues.
//! A known node missing a required field fails with
//! [`EmitError::MalformedNode`].

mod declarations;
mod expressions;
mod statements;

use sdkgen_codegen::{
    EmitError, LineBuilder,
    ast::{Declaration, Expression, Program, Statement},
};
use tracing::debug;

use crate::EmitOptions;

type Result<T> = std::result::Result<T, EmitError>;

/// Text of the marker left in place of an unknown node kind.
pub fn unsupported_marker(kind: &str) -> String {
    format!("unsupported node: {}", kind)
}

/// Renders AST nodes as TypeScript source.
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    options: EmitOptions,
}

impl Emitter {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Render a whole program. Each declaration is followed by one blank line.
    pub fn emit_program(&self, program: &Program) -> Result<String> {
        let mut out = self.builder();
        for declaration in &program.body {
            debug!(kind = declaration.kind(), name = ?declaration.name(), "emitting declaration");
            self.declaration(&mut out, declaration)?;
            out.blank();
        }
        Ok(out.to_string())
    }

    /// Render a single declaration.
    pub fn emit_declaration(&self, declaration: &Declaration) -> Result<String> {
        let mut out = self.builder();
        self.declaration(&mut out, declaration)?;
        Ok(out.to_string())
    }

    /// Render a statement list at the top level.
    pub fn emit_statements(&self, statements: &[Statement]) -> Result<String> {
        let mut out = self.builder();
        self.statements(&mut out, statements)?;
        Ok(out.to_string())
    }

    /// Render an expression inline.
    pub fn emit_expression(&self, expression: &Expression) -> Result<String> {
        self.expression(expression)
    }

    fn builder(&self) -> LineBuilder {
        LineBuilder::with_indent(self.options.indent).trailing_newline(self.options.trailing_newline)
    }

    /// Statement terminator.
    fn semi(&self) -> &'static str {
        if self.options.semicolons { ";" } else { "" }
    }
}
