//! Language-neutral abstract syntax model.
//!
//! Nodes are plain owned data in three families: [`Declaration`],
//! [`Statement`] and [`Expression`]. Each family is a closed enum whose
//! `kind()` names the node, so a renderer dispatches with an exhaustive
//! `match`. The one open door is the `Unsupported` variant of each family,
//! which carries the name of a node kind a renderer may not know; renderers
//! degrade it to a marker comment instead of failing.
//!
//! Builders create these nodes; renderers only read them.

mod declarations;
mod doc;
mod expressions;
mod statements;

pub use declarations::{
    Access, ClassDeclaration, ConstructorDeclaration, Declaration, EnumDeclaration, EnumMember,
    FunctionDeclaration, ImportDeclaration, ImportSpecifier, InterfaceDeclaration,
    InterfaceProperty, MethodDeclaration, Parameter, PropertyDeclaration,
};
pub use doc::{DocParam, JsDoc};
pub use expressions::{
    ArrayExpression, AwaitExpression, BinaryExpression, CallExpression, ConditionalExpression,
    Expression, Identifier, Literal, MemberExpression, NewExpression, ObjectExpression,
    ObjectProperty, Operand, quote,
};
pub use statements::{
    BindingKind, CatchClause, ExpressionStatement, IfStatement, ReturnStatement, Statement,
    ThrowStatement, TryCatchStatement, VariableDeclaration,
};

/// A node of a kind outside the closed set, identified only by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedNode {
    pub kind: String,
}

impl UnsupportedNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// An ordered list of top-level declarations; order is emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub body: Vec<Declaration>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration.
    pub fn push(&mut self, declaration: impl Into<Declaration>) {
        self.body.push(declaration.into());
    }

    /// Append many declarations.
    pub fn extend(&mut self, declarations: impl IntoIterator<Item = Declaration>) {
        self.body.extend(declarations);
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Find a declaration by name.
    pub fn find(&self, name: &str) -> Option<&Declaration> {
        self.body.iter().find(|d| d.name() == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_preserves_order() {
        let mut program = Program::new();
        program.push(InterfaceDeclaration::new("B"));
        program.push(ClassDeclaration::new("A"));
        program.push(EnumDeclaration::new("C"));

        let names: Vec<_> = program.body.iter().filter_map(|d| d.name()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_find_by_name() {
        let mut program = Program::new();
        program.push(ImportDeclaration::new("node:fs").named("readFile"));
        program.push(FunctionDeclaration::new("createConfig"));

        assert_eq!(
            program.find("createConfig").map(|d| d.kind()),
            Some("FunctionDeclaration")
        );
        assert!(program.find("missing").is_none());
    }

    #[test]
    fn test_unsupported_kind_is_its_name() {
        let decl = Declaration::Unsupported(UnsupportedNode::new("TypeAlias"));
        assert_eq!(decl.kind(), "TypeAlias");
        let stmt = Statement::Unsupported(UnsupportedNode::new("ForOfStatement"));
        assert_eq!(stmt.kind(), "ForOfStatement");
    }
}
