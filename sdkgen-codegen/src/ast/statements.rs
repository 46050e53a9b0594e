//! Statement nodes.

use super::{Expression, UnsupportedNode};

/// A statement inside a function, method or constructor body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Variable(VariableDeclaration),
    Return(ReturnStatement),
    Throw(ThrowStatement),
    If(IfStatement),
    TryCatch(TryCatchStatement),
    Expression(ExpressionStatement),
    Unsupported(UnsupportedNode),
}

impl Statement {
    /// Node kind name.
    pub fn kind(&self) -> &str {
        match self {
            Statement::Variable(_) => "VariableDeclaration",
            Statement::Return(_) => "ReturnStatement",
            Statement::Throw(_) => "ThrowStatement",
            Statement::If(_) => "IfStatement",
            Statement::TryCatch(_) => "TryCatchStatement",
            Statement::Expression(_) => "ExpressionStatement",
            Statement::Unsupported(node) => &node.kind,
        }
    }

    /// `const name = init`
    pub fn constant(name: impl Into<String>, init: Expression) -> Self {
        Statement::Variable(VariableDeclaration {
            binding: BindingKind::Const,
            name: name.into(),
            type_annotation: None,
            init: Some(init),
        })
    }

    /// `return argument`
    pub fn ret(argument: Expression) -> Self {
        Statement::Return(ReturnStatement {
            argument: Some(argument),
        })
    }

    /// `throw argument`
    pub fn throw(argument: Expression) -> Self {
        Statement::Throw(ThrowStatement { argument })
    }

    /// An expression evaluated for its effect.
    pub fn expr(expression: Expression) -> Self {
        Statement::Expression(ExpressionStatement { expression })
    }

    /// `target = value`
    pub fn assign(target: Expression, value: Expression) -> Self {
        Self::expr(Expression::binary(target, "=", value))
    }
}

/// Binding keyword of a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindingKind {
    #[default]
    Const,
    Let,
    Var,
}

impl BindingKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            BindingKind::Const => "const",
            BindingKind::Let => "let",
            BindingKind::Var => "var",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub binding: BindingKind,
    pub name: String,
    pub type_annotation: Option<String>,
    pub init: Option<Expression>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnStatement {
    pub argument: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStatement {
    pub argument: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub test: Expression,
    pub consequent: Vec<Statement>,
    pub alternate: Option<Vec<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    /// Bound error name; `None` renders `catch {`.
    pub param: Option<String>,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TryCatchStatement {
    pub block: Vec<Statement>,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<Vec<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
}
