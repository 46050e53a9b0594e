//! Expression nodes.

use super::UnsupportedNode;

/// Either pre-rendered text or a nested expression.
///
/// Used wherever an expression is composed from parts: call and `new`
/// arguments, object values, array elements and binary operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Text used verbatim.
    Raw(String),
    /// A node rendered recursively.
    Node(Expression),
}

impl From<Expression> for Operand {
    fn from(expr: Expression) -> Self {
        Operand::Node(expr)
    }
}

impl From<&str> for Operand {
    fn from(raw: &str) -> Self {
        Operand::Raw(raw.to_string())
    }
}

impl From<String> for Operand {
    fn from(raw: String) -> Self {
        Operand::Raw(raw)
    }
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    Identifier(Identifier),
    Member(MemberExpression),
    Call(CallExpression),
    New(NewExpression),
    Await(AwaitExpression),
    Object(ObjectExpression),
    Array(ArrayExpression),
    Binary(BinaryExpression),
    Conditional(ConditionalExpression),
    Unsupported(UnsupportedNode),
}

impl Expression {
    /// Node kind name.
    pub fn kind(&self) -> &str {
        match self {
            Expression::Literal(_) => "Literal",
            Expression::Identifier(_) => "Identifier",
            Expression::Member(_) => "MemberExpression",
            Expression::Call(_) => "CallExpression",
            Expression::New(_) => "NewExpression",
            Expression::Await(_) => "AwaitExpression",
            Expression::Object(_) => "ObjectExpression",
            Expression::Array(_) => "ArrayExpression",
            Expression::Binary(_) => "BinaryExpression",
            Expression::Conditional(_) => "ConditionalExpression",
            Expression::Unsupported(node) => &node.kind,
        }
    }

    /// A literal whose text is emitted as-is (`42`, `true`, `undefined`).
    pub fn raw(raw: impl Into<String>) -> Self {
        Expression::Literal(Literal { raw: raw.into() })
    }

    /// A double-quoted string literal.
    pub fn string(value: &str) -> Self {
        Expression::Literal(Literal {
            raw: quote(value),
        })
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier { name: name.into() })
    }

    pub fn this() -> Self {
        Self::ident("this")
    }

    /// `self.property`
    pub fn member(self, property: impl Into<String>) -> Self {
        Expression::Member(MemberExpression {
            object: Box::new(self),
            property: property.into(),
            computed: false,
        })
    }

    /// `self[property]`
    pub fn index(self, property: impl Into<String>) -> Self {
        Expression::Member(MemberExpression {
            object: Box::new(self),
            property: property.into(),
            computed: true,
        })
    }

    /// `self(arguments)`
    pub fn call(self, arguments: impl IntoIterator<Item = Operand>) -> Self {
        Expression::Call(CallExpression::new(self).args(arguments))
    }

    /// `await self`
    pub fn awaited(self) -> Self {
        Expression::Await(AwaitExpression {
            argument: Box::new(self),
        })
    }

    /// `left operator right`
    pub fn binary(
        left: impl Into<Operand>,
        operator: impl Into<String>,
        right: impl Into<Operand>,
    ) -> Self {
        Expression::Binary(BinaryExpression {
            left: Box::new(left.into()),
            operator: operator.into(),
            right: Box::new(right.into()),
        })
    }

    /// `test ? consequent : alternate`
    pub fn conditional(test: Expression, consequent: Expression, alternate: Expression) -> Self {
        Expression::Conditional(ConditionalExpression {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        })
    }
}

/// Quote a string as a double-quoted literal.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Pre-rendered literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

/// `object.property`, or `object[property]` when computed.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    pub object: Box<Expression>,
    pub property: String,
    pub computed: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallExpression {
    /// Required; `None` is a malformed node.
    pub callee: Option<Box<Expression>>,
    pub arguments: Vec<Operand>,
}

impl CallExpression {
    pub fn new(callee: Expression) -> Self {
        Self {
            callee: Some(Box::new(callee)),
            arguments: Vec::new(),
        }
    }

    pub fn arg(mut self, argument: impl Into<Operand>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    pub fn args(mut self, arguments: impl IntoIterator<Item = Operand>) -> Self {
        self.arguments.extend(arguments);
        self
    }
}

/// `new Callee(arguments)`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewExpression {
    /// Required; `None` is a malformed node.
    pub callee: Option<Box<Expression>>,
    pub arguments: Vec<Operand>,
}

impl NewExpression {
    pub fn new(callee: Expression) -> Self {
        Self {
            callee: Some(Box::new(callee)),
            arguments: Vec::new(),
        }
    }

    pub fn arg(mut self, argument: impl Into<Operand>) -> Self {
        self.arguments.push(argument.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AwaitExpression {
    pub argument: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProperty {
    pub key: String,
    pub value: Operand,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectExpression {
    pub properties: Vec<ObjectProperty>,
}

impl ObjectExpression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<Operand>) -> Self {
        self.properties.push(ObjectProperty {
            key: key.into(),
            value: value.into(),
        });
        self
    }
}

impl From<ObjectExpression> for Expression {
    fn from(object: ObjectExpression) -> Self {
        Expression::Object(object)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayExpression {
    pub elements: Vec<Operand>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<Operand>,
    pub operator: String,
    pub right: Box<Operand>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    pub test: Box<Expression>,
    pub consequent: Box<Expression>,
    pub alternate: Box<Expression>,
}
